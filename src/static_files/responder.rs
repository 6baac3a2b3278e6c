//! Static file and SPA shell responses.
//!
//! # Responsibilities
//! - Serve build assets from the static root
//! - Serve the SPA shell for client-side routes
//! - Infer the content type from the file extension
//!
//! # Design Decisions
//! - Files are read whole per request; nothing is cached in memory
//! - Directories are never listed; they resolve to 404
//! - Cache headers are not set here; the header policy owns them

use std::io;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use mime_guess::mime;
use tokio::fs;

use crate::error::EdgeError;
use crate::static_files::resolver::{relative_path, SHELL_DOCUMENT};

/// Serves files from one canonical root directory.
#[derive(Debug, Clone)]
pub struct StaticResponder {
    root: PathBuf,
}

impl StaticResponder {
    /// Create a responder for `root`. The root must exist.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = std::fs::canonicalize(root)?;
        Ok(Self { root })
    }

    /// Serve the file named by a static-asset URI path.
    pub async fn serve_asset(&self, uri_path: &str) -> Result<Response, EdgeError> {
        let relative =
            relative_path(uri_path).ok_or_else(|| EdgeError::StaticNotFound(uri_path.to_string()))?;
        self.serve_file(&self.root.join(relative), uri_path).await
    }

    /// Serve the SPA shell document.
    pub async fn serve_shell(&self) -> Result<Response, EdgeError> {
        let shown = format!("/{SHELL_DOCUMENT}");
        self.serve_file(&self.root.join(SHELL_DOCUMENT), &shown)
            .await
    }

    async fn serve_file(&self, candidate: &Path, shown: &str) -> Result<Response, EdgeError> {
        let not_found = || EdgeError::StaticNotFound(shown.to_string());
        let read_failure = |source: io::Error| EdgeError::StaticReadFailure {
            path: shown.to_string(),
            source,
        };

        let canonical = match fs::canonicalize(candidate).await {
            Ok(path) => path,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => return Err(read_failure(e)),
            Err(_) => return Err(not_found()),
        };
        if !canonical.starts_with(&self.root) {
            tracing::warn!(path = %shown, resolved = %canonical.display(), "Path traversal attempt blocked");
            return Err(not_found());
        }

        let metadata = fs::metadata(&canonical).await.map_err(read_failure)?;
        if !metadata.is_file() {
            return Err(not_found());
        }

        let content = fs::read(&canonical).await.map_err(read_failure)?;

        let mut response = (StatusCode::OK, Body::from(content)).into_response();
        let content_type = content_type_for(&canonical);
        match HeaderValue::from_str(&content_type) {
            Ok(value) => {
                response.headers_mut().insert(header::CONTENT_TYPE, value);
            }
            Err(e) => {
                tracing::error!(content_type = %content_type, error = %e, "Invalid content type");
                response.headers_mut().insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/octet-stream"),
                );
            }
        }
        Ok(response)
    }
}

/// Content type for a file, with `charset=utf-8` on textual types.
fn content_type_for(path: &Path) -> String {
    let guess = mime_guess::from_path(path).first_or_octet_stream();
    let textual = guess.type_() == mime::TEXT
        || guess.subtype() == mime::JAVASCRIPT
        || guess.subtype() == mime::JSON
        || guess.suffix() == Some(mime::XML);
    if textual && guess.get_param(mime::CHARSET).is_none() {
        format!("{}; charset=utf-8", guess.essence_str())
    } else {
        guess.to_string()
    }
}
