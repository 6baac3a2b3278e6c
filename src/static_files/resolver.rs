//! Request path to file path mapping.
//!
//! # Responsibilities
//! - Percent-decode the URI path
//! - Reject components that could leave the root
//! - Produce a path relative to the static root
//!
//! # Design Decisions
//! - Lexical checks here; the responder re-checks the canonical path
//!   against the canonical root so symlinks cannot escape either

use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;

/// Shell document name, relative to the static root.
pub const SHELL_DOCUMENT: &str = "index.html";

/// Map a URI path (no query string) to a path relative to the static root.
///
/// Returns `None` for paths that cannot name a file under the root.
pub fn relative_path(uri_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(uri_path).decode_utf8().ok()?;

    let mut relative = PathBuf::new();
    for segment in decoded.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." || segment.contains(['\\', ':', '\0']) {
            return None;
        }
        relative.push(segment);
    }

    let only_normal = Path::new(&relative)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if relative.as_os_str().is_empty() || !only_normal {
        return None;
    }
    Some(relative)
}
