//! Startup orchestration.
//!
//! # Responsibilities
//! - Decide the static root (build output, explicit root, or cwd)
//! - Warn when the frontend build output is missing
//! - Log the startup banner once the listener is bound
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Everything decided here is immutable for the process lifetime
//! - A missing build is a warning, not an error; the server still serves cwd

use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::config::StaticFilesConfig;
use crate::proxy::BackendOrigin;
use crate::static_files::SHELL_DOCUMENT;

/// Where the static root came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    /// `static_files.root` was set.
    Explicit,
    /// The build output directory exists.
    BuildOutput,
    /// Fallback to the working directory.
    WorkingDir,
}

/// The directory static files and the shell are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRoot {
    pub dir: PathBuf,
    pub source: RootSource,
}

impl StaticRoot {
    /// Pick the root relative to `cwd`.
    pub fn detect(cwd: &Path, config: &StaticFilesConfig) -> Self {
        if let Some(root) = &config.root {
            return Self {
                dir: cwd.join(root),
                source: RootSource::Explicit,
            };
        }

        let build_dir = cwd.join(&config.build_dir);
        if build_dir.is_dir() {
            Self {
                dir: build_dir,
                source: RootSource::BuildOutput,
            }
        } else {
            Self {
                dir: cwd.to_path_buf(),
                source: RootSource::WorkingDir,
            }
        }
    }
}

/// A non-fatal problem with the frontend build output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildHint {
    /// The built shell is missing at the expected path.
    MissingBuild(PathBuf),
    /// A shell document sits in cwd but is not build output.
    StrayShell(PathBuf),
}

impl fmt::Display for BuildHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildHint::MissingBuild(path) => write!(
                f,
                "Frontend build not found at {}; build the frontend first (e.g. `npm run build` in frontend/)",
                path.display()
            ),
            BuildHint::StrayShell(path) => write!(
                f,
                "{} exists but is not build output; client routes may render a stale shell",
                path.display()
            ),
        }
    }
}

/// Problems with the build output, in the order they should be reported.
pub fn build_hints(cwd: &Path, config: &StaticFilesConfig) -> Vec<BuildHint> {
    let mut hints = Vec::new();
    let built_shell = cwd.join(&config.build_dir).join(SHELL_DOCUMENT);
    if !built_shell.is_file() {
        hints.push(BuildHint::MissingBuild(built_shell));
        let stray = cwd.join(SHELL_DOCUMENT);
        if stray.is_file() {
            hints.push(BuildHint::StrayShell(stray));
        }
    }
    hints
}

/// Log build output problems. Skipped when the root is set explicitly.
pub fn report_build_output(cwd: &Path, config: &StaticFilesConfig, root: &StaticRoot) {
    if root.source == RootSource::Explicit {
        return;
    }
    for hint in build_hints(cwd, config) {
        tracing::warn!("{}", hint);
    }
}

/// One-line startup banner.
pub fn log_banner(address: SocketAddr, origin: &BackendOrigin, root: &StaticRoot) {
    tracing::info!(
        address = %address,
        backend = %origin,
        static_root = %root.dir.display(),
        "spa-edge v{} serving on http://{}, /api/ -> {}",
        env!("CARGO_PKG_VERSION"),
        address,
        origin
    );
}
