//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Detect static root → Bind listener → Banner → Serve
//!
//! Signals (signals.rs):
//!     Ctrl-C / SIGTERM → shutdown.rs broadcast
//!
//! Shutdown (shutdown.rs):
//!     Broadcast → stop accepting → in-flight requests finish → exit 0
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, listener last (traffic only when ready)
//! - No forced exit deadline; in-flight work is bounded by the backend timeout

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use signals::wait_for_shutdown_signal;
pub use startup::{StaticRoot, RootSource};
