//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! main
//!     → logging::init (subscriber, filter from RUST_LOG or config)
//! dispatch handler
//!     → RequestLog::start (entry line)
//!     → RequestLog::finish / fail (outcome line, elapsed, slow warning)
//! ```
//!
//! # Design Decisions
//! - Logs are the only observability output; there are no counters
//! - Structured fields on every request event for machine parsing

pub mod logging;

pub use logging::RequestLog;
