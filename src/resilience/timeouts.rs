//! Timeout enforcement.
//!
//! # Responsibilities
//! - Define the fixed bound on a backend round trip
//! - Recognize timeout failures however they surface
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities for the outer bound
//! - Timeout errors are distinct from other errors (504 vs 502)
//! - Detection walks the whole source chain: a timeout may arrive as an
//!   `Elapsed`, an `io::ErrorKind::TimedOut`, a hyper timeout, or only as text

use std::error::Error as StdError;
use std::io;
use std::time::Duration;

/// Upper bound on a backend round trip, in seconds.
pub const BACKEND_TIMEOUT_SECS: u64 = 10;

/// Upper bound on a backend round trip (connect + response).
pub const BACKEND_TIMEOUT: Duration = Duration::from_secs(BACKEND_TIMEOUT_SECS);

/// Requests slower than this are flagged in the logs.
pub const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(5);

/// Returns true if `err` or anything in its source chain signals a timeout.
pub fn is_timeout(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if signals_timeout(e) {
            return true;
        }
        current = e.source();
    }
    false
}

fn signals_timeout(e: &(dyn StdError + 'static)) -> bool {
    if e.is::<tokio::time::error::Elapsed>() {
        return true;
    }
    if let Some(io_err) = e.downcast_ref::<io::Error>() {
        if io_err.kind() == io::ErrorKind::TimedOut {
            return true;
        }
    }
    if let Some(hyper_err) = e.downcast_ref::<hyper::Error>() {
        if hyper_err.is_timeout() {
            return true;
        }
    }
    let message = e.to_string().to_ascii_lowercase();
    message.contains("timeout") || message.contains("timed out")
}
