//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to backend:
//!     → timeouts.rs (enforce the fixed round-trip bound)
//!     → On failure: timeouts.rs classifies timeout (504) vs transport (502)
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every backend call has a deadline
//! - No retries: one attempt either answers, errors, or times out

pub mod timeouts;
