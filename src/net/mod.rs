//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig.bind_address
//!     → listener.rs (bind, classify bind failures)
//!     → TcpListener handed to axum::serve
//! ```
//!
//! # Design Decisions
//! - Plain TCP only; TLS is out of scope
//! - Binding happens before the banner so a failure never looks like a start

pub mod listener;

pub use listener::{Listener, ListenerError};
