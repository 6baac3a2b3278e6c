//! Backend forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! API request (method, path+query, headers, buffered body)
//!     → headers.rs (strip hop-by-hop, default Content-Type)
//!     → forwarder.rs (one round trip under the fixed timeout)
//!     → headers.rs (filter backend response headers)
//!     → Relay status + body, or EdgeError (502 / 504)
//! ```
//!
//! # Design Decisions
//! - Exactly one backend origin, no load balancing
//! - No retries: a failed round trip is reported immediately

pub mod forwarder;
pub mod headers;

pub use forwarder::{method_carries_body, BackendOrigin, Forwarder, OriginError, ProxyExchange};
