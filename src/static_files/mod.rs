//! Static asset subsystem.
//!
//! # Data Flow
//! ```text
//! StaticAsset / SpaFallback route
//!     → resolver.rs (decode path, reject traversal)
//!     → responder.rs (canonical containment check, read, content type)
//!     → Response, or StaticNotFound (404) / StaticReadFailure (500)
//! ```

pub mod resolver;
pub mod responder;

pub use resolver::SHELL_DOCUMENT;
pub use responder::StaticResponder;
