//! TCP listener binding.
//!
//! # Responsibilities
//! - Bind the configured address before any traffic is accepted
//! - Turn bind failures into actionable startup errors
//!
//! # Design Decisions
//! - No connection cap: one task per connection, unbounded
//! - A bind failure is fatal; the caller exits non-zero

use std::io;
use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug)]
pub enum ListenerError {
    /// Configured address is not a socket address.
    InvalidAddress(String),
    /// The process may not bind this port.
    PermissionDenied(SocketAddr),
    /// Another process holds the port.
    AddrInUse(SocketAddr),
    /// Any other bind failure.
    Bind(SocketAddr, io::Error),
}

impl std::fmt::Display for ListenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerError::InvalidAddress(addr) => {
                write!(f, "Invalid bind address '{}'", addr)
            }
            ListenerError::PermissionDenied(addr) => write!(
                f,
                "Permission denied binding {}: ports below 1024 require elevated privileges \
                 (run as administrator/root, or set listener.bind_address to a higher port)",
                addr
            ),
            ListenerError::AddrInUse(addr) => write!(
                f,
                "Port {} is already in use: stop the process holding it or change \
                 listener.bind_address",
                addr.port()
            ),
            ListenerError::Bind(addr, e) => write!(f, "Failed to bind {}: {}", addr, e),
        }
    }
}

impl std::error::Error for ListenerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListenerError::Bind(_, e) => Some(e),
            _ => None,
        }
    }
}

/// A bound TCP listener, ready to hand to the HTTP server.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
}

impl Listener {
    /// Bind to the configured address.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let addr: SocketAddr = config
            .bind_address
            .parse()
            .map_err(|_| ListenerError::InvalidAddress(config.bind_address.clone()))?;

        let inner = TcpListener::bind(addr)
            .await
            .map_err(|e| classify_bind_error(addr, e))?;

        let local_addr = inner.local_addr().map_err(|e| ListenerError::Bind(addr, e))?;
        tracing::info!(address = %local_addr, "Listener bound");

        Ok(Self { inner })
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.inner.local_addr()
    }

    /// Hand the socket to the server.
    pub fn into_inner(self) -> TcpListener {
        self.inner
    }
}

fn classify_bind_error(addr: SocketAddr, e: io::Error) -> ListenerError {
    match e.kind() {
        io::ErrorKind::PermissionDenied => ListenerError::PermissionDenied(addr),
        io::ErrorKind::AddrInUse => ListenerError::AddrInUse(addr),
        _ => ListenerError::Bind(addr, e),
    }
}
