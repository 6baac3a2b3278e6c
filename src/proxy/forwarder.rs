//! Backend round trip.
//!
//! # Responsibilities
//! - Build the backend request from an inbound API request
//! - Execute it under the fixed timeout
//! - Relay status, filtered headers and body back to the caller
//! - Map transport failures to 504 (timeout) or 502 (everything else)
//!
//! # Design Decisions
//! - One exchange operation for every method; method and body are inputs
//! - Whole-body buffering on both legs, no streaming passthrough
//! - Non-pooled client: no connection state survives a request
//! - Backend error statuses are not errors here; they are relayed as-is

use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use axum::body::{Body, Bytes};
use axum::http::uri::{Authority, PathAndQuery, Scheme};
use axum::http::{HeaderMap, Method, Request, StatusCode, Uri};
use axum::response::Response;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use thiserror::Error;
use url::Url;

use crate::error::EdgeError;
use crate::proxy::headers::{forward_request_headers, relay_response_headers};
use crate::resilience::timeouts::{is_timeout, BACKEND_TIMEOUT};

type BoxError = Box<dyn StdError + Send + Sync>;

/// Why a backend origin string was refused.
#[derive(Debug, Error)]
pub enum OriginError {
    #[error("'{origin}' is not an absolute URL: {source}")]
    Parse {
        origin: String,
        #[source]
        source: url::ParseError,
    },

    #[error("'{0}' must use the http scheme")]
    Scheme(String),

    #[error("'{0}' has no host")]
    NoHost(String),

    #[error("'{0}' must not carry a path, query or fragment")]
    NotAnOrigin(String),
}

/// The single backend the forwarder talks to: `http://host:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOrigin {
    authority: Authority,
}

impl BackendOrigin {
    /// Host and port of the origin.
    pub fn authority(&self) -> &Authority {
        &self.authority
    }
}

impl FromStr for BackendOrigin {
    type Err = OriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(s).map_err(|source| OriginError::Parse {
            origin: s.to_string(),
            source,
        })?;
        if url.scheme() != "http" {
            return Err(OriginError::Scheme(s.to_string()));
        }
        let host = url
            .host_str()
            .ok_or_else(|| OriginError::NoHost(s.to_string()))?;
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(OriginError::NotAnOrigin(s.to_string()));
        }
        let port = url.port_or_known_default().unwrap_or(80);
        let authority = Authority::from_str(&format!("{host}:{port}"))
            .map_err(|_| OriginError::NoHost(s.to_string()))?;
        Ok(Self { authority })
    }
}

impl fmt::Display for BackendOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "http://{}", self.authority)
    }
}

/// Methods whose request body is forwarded to the backend.
pub fn method_carries_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT
}

/// One API request, ready to be forwarded.
#[derive(Debug)]
pub struct ProxyExchange {
    pub method: Method,
    /// Original path including the query string.
    pub target: PathAndQuery,
    pub headers: HeaderMap,
    /// Fully read body; `None` for methods that carry none.
    pub body: Option<Bytes>,
}

/// Forwards API requests to the backend origin.
pub struct Forwarder {
    origin: BackendOrigin,
    client: Client<HttpConnector, Body>,
}

impl Forwarder {
    /// Create a forwarder for `origin`.
    pub fn new(origin: BackendOrigin) -> Self {
        let client = Client::builder(TokioExecutor::new())
            .pool_max_idle_per_host(0)
            .build(HttpConnector::new());

        Self { origin, client }
    }

    /// The origin requests are forwarded to.
    pub fn origin(&self) -> &BackendOrigin {
        &self.origin
    }

    /// Run one backend round trip and turn its outcome into a response.
    pub async fn exchange(&self, exchange: ProxyExchange) -> Result<Response, EdgeError> {
        let method = exchange.method.clone();
        let request = self.build_request(exchange)?;
        let uri = request.uri().clone();
        let start = Instant::now();

        tracing::debug!(%method, %uri, "Forwarding to backend");

        let round_trip = async {
            let response = self.client.request(request).await?;
            let (parts, body) = response.into_parts();
            let bytes = axum::body::to_bytes(Body::new(body), usize::MAX).await?;
            Ok::<_, BoxError>((parts, bytes))
        };

        let outcome = tokio::time::timeout(BACKEND_TIMEOUT, round_trip).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(Ok((parts, bytes))) => {
                tracing::debug!(%method, %uri, status = parts.status.as_u16(), elapsed_ms, "Backend responded");
                Ok(relay(parts.status, &parts.headers, bytes))
            }
            Ok(Err(e)) if is_timeout(&*e) => {
                tracing::debug!(%method, %uri, elapsed_ms, error = %e, "Backend timed out");
                Err(EdgeError::BackendTimeout)
            }
            Ok(Err(e)) => {
                let description = describe_error(&*e);
                tracing::debug!(%method, %uri, elapsed_ms, error = %description, "Backend unreachable");
                Err(EdgeError::BackendUnreachable(description))
            }
            Err(_) => {
                tracing::debug!(%method, %uri, elapsed_ms, "Backend round trip exceeded bound");
                Err(EdgeError::BackendTimeout)
            }
        }
    }

    fn build_request(&self, exchange: ProxyExchange) -> Result<Request<Body>, EdgeError> {
        let uri = Uri::builder()
            .scheme(Scheme::HTTP)
            .authority(self.origin.authority.clone())
            .path_and_query(exchange.target)
            .build()
            .map_err(|e| EdgeError::BackendUnreachable(format!("invalid backend URI: {e}")))?;

        let headers = forward_request_headers(&exchange.headers, exchange.body.is_some());
        let body = match exchange.body {
            Some(bytes) => Body::from(bytes),
            None => Body::empty(),
        };

        let mut request = Request::new(body);
        *request.method_mut() = exchange.method;
        *request.uri_mut() = uri;
        *request.headers_mut() = headers;
        Ok(request)
    }
}

/// Build the client-facing response from a backend answer.
///
/// A 304 never carries a body, whatever the backend sent.
fn relay(status: StatusCode, headers: &HeaderMap, body: Bytes) -> Response {
    let not_modified = status == StatusCode::NOT_MODIFIED;
    let body = if not_modified {
        Body::empty()
    } else {
        Body::from(body)
    };

    let mut response = Response::new(body);
    *response.status_mut() = status;
    *response.headers_mut() = relay_response_headers(headers, not_modified);
    response
}

/// Flatten an error and its sources into one message.
fn describe_error(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
