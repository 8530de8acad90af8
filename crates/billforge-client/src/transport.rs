//! The transport capability: how requests reach the network.
//!
//! The dispatch layer builds a fully-formed [`Request`] and hands it to an
//! injected [`Transport`]. Connection pooling, timeouts, and cancellation
//! live entirely inside the transport; the dispatch layer neither implements
//! nor overrides them. [`HttpTransport`] is the reqwest-backed default.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};
use std::time::Duration;

/// A fully-formed HTTP request, ready for a [`Transport`] to execute.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL, query string included.
    pub url: Url,
    /// Headers to send.
    pub headers: HeaderMap,
    /// JSON body bytes, when the operation has one.
    pub body: Option<Vec<u8>>,
}

/// Raw HTTP response produced by a [`Transport`].
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body bytes.
    pub body: Vec<u8>,
}

/// Error raised when an HTTP exchange could not complete (DNS, connection,
/// timeout). Distinct from decoding failures and from API error responses.
#[derive(Debug, thiserror::Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Build a transport error from a message alone.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Build a transport error wrapping an underlying cause.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// An abstraction capable of executing one HTTP exchange.
///
/// Supplied by the host environment; implement it to route calls through a
/// different HTTP stack, or wrap the default to add instrumentation or
/// retries.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request and return the raw response.
    async fn execute(&self, request: Request) -> Result<Response, TransportError>;
}

/// Default transport backed by a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the given request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<Response, TransportError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(Response { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display() {
        let err = TransportError::new("connection refused");
        assert_eq!(err.to_string(), "transport error: connection refused");
    }

    #[test]
    fn transport_error_preserves_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline elapsed");
        let err = TransportError::with_source("request timed out", io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
