//! Client error types.
//!
//! Failures stay in three distinct categories so callers can recover
//! appropriately by matching on the variant:
//!
//! 1. [`Error::Transport`]: the exchange itself could not complete;
//! 2. [`Error::Decode`]: the success-path body did not match its schema;
//! 3. [`Error::Api`]: the platform answered with a declared error.
//!
//! Nothing is retried or suppressed; every failure surfaces on the call
//! that produced it.

use billforge_core::ErrorDetail;
use reqwest::{Method, StatusCode, Url};

use crate::transport::TransportError;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

fn describe_api_error(error: &Option<ErrorDetail>, status: &StatusCode) -> String {
    match error {
        Some(detail) => format!("{} - {}", detail.code, detail.detail),
        None => format!("HTTP {status}"),
    }
}

/// Errors that can occur when calling the API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP exchange could not complete.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A success response did not match the declared schema.
    #[error("decoding {operation} response failed: {source}")]
    Decode {
        /// The operation whose response failed to decode.
        operation: &'static str,
        /// The underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized; no exchange took place.
    #[error("serializing {operation} request failed: {source}")]
    Serialize {
        /// The operation whose request failed to serialize.
        operation: &'static str,
        /// The underlying serialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with a declared non-success response.
    #[error("{operation} failed: {}", describe_api_error(.error, .status))]
    Api {
        /// The operation that failed, e.g. `"list_products"`.
        operation: &'static str,
        /// Method of the original request.
        method: Method,
        /// URL of the original request.
        url: Url,
        /// Response status.
        status: StatusCode,
        /// Best-effort decoded error body; absent when the body could not be
        /// decoded against the error schema.
        error: Option<ErrorDetail>,
        /// The raw response body, kept for the fallback case.
        body: String,
        /// Server-assigned request id, when the error body carried one.
        request_id: Option<String>,
    },
}

impl Error {
    /// The machine-readable error code, for API errors that carried one.
    #[must_use]
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { error, .. } => error.as_ref().map(|detail| detail.code.as_str()),
            _ => None,
        }
    }

    /// The response status, for API errors.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billforge_core::ErrorType;

    fn api_error(error: Option<ErrorDetail>) -> Error {
        Error::Api {
            operation: "get_product",
            method: Method::GET,
            url: Url::parse("https://api.billforge.com/products/pro_123").unwrap(),
            status: StatusCode::NOT_FOUND,
            error,
            body: String::new(),
            request_id: None,
        }
    }

    #[test]
    fn api_error_display_includes_code() {
        let err = api_error(Some(ErrorDetail {
            error_type: ErrorType::RequestError,
            code: "entity_not_found".to_string(),
            detail: "Unable to find product".to_string(),
            documentation_url: None,
            errors: vec![],
        }));
        assert_eq!(
            err.to_string(),
            "get_product failed: entity_not_found - Unable to find product"
        );
        assert_eq!(err.api_code(), Some("entity_not_found"));
    }

    #[test]
    fn api_error_display_falls_back_to_status() {
        let err = api_error(None);
        assert_eq!(err.to_string(), "get_product failed: HTTP 404 Not Found");
        assert_eq!(err.api_code(), None);
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn transport_errors_are_a_distinct_variant() {
        let err = Error::from(TransportError::new("connection refused"));
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(err.api_code(), None);
    }
}
