//! Response envelopes and the API error body.
//!
//! Every success body is `{ "data": ..., "meta": ... }`; list responses add
//! pagination under `meta`. Error bodies are `{ "error": ..., "meta": ... }`.

use serde::{Deserialize, Serialize};

/// Metadata returned with every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Meta {
    /// Server-assigned id for the request, for support escalation.
    pub request_id: Option<String>,
}

/// Envelope around a single entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope<T> {
    /// The entity.
    pub data: T,
    /// Response metadata.
    #[serde(default)]
    pub meta: Meta,
}

/// Cursor pagination state for a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pagination {
    /// Page size the server used.
    pub per_page: u32,
    /// URL of the next page; absent on the last page.
    pub next: Option<String>,
    /// Whether another page exists.
    pub has_more: bool,
    /// Server's estimate of the total matching entities.
    pub estimated_total: Option<u64>,
}

impl Pagination {
    /// Extract the opaque `after` cursor from the next-page URL, for feeding
    /// into the next list call.
    #[must_use]
    pub fn next_after(&self) -> Option<&str> {
        let next = self.next.as_deref()?;
        let query = next.split_once('?')?.1;
        query.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == "after" && !value.is_empty()).then_some(value)
        })
    }
}

/// Metadata returned with list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageMeta {
    /// Server-assigned id for the request.
    pub request_id: Option<String>,
    /// Pagination state.
    pub pagination: Pagination,
}

/// Envelope around one page of entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Page<T> {
    /// The entities on this page.
    pub data: Vec<T>,
    /// Response metadata including pagination.
    pub meta: PageMeta,
}

/// Broad class of an API error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// The request was malformed or failed validation.
    RequestError,
    /// The platform failed to process a well-formed request.
    ApiError,
}

/// A field-level validation failure inside an error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The offending field.
    pub field: String,
    /// What was wrong with it.
    pub message: String,
}

/// The error body returned with non-success responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Broad error class.
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    /// Stable machine-readable code, e.g. `entity_not_found`.
    pub code: String,
    /// Human-readable description.
    pub detail: String,
    /// Link to the error's documentation.
    pub documentation_url: Option<String>,
    /// Field-level failures, for validation errors.
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// Envelope around an error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// The error.
    pub error: ErrorDetail,
    /// Response metadata.
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_data_and_meta() {
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(
            r#"{"data": {"id": 1}, "meta": {"request_id": "req_123"}}"#,
        )
        .unwrap();
        assert_eq!(envelope.meta.request_id.as_deref(), Some("req_123"));
    }

    #[test]
    fn page_decodes_pagination() {
        let page: Page<serde_json::Value> = serde_json::from_str(
            r#"{
                "data": [{}, {}, {}],
                "meta": {
                    "request_id": "req_123",
                    "pagination": {
                        "per_page": 5,
                        "next": "https://api.example.com/products?after=pro_01gsz4t5hdjse780zja8vvr7jg&per_page=5",
                        "has_more": false,
                        "estimated_total": 3
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(page.data.len(), 3);
        assert!(!page.meta.pagination.has_more);
        assert_eq!(
            page.meta.pagination.next_after(),
            Some("pro_01gsz4t5hdjse780zja8vvr7jg")
        );
    }

    #[test]
    fn next_after_absent_without_cursor() {
        let pagination = Pagination {
            per_page: 50,
            next: None,
            has_more: false,
            estimated_total: None,
        };
        assert!(pagination.next_after().is_none());

        let no_cursor = Pagination {
            next: Some("https://api.example.com/products?per_page=50".to_string()),
            ..pagination
        };
        assert!(no_cursor.next_after().is_none());
    }

    #[test]
    fn error_envelope_decodes() {
        let envelope: ErrorEnvelope = serde_json::from_str(
            r#"{
                "error": {
                    "type": "request_error",
                    "code": "entity_not_found",
                    "detail": "Unable to find product pro_123",
                    "documentation_url": "https://developer.billforge.com/errors/entity_not_found"
                },
                "meta": {"request_id": "req_456"}
            }"#,
        )
        .unwrap();
        assert_eq!(envelope.error.code, "entity_not_found");
        assert_eq!(envelope.error.error_type, ErrorType::RequestError);
        assert!(envelope.error.errors.is_empty());
    }

    #[test]
    fn field_errors_decode_when_present() {
        let detail: ErrorDetail = serde_json::from_str(
            r#"{
                "type": "request_error",
                "code": "validation_failed",
                "detail": "Invalid request",
                "documentation_url": null,
                "errors": [{"field": "unit_price.amount", "message": "must be a decimal string"}]
            }"#,
        )
        .unwrap();
        assert_eq!(detail.errors.len(), 1);
        assert_eq!(detail.errors[0].field, "unit_price.amount");
    }
}
