//! Error handling for the API layer.
//!
//! Provides the API error body and pure conversion functions from the
//! lower-layer error types to HTTP responses. The error taxonomy the
//! caller can distinguish:
//!
//! | Classification | HTTP Status | Error Code |
//! |----------------|-------------|------------|
//! | Malformed id | 400 | `INVALID_DOCUMENT_ID` |
//! | Absent document | 404 | `*_NOT_FOUND` |
//! | Store unreachable | 503 | `STORE_UNAVAILABLE` |
//! | Undecodable document | 500 | `SERIALIZATION_ERROR` |
//!
//! Malformed ids and absent documents must never share a status — the
//! original backend conflated them on some routes and callers could not
//! tell a typo from a deletion.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::IdValidationError;
use crate::infrastructure::StoreError;

/// API error response body.
///
/// # Example JSON
///
/// ```json
/// {
///     "code": "PROJECT_NOT_FOUND",
///     "message": "Proyecto no encontrado",
///     "details": { "project_id": "..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// A machine-readable error code.
    pub code: String,
    /// A human-readable error message.
    pub message: String,
    /// Optional additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Creates a new `ApiError` without details.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new `ApiError` with details.
    #[must_use]
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// Response wrapper that pairs an HTTP status code with an [`ApiError`].
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new `ApiErrorResponse`.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

// =============================================================================
// Error Conversion Functions (Pure Functions)
// =============================================================================

/// Converts a store error to an API error response.
#[must_use]
pub fn store_error_to_api_error(error: &StoreError) -> (StatusCode, ApiError) {
    match error {
        StoreError::Unavailable(message) => (
            StatusCode::SERVICE_UNAVAILABLE,
            ApiError::with_details(
                "STORE_UNAVAILABLE",
                "Error de conexión a la base de datos",
                serde_json::json!({ "error": message }),
            ),
        ),
        StoreError::Serialization(message) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::with_details(
                "SERIALIZATION_ERROR",
                "Stored document could not be decoded",
                serde_json::json!({ "error": message }),
            ),
        ),
    }
}

/// Converts an id validation error to an API error response.
///
/// Always 400 — a malformed id is the caller's mistake, distinct from a
/// well-formed id that matches nothing (404).
#[must_use]
pub fn invalid_id_to_api_error(error: &IdValidationError) -> (StatusCode, ApiError) {
    match error {
        IdValidationError::InvalidFormat(value) => (
            StatusCode::BAD_REQUEST,
            ApiError::with_details(
                "INVALID_DOCUMENT_ID",
                "ID inválido o no proporcionado",
                serde_json::json!({ "value": value }),
            ),
        ),
    }
}
