//! Shared handler helpers.
//!
//! Small conversion functions between the lower layers and HTTP responses,
//! used by every handler module. All are pure; the handlers stay thin
//! compositions of these plus store calls.

use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use crate::api::middleware::error_handler::{
    ApiError, ApiErrorResponse, invalid_id_to_api_error, store_error_to_api_error,
};
use crate::domain::DocumentId;
use crate::infrastructure::{Document, StoreError};

/// Parses a raw path segment into a [`DocumentId`], mapping failure to the
/// 400 response body. This is the single gate that separates "malformed id"
/// (400) from "well-formed but absent" (404) on every id-taking route.
///
/// # Errors
///
/// Returns a 400 `ApiErrorResponse` when the segment is not a canonical id.
pub fn parse_document_id_for_api(raw: &str) -> Result<DocumentId, ApiErrorResponse> {
    DocumentId::parse(raw).map_err(|error| {
        let (status, api_error) = invalid_id_to_api_error(&error);
        ApiErrorResponse::new(status, api_error)
    })
}

/// Converts a [`StoreError`] into its HTTP response.
#[must_use]
pub fn store_error_response(error: &StoreError) -> ApiErrorResponse {
    let (status, api_error) = store_error_to_api_error(error);
    ApiErrorResponse::new(status, api_error)
}

/// Decodes a stored document body into a typed entity, mapping failure to
/// the 500 serialization response.
///
/// # Errors
///
/// Returns a 500 `ApiErrorResponse` when the body does not decode.
pub fn decode_document_for_api<T: DeserializeOwned>(
    document: Document,
) -> Result<(String, T), ApiErrorResponse> {
    serde_json::from_value(document.body)
        .map(|entity| (document.id, entity))
        .map_err(|error| {
            store_error_response(&StoreError::Serialization(error.to_string()))
        })
}

/// 404 response for an absent project.
#[must_use]
pub fn project_not_found_response() -> ApiErrorResponse {
    ApiErrorResponse::new(
        StatusCode::NOT_FOUND,
        ApiError::new("PROJECT_NOT_FOUND", "Proyecto no encontrado"),
    )
}

/// 404 response for an absent task.
#[must_use]
pub fn task_not_found_response() -> ApiErrorResponse {
    ApiErrorResponse::new(
        StatusCode::NOT_FOUND,
        ApiError::new("TASK_NOT_FOUND", "Tarea no encontrada"),
    )
}

/// 404 response for an absent user.
#[must_use]
pub fn user_not_found_response() -> ApiErrorResponse {
    ApiErrorResponse::new(
        StatusCode::NOT_FOUND,
        ApiError::new("USER_NOT_FOUND", "Usuario no encontrado"),
    )
}
