//! Response DTOs.
//!
//! The entity views (projects with statistics, tasks, users) live in the
//! application layer's projection module; this module only holds the small
//! envelope bodies for the operational endpoints.

use serde::Serialize;

/// A simple confirmation message, used by the root endpoint and the delete
/// endpoints.
///
/// # Example JSON
///
/// ```json
/// { "message": "Proyecto eliminado exitosamente" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a new `MessageResponse`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Liveness report for `GET /health`.
///
/// Always served with status 200; degradation is reported in the body so
/// that monitoring keeps a single probe regardless of store health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// `"healthy"` or `"unhealthy"`.
    pub status: String,
    /// `"connected"` or `"disconnected"`.
    pub database: String,
}

impl HealthResponse {
    /// Reports a reachable store.
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            database: "connected".to_string(),
        }
    }

    /// Reports an unreachable store.
    #[must_use]
    pub fn unhealthy() -> Self {
        Self {
            status: "unhealthy".to_string(),
            database: "disconnected".to_string(),
        }
    }
}
