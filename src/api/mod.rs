//! HTTP API layer.
//!
//! Thin axum handlers over the application layer: DTOs for the request
//! bodies, projection views for the responses, and a single error body
//! shape for every failure.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
