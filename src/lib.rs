//! Project Management API
//!
//! Backend for a project/task/user management frontend. Projects, tasks and
//! users are schemaless JSON documents in a pluggable document store; task
//! statistics (`total`/`completadas`/`pendientes`) are derived from the task
//! collection on every read and never persisted.
//!
//! # Architecture
//!
//! The application follows the Onion Architecture:
//!
//! - **Domain Layer**: Document entities, the id value object, wire enums
//! - **Application Layer**: Association resolution, statistics aggregation,
//!   response projection, the cascading delete workflow
//! - **Infrastructure Layer**: Configuration, the document store trait with
//!   its in-memory and Postgres implementations, dependency container
//! - **API Layer**: HTTP handlers, DTOs, routing, error responses
//!
//! # Wire Contract
//!
//! Field names and enum values on the wire are Spanish (`descripcion`,
//! `prioridad`, `Activo`, ...) because the existing frontend depends on
//! them; everything in Rust is English and mapped via serde renames.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
