//! Infrastructure layer.
//!
//! - `config` - Application settings loaded from environment variables
//! - `store` - Document store abstraction and in-memory implementation
//! - `postgres` - Postgres-backed document store (JSONB bodies)
//! - `dependencies` - Dependency injection container
//!
//! All external dependencies sit behind the [`DocumentStore`] trait so the
//! rest of the application never touches a concrete backend.

mod config;
mod dependencies;
mod postgres;
mod store;

pub use config::{AppConfig, ConfigError};
pub use dependencies::AppDependencies;
pub use postgres::PostgresDocumentStore;
pub use store::{
    COLLECTION_PROJECTS, COLLECTION_TASKS, COLLECTION_USERS, Document, DocumentStore,
    InMemoryDocumentStore, StoreError,
};
