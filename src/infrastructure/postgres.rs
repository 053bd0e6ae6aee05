//! Postgres-backed document store.
//!
//! Documents are rows in a single `documents` table: one JSONB body per
//! `(collection, id)` pair. Field queries go through the `->>` operator,
//! which extracts the field as text — the same raw string comparison the
//! in-memory store performs, so association semantics are identical across
//! backends.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use super::store::{Document, DocumentStore, StoreError};
use crate::domain::DocumentId;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS documents (\
     collection TEXT NOT NULL, \
     id UUID NOT NULL, \
     body JSONB NOT NULL, \
     PRIMARY KEY (collection, id))";

/// Postgres-based document store implementation.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    /// The database connection pool.
    pool: sqlx::PgPool,
}

impl PostgresDocumentStore {
    /// Connects to the database and ensures the documents table exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the connection or the schema
    /// statement fails.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|error| StoreError::Unavailable(error.to_string()))?;

        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .map_err(|error| StoreError::Unavailable(error.to_string()))?;

        Ok(Self { pool })
    }

    /// Creates a store over an existing connection pool.
    #[must_use]
    pub const fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &sqlx::PgPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn insert(&self, collection: &str, body: Value) -> Result<Document, StoreError> {
        let id = DocumentId::generate();

        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(id.as_uuid())
            .bind(&body)
            .execute(&self.pool)
            .await
            .map_err(|error| StoreError::Unavailable(error.to_string()))?;

        Ok(Document {
            id: id.to_string(),
            body,
        })
    }

    async fn find(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Document>, StoreError> {
        let row: Option<(Value,)> =
            sqlx::query_as("SELECT body FROM documents WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|error| StoreError::Unavailable(error.to_string()))?;

        Ok(row.map(|(body,)| Document {
            id: id.to_string(),
            body,
        }))
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let rows: Vec<(Uuid, Value)> =
            sqlx::query_as("SELECT id, body FROM documents WHERE collection = $1 ORDER BY id")
                .bind(collection)
                .fetch_all(&self.pool)
                .await
                .map_err(|error| StoreError::Unavailable(error.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(uuid, body)| Document {
                id: DocumentId::from(uuid).to_string(),
                body,
            })
            .collect())
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Document>, StoreError> {
        let rows: Vec<(Uuid, Value)> = sqlx::query_as(
            "SELECT id, body FROM documents \
             WHERE collection = $1 AND body->>$2 = $3 \
             ORDER BY id",
        )
        .bind(collection)
        .bind(field)
        .bind(value)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| StoreError::Unavailable(error.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(uuid, body)| Document {
                id: DocumentId::from(uuid).to_string(),
                body,
            })
            .collect())
    }

    async fn replace(
        &self,
        collection: &str,
        id: &DocumentId,
        body: Value,
    ) -> Result<Option<Document>, StoreError> {
        let result =
            sqlx::query("UPDATE documents SET body = $3 WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id.as_uuid())
                .bind(&body)
                .execute(&self.pool)
                .await
                .map_err(|error| StoreError::Unavailable(error.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(Document {
            id: id.to_string(),
            body,
        }))
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|error| StoreError::Unavailable(error.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<u64, StoreError> {
        let result =
            sqlx::query("DELETE FROM documents WHERE collection = $1 AND body->>$2 = $3")
                .bind(collection)
                .bind(field)
                .bind(value)
                .execute(&self.pool)
                .await
                .map_err(|error| StoreError::Unavailable(error.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|error| StoreError::Unavailable(error.to_string()))
    }
}

// Note: behavior tests for this implementation live in the integration
// suite and require a reachable database; the in-memory store covers the
// shared semantics (exact-string field matching, absence handling).
