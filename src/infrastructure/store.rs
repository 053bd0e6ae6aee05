//! Document store abstraction.
//!
//! This module provides the trait definition and the in-memory
//! implementation of the identity store: schemaless JSON documents addressed
//! by `(collection, id)`, with the id assigned by the store on insert.
//!
//! # Design
//!
//! - **Trait-based abstraction**: `DocumentStore` allows different backends
//!   (Postgres for production, in-memory for tests and standalone runs)
//! - **Absence is not an error**: `find` and `replace` return `Option`, and
//!   `delete` returns whether anything was removed; mapping absence to a
//!   404 happens at the API boundary
//! - **String-equality field queries**: `find_by_field` and
//!   `delete_by_field` compare the stored field against the argument as raw
//!   strings. This is what the association resolver builds on — there is
//!   deliberately no coercion or normalization on either side.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::DocumentId;

/// Collection holding project documents.
pub const COLLECTION_PROJECTS: &str = "projects";
/// Collection holding task documents.
pub const COLLECTION_TASKS: &str = "tasks";
/// Collection holding user documents.
pub const COLLECTION_USERS: &str = "users";

/// Errors that can occur when interacting with the document store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The underlying storage is unreachable.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// Document serialization or deserialization failed.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// A stored document together with its store-assigned id.
///
/// The id is carried in its canonical string rendering; it is the value
/// task documents copy into their `project_id` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Canonical string form of the document id.
    pub id: String,
    /// The document body.
    pub body: Value,
}

/// Trait for document store implementations.
///
/// Implementations must be thread-safe (`Send + Sync`); handlers share one
/// store behind an `Arc<dyn DocumentStore>`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a document, assigning it a fresh id.
    async fn insert(&self, collection: &str, body: Value) -> Result<Document, StoreError>;

    /// Looks up a single document by id. Absence yields `Ok(None)`.
    async fn find(&self, collection: &str, id: &DocumentId)
    -> Result<Option<Document>, StoreError>;

    /// Returns every document in a collection.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Returns every document whose `field` equals `value`, compared as
    /// raw strings. A document lacking the field never matches.
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Document>, StoreError>;

    /// Replaces a document's body wholesale. Absence yields `Ok(None)`.
    async fn replace(
        &self,
        collection: &str,
        id: &DocumentId,
        body: Value,
    ) -> Result<Option<Document>, StoreError>;

    /// Deletes a document, returning whether it existed.
    async fn delete(&self, collection: &str, id: &DocumentId) -> Result<bool, StoreError>;

    /// Deletes every document whose `field` equals `value`, returning the
    /// number removed.
    async fn delete_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<u64, StoreError>;

    /// Probes store reachability for the liveness endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// In-memory document store.
///
/// Used by the test suite and when no `DATABASE_URL` is configured.
/// Collections are created lazily on first insert; ids are ordered, so
/// `find_all` returns documents in insertion (time) order like the
/// Postgres backend.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, BTreeMap<Uuid, Value>>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Extracts the string value of `field` from a document body, if present.
fn field_as_str<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field).and_then(Value::as_str)
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, collection: &str, body: Value) -> Result<Document, StoreError> {
        let id = DocumentId::generate();
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        collections
            .entry(collection.to_string())
            .or_default()
            .insert(*id.as_uuid(), body.clone());

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
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        Ok(collections
            .get(collection)
            .and_then(|documents| documents.get(id.as_uuid()))
            .map(|body| Document {
                id: id.to_string(),
                body: body.clone(),
            }))
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(uuid, body)| Document {
                        id: DocumentId::from(*uuid).to_string(),
                        body: body.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|(_, body)| field_as_str(body, field) == Some(value))
                    .map(|(uuid, body)| Document {
                        id: DocumentId::from(*uuid).to_string(),
                        body: body.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn replace(
        &self,
        collection: &str,
        id: &DocumentId,
        body: Value,
    ) -> Result<Option<Document>, StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        let Some(documents) = collections.get_mut(collection) else {
            return Ok(None);
        };
        let Some(existing) = documents.get_mut(id.as_uuid()) else {
            return Ok(None);
        };

        *existing = body.clone();
        Ok(Some(Document {
            id: id.to_string(),
            body,
        }))
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> Result<bool, StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        Ok(collections
            .get_mut(collection)
            .is_some_and(|documents| documents.remove(id.as_uuid()).is_some()))
    }

    async fn delete_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<u64, StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };

        let before = documents.len();
        documents.retain(|_, body| field_as_str(body, field) != Some(value));

        Ok((before - documents.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.collections
            .read()
            .map(|_| ())
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}
