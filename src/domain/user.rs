//! User entity.
//!
//! A user as stored in the `users` collection. Users have no modeled
//! relationship to projects or tasks: a task's `usuario` field is a
//! free-text name, not a reference to one of these documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user document as persisted in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-text role, defaults to "user" at projection time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Server-assigned creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl StoredUser {
    /// Creates a fully populated user document with the creation time
    /// assigned now.
    #[must_use]
    pub fn new(name: String, email: String, role: String) -> Self {
        Self {
            name: Some(name),
            email: Some(email),
            role: Some(role),
            created_at: Some(Utc::now()),
        }
    }
}
