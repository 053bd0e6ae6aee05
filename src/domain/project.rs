//! Project entity.
//!
//! A project as stored in the `projects` collection. Stored documents are
//! schemaless: legacy records may be missing any optional field, so every
//! field of [`StoredProject`] is optional and decoding never fails on an
//! absent field. Defaults are substituted by the projection layer
//! ([`crate::application::projection`]), not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project lifecycle status.
///
/// Wire values are the Spanish strings the existing frontend expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// The project is in progress.
    #[default]
    #[serde(rename = "Activo")]
    Active,
    /// The project is finished.
    #[serde(rename = "Completado")]
    Completed,
    /// The project is on hold.
    #[serde(rename = "Pausado")]
    Paused,
}

/// A project document as persisted in the store.
///
/// Derived statistics (`total`/`completadas`/`pendientes`) are *never*
/// part of this struct: they are recomputed from the task collection on
/// every read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProject {
    /// Project name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    /// Number of members assigned to the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<i64>,
    /// Server-assigned creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl StoredProject {
    /// Creates a fully populated project document with the creation time
    /// assigned now. Used by the create endpoint; replace carries the
    /// existing `created_at` instead.
    #[must_use]
    pub fn new(name: String, description: String, status: ProjectStatus, users: i64) -> Self {
        Self {
            name: Some(name),
            description: Some(description),
            status: Some(status),
            users: Some(users),
            created_at: Some(Utc::now()),
        }
    }
}
