//! Task entity.
//!
//! A task as stored in the `tasks` collection. The `project_id` field is a
//! *string copy* of the owning project's id — a denormalized reference, not
//! a native foreign key. No referential integrity is enforced: a task may
//! reference a project that no longer exists, in which case it is simply
//! excluded from every aggregation.
//!
//! Wire field names are Spanish (`descripcion`, `prioridad`, ...) because
//! the existing frontend depends on them; the Rust fields are English and
//! mapped via serde renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    #[serde(rename = "baja")]
    Low,
    #[default]
    #[serde(rename = "media")]
    Medium,
    #[serde(rename = "alta")]
    High,
}

/// Task workflow state.
///
/// Independent of the `completada` flag on the wire; the aggregator counts
/// only the flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskState {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "en progreso")]
    InProgress,
    #[serde(rename = "completada")]
    Completed,
}

/// A task document as persisted in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTask {
    /// Task description.
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Priority.
    #[serde(rename = "prioridad", skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// Workflow state.
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub state: Option<TaskState>,
    /// Completion flag; this is what the statistics aggregator counts.
    #[serde(rename = "completada", skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    /// Free-text assignee name. Not a reference to a user document.
    #[serde(rename = "usuario", skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Canonical string form of the owning project's id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Optional due date, kept as the client sent it.
    #[serde(rename = "fecha_limite", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Server-assigned creation time.
    #[serde(rename = "creada_en", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
