//! Request DTOs.
//!
//! Incoming HTTP request bodies. Field names and defaults match the
//! original wire contract: required fields missing from the body are
//! rejected by the `Json` extractor (the validation-error classification),
//! optional fields fall back to the documented defaults.

use serde::Deserialize;

use crate::domain::{ProjectStatus, TaskPriority, TaskState};

/// Request body for creating or replacing a project.
///
/// # Example JSON
///
/// ```json
/// {
///     "name": "Sistema de Gestión",
///     "description": "Desarrollo del sistema de gestión de proyectos",
///     "status": "Activo",
///     "users": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectPayload {
    /// Project name (required).
    pub name: String,
    /// Free-text description (required).
    pub description: String,
    /// Lifecycle status; defaults to `Activo`.
    #[serde(default)]
    pub status: ProjectStatus,
    /// Member count; defaults to 0.
    #[serde(default)]
    pub users: i64,
}

/// Request body for creating or replacing a task.
///
/// # Example JSON
///
/// ```json
/// {
///     "descripcion": "Diseño de la base de datos",
///     "prioridad": "alta",
///     "estado": "pendiente",
///     "completada": false,
///     "usuario": "Ana Martínez",
///     "project_id": "01234567-89ab-cdef-0123-456789abcdef"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskPayload {
    /// Task description (required).
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Priority; defaults to `media`.
    #[serde(rename = "prioridad", default)]
    pub priority: TaskPriority,
    /// Workflow state; defaults to `pendiente`.
    #[serde(rename = "estado", default)]
    pub state: TaskState,
    /// Completion flag; defaults to false.
    #[serde(rename = "completada", default)]
    pub is_completed: bool,
    /// Optional free-text assignee.
    #[serde(rename = "usuario", default)]
    pub assignee: Option<String>,
    /// String form of the owning project's id (required). Not checked
    /// against the projects collection — a dangling reference just never
    /// matches any aggregation.
    pub project_id: String,
    /// Optional due date.
    #[serde(rename = "fecha_limite", default)]
    pub due_date: Option<String>,
}

/// Request body for creating or replacing a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    /// Display name (required).
    pub name: String,
    /// Contact email (required).
    pub email: String,
    /// Free-text role; defaults to "user".
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}
