//! Projection of stored documents into response views.
//!
//! Stored documents may be partially populated; these functions substitute
//! the documented default for every missing optional field and never fail.
//! All defaulting lives here — handlers receive complete views. The
//! original backend filled defaults ad hoc per route; centralizing the
//! rules keeps every endpoint consistent.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::stats::TaskStats;
use crate::domain::{ProjectStatus, StoredProject, StoredTask, StoredUser, TaskPriority, TaskState};

/// A project response: defaulted stored fields plus read-time statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectView {
    /// Document id, under the key the frontend expects.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub users: i64,
    /// Kept nullable: legacy documents may predate timestamping.
    pub created_at: Option<DateTime<Utc>>,
    /// Derived figures, serialized as top-level `total`/`completadas`/`pendientes`.
    #[serde(flatten)]
    pub stats: TaskStats,
}

/// A task response. Carries the id under both `_id` and `id` because the
/// original set both and the frontend reads either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    #[serde(rename = "_id")]
    pub raw_id: String,
    pub id: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "prioridad")]
    pub priority: TaskPriority,
    #[serde(rename = "estado")]
    pub state: TaskState,
    #[serde(rename = "completada")]
    pub is_completed: bool,
    #[serde(rename = "usuario")]
    pub assignee: Option<String>,
    pub project_id: String,
    #[serde(rename = "fecha_limite")]
    pub due_date: Option<String>,
    #[serde(rename = "creada_en")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A user response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Merges a stored project and its computed statistics into a view,
/// substituting defaults for missing fields: empty name/description,
/// Active status, zero members.
#[must_use]
pub fn to_project_view(id: &str, project: StoredProject, stats: TaskStats) -> ProjectView {
    ProjectView {
        id: id.to_string(),
        name: project.name.unwrap_or_default(),
        description: project.description.unwrap_or_default(),
        status: project.status.unwrap_or_default(),
        users: project.users.unwrap_or(0),
        created_at: project.created_at,
        stats,
    }
}

/// Projects a stored task into a view with defaults: empty description,
/// medium priority, pending state, not completed, empty reference.
#[must_use]
pub fn to_task_view(id: &str, task: StoredTask) -> TaskView {
    TaskView {
        raw_id: id.to_string(),
        id: id.to_string(),
        description: task.description.unwrap_or_default(),
        priority: task.priority.unwrap_or_default(),
        state: task.state.unwrap_or_default(),
        is_completed: task.is_completed.unwrap_or(false),
        assignee: task.assignee,
        project_id: task.project_id.unwrap_or_default(),
        due_date: task.due_date,
        created_at: task.created_at,
    }
}

/// Projects a stored user into a view with defaults: empty name/email,
/// role "user".
#[must_use]
pub fn to_user_view(id: &str, user: StoredUser) -> UserView {
    UserView {
        id: id.to_string(),
        name: user.name.unwrap_or_default(),
        email: user.email.unwrap_or_default(),
        role: user.role.unwrap_or_else(|| "user".to_string()),
        created_at: user.created_at,
    }
}
