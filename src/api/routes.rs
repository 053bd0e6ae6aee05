//! Route configuration for the project management API.
//!
//! This module defines all HTTP routes and maps them to handlers.
//!
//! # Routes
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | GET | /api/projects | `list_projects` | List projects with statistics |
//! | GET | /api/projects/{id} | `get_project` | Get a project with statistics |
//! | POST | /api/projects | `create_project` | Create a project |
//! | PUT | /api/projects/{id} | `update_project` | Replace a project |
//! | DELETE | /api/projects/{id} | `delete_project` | Delete a project and its tasks |
//! | GET | /api/projects/{id}/tasks | `list_project_tasks` | List a project's tasks |
//! | POST | /api/tasks | `create_task` | Create a task |
//! | PUT | /api/tasks/{id} | `update_task` | Replace a task |
//! | DELETE | /api/tasks/{id} | `delete_task` | Delete a task |
//! | GET | /api/users | `list_users` | List users |
//! | POST | /api/users | `create_user` | Create a user |
//! | PUT | /api/users/{id} | `update_user` | Replace a user |
//! | DELETE | /api/users/{id} | `delete_user` | Delete a user |
//! | GET | / | `root` | Liveness message |
//! | GET | /health | `health_check` | Store reachability report |

use axum::extract::State;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::responses::{HealthResponse, MessageResponse};
use crate::api::handlers::projects::{
    create_project, delete_project, get_project, list_project_tasks, list_projects, update_project,
};
use crate::api::handlers::tasks::{create_task, delete_task, update_task};
use crate::api::handlers::users::{create_user, delete_user, list_users, update_user};
use crate::infrastructure::AppDependencies;

/// GET / - Liveness message.
///
/// # Example Response
///
/// ```json
/// { "message": "API de Gestión de Proyectos funcionando correctamente" }
/// ```
#[allow(clippy::unused_async)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(
        "API de Gestión de Proyectos funcionando correctamente",
    ))
}

/// GET /health - Store reachability report.
///
/// Always answers 200; degradation is reported in the body.
///
/// # Example Response
///
/// ```json
/// { "status": "healthy", "database": "connected" }
/// ```
pub async fn health_check(State(dependencies): State<AppDependencies>) -> Json<HealthResponse> {
    match dependencies.store().ping().await {
        Ok(()) => Json(HealthResponse::healthy()),
        Err(error) => {
            tracing::warn!(%error, "health check found the store unreachable");
            Json(HealthResponse::unhealthy())
        }
    }
}

/// Creates the Axum router with all API routes.
///
/// # Arguments
///
/// * `dependencies` - The application dependencies (configuration and store)
///
/// # Example
///
/// ```rust,ignore
/// use gestion_proyectos::api::routes::create_router;
/// use gestion_proyectos::infrastructure::{AppConfig, AppDependencies, InMemoryDocumentStore};
/// use std::sync::Arc;
///
/// let dependencies = AppDependencies::new(
///     AppConfig::default(),
///     Arc::new(InMemoryDocumentStore::new()),
/// );
/// let router = create_router(dependencies);
/// ```
pub fn create_router(dependencies: AppDependencies) -> Router {
    Router::new()
        // Project routes
        .route("/api/projects", get(list_projects).post(create_project))
        .route(
            "/api/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/api/projects/{id}/tasks", get(list_project_tasks))
        // Task routes
        .route("/api/tasks", post(create_task))
        .route("/api/tasks/{id}", put(update_task).delete(delete_task))
        // User routes
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", put(update_user).delete(delete_user))
        // Operational routes
        .route("/", get(root))
        .route("/health", get(health_check))
        // Add state
        .with_state(dependencies)
}
