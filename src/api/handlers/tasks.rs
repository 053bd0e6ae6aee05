//! Task HTTP handlers.
//!
//! This module provides handlers for task operations:
//!
//! - `POST /api/tasks` - Create a new task
//! - `PUT /api/tasks/{id}` - Replace a task
//! - `DELETE /api/tasks/{id}` - Delete a task
//!
//! Tasks are listed through their project
//! ([`list_project_tasks`](crate::api::handlers::projects::list_project_tasks)),
//! never as a flat collection.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;

use crate::api::dto::requests::TaskPayload;
use crate::api::dto::responses::MessageResponse;
use crate::api::handlers::common::{
    decode_document_for_api, parse_document_id_for_api, store_error_response,
    task_not_found_response,
};
use crate::api::middleware::error_handler::ApiErrorResponse;
use crate::application::{TaskView, to_task_view};
use crate::domain::StoredTask;
use crate::infrastructure::{AppDependencies, COLLECTION_TASKS, StoreError};

/// Builds the stored form of a task from its payload, without a creation
/// time; callers decide whether to stamp now or carry an existing one.
fn payload_to_task(payload: TaskPayload) -> StoredTask {
    StoredTask {
        description: Some(payload.description),
        priority: Some(payload.priority),
        state: Some(payload.state),
        is_completed: Some(payload.is_completed),
        assignee: payload.assignee,
        project_id: Some(payload.project_id),
        due_date: payload.due_date,
        created_at: None,
    }
}

fn task_to_body(task: &StoredTask) -> Result<serde_json::Value, ApiErrorResponse> {
    serde_json::to_value(task)
        .map_err(|error| store_error_response(&StoreError::Serialization(error.to_string())))
}

/// POST /api/tasks - Create a new task.
///
/// The `project_id` in the payload is stored verbatim. It is *not* checked
/// against the projects collection: a dangling reference is legal and the
/// task simply never appears in any project's aggregation.
///
/// # Request Body
///
/// ```json
/// {
///     "descripcion": "Diseño de la base de datos",
///     "prioridad": "alta",
///     "usuario": "Ana Martínez",
///     "project_id": "01234567-89ab-cdef-0123-456789abcdef"
/// }
/// ```
///
/// # Response
///
/// - `201 Created` - Task created successfully
/// - `422 Unprocessable Entity` - Missing required fields
pub async fn create_task(
    State(dependencies): State<AppDependencies>,
    Json(payload): Json<TaskPayload>,
) -> Result<(StatusCode, Json<TaskView>), ApiErrorResponse> {
    let mut task = payload_to_task(payload);
    task.created_at = Some(Utc::now());
    let body = task_to_body(&task)?;

    let document = dependencies
        .store()
        .insert(COLLECTION_TASKS, body)
        .await
        .map_err(|error| store_error_response(&error))?;

    tracing::info!(
        task_id = %document.id,
        project_id = task.project_id.as_deref().unwrap_or(""),
        "task created"
    );

    Ok((StatusCode::CREATED, Json(to_task_view(&document.id, task))))
}

/// PUT /api/tasks/{id} - Replace a task.
///
/// Full replacement of the client-settable fields; `creada_en` is carried
/// over from the existing document. Replacing the `project_id` moves the
/// task to another project's aggregation on the next read.
///
/// # Errors
///
/// Returns `ApiErrorResponse` if:
/// - The id is malformed (400)
/// - No task has the id (404)
pub async fn update_task(
    State(dependencies): State<AppDependencies>,
    Path(task_id): Path<String>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<TaskView>, ApiErrorResponse> {
    let id = parse_document_id_for_api(&task_id)?;
    let store = dependencies.store();

    let existing = store
        .find(COLLECTION_TASKS, &id)
        .await
        .map_err(|error| store_error_response(&error))?
        .ok_or_else(task_not_found_response)?;
    let (_, current): (String, StoredTask) = decode_document_for_api(existing)?;

    let mut replacement = payload_to_task(payload);
    replacement.created_at = current.created_at;
    let body = task_to_body(&replacement)?;

    store
        .replace(COLLECTION_TASKS, &id, body)
        .await
        .map_err(|error| store_error_response(&error))?
        .ok_or_else(task_not_found_response)?;

    Ok(Json(to_task_view(&id.to_string(), replacement)))
}

/// DELETE /api/tasks/{id} - Delete a task.
///
/// # Errors
///
/// Returns `ApiErrorResponse` if:
/// - The id is malformed (400)
/// - No task has the id (404)
pub async fn delete_task(
    State(dependencies): State<AppDependencies>,
    Path(task_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiErrorResponse> {
    let id = parse_document_id_for_api(&task_id)?;

    let existed = dependencies
        .store()
        .delete(COLLECTION_TASKS, &id)
        .await
        .map_err(|error| store_error_response(&error))?;

    if existed {
        tracing::info!(task_id = %id, "task deleted");
        Ok(Json(MessageResponse::new("Tarea eliminada exitosamente")))
    } else {
        Err(task_not_found_response())
    }
}
