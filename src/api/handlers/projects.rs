//! Project HTTP handlers.
//!
//! This module provides handlers for project operations:
//!
//! - `GET /api/projects` - List all projects with statistics
//! - `GET /api/projects/{id}` - Get a single project with statistics
//! - `POST /api/projects` - Create a new project
//! - `PUT /api/projects/{id}` - Replace a project
//! - `DELETE /api/projects/{id}` - Delete a project and its tasks
//! - `GET /api/projects/{id}/tasks` - List a project's tasks
//!
//! Every project read recomputes `total`/`completadas`/`pendientes` from
//! the task collection; no statistic is ever stored.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::api::dto::requests::ProjectPayload;
use crate::api::dto::responses::MessageResponse;
use crate::api::handlers::common::{
    decode_document_for_api, parse_document_id_for_api, project_not_found_response,
    store_error_response,
};
use crate::api::middleware::error_handler::ApiErrorResponse;
use crate::application::{
    ProjectView, TaskView, aggregate, delete_project_cascade, tasks_for_project, to_project_view,
    to_task_view,
};
use crate::domain::StoredProject;
use crate::infrastructure::{
    AppDependencies, COLLECTION_PROJECTS, DocumentStore, StoreError,
};

/// Builds the enriched view of one project: resolves its tasks, aggregates
/// the statistics, and merges them with the defaulted stored fields.
async fn enriched_view(
    store: &Arc<dyn DocumentStore>,
    id: &str,
    project: StoredProject,
) -> Result<ProjectView, ApiErrorResponse> {
    let records = tasks_for_project(store, id)
        .await
        .map_err(|error| store_error_response(&error))?;
    let stats = aggregate(records.iter().map(|record| &record.task));

    Ok(to_project_view(id, project, stats))
}

/// Serializes an entity into a store body, mapping failure to the 500
/// serialization response.
fn entity_to_body<T: serde::Serialize>(entity: &T) -> Result<serde_json::Value, ApiErrorResponse> {
    serde_json::to_value(entity)
        .map_err(|error| store_error_response(&StoreError::Serialization(error.to_string())))
}

/// GET /api/projects - List all projects.
///
/// Each project in the response carries freshly computed task statistics.
/// A project whose tasks all vanished reports zeros, not an error.
///
/// # Errors
///
/// Returns `ApiErrorResponse` if the store is unreachable (503) or a stored
/// document fails to decode (500).
pub async fn list_projects(
    State(dependencies): State<AppDependencies>,
) -> Result<Json<Vec<ProjectView>>, ApiErrorResponse> {
    let store = dependencies.store();
    let documents = store
        .find_all(COLLECTION_PROJECTS)
        .await
        .map_err(|error| store_error_response(&error))?;

    let mut views = Vec::with_capacity(documents.len());

    for document in documents {
        let (id, project): (String, StoredProject) = decode_document_for_api(document)?;
        views.push(enriched_view(store, &id, project).await?);
    }

    Ok(Json(views))
}

/// GET /api/projects/{id} - Get a single project.
///
/// # Errors
///
/// Returns `ApiErrorResponse` if:
/// - The id is malformed (400) — distinct from absence
/// - No project has the id (404)
pub async fn get_project(
    State(dependencies): State<AppDependencies>,
    Path(project_id): Path<String>,
) -> Result<Json<ProjectView>, ApiErrorResponse> {
    let id = parse_document_id_for_api(&project_id)?;
    let store = dependencies.store();

    let document = store
        .find(COLLECTION_PROJECTS, &id)
        .await
        .map_err(|error| store_error_response(&error))?
        .ok_or_else(project_not_found_response)?;

    let (id, project): (String, StoredProject) = decode_document_for_api(document)?;
    let view = enriched_view(store, &id, project).await?;

    Ok(Json(view))
}

/// POST /api/projects - Create a new project.
///
/// The server assigns the id and `created_at`. The response is the
/// enriched view; a fresh project has zero statistics because no task can
/// reference an id that did not exist yet.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Sistema de Gestión",
///     "description": "Desarrollo del sistema de gestión de proyectos",
///     "status": "Activo",
///     "users": 3
/// }
/// ```
///
/// # Response
///
/// - `201 Created` - Project created successfully
/// - `422 Unprocessable Entity` - Missing required fields
pub async fn create_project(
    State(dependencies): State<AppDependencies>,
    Json(payload): Json<ProjectPayload>,
) -> Result<(StatusCode, Json<ProjectView>), ApiErrorResponse> {
    let project = StoredProject::new(
        payload.name,
        payload.description,
        payload.status,
        payload.users,
    );
    let body = entity_to_body(&project)?;

    let store = dependencies.store();
    let document = store
        .insert(COLLECTION_PROJECTS, body)
        .await
        .map_err(|error| store_error_response(&error))?;

    tracing::info!(project_id = %document.id, "project created");

    let view = enriched_view(store, &document.id, project).await?;

    Ok((StatusCode::CREATED, Json(view)))
}

/// PUT /api/projects/{id} - Replace a project.
///
/// Full replacement of the client-settable fields; `created_at` is carried
/// over from the existing document and never reset. The response carries
/// recomputed statistics, the same as any other read.
///
/// # Errors
///
/// Returns `ApiErrorResponse` if:
/// - The id is malformed (400)
/// - No project has the id (404)
pub async fn update_project(
    State(dependencies): State<AppDependencies>,
    Path(project_id): Path<String>,
    Json(payload): Json<ProjectPayload>,
) -> Result<Json<ProjectView>, ApiErrorResponse> {
    let id = parse_document_id_for_api(&project_id)?;
    let store = dependencies.store();

    let existing = store
        .find(COLLECTION_PROJECTS, &id)
        .await
        .map_err(|error| store_error_response(&error))?
        .ok_or_else(project_not_found_response)?;
    let (_, current): (String, StoredProject) = decode_document_for_api(existing)?;

    let replacement = StoredProject {
        name: Some(payload.name),
        description: Some(payload.description),
        status: Some(payload.status),
        users: Some(payload.users),
        created_at: current.created_at,
    };
    let body = entity_to_body(&replacement)?;

    store
        .replace(COLLECTION_PROJECTS, &id, body)
        .await
        .map_err(|error| store_error_response(&error))?
        .ok_or_else(project_not_found_response)?;

    let view = enriched_view(store, &id.to_string(), replacement).await?;

    Ok(Json(view))
}

/// DELETE /api/projects/{id} - Delete a project and its tasks.
///
/// Tasks referencing the project are removed first, then the project. The
/// two steps are not atomic; see
/// [`delete_project_cascade`](crate::application::workflows::delete_project_cascade).
///
/// # Errors
///
/// Returns `ApiErrorResponse` if:
/// - The id is malformed (400)
/// - No project has the id (404) — its orphaned tasks are swept regardless
pub async fn delete_project(
    State(dependencies): State<AppDependencies>,
    Path(project_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiErrorResponse> {
    let id = parse_document_id_for_api(&project_id)?;

    let existed = delete_project_cascade(dependencies.store(), &id)
        .await
        .map_err(|error| store_error_response(&error))?;

    if existed {
        tracing::info!(project_id = %id, "project deleted");
        Ok(Json(MessageResponse::new("Proyecto eliminado exitosamente")))
    } else {
        Err(project_not_found_response())
    }
}

/// GET /api/projects/{id}/tasks - List a project's tasks.
///
/// The path segment is matched against stored `project_id` references as a
/// raw string: no id validation, no existence check. A malformed or unknown
/// id yields an empty list, never an error — the frontend polls this route
/// with whatever it has.
///
/// # Errors
///
/// Returns `ApiErrorResponse` only for store failures (503/500).
pub async fn list_project_tasks(
    State(dependencies): State<AppDependencies>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<TaskView>>, ApiErrorResponse> {
    let records = tasks_for_project(dependencies.store(), &project_id)
        .await
        .map_err(|error| store_error_response(&error))?;

    let views = records
        .into_iter()
        .map(|record| to_task_view(&record.id, record.task))
        .collect();

    Ok(Json(views))
}
