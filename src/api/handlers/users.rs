//! User HTTP handlers.
//!
//! This module provides handlers for user operations:
//!
//! - `GET /api/users` - List all users
//! - `POST /api/users` - Create a new user
//! - `PUT /api/users/{id}` - Replace a user
//! - `DELETE /api/users/{id}` - Delete a user
//!
//! Users are an independent directory. Nothing ties them to tasks: a
//! task's `usuario` is free text, so deleting a user never touches the
//! task collection.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::api::dto::requests::UserPayload;
use crate::api::dto::responses::MessageResponse;
use crate::api::handlers::common::{
    decode_document_for_api, parse_document_id_for_api, store_error_response,
    user_not_found_response,
};
use crate::api::middleware::error_handler::ApiErrorResponse;
use crate::application::{UserView, to_user_view};
use crate::domain::StoredUser;
use crate::infrastructure::{AppDependencies, COLLECTION_USERS, StoreError};

fn user_to_body(user: &StoredUser) -> Result<serde_json::Value, ApiErrorResponse> {
    serde_json::to_value(user)
        .map_err(|error| store_error_response(&StoreError::Serialization(error.to_string())))
}

/// GET /api/users - List all users.
///
/// # Errors
///
/// Returns `ApiErrorResponse` if the store is unreachable (503) or a stored
/// document fails to decode (500).
pub async fn list_users(
    State(dependencies): State<AppDependencies>,
) -> Result<Json<Vec<UserView>>, ApiErrorResponse> {
    let documents = dependencies
        .store()
        .find_all(COLLECTION_USERS)
        .await
        .map_err(|error| store_error_response(&error))?;

    let mut views = Vec::with_capacity(documents.len());

    for document in documents {
        let (id, user): (String, StoredUser) = decode_document_for_api(document)?;
        views.push(to_user_view(&id, user));
    }

    Ok(Json(views))
}

/// POST /api/users - Create a new user.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Ana Martínez",
///     "email": "ana.martinez@empresa.com",
///     "role": "developer"
/// }
/// ```
///
/// # Response
///
/// - `201 Created` - User created successfully
/// - `422 Unprocessable Entity` - Missing required fields
pub async fn create_user(
    State(dependencies): State<AppDependencies>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserView>), ApiErrorResponse> {
    let user = StoredUser::new(payload.name, payload.email, payload.role);
    let body = user_to_body(&user)?;

    let document = dependencies
        .store()
        .insert(COLLECTION_USERS, body)
        .await
        .map_err(|error| store_error_response(&error))?;

    tracing::info!(user_id = %document.id, "user created");

    Ok((StatusCode::CREATED, Json(to_user_view(&document.id, user))))
}

/// PUT /api/users/{id} - Replace a user.
///
/// Full replacement of the client-settable fields; `created_at` is carried
/// over from the existing document.
///
/// # Errors
///
/// Returns `ApiErrorResponse` if:
/// - The id is malformed (400)
/// - No user has the id (404)
pub async fn update_user(
    State(dependencies): State<AppDependencies>,
    Path(user_id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserView>, ApiErrorResponse> {
    let id = parse_document_id_for_api(&user_id)?;
    let store = dependencies.store();

    let existing = store
        .find(COLLECTION_USERS, &id)
        .await
        .map_err(|error| store_error_response(&error))?
        .ok_or_else(user_not_found_response)?;
    let (_, current): (String, StoredUser) = decode_document_for_api(existing)?;

    let replacement = StoredUser {
        name: Some(payload.name),
        email: Some(payload.email),
        role: Some(payload.role),
        created_at: current.created_at,
    };
    let body = user_to_body(&replacement)?;

    store
        .replace(COLLECTION_USERS, &id, body)
        .await
        .map_err(|error| store_error_response(&error))?
        .ok_or_else(user_not_found_response)?;

    Ok(Json(to_user_view(&id.to_string(), replacement)))
}

/// DELETE /api/users/{id} - Delete a user.
///
/// Tasks mentioning the user by name are untouched.
///
/// # Errors
///
/// Returns `ApiErrorResponse` if:
/// - The id is malformed (400)
/// - No user has the id (404)
pub async fn delete_user(
    State(dependencies): State<AppDependencies>,
    Path(user_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiErrorResponse> {
    let id = parse_document_id_for_api(&user_id)?;

    let existed = dependencies
        .store()
        .delete(COLLECTION_USERS, &id)
        .await
        .map_err(|error| store_error_response(&error))?;

    if existed {
        tracing::info!(user_id = %id, "user deleted");
        Ok(Json(MessageResponse::new("Usuario eliminado exitosamente")))
    } else {
        Err(user_not_found_response())
    }
}
