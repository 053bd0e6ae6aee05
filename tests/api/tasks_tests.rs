//! Integration tests for the task endpoints.

use crate::common::*;
use reqwest::StatusCode;
use rstest::rstest;

async fn client_with_project() -> (ProjectApiClient, ProjectDto) {
    let client = ProjectApiClient::new(&spawn_app().await);
    let project = assert_success(
        client
            .create_project(&ProjectFactory::active_project("Sistema de Gestión"))
            .await,
    )
    .body;
    (client, project)
}

// =============================================================================
// Create
// =============================================================================

#[rstest]
#[tokio::test]
async fn create_task_returns_201_with_id_under_both_keys() {
    let (client, project) = client_with_project().await;

    let response = assert_success(
        client
            .create_task(&TaskFactory::completed_task(&project.id))
            .await,
    );

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body.raw_id, response.body.id);
    assert!(!response.body.id.is_empty());
    assert!(response.body.creada_en.is_some());
}

#[rstest]
#[tokio::test]
async fn create_task_applies_defaults() {
    let (client, project) = client_with_project().await;

    let response = assert_success(
        client
            .create_task(&TaskFactory::minimal_task(&project.id))
            .await,
    );

    assert_eq!(response.body.prioridad, "media");
    assert_eq!(response.body.estado, "pendiente");
    assert!(!response.body.completada);
    assert!(response.body.usuario.is_none());
}

#[rstest]
#[tokio::test]
async fn create_task_accepts_dangling_project_reference() {
    let client = ProjectApiClient::new(&spawn_app().await);

    // No referential check: the task is stored, it just never shows up in
    // any project's statistics.
    let response = assert_success(
        client
            .create_task(&TaskFactory::pending_task(&non_existent_uuid()))
            .await,
    );

    assert_eq!(response.status, StatusCode::CREATED);
}

#[rstest]
#[tokio::test]
async fn create_task_without_required_fields_is_rejected() {
    let client = ProjectApiClient::new(&spawn_app().await);

    let result = client
        .create_task_raw(&serde_json::json!({"descripcion": "sin proyecto"}))
        .await;

    assert_error_status(result, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Update
// =============================================================================

#[rstest]
#[tokio::test]
async fn update_task_replaces_fields_and_preserves_creation_time() {
    let (client, project) = client_with_project().await;
    let task = assert_success(
        client
            .create_task(&TaskFactory::pending_task(&project.id))
            .await,
    )
    .body;

    let updated = assert_success(
        client
            .update_task(&task.id, &TaskFactory::completed_task(&project.id))
            .await,
    );

    assert!(updated.body.completada);
    assert_eq!(updated.body.estado, "completada");
    assert_eq!(updated.body.creada_en, task.creada_en);
}

#[rstest]
#[tokio::test]
async fn update_task_can_move_it_to_another_project() {
    let (client, first) = client_with_project().await;
    let second = assert_success(
        client
            .create_project(&ProjectFactory::active_project("Portal de Clientes"))
            .await,
    )
    .body;
    let task = assert_success(
        client
            .create_task(&TaskFactory::completed_task(&first.id))
            .await,
    )
    .body;

    assert_success(
        client
            .update_task(&task.id, &TaskFactory::completed_task(&second.id))
            .await,
    );

    let first_stats = assert_success(client.get_project(&first.id).await);
    let second_stats = assert_success(client.get_project(&second.id).await);
    assert_eq!(first_stats.body.total, 0);
    assert_eq!(second_stats.body.total, 1);
    assert_eq!(second_stats.body.completadas, 1);
}

#[rstest]
#[tokio::test]
async fn update_task_with_malformed_id_returns_400() {
    let (client, project) = client_with_project().await;

    assert_api_error(
        client
            .update_task("undefined", &TaskFactory::pending_task(&project.id))
            .await,
        StatusCode::BAD_REQUEST,
        "INVALID_DOCUMENT_ID",
    );
}

#[rstest]
#[tokio::test]
async fn update_absent_task_returns_404() {
    let (client, project) = client_with_project().await;

    assert_api_error(
        client
            .update_task(&non_existent_uuid(), &TaskFactory::pending_task(&project.id))
            .await,
        StatusCode::NOT_FOUND,
        "TASK_NOT_FOUND",
    );
}

// =============================================================================
// Delete
// =============================================================================

#[rstest]
#[tokio::test]
async fn delete_task_confirms_and_updates_statistics() {
    let (client, project) = client_with_project().await;
    let task = assert_success(
        client
            .create_task(&TaskFactory::completed_task(&project.id))
            .await,
    )
    .body;

    let response = assert_success(client.delete_task(&task.id).await);

    assert_eq!(response.body.message, "Tarea eliminada exitosamente");
    let stats = assert_success(client.get_project(&project.id).await);
    assert_eq!(stats.body.total, 0);
}

#[rstest]
#[tokio::test]
async fn delete_absent_task_returns_404() {
    let client = ProjectApiClient::new(&spawn_app().await);

    assert_api_error(
        client.delete_task(&non_existent_uuid()).await,
        StatusCode::NOT_FOUND,
        "TASK_NOT_FOUND",
    );
}

#[rstest]
#[tokio::test]
async fn delete_task_with_malformed_id_returns_400() {
    let client = ProjectApiClient::new(&spawn_app().await);

    assert_api_error(
        client.delete_task("not-a-valid-id").await,
        StatusCode::BAD_REQUEST,
        "INVALID_DOCUMENT_ID",
    );
}
