//! Integration tests for the user endpoints.

use crate::common::*;
use reqwest::StatusCode;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn create_user_returns_201() {
    let client = ProjectApiClient::new(&spawn_app().await);

    let response = assert_success(
        client
            .create_user(&UserFactory::developer(
                "Ana Martínez",
                "ana.martinez@empresa.com",
            ))
            .await,
    );

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body.name, "Ana Martínez");
    assert_eq!(response.body.role, "developer");
    assert!(response.body.created_at.is_some());
}

#[rstest]
#[tokio::test]
async fn create_user_defaults_role() {
    let client = ProjectApiClient::new(&spawn_app().await);

    let response = assert_success(
        client
            .create_user(&UserFactory::without_role(
                "Carlos Ruiz",
                "carlos.ruiz@empresa.com",
            ))
            .await,
    );

    assert_eq!(response.body.role, "user");
}

#[rstest]
#[tokio::test]
async fn list_users_includes_created_users() {
    let client = ProjectApiClient::new(&spawn_app().await);
    assert_success(
        client
            .create_user(&UserFactory::developer(
                "Ana Martínez",
                "ana.martinez@empresa.com",
            ))
            .await,
    );
    assert_success(
        client
            .create_user(&UserFactory::developer(
                "Juan Pérez",
                "juan.perez@empresa.com",
            ))
            .await,
    );

    let response = assert_success(client.list_users().await);

    assert_eq!(response.body.len(), 2);
}

#[rstest]
#[tokio::test]
async fn update_user_replaces_fields_and_preserves_creation_time() {
    let client = ProjectApiClient::new(&spawn_app().await);
    let user = assert_success(
        client
            .create_user(&UserFactory::developer(
                "Ana Martínez",
                "ana.martinez@empresa.com",
            ))
            .await,
    )
    .body;

    let updated = assert_success(
        client
            .update_user(
                &user.id,
                &UserFactory::without_role("Ana M. Sánchez", "ana.sanchez@empresa.com"),
            )
            .await,
    );

    assert_eq!(updated.body.name, "Ana M. Sánchez");
    assert_eq!(updated.body.role, "user");
    assert_eq!(updated.body.created_at, user.created_at);
}

#[rstest]
#[tokio::test]
async fn update_absent_user_returns_404() {
    let client = ProjectApiClient::new(&spawn_app().await);

    assert_api_error(
        client
            .update_user(
                &non_existent_uuid(),
                &UserFactory::developer("Fantasma", "fantasma@empresa.com"),
            )
            .await,
        StatusCode::NOT_FOUND,
        "USER_NOT_FOUND",
    );
}

#[rstest]
#[tokio::test]
async fn delete_user_confirms_with_spanish_message() {
    let client = ProjectApiClient::new(&spawn_app().await);
    let user = assert_success(
        client
            .create_user(&UserFactory::developer(
                "Juan Pérez",
                "juan.perez@empresa.com",
            ))
            .await,
    )
    .body;

    let response = assert_success(client.delete_user(&user.id).await);

    assert_eq!(response.body.message, "Usuario eliminado exitosamente");
    let remaining = assert_success(client.list_users().await);
    assert!(remaining.body.is_empty());
}

#[rstest]
#[tokio::test]
async fn delete_user_with_malformed_id_returns_400() {
    let client = ProjectApiClient::new(&spawn_app().await);

    assert_api_error(
        client.delete_user("undefined").await,
        StatusCode::BAD_REQUEST,
        "INVALID_DOCUMENT_ID",
    );
}

#[rstest]
#[tokio::test]
async fn deleting_a_user_does_not_touch_tasks_naming_them() {
    let client = ProjectApiClient::new(&spawn_app().await);
    let project = assert_success(
        client
            .create_project(&ProjectFactory::active_project("Sistema de Gestión"))
            .await,
    )
    .body;
    let user = assert_success(
        client
            .create_user(&UserFactory::developer(
                "Ana Martínez",
                "ana.martinez@empresa.com",
            ))
            .await,
    )
    .body;
    assert_success(
        client
            .create_task(&TaskFactory::completed_task(&project.id))
            .await,
    );

    assert_success(client.delete_user(&user.id).await);

    // The task's "usuario" is free text, not a reference.
    let tasks = assert_success(client.list_project_tasks(&project.id).await);
    assert_eq!(tasks.body.len(), 1);
    assert_eq!(tasks.body[0].usuario.as_deref(), Some("Ana Martínez"));
}
