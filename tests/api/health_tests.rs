//! Integration tests for the operational endpoints (GET / and GET /health).

use crate::common::*;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn root_returns_spanish_liveness_message() {
    let client = ProjectApiClient::new(&spawn_app().await);

    let response = assert_success(client.root().await);

    assert_eq!(
        response.body.message,
        "API de Gestión de Proyectos funcionando correctamente"
    );
}

#[rstest]
#[tokio::test]
async fn health_reports_connected_store() {
    let client = ProjectApiClient::new(&spawn_app().await);

    let response = assert_success(client.health().await);

    assert_eq!(response.status, reqwest::StatusCode::OK);
    assert_eq!(response.body.status, "healthy");
    assert_eq!(response.body.database, "connected");
}
