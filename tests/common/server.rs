//! In-process test server.

use std::sync::Arc;

use gestion_proyectos::api::routes::create_router;
use gestion_proyectos::infrastructure::{AppConfig, AppDependencies, InMemoryDocumentStore};
use tokio::net::TcpListener;

/// Starts the application on an ephemeral port with a fresh in-memory
/// store and returns its base URL. The server task is dropped with the
/// test runtime.
pub async fn spawn_app() -> String {
    let dependencies = AppDependencies::new(
        AppConfig::default(),
        Arc::new(InMemoryDocumentStore::new()),
    );
    let router = create_router(dependencies);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral test port");
    let address = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server crashed");
    });

    format!("http://{address}")
}
