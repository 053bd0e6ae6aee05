//! Project Management API entry point.
//!
//! Wires configuration, the document store and the router together, then
//! serves until interrupted. `DATABASE_URL` selects the backend: set means
//! Postgres (unreachable is fatal), absent means the in-memory store.

use std::sync::Arc;

use axum::http::HeaderValue;
use gestion_proyectos::api::routes::create_router;
use gestion_proyectos::infrastructure::{
    AppConfig, AppDependencies, DocumentStore, InMemoryDocumentStore, PostgresDocumentStore,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gestion_proyectos=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Project Management API...");

    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: host={}, port={}",
                config.app_host,
                config.app_port
            );
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    let bind_address = format!("{}:{}", config.app_host, config.app_port);

    // Select the store backend. A configured but unreachable database is a
    // startup failure, not something to silently degrade from.
    let store: Arc<dyn DocumentStore> = match config.database_url.as_deref() {
        Some(database_url) => match PostgresDocumentStore::connect(database_url).await {
            Ok(store) => {
                tracing::info!("Connected to Postgres document store");
                Arc::new(store)
            }
            Err(error) => {
                tracing::error!(%error, "Failed to connect to Postgres");
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory document store");
            Arc::new(InMemoryDocumentStore::new())
        }
    };

    let cors = cors_layer(&config);

    // Create dependencies container
    let deps = AppDependencies::new(config, store);

    // Create router with middleware
    let app = create_router(deps)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let listener = TcpListener::bind(&bind_address)
        .await
        .expect("failed to bind HTTP listener");
    tracing::info!("Project Management API started on http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("Project Management API stopped");
}

/// Builds the CORS layer from the configured origins. Origins that fail to
/// parse as header values are skipped with a warning.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received");
}
