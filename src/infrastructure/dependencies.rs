//! Dependency injection container.
//!
//! `AppDependencies` holds the configuration and the store handle every
//! handler needs. The store is constructed once at startup, injected here,
//! and shared behind an `Arc` — there is no global connection state.

use std::sync::Arc;

use super::config::AppConfig;
use super::store::DocumentStore;

/// Application dependency container.
///
/// Cloned into every handler via axum state; the store is a trait object so
/// tests can substitute the in-memory implementation (or a mock).
#[derive(Clone)]
pub struct AppDependencies {
    /// Application configuration.
    config: AppConfig,
    /// Document store for the three collections.
    store: Arc<dyn DocumentStore>,
}

impl AppDependencies {
    /// Creates a new `AppDependencies` container.
    #[must_use]
    pub fn new(config: AppConfig, store: Arc<dyn DocumentStore>) -> Self {
        Self { config, store }
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns a reference to the document store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Returns the application host from configuration.
    #[must_use]
    pub fn app_host(&self) -> &str {
        &self.config.app_host
    }

    /// Returns the application port from configuration.
    #[must_use]
    pub const fn app_port(&self) -> u16 {
        self.config.app_port
    }
}

impl std::fmt::Debug for AppDependencies {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("config", &self.config)
            .field("store", &"<dyn DocumentStore>")
            .finish()
    }
}
