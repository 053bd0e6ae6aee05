//! Application configuration management.
//!
//! Configuration is loaded once at startup from environment variables (a
//! `.env` file is honored via `dotenvy`). Missing or invalid values produce
//! clear error messages; everything is validated before use.

use std::env;
use std::num::ParseIntError;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEnvVar(key) => {
                write!(formatter, "Missing environment variable: {key}")
            }
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: Postgres connection string (optional — when absent the
///   server runs on the in-memory store)
/// - `APP_HOST`: HTTP bind host (optional, default `0.0.0.0`)
/// - `APP_PORT`: HTTP bind port (optional, default `8000`)
/// - `CORS_ALLOWED_ORIGINS`: comma-separated allowed origins (optional,
///   defaults to the Vite dev-server origins the frontend runs on)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Postgres connection URL; `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
    /// Origins the CORS layer accepts.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            app_host: "0.0.0.0".to_string(),
            app_port: 8000,
            cors_allowed_origins: default_cors_origins(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `APP_PORT` is set but not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").ok();
        let app_host = get_optional_env("APP_HOST", "0.0.0.0".to_string());
        let app_port = get_optional_env_parsed("APP_PORT", 8000)?;
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS").map_or_else(
            |_| default_cors_origins(),
            |value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            },
        );

        Ok(Self {
            database_url,
            app_host,
            app_port,
            cors_allowed_origins,
        })
    }

    /// Creates a new `AppConfig` with the given values.
    ///
    /// This is useful for testing or when configuration is provided
    /// programmatically.
    #[must_use]
    pub const fn new(
        database_url: Option<String>,
        app_host: String,
        app_port: u16,
        cors_allowed_origins: Vec<String>,
    ) -> Self {
        Self {
            database_url,
            app_host,
            app_port,
            cors_allowed_origins,
        }
    }
}

/// The original backend hard-coded the Vite dev-server origins.
fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

/// Gets an optional environment variable with a default value.
fn get_optional_env(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

/// Gets an optional environment variable and parses it, with a default value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the variable is set but cannot be
/// parsed.
fn get_optional_env_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    env::var(key).map_or_else(
        |_| Ok(default),
        |value| {
            value
                .parse()
                .map_err(|error: ParseIntError| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: error.to_string(),
                })
        },
    )
}
