//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `EMPORIO_HOST` - Bind address (default: 127.0.0.1)
//! - `EMPORIO_PORT` - Listen port (default: 8000)
//! - `EMPORIO_CATALOG_PATH` - Catalog fixture file (default:
//!   `crates/api/data/catalog.json`)
//! - `EMPORIO_WHATSAPP_PHONE` - Destination phone for order deep links
//! - `EMPORIO_FRONTEND_ORIGIN` - Allowed CORS origin (default:
//!   `http://localhost:8080`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path to the catalog fixture JSON file
    pub catalog_path: PathBuf,
    /// WhatsApp phone number that receives order messages
    pub whatsapp_phone: String,
    /// Frontend origin allowed by CORS
    pub frontend_origin: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("EMPORIO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("EMPORIO_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("EMPORIO_PORT", "8000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("EMPORIO_PORT".to_string(), e.to_string()))?;
        let catalog_path =
            PathBuf::from(get_env_or_default("EMPORIO_CATALOG_PATH", DEFAULT_CATALOG_PATH));
        let whatsapp_phone = get_env_or_default("EMPORIO_WHATSAPP_PHONE", DEFAULT_WHATSAPP_PHONE);
        let frontend_origin =
            get_env_or_default("EMPORIO_FRONTEND_ORIGIN", DEFAULT_FRONTEND_ORIGIN);
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            catalog_path,
            whatsapp_phone,
            frontend_origin,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Catalog fixture shipped with the repository.
const DEFAULT_CATALOG_PATH: &str = "crates/api/data/catalog.json";

/// Store phone number for the `wa.me` deep link.
const DEFAULT_WHATSAPP_PHONE: &str = "5537991243408";

/// Development frontend origin.
const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:8080";

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
