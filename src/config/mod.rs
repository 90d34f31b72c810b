//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RAINSTONE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use rainstone::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Serving tools under {}", config.server.root_path);
//! ```

mod catalog;
mod error;
mod server;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Unprefixed variables honoured for compatibility with existing deployments.
/// The prefixed `RAINSTONE__SERVER__*` variables take precedence.
const LEGACY_ROOT_PATH_VAR: &str = "API_ROOT_PATH";
const LEGACY_ALLOWED_ORIGINS_VAR: &str = "ALLOWED_ORIGINS";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, base path, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Tool catalog dataset location
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds `server.root_path` and `server.cors_origins` from
    ///    `API_ROOT_PATH` and `ALLOWED_ORIGINS` when set
    /// 3. Reads environment variables with `RAINSTONE` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RAINSTONE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `RAINSTONE__CATALOG__PATH=...` -> `catalog.path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(root_path) = std::env::var(LEGACY_ROOT_PATH_VAR) {
            builder = builder.set_default("server.root_path", root_path)?;
        }
        if let Ok(origins) = std::env::var(LEGACY_ALLOWED_ORIGINS_VAR) {
            builder = builder.set_default("server.cors_origins", origins)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("RAINSTONE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.catalog.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
