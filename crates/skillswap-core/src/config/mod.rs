//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod auth;
pub mod credits;
pub mod database;
pub mod logging;
pub mod meeting;
pub mod server;
pub mod swap;

use serde::{Deserialize, Serialize};

use self::auth::AuthConfig;
use self::credits::CreditsConfig;
use self::database::DatabaseConfig;
use self::logging::LoggingConfig;
use self::meeting::MeetingConfig;
use self::server::ServerConfig;
use self::swap::SwapConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Authentication settings.
    pub auth: AuthConfig,
    /// Swap-request lifecycle settings.
    #[serde(default)]
    pub swap: SwapConfig,
    /// Credit ledger settings.
    #[serde(default)]
    pub credits: CreditsConfig,
    /// Meeting-invite collaborator settings.
    #[serde(default)]
    pub meeting: MeetingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `SKILLSWAP_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SKILLSWAP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
