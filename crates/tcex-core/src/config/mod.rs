//! Client configuration schemas.
//!
//! All configuration structs are deserialized from an optional TOML file
//! via the `config` crate, overlaid with `TCEX__`-prefixed environment
//! variables (e.g. `TCEX__API__BASE_URL`, `TCEX__AUTH__SECRET_KEY`).
//! Each sub-module represents a logical configuration section.

pub mod api;
pub mod auth;
pub mod logging;

use serde::{Deserialize, Serialize};
use tracing::debug;

use self::api::{ApiConfig, MAX_RESULT_LIMIT};
use self::auth::{AuthConfig, AuthMode};
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// REST API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Credential settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional; missing sections fall back to their defaults.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("TCEX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        config.validate()?;
        debug!(
            path,
            base_url = %config.api.base_url,
            auth_mode = ?config.auth.mode,
            result_limit = config.api.result_limit,
            "Client configuration loaded"
        );
        Ok(config)
    }

    /// Check that the credentials required by the auth mode are present.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::configuration("api.base_url must not be empty"));
        }
        if self.api.result_limit == 0 || self.api.result_limit > MAX_RESULT_LIMIT {
            return Err(AppError::configuration(format!(
                "api.result_limit must be between 1 and {MAX_RESULT_LIMIT}"
            )));
        }
        match self.auth.mode {
            AuthMode::Hmac => {
                if self.auth.access_id.is_none() || self.auth.secret_key.is_none() {
                    return Err(AppError::configuration(
                        "auth.access_id and auth.secret_key are required for hmac auth",
                    ));
                }
            }
            AuthMode::Token => {
                if self.auth.token.is_none() {
                    return Err(AppError::configuration(
                        "auth.token is required for token auth",
                    ));
                }
            }
            AuthMode::None => {}
        }
        Ok(())
    }
}
