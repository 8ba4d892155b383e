//! API credential configuration.

use serde::{Deserialize, Serialize};

/// How requests are authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Signed `Authorization: TC <id>:<signature>` headers.
    #[default]
    Hmac,
    /// Pre-issued `Authorization: TC-Token <token>` header.
    Token,
    /// No authorization header.
    None,
}

/// Credentials for the configured [`AuthMode`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Authorization scheme.
    #[serde(default)]
    pub mode: AuthMode,
    /// API access id (HMAC mode).
    #[serde(default)]
    pub access_id: Option<String>,
    /// API secret key (HMAC mode).
    #[serde(default, skip_serializing)]
    pub secret_key: Option<String>,
    /// API token (token mode).
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}
