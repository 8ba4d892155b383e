//! REST API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Largest page the platform will return for a collection request.
pub const MAX_RESULT_LIMIT: u32 = 10_000;

/// Settings for reaching the platform REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API (e.g. `https://app.threatconnect.com/api`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Whether TLS certificates are verified.
    #[serde(default = "default_true")]
    pub verify_ssl: bool,
    /// Default page size for collection iteration.
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,
    /// Default owner used when creating resources.
    #[serde(default)]
    pub default_owner: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            verify_ssl: true,
            result_limit: default_result_limit(),
            default_owner: None,
        }
    }
}

fn default_base_url() -> String {
    "https://app.threatconnect.com/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_result_limit() -> u32 {
    100
}
