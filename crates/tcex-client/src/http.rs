//! Blocking HTTP transport with ThreatConnect request signing.

use std::fmt;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::Url;
use reqwest::blocking::Client;
use serde_json::Value;
use sha2::Sha256;
use tracing::{debug, warn};

use tcex_core::config::ClientConfig;
use tcex_core::config::auth::{AuthConfig, AuthMode};
use tcex_core::traits::transport::{ApiRequest, ApiResponse, Method, Transport};
use tcex_core::{AppError, AppResult, ErrorKind};

type HmacSha256 = Hmac<Sha256>;

/// How outgoing requests are authorized.
#[derive(Clone, PartialEq, Eq)]
pub enum Authorizer {
    /// Send no `Authorization` header.
    None,
    /// `Authorization: TC-Token <token>`.
    Token(String),
    /// `Authorization: TC <access_id>:<signature>` with a `Timestamp` header.
    Hmac {
        access_id: String,
        secret_key: String,
    },
}

impl Authorizer {
    /// Build the authorizer for the configured auth mode.
    pub fn from_config(auth: &AuthConfig) -> AppResult<Self> {
        match auth.mode {
            AuthMode::None => Ok(Self::None),
            AuthMode::Token => auth
                .token
                .clone()
                .map(Self::Token)
                .ok_or_else(|| AppError::authentication("auth.token is not set")),
            AuthMode::Hmac => match (&auth.access_id, &auth.secret_key) {
                (Some(access_id), Some(secret_key)) => Ok(Self::Hmac {
                    access_id: access_id.clone(),
                    secret_key: secret_key.clone(),
                }),
                _ => Err(AppError::authentication(
                    "auth.access_id and auth.secret_key are required for hmac auth",
                )),
            },
        }
    }

    /// Headers to attach to a request for `path_url` (path plus query string).
    pub fn headers(
        &self,
        path_url: &str,
        method: Method,
        timestamp: i64,
    ) -> AppResult<Vec<(&'static str, String)>> {
        match self {
            Self::None => Ok(Vec::new()),
            Self::Token(token) => Ok(vec![("Authorization", format!("TC-Token {token}"))]),
            Self::Hmac {
                access_id,
                secret_key,
            } => {
                let message = format!("{path_url}:{method}:{timestamp}");
                let signature = hmac_signature(secret_key, &message)?;
                Ok(vec![
                    ("Authorization", format!("TC {access_id}:{signature}")),
                    ("Timestamp", timestamp.to_string()),
                ])
            }
        }
    }
}

impl fmt::Debug for Authorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Token(_) => f.write_str("Token(<redacted>)"),
            Self::Hmac { access_id, .. } => f
                .debug_struct("Hmac")
                .field("access_id", access_id)
                .field("secret_key", &"<redacted>")
                .finish(),
        }
    }
}

/// Base64 HMAC-SHA256 of `message` keyed with `secret_key`.
pub fn hmac_signature(secret_key: &str, message: &str) -> AppResult<String> {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .map_err(|e| AppError::authentication(format!("Invalid HMAC key: {e}")))?;
    mac.update(message.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// [`Transport`] over a blocking `reqwest` client.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    authorizer: Authorizer,
}

impl HttpTransport {
    /// Create a transport with explicit settings.
    pub fn new(
        base_url: impl Into<String>,
        authorizer: Authorizer,
        timeout: Duration,
        verify_ssl: bool,
    ) -> AppResult<Self> {
        if !verify_ssl {
            warn!("TLS certificate verification is disabled");
        }
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(!verify_ssl)
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid base URL '{base_url}'"),
                e,
            )
        })?;

        Ok(Self {
            client,
            base_url,
            authorizer,
        })
    }

    /// Create a transport from the `[api]` and `[auth]` sections.
    pub fn from_config(config: &ClientConfig) -> AppResult<Self> {
        Self::new(
            config.api.base_url.clone(),
            Authorizer::from_config(&config.auth)?,
            Duration::from_secs(config.api.timeout_seconds),
            config.api.verify_ssl,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, request: &ApiRequest) -> AppResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, request.path))
            .map_err(|e| AppError::validation(format!("Invalid request path '{}': {e}", request.path)))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }
}

/// The path and query string, as signed by the HMAC authorizer.
fn path_url(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_string(),
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &ApiRequest) -> AppResult<ApiResponse> {
        let url = self.url_for(request)?;
        let headers = self
            .authorizer
            .headers(&path_url(&url), request.method, Utc::now().timestamp())?;

        debug!(method = %request.method, path = %request.path, "Sending API request");

        let mut builder = self.client.request(reqwest_method(request.method), url);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(|e| {
            AppError::with_source(
                ErrorKind::Transport,
                format!("{} {} failed", request.method, request.path),
                e,
            )
        })?;
        let status = response.status().as_u16();
        let text = response.text().map_err(|e| {
            AppError::with_source(ErrorKind::Transport, "Failed to read response body", e)
        })?;

        debug!(status, path = %request.path, "Received API response");

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(e) if (200..300).contains(&status) => {
                    return Err(AppError::with_source(
                        ErrorKind::Decode,
                        format!("Response from {} is not JSON", request.path),
                        e,
                    ));
                }
                Err(_) => Value::String(text),
            }
        };

        Ok(ApiResponse::new(status, body))
    }
}
