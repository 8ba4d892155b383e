//! Transport trait for the platform REST API.

use std::fmt;

use serde_json::Value;

use crate::result::AppResult;

/// HTTP method of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Return the method as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request relative to the REST base path.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path below the base URL, e.g. `/v3/tags`.
    pub path: String,
    /// Query pairs in the order they are sent. Keys may repeat.
    pub query: Vec<(String, String)>,
    /// Optional JSON body.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request with no query and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Shorthand for a `GET` request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Shorthand for a `POST` request with a JSON body.
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, path).with_body(body)
    }

    /// Shorthand for a `PUT` request with a JSON body.
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Put, path).with_body(body)
    }

    /// Shorthand for a `DELETE` request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append a query pair.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append several query pairs.
    pub fn with_query_pairs<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.query.extend(pairs);
        self
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// First value for a query key.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A decoded API response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body (`Value::Null` when the body was empty).
    pub body: Value,
}

impl ApiResponse {
    /// Create a response.
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// A short description of the body for error messages.
    pub fn error_message(&self) -> String {
        self.body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| self.body.to_string())
    }
}

/// Trait for HTTP backends that reach the platform REST API.
///
/// Implementations own authentication header injection, TLS, and
/// timeouts. They return transport failures as
/// [`ErrorKind::Transport`](crate::error::ErrorKind::Transport) errors but
/// hand back non-2xx responses untouched; status handling belongs to the
/// caller. Calls block until the response arrives.
pub trait Transport: Send + Sync + fmt::Debug + 'static {
    /// Execute a request and return the decoded response.
    fn execute(&self, request: &ApiRequest) -> AppResult<ApiResponse>;

    /// Execute a `GET` request.
    fn get(&self, path: &str, query: Vec<(String, String)>) -> AppResult<ApiResponse> {
        self.execute(&ApiRequest::get(path).with_query_pairs(query))
    }

    /// Execute a `POST` request with a JSON body.
    fn post(&self, path: &str, body: Value) -> AppResult<ApiResponse> {
        self.execute(&ApiRequest::post(path, body))
    }

    /// Execute a `PUT` request with a JSON body.
    fn put(&self, path: &str, body: Value) -> AppResult<ApiResponse> {
        self.execute(&ApiRequest::put(path, body))
    }

    /// Execute a `DELETE` request.
    fn delete(&self, path: &str) -> AppResult<ApiResponse> {
        self.execute(&ApiRequest::delete(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_builder() {
        let req = ApiRequest::get("/v3/tags")
            .with_query("resultStart", "0")
            .with_query("fields", "a")
            .with_query("fields", "b");
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.query_value("fields"), Some("a"));
        assert_eq!(req.query.len(), 3);
        assert!(req.body.is_none());
    }

    #[test]
    fn test_response_error_message() {
        let resp = ApiResponse::new(400, json!({"status": "Failure", "message": "bad tql"}));
        assert!(!resp.is_success());
        assert_eq!(resp.error_message(), "bad tql");
        assert!(ApiResponse::new(204, Value::Null).is_success());
    }
}
