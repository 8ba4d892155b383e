//! Typed resources and their single-object CRUD API.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use tcex_core::traits::transport::{ApiRequest, ApiResponse, Transport};
use tcex_core::{AppError, AppResult, ErrorKind};
use tcex_tql::{ResourceKind, TypedFilter};

use crate::entities::{Entity, entity_from_value};

/// A server record type reachable through the v3 API.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static
{
    /// The resource type.
    const KIND: ResourceKind;

    /// The typed filter for collections of this resource.
    type Filter<'a>: TypedFilter<'a>;

    /// Server-assigned id, absent until the record is created.
    fn id(&self) -> Option<i64>;
}

/// Map a non-2xx response to an error, leaving 2xx responses untouched.
pub(crate) fn ensure_success(response: ApiResponse, context: &str) -> AppResult<ApiResponse> {
    if response.is_success() {
        return Ok(response);
    }
    let message = format!(
        "{context} returned {}: {}",
        response.status,
        response.error_message()
    );
    let kind = match response.status {
        401 | 403 => ErrorKind::Authentication,
        404 => ErrorKind::NotFound,
        _ => ErrorKind::Transport,
    };
    Err(AppError::new(kind, message))
}

/// Take the object out of a `{"data": {...}}` envelope.
pub(crate) fn unwrap_data(mut body: Value, context: &str) -> AppResult<Value> {
    match body.get_mut("data").map(Value::take) {
        Some(data @ Value::Object(_)) => Ok(data),
        _ => Err(AppError::decode(format!(
            "{context} response has no 'data' object"
        ))),
    }
}

pub(crate) fn decode<R: DeserializeOwned>(value: Value, context: &str) -> AppResult<R> {
    serde_json::from_value(value)
        .map_err(|e| AppError::with_source(ErrorKind::Decode, format!("Failed to decode {context}"), e))
}

/// Fetch one record of a resource type chosen at runtime.
pub fn get_entity(
    transport: &dyn Transport,
    kind: ResourceKind,
    id: i64,
    fields: &[String],
) -> AppResult<Entity> {
    let path = format!("{}/{id}", kind.endpoint());
    let request = ApiRequest::get(&path)
        .with_query_pairs(fields.iter().map(|f| ("fields".to_string(), f.clone())));
    let response = ensure_success(transport.execute(&request)?, &path)?;
    entity_from_value(kind, unwrap_data(response.body, &path)?)
}

/// Single-resource operations for `R`.
pub struct ResourceApi<R: Resource> {
    transport: Arc<dyn Transport>,
    _marker: PhantomData<R>,
}

impl<R: Resource> fmt::Debug for ResourceApi<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceApi")
            .field("kind", &R::KIND)
            .finish()
    }
}

impl<R: Resource> ResourceApi<R> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            _marker: PhantomData,
        }
    }

    fn item_path(id: i64) -> String {
        format!("{}/{id}", R::KIND.endpoint())
    }

    /// Fetch one record, optionally expanding `fields`.
    pub fn get(&self, id: i64, fields: &[String]) -> AppResult<R> {
        let path = Self::item_path(id);
        let request = ApiRequest::get(&path)
            .with_query_pairs(fields.iter().map(|f| ("fields".to_string(), f.clone())));
        let response = ensure_success(self.transport.execute(&request)?, &path)?;
        decode(unwrap_data(response.body, &path)?, R::KIND.display_name())
    }

    /// Create `resource`, in `owner` when given, and return the stored record.
    pub fn create(&self, resource: &R, owner: Option<&str>) -> AppResult<R> {
        if resource.id().is_some() {
            return Err(AppError::validation(format!(
                "{} already has an id; use update instead",
                R::KIND.display_name()
            )));
        }
        let path = R::KIND.endpoint();
        let mut request = ApiRequest::post(path, serde_json::to_value(resource)?);
        if let Some(owner) = owner {
            request = request.with_query("owner", owner);
        }
        let response = ensure_success(self.transport.execute(&request)?, path)?;
        let created: R = decode(unwrap_data(response.body, path)?, R::KIND.display_name())?;
        info!(kind = %R::KIND, id = ?created.id(), "Resource created");
        Ok(created)
    }

    /// Replace the stored record with `resource`.
    pub fn update(&self, resource: &R) -> AppResult<R> {
        let id = resource.id().ok_or_else(|| {
            AppError::validation(format!(
                "{} has no id; use create instead",
                R::KIND.display_name()
            ))
        })?;
        let path = Self::item_path(id);
        let request = ApiRequest::put(&path, serde_json::to_value(resource)?);
        let response = ensure_success(self.transport.execute(&request)?, &path)?;
        debug!(kind = %R::KIND, id, "Resource updated");
        decode(unwrap_data(response.body, &path)?, R::KIND.display_name())
    }

    /// Delete the record with `id`.
    pub fn delete(&self, id: i64) -> AppResult<()> {
        let path = Self::item_path(id);
        ensure_success(self.transport.execute(&ApiRequest::delete(&path))?, &path)?;
        info!(kind = %R::KIND, id, "Resource deleted");
        Ok(())
    }
}
