//! # tcex-client
//!
//! Blocking REST client for the ThreatConnect v3 API.
//!
//! [`TcClient`] wraps one shared [`Transport`] and hands out typed
//! collections, single-resource APIs, notifications and test staging.
//!
//! ```ignore
//! use tcex_client::{TcClient, entities::Indicator};
//! use tcex_tql::TqlOperator;
//!
//! let client = TcClient::from_config(&config)?;
//! let mut indicators = client.collection::<Indicator>();
//! indicators.filter().has_tag().name(TqlOperator::Eq, "APT")?;
//! for indicator in &indicators {
//!     println!("{:?}", indicator?.summary);
//! }
//! ```

pub mod collection;
pub mod entities;
pub mod http;
pub mod notifications;
pub mod resource;
pub mod stage;

use std::sync::Arc;

use tracing::info;

use tcex_core::AppResult;
use tcex_core::config::ClientConfig;
use tcex_core::traits::transport::Transport;
use tcex_core::types::PageParams;
use tcex_tql::ResourceKind;

pub use collection::{Collection, CollectionIter, EntityCollection, Pager, PagerState};
pub use entities::{Entity, entity_from_value};
pub use http::{Authorizer, HttpTransport};
pub use notifications::{Notifications, Priority};
pub use resource::{Resource, ResourceApi};
pub use stage::{StageData, StageEntity, StageResult, StageStatus};

/// Entry point for API access.
#[derive(Debug, Clone)]
pub struct TcClient {
    transport: Arc<dyn Transport>,
    result_limit: u32,
    default_owner: Option<String>,
}

impl TcClient {
    /// Create a client over an existing transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            result_limit: PageParams::default().result_limit,
            default_owner: None,
        }
    }

    /// Validate `config` and build an HTTP-backed client from it.
    pub fn from_config(config: &ClientConfig) -> AppResult<Self> {
        config.validate()?;
        let transport = HttpTransport::from_config(config)?;
        info!(
            base_url = %transport.base_url(),
            auth_mode = ?config.auth.mode,
            "API client initialized"
        );
        Ok(Self {
            transport: Arc::new(transport),
            result_limit: config.api.result_limit,
            default_owner: config.api.default_owner.clone(),
        })
    }

    /// Page size used by new collections.
    pub fn with_result_limit(mut self, result_limit: u32) -> Self {
        self.result_limit = result_limit;
        self
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub fn default_owner(&self) -> Option<&str> {
        self.default_owner.as_deref()
    }

    fn page_params(&self) -> PageParams {
        PageParams::new(self.result_limit, 0)
    }

    /// An unfiltered collection of `R`.
    pub fn collection<R: Resource>(&self) -> Collection<R> {
        Collection::new(Arc::clone(&self.transport)).with_params(self.page_params())
    }

    /// An unfiltered collection of `kind`, yielding [`Entity`] values.
    pub fn entity_collection(&self, kind: ResourceKind) -> EntityCollection {
        EntityCollection::new(kind, Arc::clone(&self.transport)).with_params(self.page_params())
    }

    /// Single-resource operations for `R`.
    pub fn api<R: Resource>(&self) -> ResourceApi<R> {
        ResourceApi::new(Arc::clone(&self.transport))
    }

    /// Fetch one record of `kind`.
    pub fn get_entity(&self, kind: ResourceKind, id: i64, fields: &[String]) -> AppResult<Entity> {
        resource::get_entity(self.transport.as_ref(), kind, id, fields)
    }

    pub fn notifications(&self) -> Notifications {
        Notifications::new(Arc::clone(&self.transport))
    }

    /// Stage test data into `owner`, or the configured default owner.
    pub fn stage(&self, owner: Option<&str>) -> StageData {
        let owner = owner.map(str::to_string).or_else(|| self.default_owner.clone());
        StageData::new(Arc::clone(&self.transport), owner)
    }
}
