//! Lazy, restartable iteration over paged collection endpoints.
//!
//! A collection owns its [`Tql`] builder and [`PageParams`]. Every call to
//! `iter()` starts a fresh pager at `params.result_start` that issues one
//! blocking `GET` per page, so a collection can be walked any number of
//! times. A page shorter than `resultLimit` (or empty) ends the walk.

use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use tcex_core::traits::transport::{ApiRequest, Transport};
use tcex_core::types::PageParams;
use tcex_core::{AppError, AppResult};
use tcex_tql::{ResourceFilter, ResourceKind, Tql, TypedFilter};

use crate::entities::{Entity, entity_from_value};
use crate::resource::{Resource, ensure_success};

/// Where a pager is in its walk over the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    /// No page requested yet.
    Created,
    /// A page request is in flight.
    Fetching,
    /// Records from a full page are buffered; more pages may follow.
    HasPage,
    /// The last page has been received. Buffered records may remain.
    Exhausted,
    /// A transport or decode failure ended the walk.
    Errored,
}

/// Walks the pages of one endpoint and yields raw records.
pub struct Pager<'c> {
    transport: &'c dyn Transport,
    endpoint: &'static str,
    tql: String,
    params: &'c PageParams,
    offset: u32,
    state: PagerState,
    buffer: VecDeque<Value>,
    fetches: usize,
}

impl<'c> Pager<'c> {
    pub fn new(
        transport: &'c dyn Transport,
        endpoint: &'static str,
        tql: String,
        params: &'c PageParams,
    ) -> Self {
        Self {
            transport,
            endpoint,
            tql,
            params,
            offset: params.result_start,
            state: PagerState::Created,
            buffer: VecDeque::new(),
            fetches: 0,
        }
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Number of page requests issued so far.
    pub fn fetches(&self) -> usize {
        self.fetches
    }

    /// Offset of the next page request.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    fn request(&self) -> ApiRequest {
        let mut request = ApiRequest::get(self.endpoint);
        if !self.tql.is_empty() {
            request = request.with_query("tql", self.tql.clone());
        }
        request.with_query_pairs(self.params.query_pairs(self.offset))
    }

    fn fetch(&mut self) -> AppResult<()> {
        self.state = PagerState::Fetching;
        self.fetches += 1;
        debug!(
            endpoint = self.endpoint,
            offset = self.offset,
            limit = self.params.result_limit,
            "Fetching page"
        );

        let response = ensure_success(self.transport.execute(&self.request())?, self.endpoint)?;
        let records = match response.body {
            Value::Object(mut page) => match page.remove("data") {
                Some(Value::Array(records)) => records,
                _ => {
                    return Err(AppError::decode(format!(
                        "Page from {} has no 'data' array",
                        self.endpoint
                    )));
                }
            },
            _ => {
                return Err(AppError::decode(format!(
                    "Page from {} is not a JSON object",
                    self.endpoint
                )));
            }
        };

        let received = records.len();
        self.offset = self
            .offset
            .saturating_add(u32::try_from(received).unwrap_or(u32::MAX));
        self.state = if received == 0 || received < self.params.result_limit as usize {
            PagerState::Exhausted
        } else {
            PagerState::HasPage
        };
        debug!(endpoint = self.endpoint, received, state = ?self.state, "Page received");
        self.buffer.extend(records);
        Ok(())
    }
}

impl Iterator for Pager<'_> {
    type Item = AppResult<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.buffer.pop_front() {
                return Some(Ok(record));
            }
            match self.state {
                PagerState::Exhausted | PagerState::Errored => return None,
                PagerState::Created | PagerState::HasPage | PagerState::Fetching => {}
            }
            if let Err(e) = self.fetch() {
                self.state = PagerState::Errored;
                return Some(Err(e));
            }
        }
    }
}

impl fmt::Debug for Pager<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("endpoint", &self.endpoint)
            .field("tql", &self.tql)
            .field("offset", &self.offset)
            .field("state", &self.state)
            .field("buffered", &self.buffer.len())
            .finish()
    }
}

/// A filtered collection of `R`.
pub struct Collection<R: Resource> {
    transport: Arc<dyn Transport>,
    tql: Tql,
    params: PageParams,
    _marker: PhantomData<R>,
}

impl<R: Resource> Collection<R> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            tql: Tql::new(),
            params: PageParams::default(),
            _marker: PhantomData,
        }
    }

    /// Replace the paging parameters. The page size is clamped to the platform limits.
    pub fn with_params(mut self, params: PageParams) -> Self {
        self.params = params.clamped();
        self
    }

    /// The typed filter over this collection's query.
    pub fn filter(&mut self) -> R::Filter<'_> {
        TypedFilter::from_tql(&mut self.tql)
    }

    pub fn tql(&self) -> &Tql {
        &self.tql
    }

    pub fn tql_mut(&mut self) -> &mut Tql {
        &mut self.tql
    }

    pub fn params(&self) -> &PageParams {
        &self.params
    }

    /// Start a fresh walk from `params.result_start`.
    pub fn iter(&self) -> CollectionIter<'_, R> {
        CollectionIter {
            pager: Pager::new(
                self.transport.as_ref(),
                R::KIND.endpoint(),
                self.tql.render(),
                &self.params,
            ),
            _marker: PhantomData,
        }
    }
}

impl<R: Resource> fmt::Debug for Collection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("kind", &R::KIND)
            .field("tql", &self.tql.render())
            .field("params", &self.params)
            .finish()
    }
}

impl<'c, R: Resource> IntoIterator for &'c Collection<R> {
    type Item = AppResult<R>;
    type IntoIter = CollectionIter<'c, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the typed records of a [`Collection`].
///
/// Records that fail to decode are skipped with a warning; the rest of the
/// page is still yielded.
#[derive(Debug)]
pub struct CollectionIter<'c, R: Resource> {
    pager: Pager<'c>,
    _marker: PhantomData<R>,
}

impl<R: Resource> CollectionIter<'_, R> {
    pub fn state(&self) -> PagerState {
        self.pager.state()
    }

    pub fn fetches(&self) -> usize {
        self.pager.fetches()
    }
}

impl<R: Resource> Iterator for CollectionIter<'_, R> {
    type Item = AppResult<R>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.pager.next()? {
                Ok(record) => match serde_json::from_value::<R>(record) {
                    Ok(resource) => return Some(Ok(resource)),
                    Err(e) => {
                        warn!(kind = %R::KIND, error = %e, "Skipping record that failed to decode");
                    }
                },
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// A collection whose resource type is chosen at runtime.
#[derive(Debug)]
pub struct EntityCollection {
    kind: ResourceKind,
    transport: Arc<dyn Transport>,
    tql: Tql,
    params: PageParams,
}

impl EntityCollection {
    pub fn new(kind: ResourceKind, transport: Arc<dyn Transport>) -> Self {
        Self {
            kind,
            transport,
            tql: Tql::new(),
            params: PageParams::default(),
        }
    }

    pub fn with_params(mut self, params: PageParams) -> Self {
        self.params = params.clamped();
        self
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn params(&self) -> &PageParams {
        &self.params
    }

    /// The untyped filter over this collection's query.
    pub fn filter(&mut self) -> AppResult<ResourceFilter<'_>> {
        ResourceFilter::new(self.kind, &mut self.tql)
    }

    pub fn tql(&self) -> &Tql {
        &self.tql
    }

    /// Start a fresh walk yielding [`Entity`] values.
    pub fn iter(&self) -> impl Iterator<Item = AppResult<Entity>> + '_ {
        let kind = self.kind;
        Pager::new(
            self.transport.as_ref(),
            kind.endpoint(),
            self.tql.render(),
            &self.params,
        )
        .filter_map(move |record| match record {
            Ok(value) => match entity_from_value(kind, value) {
                Ok(entity) => Some(Ok(entity)),
                Err(e) => {
                    warn!(kind = %kind, error = %e, "Skipping record that failed to decode");
                    None
                }
            },
            Err(e) => Some(Err(e)),
        })
    }
}
