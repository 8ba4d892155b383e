//! # tcex
//!
//! ThreatConnect SDK. Re-exports the workspace crates under short names:
//!
//! - [`core`]: errors, configuration, the transport contract and date helpers.
//! - [`tql`]: the TQL expression builder and per-resource filters.
//! - [`client`]: the blocking HTTP client, paged collections and resource APIs.
//! - [`app_config`]: install.json, tcex.json and layout.json models.

pub use tcex_app_config as app_config;
pub use tcex_client as client;
pub use tcex_core as core;
pub use tcex_tql as tql;

pub use tcex_client::TcClient;
pub use tcex_core::{AppError, AppResult, ErrorKind};
