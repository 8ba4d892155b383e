//! # tcex-app-config
//!
//! Typed models for the files that describe a packaged app:
//!
//! - [`InstallJson`]: `install.json`, the app's parameters, outputs and runtime.
//! - [`TcexJson`]: `tcex.json`, packaging options.
//! - [`LayoutJson`]: `layout.json`, the playbook input/output layout.

pub mod install_json;
pub mod layout_json;
pub mod tcex_json;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use tcex_core::{AppError, AppResult, ErrorKind};

pub use install_json::{InstallJson, Param, ParamFilter, ParamType, Playbook, RuntimeLevel};
pub use layout_json::{LayoutInput, LayoutJson, LayoutOutput, LayoutParam};
pub use tcex_json::{Finding, Severity, TcexJson};

/// Read and deserialize a JSON file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::with_source(
            ErrorKind::Io,
            format!("Failed to read {}", path.display()),
            e,
        )
    })?;
    serde_json::from_str(&content).map_err(|e| {
        AppError::with_source(
            ErrorKind::Validation,
            format!("Invalid JSON in {}", path.display()),
            e,
        )
    })
}
