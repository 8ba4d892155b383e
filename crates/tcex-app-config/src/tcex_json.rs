//! The `tcex.json` packaging file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};

use tcex_core::{AppError, AppResult, ErrorKind};

use crate::read_json;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Package {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
}

/// Severity of a packaging problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found in `tcex.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TcexJson {
    #[serde(default)]
    pub package: Package,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_repo_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_type: Option<String>,
}

impl TcexJson {
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        read_json(path.as_ref())
    }

    /// Packaging problems; each one is also logged.
    pub fn warnings(&self) -> Vec<Finding> {
        let mut findings = Vec::new();
        if self.package.app_name.is_none() {
            error!("tcex.json is missing package.app_name");
            findings.push(Finding {
                severity: Severity::Error,
                message: "The package.app_name field is required.".to_string(),
            });
        }
        if self.package.app_version.is_some() {
            warn!("tcex.json sets package.app_version; programVersion in install.json is used");
            findings.push(Finding {
                severity: Severity::Warning,
                message: "The package.app_version field is deprecated; use programVersion in install.json."
                    .to_string(),
            });
        }
        findings
    }

    /// Write the file with sorted keys and 2-space indentation.
    pub fn write(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        let value = sort_keys(serde_json::to_value(self)?);
        let mut content = serde_json::to_string_pretty(&value)?;
        content.push('\n');
        fs::write(path, content).map_err(|e| {
            AppError::with_source(
                ErrorKind::Io,
                format!("Failed to write {}", path.display()),
                e,
            )
        })
    }
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().map(|(k, v)| (k, sort_keys(v))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
