//! Staging of test data into the platform.
//!
//! Stage files are named `tc_stage_*.json` and hold one entity or an array
//! of entities:
//!
//! ```json
//! [
//!   {"type": "indicators", "data": {"type": "Host", "hostName": "bad.example"}},
//!   {"type": "artifacts", "data": {"caseId": 1, "type": "File"},
//!    "binary": {"fileData": "aGVsbG8="}}
//! ]
//! ```
//!
//! Values under `binary` must be base64; they are checked and then sent in
//! the named `data` field.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use tcex_core::traits::transport::{ApiRequest, Transport};
use tcex_core::{AppError, AppResult, ErrorKind};
use tcex_tql::ResourceKind;

use crate::resource::{ensure_success, unwrap_data};

const STAGE_PREFIX: &str = "tc_stage_";

/// One record to create.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StageEntity {
    #[serde(rename = "type", deserialize_with = "deserialize_kind")]
    pub kind: ResourceKind,
    pub data: Value,
    #[serde(default)]
    pub binary: BTreeMap<String, String>,
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<ResourceKind, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StageFile {
    Many(Vec<StageEntity>),
    One(StageEntity),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Created,
    Failed,
}

/// Outcome of staging one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageResult {
    pub kind: ResourceKind,
    pub status: StageStatus,
    pub id: Option<i64>,
    pub owner: Option<String>,
    pub message: Option<String>,
}

/// Base64-decode a staged binary value.
pub fn decode_binary(value: &str, label: &str) -> AppResult<Vec<u8>> {
    STANDARD.decode(value.trim()).map_err(|e| {
        AppError::with_source(
            ErrorKind::Validation,
            format!("Binary staging data for '{label}' is not valid base64"),
            e,
        )
    })
}

/// Creates staged entities in one owner.
#[derive(Debug)]
pub struct StageData {
    transport: Arc<dyn Transport>,
    owner: Option<String>,
}

impl StageData {
    pub fn new(transport: Arc<dyn Transport>, owner: Option<String>) -> Self {
        Self { transport, owner }
    }

    /// Read every `tc_stage_*.json` file in `dir`, in file name order.
    pub fn from_dir(dir: impl AsRef<Path>) -> AppResult<Vec<StageEntity>> {
        let dir = dir.as_ref();
        let mut files: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Io,
                    format!("Failed to read stage directory {}", dir.display()),
                    e,
                )
            })?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_stage_file(path))
            .collect();
        files.sort();

        let mut entities = Vec::new();
        for file in &files {
            entities.extend(Self::from_file(file)?);
        }
        debug!(dir = %dir.display(), files = files.len(), entities = entities.len(), "Loaded stage files");
        Ok(entities)
    }

    /// Read one stage file.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Vec<StageEntity>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Io,
                format!("Failed to read stage file {}", path.display()),
                e,
            )
        })?;
        let file: StageFile = serde_json::from_str(&content).map_err(|e| {
            AppError::with_source(
                ErrorKind::Validation,
                format!("Invalid stage file {}", path.display()),
                e,
            )
        })?;
        Ok(match file {
            StageFile::Many(entities) => entities,
            StageFile::One(entity) => vec![entity],
        })
    }

    /// Stage every entity, continuing past failures.
    pub fn entities(&self, entities: &[StageEntity]) -> Vec<StageResult> {
        let results: Vec<_> = entities.iter().map(|e| self.entity(e)).collect();
        let failed = results
            .iter()
            .filter(|r| r.status == StageStatus::Failed)
            .count();
        info!(total = results.len(), failed, "Staging complete");
        results
    }

    /// Stage one entity.
    pub fn entity(&self, entity: &StageEntity) -> StageResult {
        match self.create(entity) {
            Ok(id) => StageResult {
                kind: entity.kind,
                status: StageStatus::Created,
                id,
                owner: self.owner.clone(),
                message: None,
            },
            Err(e) => {
                warn!(kind = %entity.kind, error = %e, "Failed to stage entity");
                StageResult {
                    kind: entity.kind,
                    status: StageStatus::Failed,
                    id: None,
                    owner: self.owner.clone(),
                    message: Some(e.to_string()),
                }
            }
        }
    }

    fn create(&self, entity: &StageEntity) -> AppResult<Option<i64>> {
        let body = prepare_body(entity)?;
        let path = entity.kind.endpoint();
        let mut request = ApiRequest::post(path, body);
        if let Some(owner) = &self.owner {
            request = request.with_query("owner", owner.as_str());
        }
        let response = ensure_success(self.transport.execute(&request)?, path)?;
        let data = unwrap_data(response.body, path)?;
        Ok(data.get("id").and_then(Value::as_i64))
    }
}

fn is_stage_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(STAGE_PREFIX) && n.ends_with(".json"))
}

fn prepare_body(entity: &StageEntity) -> AppResult<Value> {
    let mut body = entity.data.clone();
    let Value::Object(fields) = &mut body else {
        return Err(AppError::validation(format!(
            "Stage data for {} must be a JSON object",
            entity.kind
        )));
    };
    for (field, encoded) in &entity.binary {
        let bytes = decode_binary(encoded, field)?;
        fields.insert(field.clone(), Value::String(STANDARD.encode(&bytes)));
    }
    Ok(body)
}
