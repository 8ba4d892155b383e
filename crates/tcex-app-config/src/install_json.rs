//! The `install.json` model.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use tcex_core::{AppError, AppResult};

use crate::read_json;

/// Input type of an app parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamType {
    Boolean,
    Choice,
    KeyValueList,
    MultiChoice,
    String,
    StringMixed,
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Boolean => "Boolean",
            Self::Choice => "Choice",
            Self::KeyValueList => "KeyValueList",
            Self::MultiChoice => "MultiChoice",
            Self::String => "String",
            Self::StringMixed => "StringMixed",
        };
        f.write_str(s)
    }
}

/// One app input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    #[serde(default)]
    pub allow_multiple: bool,
    /// A boolean or string default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default)]
    pub encrypt: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expose_playbook_key_as: Option<String>,
    #[serde(default)]
    pub feed_deployer: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intel_type: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub playbook_data_type: Vec<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
    #[serde(default)]
    pub service_config: bool,
    #[serde(default)]
    pub setup: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub valid_values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputVariable {
    pub name: String,
    #[serde(rename = "type")]
    pub variable_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intel_type: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retry {
    #[serde(default)]
    pub allowed: bool,
    #[serde(default = "default_one")]
    pub default_delay_minutes: u32,
    #[serde(default = "default_one")]
    pub default_max_retries: u32,
}

fn default_one() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playbook {
    #[serde(rename = "type")]
    pub playbook_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_prefix: Option<String>,
    #[serde(default)]
    pub output_variables: Vec<OutputVariable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<Retry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deprecation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_amount: Option<u32>,
    #[serde(default)]
    pub delete_at_minimum: bool,
    #[serde(default)]
    pub percentage: bool,
}

/// A feed definition for feed apps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub source_name: String,
    pub source_category: String,
    pub source_description: String,
    pub job_file: String,
    pub document_storage_limit_mb: u32,
    pub indicator_limit: u32,
    #[serde(default)]
    pub enable_bulk_json: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes_file: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deprecation: Vec<Deprecation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub discovery_types: Vec<String>,
}

/// `runtimeLevel` is a string in most apps and a list in some older ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuntimeLevel {
    One(String),
    Many(Vec<String>),
}

impl RuntimeLevel {
    /// The primary runtime level, lowercased.
    pub fn primary(&self) -> String {
        match self {
            Self::One(level) => level.to_lowercase(),
            Self::Many(levels) => levels.first().map(|l| l.to_lowercase()).unwrap_or_default(),
        }
    }
}

/// Criteria for [`InstallJson::filter_params`]. Unset fields match anything.
#[derive(Debug, Clone, Default)]
pub struct ParamFilter {
    pub name: Option<String>,
    pub hidden: Option<bool>,
    pub required: Option<bool>,
    pub service_config: Option<bool>,
    pub param_type: Option<ParamType>,
    /// Only params whose name is listed.
    pub input_permutations: Option<Vec<String>>,
}

impl ParamFilter {
    fn matches(&self, param: &Param) -> bool {
        self.name.as_ref().is_none_or(|n| *n == param.name)
            && self.hidden.is_none_or(|h| h == param.hidden)
            && self.required.is_none_or(|r| r == param.required)
            && self.service_config.is_none_or(|s| s == param.service_config)
            && self.param_type.is_none_or(|t| t == param.param_type)
            && self
                .input_permutations
                .as_ref()
                .is_none_or(|names| names.contains(&param.name))
    }
}

/// The `install.json` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InstallJson {
    #[validate(length(min = 3, max = 100))]
    pub display_name: String,
    #[validate(length(min = 3, max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_path: Option<String>,
    pub program_language: String,
    pub program_main: String,
    pub program_version: String,
    pub runtime_level: RuntimeLevel,
    #[serde(default = "default_list_delimiter")]
    pub list_delimiter: String,
    #[serde(default)]
    pub allow_on_demand: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_run_as_user: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_user_token_param: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feeds: Vec<Feed>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_server_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playbook: Option<Playbook>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publish_out_files: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repeating_minutes: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runtime_context: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
}

fn default_list_delimiter() -> String {
    "|".to_string()
}

/// Default app id: a v5 UUID of the lowercased app directory name.
pub fn default_app_id(app_dir_name: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_X500, app_dir_name.to_lowercase().as_bytes()).to_string()
}

impl InstallJson {
    /// Load and validate `path`. A missing `appId` defaults to
    /// [`default_app_id`] of the containing directory.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let mut install: Self = read_json(path)?;
        install.validate_model()?;
        if install.app_id.is_none() {
            let dir_name = path
                .canonicalize()
                .ok()
                .as_deref()
                .and_then(Path::parent)
                .and_then(Path::file_name)
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .unwrap_or_default();
            install.app_id = Some(default_app_id(&dir_name));
        }
        debug!(path = %path.display(), params = install.params.len(), "Loaded install.json");
        Ok(install)
    }

    /// Check field constraints that serde cannot express.
    pub fn validate_model(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::validation(format!("Invalid install.json: {e}")))
    }

    /// Output variable prefix for the runtime level.
    pub fn app_prefix(&self) -> &'static str {
        match self.runtime_level.primary().as_str() {
            "organization" => "TC_-_",
            "playbook" => "TCPB_-_",
            "apiservice" => "TCVA_-_",
            "triggerservice" => "TCVC_-_",
            "webhooktriggerservice" => "TCVW-_",
            _ => "",
        }
    }

    /// `Trigger` for trigger services, `App` otherwise.
    pub fn app_output_var_type(&self) -> &'static str {
        match self.runtime_level.primary().as_str() {
            "triggerservice" | "webhooktriggerservice" => "Trigger",
            _ => "App",
        }
    }

    /// Params matching `filter`, in file order, first occurrence per name.
    pub fn filter_params(&self, filter: &ParamFilter) -> Vec<&Param> {
        let mut seen = std::collections::HashSet::new();
        self.params
            .iter()
            .filter(|p| filter.matches(p))
            .filter(|p| seen.insert(p.name.as_str()))
            .collect()
    }

    pub fn get_param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn params_dict(&self) -> BTreeMap<&str, &Param> {
        self.params.iter().map(|p| (p.name.as_str(), p)).collect()
    }

    pub fn required_params(&self) -> BTreeMap<&str, &Param> {
        self.params_where(|p| p.required)
    }

    pub fn optional_params(&self) -> BTreeMap<&str, &Param> {
        self.params_where(|p| !p.required)
    }

    pub fn service_config_params(&self) -> BTreeMap<&str, &Param> {
        self.params_where(|p| p.service_config)
    }

    pub fn service_playbook_params(&self) -> BTreeMap<&str, &Param> {
        self.params_where(|p| !p.service_config)
    }

    /// Playbook output variables by name.
    pub fn playbook_outputs(&self) -> BTreeMap<&str, &OutputVariable> {
        self.playbook
            .iter()
            .flat_map(|pb| pb.output_variables.iter())
            .map(|o| (o.name.as_str(), o))
            .collect()
    }

    fn params_where(&self, predicate: impl Fn(&Param) -> bool) -> BTreeMap<&str, &Param> {
        self.params
            .iter()
            .filter(|p| predicate(p))
            .map(|p| (p.name.as_str(), p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "displayName": "Example App",
            "programLanguage": "PYTHON",
            "programMain": "run",
            "programVersion": "1.0.0",
            "runtimeLevel": "Playbook",
            "features": ["aotExecutionEnabled"],
            "params": [
                {"name": "tc_action", "label": "Action", "type": "Choice",
                 "validValues": ["Create", "Delete"], "required": true},
                {"name": "indicator", "label": "Indicator", "type": "String",
                 "playbookDataType": ["String"], "required": true},
                {"name": "verbose", "label": "Verbose", "type": "Boolean", "default": false},
                {"name": "api_key", "label": "API Key", "type": "String",
                 "encrypt": true, "serviceConfig": true, "hidden": true}
            ],
            "playbook": {
                "type": "Utility",
                "outputVariables": [{"name": "action.result", "type": "String"}]
            }
        })
    }

    fn install() -> InstallJson {
        serde_json::from_value(sample()).unwrap()
    }

    #[test]
    fn test_prefix_and_output_type() {
        let ij = install();
        assert_eq!(ij.app_prefix(), "TCPB_-_");
        assert_eq!(ij.app_output_var_type(), "App");
        assert_eq!(ij.list_delimiter, "|");

        let mut trigger = ij.clone();
        trigger.runtime_level = RuntimeLevel::Many(vec!["TriggerService".to_string()]);
        assert_eq!(trigger.app_prefix(), "TCVC_-_");
        assert_eq!(trigger.app_output_var_type(), "Trigger");
    }

    #[test]
    fn test_param_views() {
        let ij = install();
        assert_eq!(ij.param_names(), vec!["tc_action", "indicator", "verbose", "api_key"]);
        assert_eq!(ij.required_params().len(), 2);
        assert_eq!(ij.optional_params().len(), 2);
        assert!(ij.service_config_params().contains_key("api_key"));
        assert_eq!(ij.get_param("verbose").unwrap().param_type, ParamType::Boolean);
        assert!(ij.get_param("missing").is_none());
        assert!(ij.playbook_outputs().contains_key("action.result"));
    }

    #[test]
    fn test_filter_params() {
        let ij = install();
        let hidden = ij.filter_params(&ParamFilter {
            hidden: Some(false),
            required: Some(true),
            ..Default::default()
        });
        let names: Vec<_> = hidden.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["tc_action", "indicator"]);

        let by_type = ij.filter_params(&ParamFilter {
            param_type: Some(ParamType::String),
            input_permutations: Some(vec!["api_key".to_string()]),
            ..Default::default()
        });
        assert_eq!(by_type.len(), 1);
        assert_eq!(by_type[0].name, "api_key");
    }

    #[test]
    fn test_display_name_length() {
        let mut ij = install();
        ij.display_name = "ab".to_string();
        assert!(ij.validate_model().unwrap_err().is_validation());
        ij.display_name = "x".repeat(101);
        assert!(ij.validate_model().is_err());
        ij.display_name = "abc".to_string();
        assert!(ij.validate_model().is_ok());
    }

    #[test]
    fn test_load_defaults_app_id_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("My_App");
        std::fs::create_dir(&app_dir).unwrap();
        let file = app_dir.join("install.json");
        std::fs::write(&file, sample().to_string()).unwrap();

        let ij = InstallJson::load(&file).unwrap();
        assert_eq!(ij.app_id.as_deref(), Some(default_app_id("my_app").as_str()));
        assert_eq!(default_app_id("My_App"), default_app_id("my_app"));
    }
}
