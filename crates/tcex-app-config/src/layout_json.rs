//! The `layout.json` playbook layout.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use tcex_core::AppResult;

use crate::read_json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutParam {
    pub name: String,
    /// Display clause controlling when the input is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// One input section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    pub sequence: u32,
    pub title: String,
    #[serde(default)]
    pub parameters: Vec<LayoutParam>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOutput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutJson {
    #[serde(default)]
    pub inputs: Vec<LayoutInput>,
    #[serde(default)]
    pub outputs: Vec<LayoutOutput>,
}

impl LayoutJson {
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        read_json(path.as_ref())
    }

    /// Find an input parameter in any section.
    pub fn get_param(&self, name: &str) -> Option<&LayoutParam> {
        self.inputs
            .iter()
            .flat_map(|i| i.parameters.iter())
            .find(|p| p.name == name)
    }

    pub fn get_output(&self, name: &str) -> Option<&LayoutOutput> {
        self.outputs.iter().find(|o| o.name == name)
    }

    /// Input parameter names, by section sequence.
    pub fn param_names(&self) -> Vec<&str> {
        let mut inputs: Vec<_> = self.inputs.iter().collect();
        inputs.sort_by_key(|i| i.sequence);
        inputs
            .into_iter()
            .flat_map(|i| i.parameters.iter().map(|p| p.name.as_str()))
            .collect()
    }

    pub fn outputs_map(&self) -> BTreeMap<&str, &LayoutOutput> {
        self.outputs.iter().map(|o| (o.name.as_str(), o)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = r#"{
        "inputs": [
            {"sequence": 2, "title": "Options",
             "parameters": [{"name": "verbose", "display": "tc_action in ('Create')"}]},
            {"sequence": 1, "title": "Action", "parameters": [{"name": "tc_action"}]}
        ],
        "outputs": [{"name": "action.result", "display": "tc_action in ('Create')"}]
    }"#;

    #[test]
    fn test_lookups() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("layout.json");
        std::fs::write(&file, LAYOUT).unwrap();
        let layout = LayoutJson::load(&file).unwrap();

        assert_eq!(layout.param_names(), vec!["tc_action", "verbose"]);
        assert!(layout.get_param("verbose").unwrap().display.is_some());
        assert!(layout.get_param("missing").is_none());
        assert!(layout.get_output("action.result").is_some());
        assert_eq!(layout.outputs_map().len(), 1);
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("layout.json");
        std::fs::write(&file, "{").unwrap();
        assert!(LayoutJson::load(&file).unwrap_err().is_validation());
    }
}
