//! Shared fixtures for the workspace integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use tcex::core::traits::transport::{ApiRequest, ApiResponse, Transport};
use tcex::{AppError, AppResult};

/// Serves queued pages and records each request.
#[derive(Debug, Default)]
pub struct PageServer {
    pages: Mutex<VecDeque<Value>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl PageServer {
    pub fn with_pages(pages: Vec<Vec<Value>>) -> Arc<Self> {
        let server = Self::default();
        {
            let mut queue = server.pages.lock().unwrap();
            for records in pages {
                queue.push_back(json!({"data": records, "status": "Success"}));
            }
        }
        Arc::new(server)
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for PageServer {
    fn execute(&self, request: &ApiRequest) -> AppResult<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .map(|body| ApiResponse::new(200, body))
            .ok_or_else(|| AppError::internal("no page left"))
    }
}

/// Write a minimal playbook app (install.json, tcex.json, layout.json) into `dir`.
pub fn write_app(dir: &Path) {
    let install = json!({
        "displayName": "Indicator Enricher",
        "programLanguage": "PYTHON",
        "programMain": "run",
        "programVersion": "1.2.0",
        "runtimeLevel": "Playbook",
        "params": [
            {"name": "tc_action", "label": "Action", "type": "Choice",
             "validValues": ["Enrich"], "required": true},
            {"name": "indicator", "label": "Indicator", "type": "StringMixed",
             "playbookDataType": ["String"], "required": true}
        ],
        "playbook": {
            "type": "Enrichment",
            "outputVariables": [{"name": "enricher.score", "type": "String"}]
        }
    });
    let tcex = json!({"package": {"app_name": "TCPB_-_Indicator_Enricher", "excludes": []}});
    let layout = json!({
        "inputs": [{"sequence": 1, "title": "Action",
                    "parameters": [{"name": "tc_action"}, {"name": "indicator"}]}],
        "outputs": [{"name": "enricher.score"}]
    });
    std::fs::write(dir.join("install.json"), install.to_string()).unwrap();
    std::fs::write(dir.join("tcex.json"), tcex.to_string()).unwrap();
    std::fs::write(dir.join("layout.json"), layout.to_string()).unwrap();
}
