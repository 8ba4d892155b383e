//! Shared test helpers: a scripted in-memory transport.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use tcex_core::traits::transport::{ApiRequest, ApiResponse, Transport};
use tcex_core::{AppError, AppResult};

/// Replays queued responses and records every request it receives.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<AppResult<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, status: u16, body: Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn push_error(&self, error: AppError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queue a page holding `records`.
    pub fn push_page(&self, records: Vec<Value>) -> &Self {
        let count = records.len();
        self.push(200, json!({"data": records, "count": count, "status": "Success"}))
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: &ApiRequest) -> AppResult<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::internal("no scripted response left")))
    }
}

/// `n` tag records with consecutive ids starting at `first_id`.
pub fn tags(first_id: i64, n: usize) -> Vec<Value> {
    (0..n as i64)
        .map(|i| json!({"id": first_id + i, "name": format!("tag-{}", first_id + i)}))
        .collect()
}
