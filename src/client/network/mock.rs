// In-memory connection used by unit tests: records requests, replays queued responses.

use std::collections::VecDeque;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use crate::common::error::{ArangoError, Result};
use super::connection::Connection;
use super::network::{Request, Response};

#[derive(Default)]
pub struct MockConnection {
    requests: Mutex<Vec<Request>>,
    responses: Mutex<VecDeque<Response>>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: Value) {
        let response = Response::new(status)
            .with_json_body(&body)
            .expect("mock body serializes");
        self.responses.lock().push_back(response);
    }

    pub fn push_error(&self, status: u16, error_num: u32, message: &str) {
        self.push_json(status, serde_json::json!({
            "error": true,
            "code": status,
            "errorNum": error_num,
            "errorMessage": message,
        }));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Request {
        self.requests.lock().last().cloned().expect("no request was sent")
    }
}

#[async_trait]
impl Connection for MockConnection {
    async fn execute(&self, request: Request) -> Result<Response> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .ok_or_else(|| ArangoError::unexpected("mock connection has no queued response"))
    }
}
