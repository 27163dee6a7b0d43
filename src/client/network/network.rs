use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};
use bytes::Bytes;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::common::error::{ArangoError, Result, ServerErrorBody};

/// HTTP methods used by the graph API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
        }
    }
}

/// Outgoing request, addressed relative to a database
#[derive(Debug, Clone)]
pub struct Request {
    pub method: HttpMethod,
    pub database: String,
    /// Path below `/_db/{database}`, already percent-encoded
    pub path: String,
    pub headers: HashMap<String, String>,
    /// Ordered so the rendered query string is stable
    pub query_params: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Request {
    pub fn new(method: HttpMethod, database: impl Into<String>, path: impl Into<String>) -> Self {
        Request {
            method,
            database: database.into(),
            path: path.into(),
            headers: HashMap::new(),
            query_params: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into().to_lowercase(), value.into());
        self
    }

    pub fn with_optional_header(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.with_header(key, value),
            None => self,
        }
    }

    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    /// Adds a boolean parameter only when it was set
    pub fn with_bool_param(self, key: &str, value: Option<bool>) -> Self {
        match value {
            Some(value) => self.with_query_param(key, crate::common::utils::bool_param(value)),
            None => self,
        }
    }

    pub fn with_json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn get_header(&self, key: &str) -> Option<&String> {
        self.headers.get(&key.to_lowercase())
    }

    pub fn get_query_param(&self, key: &str) -> Option<&str> {
        self.query_params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Approximate size of the serialized body
    pub fn content_length(&self) -> usize {
        self.body
            .as_ref()
            .map(|b| serde_json::to_vec(b).map(|v| v.len()).unwrap_or(0))
            .unwrap_or(0)
    }
}

/// Response as received from the server
#[derive(Debug, Clone)]
pub struct Response {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl Response {
    pub fn new(status_code: u16) -> Self {
        Response {
            status_code,
            headers: HashMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_json_body<T: Serialize>(mut self, data: &T) -> Result<Self> {
        self.body = Bytes::from(serde_json::to_vec(data)?);
        self.headers.insert("content-type".to_string(), "application/json".to_string());
        Ok(self)
    }

    pub fn get_header(&self, key: &str) -> Option<&String> {
        self.headers.get(&key.to_lowercase())
    }

    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    pub fn is_success(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }

    pub fn is_error(&self) -> bool {
        self.status_code >= 400
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Convert a failed response into an error, preferring the server's error body
    pub fn into_error(self) -> ArangoError {
        match serde_json::from_slice::<ServerErrorBody>(&self.body) {
            Ok(body) => ArangoError::from_body(self.status_code, body),
            Err(_) => ArangoError::Server {
                status: self.status_code,
                error_num: self.status_code as u32,
                message: String::from_utf8_lossy(&self.body).into_owned(),
            },
        }
    }

    /// Pass 2xx responses through; everything else becomes an error
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(self.into_error())
        }
    }
}

/// Client-side request statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionStats {
    pub requests_sent: u64,
    pub responses_received: u64,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub request_errors: u64,
    pub connection_errors: u64,
    pub average_request_time: Duration,
}

/// Tracks statistics across all requests of one connection
pub struct StatsRecorder {
    stats: RwLock<ConnectionStats>,
    request_times: RwLock<VecDeque<Duration>>,
    max_request_time_samples: usize,
}

impl StatsRecorder {
    pub fn new() -> Self {
        StatsRecorder {
            stats: RwLock::new(ConnectionStats::default()),
            request_times: RwLock::new(VecDeque::new()),
            max_request_time_samples: 1000,
        }
    }

    pub fn record_request(&self, bytes: u64) {
        let mut stats = self.stats.write();
        stats.requests_sent += 1;
        stats.bytes_sent += bytes;
    }

    pub fn record_connection_error(&self) {
        self.stats.write().connection_errors += 1;
    }

    pub fn record_response(&self, request_time: Duration, bytes: u64, is_error: bool) {
        {
            let mut stats = self.stats.write();
            stats.responses_received += 1;
            stats.bytes_received += bytes;
            if is_error {
                stats.request_errors += 1;
            }
        }

        let average = {
            let mut times = self.request_times.write();
            times.push_back(request_time);
            if times.len() > self.max_request_time_samples {
                times.pop_front();
            }
            let total: Duration = times.iter().sum();
            total / times.len() as u32
        };

        self.stats.write().average_request_time = average;
    }

    pub fn get_stats(&self) -> ConnectionStats {
        self.stats.read().clone()
    }

    pub fn reset_stats(&self) {
        *self.stats.write() = ConnectionStats::default();
        self.request_times.write().clear();
    }
}

impl Default for StatsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

/// Request timing helper
pub struct RequestTimer {
    start_time: Instant,
}

impl RequestTimer {
    pub fn new() -> Self {
        RequestTimer {
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for RequestTimer {
    fn default() -> Self {
        Self::new()
    }
}
