//! Test doubles for the transport and storage seams.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::core::error::{ApiError, Result};
use crate::core::service::{HttpReply, HttpRequest, HttpTransport, KeyValueStore};

/// Replays queued replies per endpoint and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<String, VecDeque<Result<HttpReply>>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, endpoint: &str, status: u16, body: impl Into<String>) {
        self.push(endpoint, Ok(HttpReply { status, body: body.into() }));
    }

    pub fn push_json(&self, endpoint: &str, body: Value) {
        self.push_reply(endpoint, 200, body.to_string());
    }

    pub fn push_network_error(&self, endpoint: &str, message: &str) {
        self.push(
            endpoint,
            Err(ApiError::Network {
                endpoint: endpoint.to_string(),
                message: message.to_string(),
            }),
        );
    }

    fn push(&self, endpoint: &str, reply: Result<HttpReply>) {
        self.replies
            .lock()
            .entry(endpoint.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpReply> {
        let endpoint = request.endpoint.clone();
        self.requests.lock().push(request);

        self.replies
            .lock()
            .get_mut(&endpoint)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(ApiError::Network {
                    endpoint: endpoint.clone(),
                    message: format!("no scripted reply for {}", endpoint),
                })
            })
    }
}

/// Store whose writes always fail. Reads return whatever it was seeded with.
#[derive(Default)]
pub struct ReadOnlyStore {
    entries: HashMap<String, String>,
}

impl ReadOnlyStore {
    pub fn with(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&self, key: &str, _value: &str) -> Result<()> {
        Err(ApiError::Storage(format!("Failed to write {}: read-only", key)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Err(ApiError::Storage(format!("Failed to remove {}: read-only", key)))
    }
}
