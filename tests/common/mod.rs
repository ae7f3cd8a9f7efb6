#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use vk_links::domain::entities::AccessToken;
use vk_links::domain::transport::VkTransport;
use vk_links::{AppError, config::Config};

/// One recorded API call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    pub params: Vec<(&'static str, String)>,
}

impl RecordedCall {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Transport that replays canned replies in order and records every call.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<Value, AppError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, body: Value) -> Self {
        self.replies.lock().unwrap().push_back(Ok(body));
        self
    }

    pub fn fail(self, error: AppError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl VkTransport for ScriptedTransport {
    async fn get(
        &self,
        method: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<Value, AppError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            params,
        });

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::request("no scripted reply left")))
    }
}

pub fn test_config() -> Config {
    Config {
        access_token: AccessToken::new("test-token").unwrap(),
        api_base_url: "https://api.vk.com/method".to_string(),
        api_version: "5.199".to_string(),
        request_timeout_secs: 30,
        log_level: "warn".to_string(),
        log_format: "text".to_string(),
    }
}
