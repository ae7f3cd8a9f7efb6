//! `reqwest`-backed transport.

use std::time::Duration;

use crate::config::Config;
use crate::domain::transport::VkTransport;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Sends VK API calls as HTTPS GET requests to `{base_url}/{method}`.
///
/// One request per call, no retries; the timeout is the only limit applied.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport for `base_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Request`] if the TLS backend cannot be initialised.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("vk-links/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Creates a transport from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), method)
    }
}

#[async_trait]
impl VkTransport for HttpTransport {
    async fn get(
        &self,
        method: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<Value, AppError> {
        let endpoint = self.endpoint(method);

        let response = self
            .client
            .get(&endpoint)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!(method, status = %response.status(), "VK API responded");

        Ok(response.json::<Value>().await?)
    }
}
