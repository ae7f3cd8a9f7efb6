//! Transport contract for raw VK API calls.

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Performs one GET request against a VK API method.
///
/// Implementations only move bytes: they return the decoded JSON body exactly as
/// VK sent it, application-level `error` objects included. Interpreting the body
/// is [`crate::infrastructure::vk::VkApiClient`]'s job.
///
/// # Implementations
///
/// - [`crate::infrastructure::vk::HttpTransport`] - `reqwest` over HTTPS
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VkTransport: Send + Sync {
    /// Calls `method` (e.g. `utils.getShortLink`) with the given query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Request`] on connection failures, timeouts, non-2xx
    /// statuses, or a body that is not JSON.
    async fn get(
        &self,
        method: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<Value, AppError>;
}

/// Lets one transport be shared, e.g. between an [`crate::app::App`] and the
/// code inspecting it.
#[async_trait]
impl<T: VkTransport + ?Sized> VkTransport for Arc<T> {
    async fn get(
        &self,
        method: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<Value, AppError> {
        (**self).get(method, params).await
    }
}
