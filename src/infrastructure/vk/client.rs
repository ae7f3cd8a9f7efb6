//! Typed wrapper over the two VK `utils.*` methods this tool uses.

use std::sync::Arc;

use crate::domain::entities::{AccessToken, LinkStats, ShortLink, ShortLinkKey, StatsWindow};
use crate::domain::transport::VkTransport;
use crate::error::AppError;
use crate::infrastructure::vk::envelope;

/// Method that turns an arbitrary URL into a `vk.cc` link.
pub const GET_SHORT_LINK: &str = "utils.getShortLink";

/// Method that returns view statistics for a `vk.cc` key.
pub const GET_LINK_STATS: &str = "utils.getLinkStats";

/// VK API client bound to one access token and API version.
///
/// Every request carries `access_token` and `v`; the caller supplies only the
/// method-specific parameters.
pub struct VkApiClient<T: VkTransport> {
    transport: Arc<T>,
    access_token: AccessToken,
    api_version: String,
}

impl<T: VkTransport> VkApiClient<T> {
    pub fn new(transport: Arc<T>, access_token: AccessToken, api_version: impl Into<String>) -> Self {
        Self {
            transport,
            access_token,
            api_version: api_version.into(),
        }
    }

    /// Calls `utils.getShortLink` for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Request`] on transport failures and
    /// [`AppError::RemoteService`] when VK rejects the call.
    pub async fn get_short_link(&self, url: &str) -> Result<ShortLink, AppError> {
        tracing::debug!(method = GET_SHORT_LINK, url, "Calling VK API");

        let body = self
            .transport
            .get(GET_SHORT_LINK, self.params(vec![("url", url.to_string())]))
            .await?;

        envelope::decode(body)
    }

    /// Calls `utils.getLinkStats` for `key`, optionally restricted to `window`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_short_link`]; a payload without `stats` is an
    /// [`AppError::RemoteService`].
    pub async fn get_link_stats(
        &self,
        key: &ShortLinkKey,
        window: Option<StatsWindow>,
    ) -> Result<LinkStats, AppError> {
        let body = self.call_link_stats(key, window).await?;
        envelope::decode(body)
    }

    /// Calls `utils.getLinkStats` for `key` without a window and only checks
    /// that VK answered with a `response`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_short_link`].
    pub async fn probe_link(&self, key: &ShortLinkKey) -> Result<(), AppError> {
        let body = self.call_link_stats(key, None).await?;
        envelope::into_payload(body).map(|_| ())
    }

    async fn call_link_stats(
        &self,
        key: &ShortLinkKey,
        window: Option<StatsWindow>,
    ) -> Result<serde_json::Value, AppError> {
        tracing::debug!(method = GET_LINK_STATS, key = %key, ?window, "Calling VK API");

        let mut params = vec![("key", key.as_str().to_string())];
        if let Some(window) = window {
            params.extend(window.to_params());
        }

        self.transport
            .get(GET_LINK_STATS, self.params(params))
            .await
    }

    fn params(&self, mut params: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
        params.push(("access_token", self.access_token.expose().to_string()));
        params.push(("v", self.api_version.clone()));
        params
    }
}
