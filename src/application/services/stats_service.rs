//! Click counting for existing short links.

use std::sync::Arc;

use crate::domain::entities::{ShortLinkKey, StatsWindow};
use crate::domain::transport::VkTransport;
use crate::error::AppError;
use crate::infrastructure::vk::VkApiClient;

/// Service for aggregating VK click statistics.
pub struct StatsService<T: VkTransport> {
    api: Arc<VkApiClient<T>>,
}

impl<T: VkTransport> StatsService<T> {
    /// Creates a new statistics service.
    pub fn new(api: Arc<VkApiClient<T>>) -> Self {
        Self { api }
    }

    /// Total views of `key` over the last 100 days.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Request`] on transport failures.
    /// Returns [`AppError::RemoteService`] when VK rejects the call or the
    /// payload has no `stats`.
    pub async fn count_clicks(&self, key: &ShortLinkKey) -> Result<u64, AppError> {
        let stats = self
            .api
            .get_link_stats(key, Some(StatsWindow::RECENT_DAYS))
            .await?;

        let total = stats.stats.total_views();
        tracing::debug!(key = %key, intervals = stats.stats.len(), total, "Summed link views");

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AccessToken;
    use crate::domain::transport::MockVkTransport;
    use serde_json::json;

    fn service(mock: MockVkTransport) -> StatsService<MockVkTransport> {
        let api = VkApiClient::new(
            Arc::new(mock),
            AccessToken::new("test-token").unwrap(),
            "5.199",
        );
        StatsService::new(Arc::new(api))
    }

    fn key() -> ShortLinkKey {
        ShortLinkKey::from_url("https://vk.cc/abc123").unwrap()
    }

    #[tokio::test]
    async fn test_count_clicks_sums_views() {
        let mut mock = MockVkTransport::new();

        mock.expect_get()
            .withf(|_, params| params.contains(&("interval", "day".to_string())))
            .times(1)
            .returning(|_, _| {
                Ok(json!({ "response": { "key": "abc123", "stats": [
                    { "views": 3 }, { "views": 5 }, { "views": 0 }
                ] } }))
            });

        assert_eq!(service(mock).count_clicks(&key()).await.unwrap(), 8);
    }

    #[tokio::test]
    async fn test_count_clicks_empty_series() {
        let mut mock = MockVkTransport::new();

        mock.expect_get()
            .times(1)
            .returning(|_, _| Ok(json!({ "response": { "key": "abc123", "stats": [] } })));

        assert_eq!(service(mock).count_clicks(&key()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_count_clicks_remote_error() {
        let mut mock = MockVkTransport::new();

        mock.expect_get()
            .times(1)
            .returning(|_, _| Ok(json!({ "error": { "error_code": 5, "error_msg": "User authorization failed" } })));

        let err = service(mock).count_clicks(&key()).await.unwrap_err();
        assert_eq!(err, AppError::remote("User authorization failed"));
    }

    #[tokio::test]
    async fn test_count_clicks_transport_error() {
        let mut mock = MockVkTransport::new();

        mock.expect_get()
            .times(1)
            .returning(|_, _| Err(AppError::request("connection reset")));

        let err = service(mock).count_clicks(&key()).await.unwrap_err();
        assert!(matches!(err, AppError::Request { .. }));
    }
}
