//! Entry logic: classify the input, then count clicks or shorten.

use std::fmt;
use std::sync::Arc;

use crate::application::services::{Classification, LinkService, StatsService};
use crate::config::Config;
use crate::domain::transport::VkTransport;
use crate::error::AppError;
use crate::infrastructure::vk::VkApiClient;

/// Result line printed on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Total views of an existing short link.
    Clicks(u64),
    /// Newly created short URL.
    ShortUrl(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Clicks(total) => write!(f, "{total}"),
            Outcome::ShortUrl(url) => f.write_str(url),
        }
    }
}

/// Wires the services over one transport and credential.
pub struct App<T: VkTransport> {
    links: LinkService<T>,
    stats: StatsService<T>,
}

impl<T: VkTransport> App<T> {
    pub fn new(config: &Config, transport: T) -> Self {
        let api = Arc::new(VkApiClient::new(
            Arc::new(transport),
            config.access_token.clone(),
            config.api_version.clone(),
        ));

        Self {
            links: LinkService::new(api.clone()),
            stats: StatsService::new(api),
        }
    }

    /// Processes one input URL. At most two sequential API calls.
    ///
    /// # Errors
    ///
    /// Propagates [`AppError::Request`] and [`AppError::RemoteService`] from the
    /// chosen branch. Classification itself never fails.
    pub async fn process(&self, input: &str) -> Result<Outcome, AppError> {
        let url = input.trim();

        match self.links.classify(url).await {
            Classification::ShortLink(key) => {
                tracing::info!(key = %key, "Existing vk.cc link, counting clicks");
                self.stats.count_clicks(&key).await.map(Outcome::Clicks)
            }
            Classification::NotShortLink => {
                tracing::info!("Shortening URL");
                self.links.shorten(url).await.map(Outcome::ShortUrl)
            }
        }
    }
}

/// Loads configuration, builds the transport, then processes `input`.
///
/// Configuration is resolved before `connect` runs, so a missing credential
/// fails without any transport being created or called.
///
/// # Errors
///
/// Returns the first [`AppError`] from loading, connecting or processing.
pub async fn bootstrap<T, L, C>(input: &str, load_config: L, connect: C) -> Result<Outcome, AppError>
where
    T: VkTransport,
    L: FnOnce() -> Result<Config, AppError>,
    C: FnOnce(&Config) -> Result<T, AppError>,
{
    let config = load_config()?;
    let transport = connect(&config)?;

    App::new(&config, transport).process(input).await
}
