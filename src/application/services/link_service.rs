//! Short-link classification and URL shortening.

use std::sync::Arc;

use crate::domain::entities::ShortLinkKey;
use crate::domain::transport::VkTransport;
use crate::error::AppError;
use crate::infrastructure::vk::VkApiClient;

/// Outcome of classifying an input URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// An existing `vk.cc` link; VK confirmed the key.
    ShortLink(ShortLinkKey),
    /// Anything else, including `vk.cc` URLs VK does not recognise.
    NotShortLink,
}

impl Classification {
    pub fn is_short_link(&self) -> bool {
        matches!(self, Classification::ShortLink(_))
    }
}

/// Service for recognising existing VK short links and creating new ones.
pub struct LinkService<T: VkTransport> {
    api: Arc<VkApiClient<T>>,
}

impl<T: VkTransport> LinkService<T> {
    /// Creates a new link service.
    pub fn new(api: Arc<VkApiClient<T>>) -> Self {
        Self { api }
    }

    /// Decides whether `url` is a `vk.cc` link VK knows about.
    ///
    /// URLs on another host or with an empty path are rejected without a
    /// network call. Otherwise the key is confirmed with one
    /// `utils.getLinkStats` request; any failure of that request, transport or
    /// application level, yields [`Classification::NotShortLink`].
    pub async fn classify(&self, url: &str) -> Classification {
        let Some(key) = ShortLinkKey::from_url(url) else {
            return Classification::NotShortLink;
        };

        match self.api.probe_link(&key).await {
            Ok(()) => Classification::ShortLink(key),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "vk.cc key not confirmed, treating as a regular URL");
                Classification::NotShortLink
            }
        }
    }

    /// Boolean form of [`Self::classify`].
    pub async fn is_shortened_link(&self, url: &str) -> bool {
        self.classify(url).await.is_short_link()
    }

    /// Shortens `url` with `utils.getShortLink` and returns the short URL.
    ///
    /// Single attempt, no caching.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Request`] on transport failures.
    /// Returns [`AppError::RemoteService`] with VK's message when the call is rejected.
    pub async fn shorten(&self, url: &str) -> Result<String, AppError> {
        let link = self.api.get_short_link(url).await?;
        Ok(link.short_url)
    }
}
