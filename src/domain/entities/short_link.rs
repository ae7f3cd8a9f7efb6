//! `vk.cc` short links and their keys.

use std::fmt;

use serde::Deserialize;
use url::Url;

/// Host of every link produced by `utils.getShortLink`.
pub const SHORT_LINK_DOMAIN: &str = "vk.cc";

/// Path segment identifying a short link on [`SHORT_LINK_DOMAIN`].
///
/// Holding a `ShortLinkKey` only means the URL *looks* like a VK short link.
/// Whether VK knows the key is decided by
/// [`crate::application::services::LinkService::classify`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortLinkKey(String);

impl ShortLinkKey {
    /// Extracts the key from a URL on [`SHORT_LINK_DOMAIN`].
    ///
    /// Returns `None` when the input is not an absolute URL, when the host is
    /// anything other than `vk.cc` (compared case-insensitively, port ignored),
    /// or when the path is empty once leading slashes are removed. Query and
    /// fragment are not part of the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use vk_links::domain::entities::ShortLinkKey;
    ///
    /// let key = ShortLinkKey::from_url("https://VK.cc/abc123").unwrap();
    /// assert_eq!(key.as_str(), "abc123");
    ///
    /// assert!(ShortLinkKey::from_url("https://vk.cc/").is_none());
    /// assert!(ShortLinkKey::from_url("https://example.com/abc123").is_none());
    /// ```
    pub fn from_url(input: &str) -> Option<Self> {
        let url = Url::parse(input).ok()?;
        let host = url.host_str()?;

        if !host.eq_ignore_ascii_case(SHORT_LINK_DOMAIN) {
            return None;
        }

        let key = url.path().trim_start_matches('/');
        if key.is_empty() {
            return None;
        }

        Some(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortLinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Success payload of `utils.getShortLink`.
///
/// Only `short_url` is required; VK also echoes the source URL and returns the
/// key plus an `access_key` for private statistics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortLink {
    pub short_url: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub access_key: Option<String>,
}
