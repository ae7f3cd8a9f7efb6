//! VK API access credential.

use std::fmt;

use crate::error::AppError;

/// Number of leading characters kept visible when the token is masked.
const VISIBLE_PREFIX: usize = 4;

/// Opaque VK access token.
///
/// Immutable for the lifetime of the process. `Debug` output is masked so the
/// token never reaches logs by accident; use [`AccessToken::expose`] only when
/// building a request.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if the token is empty or blank.
    pub fn new(raw: impl Into<String>) -> Result<Self, AppError> {
        let raw = raw.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AppError::configuration("VK access token must not be empty"));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the raw token for use as the `access_token` query parameter.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns a log-safe rendering such as `vk1.***`.
    pub fn masked(&self) -> String {
        let count = self.0.chars().count();
        if count <= VISIBLE_PREFIX * 2 {
            return "***".to_string();
        }

        let prefix: String = self.0.chars().take(VISIBLE_PREFIX).collect();
        format!("{prefix}***")
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&self.masked()).finish()
    }
}
