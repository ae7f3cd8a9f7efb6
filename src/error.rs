//! Error kinds surfaced by the utility.
//!
//! Every failure the binary can report falls into one of three kinds. Each kind
//! has its own user-facing prefix and process exit code, so scripts can tell a
//! broken configuration apart from a network failure or a rejection by VK.

use std::process::ExitCode;

/// Message used when VK reports an error without an `error_msg`.
pub const UNKNOWN_REMOTE_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Startup configuration is missing or invalid.
    #[error("{message}")]
    Configuration { message: String },

    /// Transport-level failure: DNS, timeout, refused connection, non-2xx status
    /// or an unreadable body.
    #[error("{message}")]
    Request { message: String },

    /// VK answered, but the payload carried an application error.
    #[error("{message}")]
    RemoteService { message: String },
}

impl AppError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }
    pub fn remote(message: impl Into<String>) -> Self {
        Self::RemoteService {
            message: message.into(),
        }
    }

    /// Prefix printed in front of the message on the error line.
    pub fn prefix(&self) -> &'static str {
        match self {
            AppError::Configuration { .. } => "Configuration error:",
            AppError::Request { .. } => "Request error:",
            AppError::RemoteService { .. } => "Error:",
        }
    }

    /// Process exit code for this error kind.
    ///
    /// `2` is left to `clap` for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Configuration { .. } => 3,
            AppError::Request { .. } => 4,
            AppError::RemoteService { .. } => 5,
        }
    }

    /// The message without its prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::Configuration { message }
            | AppError::Request { message }
            | AppError::RemoteService { message } => message,
        }
    }
}

impl From<AppError> for ExitCode {
    fn from(err: AppError) -> Self {
        ExitCode::from(err.exit_code())
    }
}

/// The request URL is dropped: its query string carries the access token.
impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::request(e.without_url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_non_zero() {
        let codes = [
            AppError::configuration("x").exit_code(),
            AppError::request("x").exit_code(),
            AppError::remote("x").exit_code(),
        ];

        assert!(codes.iter().all(|&c| c != 0 && c != 2));
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }

    #[test]
    fn test_display_is_the_bare_message() {
        let err = AppError::remote("Invalid token");
        assert_eq!(err.to_string(), "Invalid token");
        assert_eq!(err.message(), "Invalid token");
        assert_eq!(err.prefix(), "Error:");
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(AppError::request("x").prefix(), "Request error:");
        assert_eq!(
            AppError::configuration("x").prefix(),
            "Configuration error:"
        );
    }
}
