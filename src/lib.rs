//! # VK Links
//!
//! Shortens a URL with VK's `vk.cc` service or, when given an existing `vk.cc`
//! link, reports how many times it was clicked over the last 100 days.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Value types and the transport trait
//! - **Application Layer** ([`application`]) - Classification, shortening, click counting
//! - **Infrastructure Layer** ([`infrastructure`]) - VK API over `reqwest`
//! - **Entry logic** ([`app`]) - Chooses a branch and produces the result line
//!
//! ## Quick Start
//!
//! ```bash
//! export VK_ACCESS_TOKEN="vk1.a.…"
//!
//! cargo run -- https://example.com/very/long/path   # prints https://vk.cc/…
//! cargo run -- https://vk.cc/abc123                  # prints total clicks
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`], optionally from a
//! `.env` file next to the executable.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use error::AppError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::app::{App, Outcome, bootstrap};
    pub use crate::application::services::{Classification, LinkService, StatsService};
    pub use crate::config::Config;
    pub use crate::domain::entities::{AccessToken, ShortLinkKey};
    pub use crate::domain::transport::VkTransport;
    pub use crate::error::AppError;
    pub use crate::infrastructure::vk::{HttpTransport, VkApiClient};
}
