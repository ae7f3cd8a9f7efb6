//! Application layer services implementing the tool's decisions.
//!
//! Services consume the [`crate::infrastructure::vk::VkApiClient`] and expose the
//! three operations the command line needs.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short-link classification and shortening
//! - [`services::stats_service::StatsService`] - Click counting
pub mod services;
