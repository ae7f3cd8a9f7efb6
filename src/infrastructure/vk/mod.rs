//! VK API integration.
//!
//! Requests go through a [`crate::domain::transport::VkTransport`]; responses
//! are unwrapped by [`envelope`] into typed payloads or [`crate::AppError`]s.

pub mod client;
pub mod envelope;
pub mod http_transport;

pub use client::{GET_LINK_STATS, GET_SHORT_LINK, VkApiClient};
pub use http_transport::HttpTransport;
