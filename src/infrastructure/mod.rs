//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`vk`] - VK API transport, response decoding and typed client

pub mod vk;
