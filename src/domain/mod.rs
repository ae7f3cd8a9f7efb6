//! Domain layer: value types for VK short links and the transport contract.
//!
//! Nothing here performs I/O. The [`transport::VkTransport`] trait is the seam the
//! infrastructure layer implements and tests mock.
//!
//! # Architecture
//!
//! - [`entities`] - Access token, short-link key, link statistics
//! - [`transport`] - Raw VK API call contract

pub mod entities;
pub mod transport;
