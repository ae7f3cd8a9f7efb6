//! Value types passed through a single invocation.
//!
//! None of these are persisted. They are derived from the command line, the
//! environment, or a decoded VK response and dropped once the result is printed.
//!
//! - [`AccessToken`] - The VK API credential
//! - [`ShortLinkKey`] - Path segment of a `vk.cc` link
//! - [`ShortLink`] - Result of `utils.getShortLink`
//! - [`LinkStats`], [`ClickSeries`], [`DailyStat`] - Result of `utils.getLinkStats`
//! - [`StatsWindow`] - Time window requested from `utils.getLinkStats`

pub mod access_token;
pub mod link_stats;
pub mod short_link;

pub use access_token::AccessToken;
pub use link_stats::{ClickSeries, DailyStat, LinkStats, StatsInterval, StatsWindow};
pub use short_link::{SHORT_LINK_DOMAIN, ShortLink, ShortLinkKey};
