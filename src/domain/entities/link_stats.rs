//! Click statistics returned by `utils.getLinkStats`.

use serde::Deserialize;

/// Granularity of a statistics interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsInterval {
    Hour,
    Day,
    Week,
    Month,
    Forever,
}

impl StatsInterval {
    /// Value of the `interval` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsInterval::Hour => "hour",
            StatsInterval::Day => "day",
            StatsInterval::Week => "week",
            StatsInterval::Month => "month",
            StatsInterval::Forever => "forever",
        }
    }
}

/// Time window requested from `utils.getLinkStats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsWindow {
    pub interval: StatsInterval,
    pub intervals_count: u32,
}

impl StatsWindow {
    /// Window used for click counting: the 100 most recent days.
    pub const RECENT_DAYS: StatsWindow = StatsWindow {
        interval: StatsInterval::Day,
        intervals_count: 100,
    };

    /// Query parameters, in the order VK documents them.
    pub fn to_params(&self) -> [(&'static str, String); 2] {
        [
            ("interval", self.interval.as_str().to_string()),
            ("intervals_count", self.intervals_count.to_string()),
        ]
    }
}

impl Default for StatsWindow {
    fn default() -> Self {
        Self::RECENT_DAYS
    }
}

/// Views recorded for one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DailyStat {
    /// Interval start, unix seconds.
    #[serde(default)]
    pub timestamp: Option<i64>,
    pub views: u64,
}

/// Ordered per-interval view counts, newest first as VK returns them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ClickSeries(Vec<DailyStat>);

impl ClickSeries {
    pub fn new(entries: Vec<DailyStat>) -> Self {
        Self(entries)
    }

    /// Sum of `views` across every interval. An empty series totals 0.
    pub fn total_views(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, stat| acc.saturating_add(stat.views))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Success payload of `utils.getLinkStats`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkStats {
    #[serde(default)]
    pub key: Option<String>,
    pub stats: ClickSeries,
}
