//! Time-series analytics for the admin dashboard charts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart window selectable in the analytics screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl TimeRange {
    pub fn all() -> &'static [TimeRange] {
        &[TimeRange::Week, TimeRange::Month, TimeRange::Quarter, TimeRange::Year]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
            TimeRange::Year => "1y",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub range: TimeRange,
    #[serde(default)]
    pub user_growth: Vec<DataPoint>,
    #[serde(default)]
    pub transaction_volume: Vec<DataPoint>,
    #[serde(default)]
    pub tvl_history: Vec<DataPoint>,
}

impl AnalyticsOverview {
    /// Sum of transaction volume over the window.
    pub fn total_volume(&self) -> f64 {
        self.transaction_volume.iter().map(|point| point.value).sum()
    }
}
