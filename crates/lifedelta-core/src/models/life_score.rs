use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ConfidenceInterval;

/// Point-in-time estimate of remaining life expectancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LifeScore {
    pub remaining_years: f64,
    pub confidence_range: ConfidenceInterval,
    /// Simulated week-over-week fluctuation, in years.
    pub weekly_delta: f64,
    pub last_updated: DateTime<Utc>,
}

impl LifeScore {
    /// Stamp a new score with the current time.
    pub fn new(remaining_years: f64, confidence_range: ConfidenceInterval, weekly_delta: f64) -> Self {
        Self {
            remaining_years,
            confidence_range,
            weekly_delta,
            last_updated: Utc::now(),
        }
    }
}
