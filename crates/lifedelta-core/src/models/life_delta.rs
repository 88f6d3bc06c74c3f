use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ConfidenceInterval, RiskFactor};
use crate::constants::DAYS_PER_YEAR;

/// Projected change in remaining life expectancy from a set of habit changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LifeDelta {
    /// Signed total, in days.
    pub days_gained: f64,
    pub confidence_interval: ConfidenceInterval,
    /// Ordered by descending absolute impact.
    pub top_risk_factors: Vec<RiskFactor>,
    pub timestamp: DateTime<Utc>,
}

impl LifeDelta {
    /// Stamp a new delta with the current time.
    pub fn new(
        days_gained: f64,
        confidence_interval: ConfidenceInterval,
        top_risk_factors: Vec<RiskFactor>,
    ) -> Self {
        Self {
            days_gained,
            confidence_interval,
            top_risk_factors,
            timestamp: Utc::now(),
        }
    }

    /// The value shown before any habit has been adjusted.
    pub fn zero() -> Self {
        Self::new(0.0, ConfidenceInterval::default(), Vec::new())
    }

    pub fn years_gained(&self) -> f64 {
        self.days_gained / DAYS_PER_YEAR
    }
}
