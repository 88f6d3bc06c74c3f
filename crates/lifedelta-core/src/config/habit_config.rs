use serde::{Deserialize, Serialize};

use super::defaults;

/// Habit delta calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitConfig {
    /// Half-width of the fixed band placed around the day total.
    pub confidence_half_width_days: f64,
    /// Maximum number of risk factors reported on a `LifeDelta`.
    pub top_risk_factor_limit: usize,
}

impl Default for HabitConfig {
    fn default() -> Self {
        Self {
            confidence_half_width_days: defaults::DEFAULT_DELTA_HALF_WIDTH_DAYS,
            top_risk_factor_limit: defaults::DEFAULT_TOP_RISK_FACTOR_LIMIT,
        }
    }
}
