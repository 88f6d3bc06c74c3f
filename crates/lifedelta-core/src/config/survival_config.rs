use serde::{Deserialize, Serialize};

use super::defaults;

/// Survival estimator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurvivalConfig {
    /// Baseline life expectancy the placeholder model subtracts from (years).
    pub baseline_life_expectancy_years: f64,
    /// Age assumed by the placeholder model (years). Snapshot age is not consulted.
    pub assumed_current_age_years: f64,
    /// Half-width of the symmetric confidence range (years).
    pub confidence_half_width_years: f64,
    /// Weekly delta is sampled uniformly from `[-amplitude, amplitude]`.
    pub weekly_delta_amplitude: f64,
}

impl Default for SurvivalConfig {
    fn default() -> Self {
        Self {
            baseline_life_expectancy_years: defaults::DEFAULT_BASELINE_LIFE_EXPECTANCY_YEARS,
            assumed_current_age_years: defaults::DEFAULT_ASSUMED_CURRENT_AGE_YEARS,
            confidence_half_width_years: defaults::DEFAULT_SURVIVAL_HALF_WIDTH_YEARS,
            weekly_delta_amplitude: defaults::DEFAULT_WEEKLY_DELTA_AMPLITUDE,
        }
    }
}
