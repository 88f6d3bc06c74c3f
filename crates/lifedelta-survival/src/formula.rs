use lifedelta_core::config::SurvivalConfig;
use lifedelta_core::models::ConfidenceInterval;

/// Placeholder survival formula: `baseline - assumed_age`.
///
/// With defaults this is `80 - 30 = 50` years regardless of the snapshot.
pub fn remaining_years(config: &SurvivalConfig) -> f64 {
    config.baseline_life_expectancy_years - config.assumed_current_age_years
}

/// Fixed symmetric band around the point estimate.
pub fn confidence_range(remaining_years: f64, config: &SurvivalConfig) -> ConfidenceInterval {
    ConfidenceInterval::around(remaining_years, config.confidence_half_width_years)
}
