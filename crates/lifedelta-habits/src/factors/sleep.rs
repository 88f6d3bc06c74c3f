use lifedelta_core::models::RiskFactor;

/// Thirty days per nightly hour.
pub const DAYS_PER_UNIT: f64 = 30.0;

pub const NAME: &str = "Sleep";

pub fn assess(change: f64) -> RiskFactor {
    RiskFactor::new(
        NAME,
        change * DAYS_PER_UNIT,
        "Adequate sleep is crucial for longevity",
        true,
    )
}
