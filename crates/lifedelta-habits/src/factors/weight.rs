use lifedelta_core::models::RiskFactor;

/// Ten days lost per kilogram gained.
pub const DAYS_PER_UNIT: f64 = -10.0;

pub const NAME: &str = "Weight";

/// Always flagged negative, whatever the sign of the change.
pub fn assess(change: f64) -> RiskFactor {
    RiskFactor::new(
        NAME,
        change * DAYS_PER_UNIT,
        "Maintaining healthy weight reduces disease risk",
        false,
    )
}
