use lifedelta_core::models::RiskFactor;

/// Half a day per weekly minute.
pub const DAYS_PER_UNIT: f64 = 0.5;

pub const NAME: &str = "Exercise";

pub fn assess(change: f64) -> RiskFactor {
    RiskFactor::new(
        NAME,
        change * DAYS_PER_UNIT,
        "Regular exercise improves cardiovascular health",
        true,
    )
}
