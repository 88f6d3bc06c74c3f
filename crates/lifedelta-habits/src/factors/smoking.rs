use lifedelta_core::models::RiskFactor;

/// One year lost per pack-equivalent.
pub const DAYS_PER_UNIT: f64 = -365.0;

pub const NAME: &str = "Smoking";

/// Impact of a smoking change.
///
/// The wording branch is `change > 0 → "quitting"`, even though a positive
/// change carries a negative impact. The flag is always negative.
// TODO: confirm with product whether a positive change means starting or quitting before flipping the wording.
pub fn assess(change: f64) -> RiskFactor {
    let description = if change > 0.0 {
        "Quitting smoking adds significant years"
    } else {
        "Smoking reduces life expectancy"
    };
    RiskFactor::new(NAME, change * DAYS_PER_UNIT, description, false)
}
