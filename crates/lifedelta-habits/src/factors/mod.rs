//! Per-habit impact functions. Each is a fixed linear multiplier.

pub mod exercise;
pub mod sleep;
pub mod smoking;
pub mod weight;

use lifedelta_core::habits::HabitKey;
use lifedelta_core::models::RiskFactor;

/// Habits that feed the calculation, in evaluation order.
pub const WIRED_HABITS: [HabitKey; 4] = [
    HabitKey::Smoking,
    HabitKey::Exercise,
    HabitKey::Sleep,
    HabitKey::Weight,
];

/// Assess one habit change. Returns `None` for habits not wired into the model.
pub fn assess(key: HabitKey, change: f64) -> Option<RiskFactor> {
    match key {
        HabitKey::Smoking => Some(smoking::assess(change)),
        HabitKey::Exercise => Some(exercise::assess(change)),
        HabitKey::Sleep => Some(sleep::assess(change)),
        HabitKey::Weight => Some(weight::assess(change)),
        // Exposed as a slider but has no multiplier.
        HabitKey::Alcohol => None,
    }
}
