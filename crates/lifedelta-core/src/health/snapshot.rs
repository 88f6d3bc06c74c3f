use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::BiologicalSex;
use crate::config::defaults;
use crate::errors::SnapshotError;

/// Point-in-time health measurements.
///
/// Built by the health-data collaborator, which substitutes the documented
/// defaults for anything it cannot read. The engines take it by reference and
/// never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct HealthSnapshot {
    /// Years.
    pub age: u32,
    pub sex: BiologicalSex,
    /// Kilograms.
    pub weight_kg: f64,
    /// Centimeters.
    pub height_cm: f64,
    pub steps_today: u32,
    /// Beats per minute.
    pub resting_heart_rate_bpm: f64,
    /// Average hours per night.
    pub sleep_hours: f64,
    /// ml/kg/min.
    pub vo2_max: f64,
    pub smoker: bool,
    pub alcohol_drinks_per_week: f64,
    pub exercise_minutes_per_week: f64,
}

impl Default for HealthSnapshot {
    fn default() -> Self {
        Self {
            age: defaults::DEFAULT_AGE_YEARS,
            sex: BiologicalSex::NotSet,
            weight_kg: defaults::DEFAULT_WEIGHT_KG,
            height_cm: defaults::DEFAULT_HEIGHT_CM,
            steps_today: defaults::DEFAULT_STEPS_TODAY,
            resting_heart_rate_bpm: defaults::DEFAULT_RESTING_HEART_RATE_BPM,
            sleep_hours: defaults::DEFAULT_SLEEP_HOURS,
            vo2_max: defaults::DEFAULT_VO2_MAX,
            smoker: false,
            alcohol_drinks_per_week: defaults::DEFAULT_ALCOHOL_DRINKS_PER_WEEK,
            exercise_minutes_per_week: defaults::DEFAULT_EXERCISE_MINUTES_PER_WEEK,
        }
    }
}

impl HealthSnapshot {
    /// Body mass index: `weight_kg / height_m²`.
    ///
    /// Not clamped; a zero height yields infinity and NaN inputs propagate.
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }

    /// Boundary check for callers that accept snapshots from untrusted input.
    ///
    /// The engines do not call this; they propagate whatever arithmetic the
    /// inputs produce.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        positive("weightKg", self.weight_kg)?;
        positive("heightCm", self.height_cm)?;
        positive("restingHeartRateBpm", self.resting_heart_rate_bpm)?;
        non_negative("sleepHours", self.sleep_hours)?;
        non_negative("vo2Max", self.vo2_max)?;
        non_negative("alcoholDrinksPerWeek", self.alcohol_drinks_per_week)?;
        non_negative("exerciseMinutesPerWeek", self.exercise_minutes_per_week)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), SnapshotError> {
    if !value.is_finite() {
        return Err(SnapshotError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(SnapshotError::NotPositive { field, value });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), SnapshotError> {
    if !value.is_finite() {
        return Err(SnapshotError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(SnapshotError::Negative { field, value });
    }
    Ok(())
}
