use crate::health::HealthSnapshot;
use crate::models::LifeScore;

/// Remaining-life-expectancy estimation.
pub trait ISurvivalEstimator: Send + Sync {
    /// Produce a fresh `LifeScore`. Total: never fails, performs no I/O.
    fn estimate(&self, snapshot: Option<&HealthSnapshot>) -> LifeScore;
}
