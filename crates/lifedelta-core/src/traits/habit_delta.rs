use crate::habits::HabitChangeSet;
use crate::health::HealthSnapshot;
use crate::models::LifeDelta;

/// Habit change projection.
pub trait IHabitDeltaCalculator: Send + Sync {
    /// Project `changes` onto `snapshot`. Deterministic apart from the timestamp.
    fn compute_delta(&self, snapshot: &HealthSnapshot, changes: &HabitChangeSet) -> LifeDelta;
}
