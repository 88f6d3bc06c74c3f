mod habit_delta;
mod survival;

pub use habit_delta::IHabitDeltaCalculator;
pub use survival::ISurvivalEstimator;
