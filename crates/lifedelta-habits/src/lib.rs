//! # lifedelta-habits
//!
//! Projects proposed habit changes onto a health snapshot.
//!
//! ## Wired habits
//!
//! | Habit | Days per unit | Unit | Polarity |
//! |-------|---------------|------|----------|
//! | Smoking | −365 | pack-equivalent | "quitting" wording when change > 0 |
//! | Exercise | +0.5 | minutes/week | positive |
//! | Sleep | +30 | hours/night | positive |
//! | Weight | −10 | kg | negative |
//!
//! Alcohol is accepted in a change set but contributes nothing.
//!
//! The total gets a fixed ±30-day band and the factors are ranked by
//! descending absolute impact, keeping the top 3.

pub mod engine;
pub mod factors;
pub mod ranking;

pub use engine::{DeltaBreakdown, HabitDeltaCalculator};
