//! # lifedelta-core
//!
//! Foundation crate for the LifeDelta scoring engine.
//! Defines the health snapshot, habit change sets, output records, engine traits,
//! errors, config, and defaults. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod habits;
pub mod health;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LifeDeltaConfig;
pub use errors::{LifeDeltaError, LifeDeltaResult};
pub use habits::{HabitChangeSet, HabitKey};
pub use health::{BiologicalSex, HealthSnapshot};
pub use models::{ConfidenceInterval, LifeDelta, LifeScore, RiskFactor};
