//! # lifedelta-survival
//!
//! Produces a `LifeScore` from an optional health snapshot.
//!
//! The current model is a placeholder standing in for an actuarial or trained
//! survival model: `remaining = baseline - assumed_age`, a fixed symmetric band,
//! and a weekly delta sampled uniformly per call.

pub mod engine;
pub mod formula;
pub mod jitter;

pub use engine::SurvivalEstimator;
