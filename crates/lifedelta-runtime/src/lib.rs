//! # lifedelta-runtime
//!
//! Entry point for the presentation layer. Owns one estimator and one
//! calculator built from a single config. Holds no results: the caller keeps
//! whatever "current" score or delta it displays.

pub mod runtime;

pub use runtime::{LifeDeltaRuntime, RuntimeOptions};
