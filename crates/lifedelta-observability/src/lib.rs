//! # lifedelta-observability
//!
//! Tracing subscriber setup and the span macros the engines open per call.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_config, spans};
