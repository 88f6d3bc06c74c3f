//! Span definitions per engine operation.

/// Span around one survival estimate.
#[macro_export]
macro_rules! estimate_span {
    ($has_snapshot:expr) => {
        tracing::debug_span!("lifedelta.estimate", has_snapshot = $has_snapshot)
    };
}

/// Span around one habit delta calculation.
#[macro_export]
macro_rules! delta_span {
    ($change_count:expr) => {
        tracing::debug_span!("lifedelta.delta", change_count = $change_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ESTIMATE: &str = "lifedelta.estimate";
    pub const DELTA: &str = "lifedelta.delta";
}
