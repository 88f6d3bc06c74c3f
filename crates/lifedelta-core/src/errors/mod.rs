mod config_error;
mod snapshot_error;

pub use config_error::ConfigError;
pub use snapshot_error::SnapshotError;

/// Top-level error for the boundaries around the engine: config loading,
/// habit key parsing, and optional snapshot validation.
///
/// The scoring operations themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum LifeDeltaError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid health snapshot: {0}")]
    InvalidSnapshot(#[from] SnapshotError),

    #[error("unknown habit key: {key}")]
    UnknownHabit { key: String },
}

pub type LifeDeltaResult<T> = Result<T, LifeDeltaError>;
