/// LifeDelta engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Days per year used when converting between the two output scales.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Environment variable read by the tracing setup for log filtering.
pub const LOG_ENV_VAR: &str = "LIFEDELTA_LOG";
