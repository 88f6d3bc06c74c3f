// Single source of truth for all default values.

// --- Survival ---
pub const DEFAULT_BASELINE_LIFE_EXPECTANCY_YEARS: f64 = 80.0;
pub const DEFAULT_ASSUMED_CURRENT_AGE_YEARS: f64 = 30.0;
pub const DEFAULT_SURVIVAL_HALF_WIDTH_YEARS: f64 = 5.0;
pub const DEFAULT_WEEKLY_DELTA_AMPLITUDE: f64 = 0.1;

// --- Habits ---
pub const DEFAULT_DELTA_HALF_WIDTH_DAYS: f64 = 30.0;
pub const DEFAULT_TOP_RISK_FACTOR_LIMIT: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = false;

// --- Health snapshot fallbacks ---
pub const DEFAULT_AGE_YEARS: u32 = 30;
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_STEPS_TODAY: u32 = 8_000;
pub const DEFAULT_RESTING_HEART_RATE_BPM: f64 = 70.0;
pub const DEFAULT_SLEEP_HOURS: f64 = 7.5;
pub const DEFAULT_VO2_MAX: f64 = 35.0;
pub const DEFAULT_ALCOHOL_DRINKS_PER_WEEK: f64 = 0.0;
pub const DEFAULT_EXERCISE_MINUTES_PER_WEEK: f64 = 150.0;
