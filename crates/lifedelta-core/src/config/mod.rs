pub mod defaults;
pub mod habit_config;
pub mod observability_config;
pub mod survival_config;

pub use habit_config::HabitConfig;
pub use observability_config::ObservabilityConfig;
pub use survival_config::SurvivalConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, LifeDeltaResult};

/// Top-level engine configuration. Every section falls back to its defaults,
/// so an empty TOML document reproduces the reference behavior exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeDeltaConfig {
    pub survival: SurvivalConfig,
    pub habits: HabitConfig,
    pub observability: ObservabilityConfig,
}

impl LifeDeltaConfig {
    /// Parse a TOML string. Does not validate; call [`LifeDeltaConfig::validate`].
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read, parse, and validate a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> LifeDeltaResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml(&raw).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric fields: finite, non-negative widths, and a non-zero top-N limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.survival;
        finite("survival.baseline_life_expectancy_years", s.baseline_life_expectancy_years)?;
        finite("survival.assumed_current_age_years", s.assumed_current_age_years)?;
        non_negative("survival.confidence_half_width_years", s.confidence_half_width_years)?;
        non_negative("survival.weekly_delta_amplitude", s.weekly_delta_amplitude)?;
        if !(2.0 * s.weekly_delta_amplitude).is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "survival.weekly_delta_amplitude",
                reason: format!("span of {} overflows", s.weekly_delta_amplitude),
            });
        }

        let h = &self.habits;
        non_negative("habits.confidence_half_width_days", h.confidence_half_width_days)?;
        if h.top_risk_factor_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "habits.top_risk_factor_limit",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.observability.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("{value} is not finite"),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("{value} is negative"),
        });
    }
    Ok(())
}
