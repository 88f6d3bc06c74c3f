//! LifeDeltaRuntime — owns both engines and the config they were built from.

use lifedelta_core::config::LifeDeltaConfig;
use lifedelta_core::errors::{ConfigError, LifeDeltaResult};
use lifedelta_core::habits::HabitChangeSet;
use lifedelta_core::health::HealthSnapshot;
use lifedelta_core::models::{LifeDelta, LifeScore};
use lifedelta_core::traits::{IHabitDeltaCalculator, ISurvivalEstimator};
use lifedelta_habits::HabitDeltaCalculator;
use lifedelta_survival::SurvivalEstimator;
use tracing::info;

/// Options for building a runtime.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    /// TOML configuration string. If None, uses defaults.
    pub config_toml: Option<String>,
    /// Install the tracing subscriber from the `[observability]` section.
    pub init_tracing: bool,
}

/// Both engines behind one handle. `Send + Sync`; share it behind an `Arc`.
#[derive(Debug)]
pub struct LifeDeltaRuntime {
    pub survival: SurvivalEstimator,
    pub habits: HabitDeltaCalculator,
    pub config: LifeDeltaConfig,
}

impl LifeDeltaRuntime {
    pub fn new(opts: RuntimeOptions) -> LifeDeltaResult<Self> {
        let config = match &opts.config_toml {
            Some(toml_str) => LifeDeltaConfig::from_toml(toml_str).map_err(|e| {
                ConfigError::Parse {
                    reason: e.to_string(),
                }
            })?,
            None => LifeDeltaConfig::default(),
        };
        config.validate()?;
        Ok(Self::with_config(config, opts.init_tracing))
    }

    fn with_config(config: LifeDeltaConfig, init_tracing: bool) -> Self {
        if init_tracing {
            lifedelta_observability::init_tracing_with_config(&config.observability);
        }
        info!(
            version = lifedelta_core::constants::VERSION,
            top_n = config.habits.top_risk_factor_limit,
            "lifedelta runtime ready"
        );
        Self {
            survival: SurvivalEstimator::with_config(config.survival.clone()),
            habits: HabitDeltaCalculator::with_config(config.habits.clone()),
            config,
        }
    }

    /// Fresh `LifeScore` for the given snapshot.
    pub fn estimate(&self, snapshot: Option<&HealthSnapshot>) -> LifeScore {
        self.survival.estimate(snapshot)
    }

    /// Fresh `LifeDelta` for a typed change set.
    pub fn compute_delta(&self, snapshot: &HealthSnapshot, changes: &HabitChangeSet) -> LifeDelta {
        self.habits.compute_delta(snapshot, changes)
    }

    /// Fresh `LifeDelta` for string-keyed slider values. Unknown keys are ignored.
    pub fn compute_delta_raw<I, K>(&self, snapshot: &HealthSnapshot, raw: I) -> LifeDelta
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let changes = HabitChangeSet::from_raw(raw);
        self.compute_delta(snapshot, &changes)
    }
}

impl Default for LifeDeltaRuntime {
    fn default() -> Self {
        Self::with_config(LifeDeltaConfig::default(), false)
    }
}
