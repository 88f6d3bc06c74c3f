use lifedelta_core::config::HabitConfig;
use lifedelta_core::habits::HabitChangeSet;
use lifedelta_core::health::HealthSnapshot;
use lifedelta_core::models::{ConfidenceInterval, LifeDelta, RiskFactor};
use lifedelta_core::traits::IHabitDeltaCalculator;
use lifedelta_observability::delta_span;
use tracing::debug;

use crate::{factors, ranking};

/// Every contributing factor in evaluation order, before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaBreakdown {
    pub factors: Vec<RiskFactor>,
    pub total_days: f64,
}

/// Habit delta calculator. Pure: no randomness, no shared state.
#[derive(Debug, Clone, Default)]
pub struct HabitDeltaCalculator {
    config: HabitConfig,
}

impl HabitDeltaCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HabitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HabitConfig {
        &self.config
    }

    /// Assess each wired habit present in `changes` and sum the impacts.
    ///
    /// The snapshot is accepted for future personalization; the multipliers
    /// do not read it today.
    pub fn compute_breakdown(
        &self,
        _snapshot: &HealthSnapshot,
        changes: &HabitChangeSet,
    ) -> DeltaBreakdown {
        let mut total_days = 0.0;
        let mut collected = Vec::with_capacity(factors::WIRED_HABITS.len());

        for key in factors::WIRED_HABITS {
            let Some(change) = changes.get(key) else {
                continue;
            };
            if let Some(factor) = factors::assess(key, change) {
                total_days += factor.impact;
                collected.push(factor);
            }
        }

        DeltaBreakdown {
            factors: collected,
            total_days,
        }
    }
}

impl IHabitDeltaCalculator for HabitDeltaCalculator {
    fn compute_delta(&self, snapshot: &HealthSnapshot, changes: &HabitChangeSet) -> LifeDelta {
        let _span = delta_span!(changes.len()).entered();

        let breakdown = self.compute_breakdown(snapshot, changes);
        let interval =
            ConfidenceInterval::around(breakdown.total_days, self.config.confidence_half_width_days);
        let contributing = breakdown.factors.len();
        let top = ranking::top_by_magnitude(breakdown.factors, self.config.top_risk_factor_limit);

        debug!(
            total_days = breakdown.total_days,
            contributing,
            reported = top.len(),
            ignored = changes.ignored_keys().len(),
            "habit delta computed"
        );
        LifeDelta::new(breakdown.total_days, interval, top)
    }
}
