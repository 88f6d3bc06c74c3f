use lifedelta_core::config::SurvivalConfig;
use lifedelta_core::health::HealthSnapshot;
use lifedelta_core::models::LifeScore;
use lifedelta_core::traits::ISurvivalEstimator;
use lifedelta_observability::estimate_span;
use rand::Rng;
use tracing::debug;

use crate::{formula, jitter};

/// Survival estimator. Stateless apart from its config; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct SurvivalEstimator {
    config: SurvivalConfig,
}

impl SurvivalEstimator {
    /// Create an estimator with the default placeholder parameters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SurvivalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SurvivalConfig {
        &self.config
    }

    /// Estimate with a caller-supplied random source for the weekly delta.
    ///
    /// The snapshot does not yet feed the formula.
    pub fn estimate_with_rng<R: Rng>(
        &self,
        snapshot: Option<&HealthSnapshot>,
        rng: &mut R,
    ) -> LifeScore {
        let _span = estimate_span!(snapshot.is_some()).entered();

        let remaining = formula::remaining_years(&self.config);
        let range = formula::confidence_range(remaining, &self.config);
        let weekly = jitter::weekly_delta(rng, self.config.weekly_delta_amplitude);

        debug!(
            remaining_years = remaining,
            lower = range.lower,
            upper = range.upper,
            weekly_delta = weekly,
            "life score estimated"
        );
        LifeScore::new(remaining, range, weekly)
    }
}

impl ISurvivalEstimator for SurvivalEstimator {
    fn estimate(&self, snapshot: Option<&HealthSnapshot>) -> LifeScore {
        // Resampled on every call from the thread-local generator.
        self.estimate_with_rng(snapshot, &mut rand::thread_rng())
    }
}
