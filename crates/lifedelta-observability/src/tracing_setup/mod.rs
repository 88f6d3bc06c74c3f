//! Tracing setup: subscriber initialization and span definitions.

pub mod spans;

use std::sync::Once;

use lifedelta_core::config::ObservabilityConfig;
use lifedelta_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Reads `LIFEDELTA_LOG` for filter directives and falls back to `info`.
/// Idempotent; later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
        install(filter, false);
    });
}

/// Initialize from config. `LIFEDELTA_LOG` still wins over `log_level` when set.
///
/// Returns `false` if a subscriber had already been installed by this crate.
pub fn init_tracing_with_config(config: &ObservabilityConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        install(filter, config.json_output);
        installed = true;
    });
    installed
}

fn install(filter: EnvFilter, json: bool) {
    // try_init: a host application may already own the global subscriber.
    let result = if json {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .with(filter)
            .try_init()
    };
    if let Err(e) = result {
        tracing::debug!(error = %e, "global subscriber already set");
    }
}
