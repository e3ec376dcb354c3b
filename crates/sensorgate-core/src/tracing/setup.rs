//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the sensorgate tracing/logging system.
///
/// Reads the `SENSORGATE_LOG` environment variable for per-target log levels.
/// Format: `SENSORGATE_LOG=sensorgate_analysis::sensor=debug,sensorgate_core=warn`
///
/// Falls back to `sensorgate=info` if `SENSORGATE_LOG` is not set or is invalid.
///
/// Idempotent. If another subscriber was already installed globally, the
/// existing one is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
