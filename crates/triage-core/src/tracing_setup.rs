//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize logging for a binary embedding the client.
///
/// Reads `TRIAGE_LOG` for per-target levels, e.g.
/// `TRIAGE_LOG=triage_client=debug,reqwest=warn`.
/// Falls back to `triage=info` if `TRIAGE_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber, and a subscriber
/// the host already installed is kept.
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

/// Initialize logging from an [`ObservabilityConfig`].
///
/// Uses `try_init`, so a subscriber installed elsewhere (a test harness, the
/// host application) is left alone.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(config.effective_log_level())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        if config.effective_json() {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .json()
                .try_init();
        } else {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .try_init();
        }
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_test_writer()
        .try_init();
}
