use triage_core::config::ObservabilityConfig;
use triage_core::tracing_setup::{init_tracing, init_tracing_from_config};

#[test]
fn init_is_idempotent() {
    let config = ObservabilityConfig {
        log_level: Some("triage_core=debug".into()),
        json: Some(true),
    };
    init_tracing_from_config(&config);
    init_tracing_from_config(&config);
    // The shared Once has fired; this must not try to install a second subscriber.
    init_tracing();
    tracing::debug!("tracing initialized");
}
