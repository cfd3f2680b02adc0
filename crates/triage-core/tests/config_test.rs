//! Tests for the layered configuration system.

use std::sync::Mutex;
use std::time::Duration;

use triage_core::config::{ConfigOverrides, TriageConfig};
use triage_core::errors::ConfigError;
use triage_core::BaseUrl;

/// Serializes tests that touch environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_triage_env_vars() {
    for key in [
        "TRIAGE_BASE_URL",
        "TRIAGE_TIMEOUT_MS",
        "TRIAGE_VALIDATE_RESPONSES",
        "TRIAGE_LOG",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_triage_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("triage.toml"),
        r#"
[client]
base_url = "http://models.internal:8000"
timeout_ms = 5000

[observability]
log_level = "warn"
"#,
    )
    .unwrap();

    std::env::set_var("TRIAGE_TIMEOUT_MS", "750");

    let overrides = ConfigOverrides {
        base_url: Some("https://triage.example.org".into()),
        ..Default::default()
    };
    let config = TriageConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Override beats file for base_url.
    assert_eq!(
        config.client.base_url.as_deref(),
        Some("https://triage.example.org")
    );
    // Env beats file for timeout.
    assert_eq!(config.client.effective_timeout(), Some(Duration::from_millis(750)));
    // File beats default for log level.
    assert_eq!(config.observability.effective_log_level(), "warn");

    clear_triage_env_vars();
}

#[test]
fn test_missing_base_url_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_triage_env_vars();

    let dir = tempdir();
    let err = TriageConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "client.base_url"
    ));
}

#[test]
fn test_env_only_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_triage_env_vars();

    std::env::set_var("TRIAGE_BASE_URL", "http://localhost:8000");
    std::env::set_var("TRIAGE_VALIDATE_RESPONSES", "false");
    let dir = tempdir();
    let config = TriageConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.client.base_url.as_deref(), Some("http://localhost:8000"));
    assert!(!config.client.effective_validate_responses());
    assert_eq!(config.client.effective_timeout(), None);

    clear_triage_env_vars();
}

#[test]
fn test_bad_env_value_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_triage_env_vars();

    std::env::set_var("TRIAGE_BASE_URL", "http://localhost:8000");
    std::env::set_var("TRIAGE_TIMEOUT_MS", "soon");
    let dir = tempdir();
    let err = TriageConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    clear_triage_env_vars();
}

#[test]
fn test_invalid_toml_reports_path() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_triage_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("triage.toml"), "[client\nbase_url = 1").unwrap();
    let err = TriageConfig::load(dir.path(), None).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("triage.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_validate_rejects_non_http_base() {
    let config =
        TriageConfig::from_toml("[client]\nbase_url = \"ftp://localhost:8000\"\n").unwrap();
    assert!(TriageConfig::validate(&config).is_err());
}

#[test]
fn test_validate_rejects_bad_port() {
    let config =
        TriageConfig::from_toml("[client]\nbase_url = \"http://localhost:notaport\"\n").unwrap();
    match TriageConfig::validate(&config).unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "client.base_url"),
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
    assert!(BaseUrl::parse("http://localhost:notaport").is_err());
}

#[test]
fn test_validate_accepts_uppercase_scheme() {
    let config =
        TriageConfig::from_toml("[client]\nbase_url = \"HTTPS://triage.example.org\"\n").unwrap();
    TriageConfig::validate(&config).unwrap();
    assert!(BaseUrl::parse("HTTPS://triage.example.org").is_ok());
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let config = TriageConfig::from_toml(
        "[client]\nbase_url = \"http://localhost:8000\"\ntimeout_ms = 0\n",
    )
    .unwrap();
    let err = TriageConfig::validate(&config).unwrap_err();
    assert!(err.to_string().contains("timeout_ms"));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = TriageConfig::from_toml(
        "[client]\nbase_url = \"http://localhost:8000\"\nretries = 3\n\n[ui]\ntheme = \"dark\"\n",
    )
    .unwrap();
    assert!(TriageConfig::validate(&config).is_ok());
}

#[test]
fn test_toml_roundtrip_preserves_values() {
    let config = TriageConfig::from_toml(
        "[client]\nbase_url = \"https://triage.example.org\"\ntimeout_ms = 1200\ngzip = false\n",
    )
    .unwrap();
    let back = TriageConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(back, config);
    assert!(!back.client.effective_gzip());
}
