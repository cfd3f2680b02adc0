//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClientConfig, ObservabilityConfig};
use crate::constants::{CONFIG_FILE_NAME, LOG_ENV_VAR};
use crate::base_url::BaseUrl;
use crate::errors::{ConfigError, PredictError};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`TRIAGE_*`)
/// 3. Project config (`triage.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TriageConfig {
    pub client: ClientConfig,
    pub observability: ObservabilityConfig,
}

/// Overrides a caller can apply on top of file and environment config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
    pub validate_responses: Option<bool>,
    pub log_level: Option<String>,
}

impl TriageConfig {
    /// Load configuration with layered resolution. See the type docs.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;
        tracing::debug!(
            base_url = config.client.base_url.as_deref().unwrap_or_default(),
            "config: loaded"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string. Does not validate.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TriageConfig) -> Result<(), ConfigError> {
        match config.client.base_url.as_deref() {
            None => {
                return Err(ConfigError::ValidationFailed {
                    field: "client.base_url".to_string(),
                    message: "required; there is no default endpoint".to_string(),
                })
            }
            Some(url) => {
                BaseUrl::parse(url).map_err(|e| ConfigError::ValidationFailed {
                    field: "client.base_url".to_string(),
                    message: match e {
                        PredictError::InvalidBaseUrl { reason, .. } => reason,
                        other => other.to_string(),
                    },
                })?;
            }
        }
        if config.client.timeout_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "client.timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut TriageConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TriageConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut TriageConfig, other: &TriageConfig) {
        // Client
        if other.client.base_url.is_some() {
            base.client.base_url = other.client.base_url.clone();
        }
        if other.client.timeout_ms.is_some() {
            base.client.timeout_ms = other.client.timeout_ms;
        }
        if other.client.validate_responses.is_some() {
            base.client.validate_responses = other.client.validate_responses;
        }
        if other.client.gzip.is_some() {
            base.client.gzip = other.client.gzip;
        }
        if other.client.user_agent.is_some() {
            base.client.user_agent = other.client.user_agent.clone();
        }

        // Observability
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
        if other.observability.json.is_some() {
            base.observability.json = other.observability.json;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable numeric or boolean values are rejected, not ignored.
    fn apply_env_overrides(config: &mut TriageConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("TRIAGE_BASE_URL") {
            config.client.base_url = Some(val);
        }
        if let Ok(val) = std::env::var("TRIAGE_TIMEOUT_MS") {
            let v = val.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                field: "TRIAGE_TIMEOUT_MS".to_string(),
                message: e.to_string(),
            })?;
            config.client.timeout_ms = Some(v);
        }
        if let Ok(val) = std::env::var("TRIAGE_VALIDATE_RESPONSES") {
            let v = val.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                field: "TRIAGE_VALIDATE_RESPONSES".to_string(),
                message: e.to_string(),
            })?;
            config.client.validate_responses = Some(v);
        }
        if let Ok(val) = std::env::var(LOG_ENV_VAR) {
            config.observability.log_level = Some(val);
        }
        Ok(())
    }

    fn apply_overrides(config: &mut TriageConfig, o: &ConfigOverrides) {
        if let Some(ref v) = o.base_url {
            config.client.base_url = Some(v.clone());
        }
        if let Some(v) = o.timeout_ms {
            config.client.timeout_ms = Some(v);
        }
        if let Some(v) = o.validate_responses {
            config.client.validate_responses = Some(v);
        }
        if let Some(ref v) = o.log_level {
            config.observability.log_level = Some(v.clone());
        }
    }
}
