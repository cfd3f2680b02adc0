use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or full `EnvFilter` directive, e.g. `"debug"` or
    /// `"triage_client=debug,reqwest=warn"`.
    pub log_level: Option<String>,
    /// Emit JSON lines instead of human-readable output.
    pub json: Option<bool>,
}

impl ObservabilityConfig {
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(defaults::DEFAULT_LOG_LEVEL)
    }

    pub fn effective_json(&self) -> bool {
        self.json.unwrap_or(defaults::DEFAULT_JSON_LOGS)
    }
}
