//! Prediction client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Settings for one prediction client.
///
/// `base_url` has no default: a client is always pointed somewhere on purpose.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin of the prediction service, e.g. `https://triage.example.org`.
    pub base_url: Option<String>,
    /// Deadline for a whole request/response exchange, in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Check response invariants after decoding. Default: true.
    pub validate_responses: Option<bool>,
    /// Accept gzip-compressed responses. Default: true.
    pub gzip: Option<bool>,
    /// Extra `User-Agent` suffix.
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Config pointing at `base_url`, everything else default.
    pub fn for_base(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    pub fn effective_timeout(&self) -> Option<Duration> {
        self.timeout_ms
            .or(defaults::DEFAULT_TIMEOUT_MS)
            .map(Duration::from_millis)
    }

    pub fn effective_validate_responses(&self) -> bool {
        self.validate_responses
            .unwrap_or(defaults::DEFAULT_VALIDATE_RESPONSES)
    }

    pub fn effective_gzip(&self) -> bool {
        self.gzip.unwrap_or(defaults::DEFAULT_GZIP)
    }
}
