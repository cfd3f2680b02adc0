//! Configuration for the triage client.
//! TOML-based, 3-layer resolution: overrides > env > project file > defaults.

pub mod client_config;
pub mod defaults;
pub mod observability_config;
pub mod triage_config;

pub use client_config::ClientConfig;
pub use observability_config::ObservabilityConfig;
pub use triage_config::{ConfigOverrides, TriageConfig};
