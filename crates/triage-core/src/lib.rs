//! # triage-core
//!
//! Foundation crate for the triage prediction client.
//! Defines the wire models, errors, config, traits, tracing setup, and constants.
//! The client crate depends on this; consumers can depend on it alone to
//! implement or mock [`traits::IPredictionService`].

pub mod base_url;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use base_url::BaseUrl;
pub use config::{ClientConfig, TriageConfig};
pub use errors::{PredictError, PredictResult, SchemaError};
pub use models::{FeatureRecord, HealthStatus, ModelMeta, PredictResponse, Prediction};
