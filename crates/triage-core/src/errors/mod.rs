//! Error handling for the triage client.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod predict_error;
pub mod schema_error;

pub use config_error::ConfigError;
pub use error_code::TriageErrorCode;
pub use predict_error::PredictError;
pub use schema_error::SchemaError;

/// Result alias used by every prediction-service operation.
pub type PredictResult<T> = Result<T, PredictError>;
