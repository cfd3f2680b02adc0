//! Client-side schema errors: the caller's records do not fit the model.

use super::error_code::{self, TriageErrorCode};

/// A record (or batch) does not match what the model expects.
///
/// These are raised before a request is sent, or after a response whose
/// `n_features` disagrees with the submitted record width.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("record is missing features: {}", .names.join(", "))]
    MissingFeatures { names: Vec<String> },

    #[error("record has features the model does not declare: {}", .names.join(", "))]
    UnexpectedFeatures { names: Vec<String> },

    #[error("feature {name} has non-finite value {value}")]
    NonFiniteValue { name: String, value: f64 },

    #[error("server consumed {expected} features but record {record_index} has {actual}")]
    FeatureCountMismatch {
        expected: usize,
        actual: usize,
        record_index: usize,
    },

    #[error("batch contains no records")]
    EmptyBatch,
}

impl TriageErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        error_code::SCHEMA_ERROR
    }
}
