//! Errors surfaced by prediction-service operations.

use super::error_code::{self, TriageErrorCode};
use super::SchemaError;

/// Every way a model-meta, predict, or health call can fail.
///
/// `Http` and `Decode` are kept apart so callers can tell "server rejected
/// the request" from "server answered with an unexpected shape".
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The server answered with a non-success status. Displays as the
    /// response body, verbatim.
    #[error("{body}")]
    Http { status: u16, body: String },

    /// The body was not JSON, or not JSON of the expected shape.
    #[error("failed to decode response: {cause}")]
    Decode { raw: String, cause: String },

    /// The body decoded but breaks a response invariant.
    #[error("invalid response: {reason}")]
    InvalidResponse { reason: String },

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The request never produced a response (DNS, connect, reset, ...).
    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },

    #[error("request cancelled")]
    Cancelled,

    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl PredictError {
    /// HTTP status for `Http` failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a caller-side retry has a reasonable chance of succeeding:
    /// 5xx, 408, 429, network failures, and timeouts.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => *status >= 500 || *status == 408 || *status == 429,
            Self::Network { .. } | Self::Timeout { .. } => true,
            _ => false,
        }
    }

    /// Whether the failure points at the caller's input rather than the server.
    pub fn is_client_fault(&self) -> bool {
        match self {
            Self::Http { status, .. } => (400..500).contains(status),
            Self::Schema(_) | Self::InvalidBaseUrl { .. } => true,
            _ => false,
        }
    }
}

impl TriageErrorCode for PredictError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Http { .. } => error_code::HTTP_STATUS,
            Self::Decode { .. } => error_code::DECODE_ERROR,
            Self::InvalidResponse { .. } => error_code::INVALID_RESPONSE,
            Self::Schema(e) => e.error_code(),
            Self::Network { .. } => error_code::NETWORK_ERROR,
            Self::Timeout { .. } => error_code::TIMEOUT,
            Self::Cancelled => error_code::CANCELLED,
            Self::InvalidBaseUrl { .. } => error_code::INVALID_BASE_URL,
        }
    }
}
