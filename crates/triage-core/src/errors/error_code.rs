//! TriageErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so callers (and logs) can branch on a
/// stable code instead of parsing messages.
pub trait TriageErrorCode {
    /// Returns the error code string (e.g., "HTTP_STATUS").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const HTTP_STATUS: &str = "HTTP_STATUS";
pub const DECODE_ERROR: &str = "DECODE_ERROR";
pub const INVALID_RESPONSE: &str = "INVALID_RESPONSE";
pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
pub const TIMEOUT: &str = "TIMEOUT";
pub const CANCELLED: &str = "CANCELLED";
pub const INVALID_BASE_URL: &str = "INVALID_BASE_URL";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
