/// Response invariants are checked unless turned off.
pub const DEFAULT_VALIDATE_RESPONSES: bool = true;

/// No client-side deadline unless configured.
pub const DEFAULT_TIMEOUT_MS: Option<u64> = None;

/// Mirrors the server's default response compression.
pub const DEFAULT_GZIP: bool = true;

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_JSON_LOGS: bool = false;
