/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Origin of a locally running prediction server. Only for development;
/// nothing in the client falls back to it.
pub const DEV_BASE_URL: &str = "http://localhost:8000";

/// Route prefix shared by every endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// Model metadata endpoint.
pub const MODEL_META_PATH: &str = "/api/v1/model_meta";

/// Inference endpoint.
pub const PREDICT_PATH: &str = "/api/v1/predict";

/// Liveness endpoint.
pub const HEALTH_PATH: &str = "/api/v1/health";

/// Status string reported by a healthy server.
pub const HEALTH_OK: &str = "ok";

/// Environment variable read by [`crate::tracing_setup::init_tracing`].
pub const LOG_ENV_VAR: &str = "TRIAGE_LOG";

/// Filter used when `TRIAGE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "triage=info";

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "triage.toml";

/// Upper bound on a raw body kept inside an error, in bytes.
pub const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;
