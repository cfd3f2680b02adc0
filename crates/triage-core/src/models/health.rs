use serde::{Deserialize, Serialize};

use crate::constants::HEALTH_OK;

/// Body of the liveness endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == HEALTH_OK
    }
}
