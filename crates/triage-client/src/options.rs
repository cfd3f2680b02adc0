use std::time::Duration;

use crate::cancellation::CancellationToken;

/// Per-call knobs. The default is "no deadline beyond the client's config,
/// no cancellation token".
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Deadline for the whole exchange (status + body). Overrides the
    /// client's configured timeout.
    pub timeout: Option<Duration>,
    /// Abandon the request when this token is cancelled.
    pub cancel: Option<CancellationToken>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}
