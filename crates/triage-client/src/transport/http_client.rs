//! HTTP client with per-call deadline and cancellation. One attempt per call.

use std::error::Error as _;
use std::time::Duration;

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use triage_core::constants::{MAX_ERROR_BODY_BYTES, VERSION};
use triage_core::errors::{PredictError, PredictResult};
use triage_core::{BaseUrl, ClientConfig};

use crate::options::RequestOptions;

/// Convert a reqwest failure into a `PredictError::Network`, keeping the
/// source chain (reqwest's own message omits the underlying cause).
fn net_err(e: reqwest::Error) -> PredictError {
    let mut reason = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    PredictError::Network { reason }
}

/// Keep at most `MAX_ERROR_BODY_BYTES` of a body, cut on a char boundary.
fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY_BYTES {
        let mut end = MAX_ERROR_BODY_BYTES;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
    }
    body
}

/// Decode a success body, keeping the raw text on failure.
pub(crate) fn decode<Resp: DeserializeOwned>(text: String) -> PredictResult<Resp> {
    serde_json::from_str(&text).map_err(|e| PredictError::Decode {
        cause: e.to_string(),
        raw: truncate_body(text),
    })
}

/// HTTP transport bound to one base URL.
///
/// Cloning is cheap; clones share the underlying connection handle.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base: BaseUrl,
    inner: reqwest::Client,
    default_timeout: Option<Duration>,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> PredictResult<Self> {
        let base = config
            .base_url
            .as_deref()
            .ok_or_else(|| PredictError::InvalidBaseUrl {
                url: String::new(),
                reason: "no base url configured".to_string(),
            })?;
        let base = BaseUrl::parse(base)?;

        let user_agent = match config.user_agent.as_deref() {
            Some(suffix) => format!("triage-client/{VERSION} {suffix}"),
            None => format!("triage-client/{VERSION}"),
        };
        let inner = reqwest::Client::builder()
            .gzip(config.effective_gzip())
            .user_agent(user_agent)
            .build()
            .map_err(net_err)?;

        Ok(Self {
            base,
            inner,
            default_timeout: config.effective_timeout(),
        })
    }

    /// Same transport, different origin.
    pub fn with_base(&self, base: BaseUrl) -> Self {
        Self {
            base,
            inner: self.inner.clone(),
            default_timeout: self.default_timeout,
        }
    }

    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// GET a JSON resource.
    pub async fn get<Resp: DeserializeOwned>(
        &self,
        path: &str,
        opts: &RequestOptions,
    ) -> PredictResult<Resp> {
        self.do_request(Method::GET, path, None::<&()>, opts).await
    }

    /// POST a JSON body (`Content-Type: application/json`) and decode the reply.
    pub async fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        payload: &Req,
        opts: &RequestOptions,
    ) -> PredictResult<Resp> {
        self.do_request(Method::POST, path, Some(payload), opts).await
    }

    /// Run one exchange under the effective deadline and cancellation token.
    async fn do_request<Resp: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
        opts: &RequestOptions,
    ) -> PredictResult<Resp> {
        let url = self.base.join(path);
        let deadline = opts.timeout.or(self.default_timeout);

        let bounded = async {
            match deadline {
                Some(limit) => {
                    match tokio::time::timeout(limit, self.exchange(&method, &url, body)).await {
                        Ok(r) => r,
                        Err(_) => Err(PredictError::Timeout {
                            after_ms: limit.as_millis() as u64,
                        }),
                    }
                }
                None => self.exchange(&method, &url, body).await,
            }
        };

        let result = match opts.cancel.as_ref() {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(PredictError::Cancelled),
                    r = bounded => r,
                }
            }
            None => bounded.await,
        };

        if let Err(ref e) = result {
            tracing::warn!(%method, %url, error = %e, "triage: request failed");
        }
        result
    }

    async fn exchange<Resp: DeserializeOwned>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&impl Serialize>,
    ) -> PredictResult<Resp> {
        tracing::debug!(%method, %url, "triage: sending request");

        let mut req = self.inner.request(method.clone(), url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(net_err)?;
        let status = resp.status();
        let text = resp.text().await.map_err(net_err)?;

        if !status.is_success() {
            return Err(PredictError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        tracing::debug!(
            %method,
            %url,
            status = status.as_u16(),
            bytes = text.len(),
            "triage: response received"
        );
        decode(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_keeps_raw_body_on_syntax_error() {
        let err = decode::<serde_json::Value>("not json".to_string()).unwrap_err();
        match err {
            PredictError::Decode { raw, .. } => assert_eq!(raw, "not json"),
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(MAX_ERROR_BODY_BYTES);
        let cut = truncate_body(body);
        assert!(cut.len() <= MAX_ERROR_BODY_BYTES);
        assert!(cut.chars().all(|c| c == 'é'));
    }

    #[test]
    fn new_requires_base_url() {
        let err = HttpClient::new(&ClientConfig::default()).unwrap_err();
        assert!(matches!(err, PredictError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn config_timeout_becomes_default_deadline() {
        let config = ClientConfig::for_base("http://localhost:8000")
            .with_timeout(Duration::from_millis(250));
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.default_timeout, Some(Duration::from_millis(250)));
        assert_eq!(client.base().as_str(), "http://localhost:8000");
    }
}
