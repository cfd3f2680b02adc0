//! Test fixtures for the triage workspace: an in-process mock of the
//! prediction service and the canned payloads the tests share.
//!
//! The mock binds `127.0.0.1:0`, answers every route from a per-path
//! responder, and records each request (method, path, content type, body)
//! so tests can assert on exactly what the client sent.

pub mod payloads;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::Response;
use axum::Router;
use tokio::sync::oneshot;

/// One request as the mock saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    /// Body parsed as JSON.
    ///
    /// # Panics
    /// Panics if the body is not valid JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("request body is not JSON ({e}): {}", self.body))
    }
}

/// What the mock sends back for a route.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
    pub content_type: &'static str,
    pub delay: Option<Duration>,
}

impl CannedResponse {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: "application/json",
            delay: None,
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: "text/plain; charset=utf-8",
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

type Responder = Arc<dyn Fn(&RecordedRequest) -> CannedResponse + Send + Sync>;

#[derive(Default)]
struct MockState {
    routes: Mutex<HashMap<String, Responder>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// In-process stand-in for the prediction service.
///
/// Stops serving when dropped.
pub struct MockPredictionServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockPredictionServer {
    /// Start with no routes; every path answers 404 until configured.
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await;
        });

        Self {
            addr,
            state,
            shutdown: Some(tx),
        }
    }

    /// Start serving the reference scenario: the three-feature malaria model
    /// for `/model_meta`, the fixed `0.82` prediction for `/predict`, and an
    /// ok `/health`.
    pub async fn with_reference_model() -> Self {
        let server = Self::start().await;
        server.respond(
            payloads::MODEL_META_PATH,
            CannedResponse::json(200, payloads::META_JSON),
        );
        server.respond(
            payloads::PREDICT_PATH,
            CannedResponse::json(200, payloads::PREDICT_JSON),
        );
        server.respond(
            payloads::HEALTH_PATH,
            CannedResponse::json(200, payloads::HEALTH_JSON),
        );
        server
    }

    /// `http://127.0.0.1:<port>`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer `path` with a fixed response.
    pub fn respond(&self, path: &str, response: CannedResponse) {
        self.respond_with(path, move |_| response.clone());
    }

    /// Answer `path` with whatever `f` computes from the request.
    pub fn respond_with<F>(&self, path: &str, f: F)
    where
        F: Fn(&RecordedRequest) -> CannedResponse + Send + Sync + 'static,
    {
        self.state
            .routes
            .lock()
            .expect("routes lock")
            .insert(path.to_string(), Arc::new(f));
    }

    /// Serve `/predict` from [`payloads::score_records`], so batch size and
    /// feature count in the response follow the request.
    pub fn serve_scoring_model(&self, features: &'static [&'static str], threshold: Option<f64>) {
        self.respond_with(payloads::PREDICT_PATH, move |req| {
            match payloads::score_records(&req.body, features, threshold) {
                Ok(body) => CannedResponse::json(200, body),
                Err(detail) => CannedResponse::json(400, format!(r#"{{"detail":"{detail}"}}"#)),
            }
        });
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("requests lock").clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.requests.lock().expect("requests lock").last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().expect("requests lock").len()
    }
}

impl Drop for MockPredictionServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let request = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    };

    let responder = state
        .routes
        .lock()
        .expect("routes lock")
        .get(&request.path)
        .cloned();
    let canned = match responder {
        Some(f) => f(&request),
        None => CannedResponse::json(404, r#"{"detail":"Not Found"}"#),
    };
    state.requests.lock().expect("requests lock").push(request);

    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header(header::CONTENT_TYPE, canned.content_type)
        .body(Body::from(canned.body))
        .expect("valid mock response")
}
