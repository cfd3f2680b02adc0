//! # triage-client
//!
//! Async client for the triage model-serving API.
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | Model metadata | GET | `/api/v1/model_meta` |
//! | Predict | POST | `/api/v1/predict` |
//! | Health | GET | `/api/v1/health` |
//!
//! Non-2xx responses surface as [`PredictError::Http`] whose message is the
//! raw response body. Bodies that are not the expected JSON surface as
//! [`PredictError::Decode`]. No retries, no caching: each call is one
//! independent request/response exchange. Deadlines and cancellation are
//! opt-in per call through [`RequestOptions`].

pub mod api;
pub mod cancellation;
pub mod client;
pub mod options;
pub mod transport;
pub mod validation;

pub use api::{fetch_model_meta, predict};
pub use cancellation::{Cancellable, CancellationToken};
pub use client::PredictionClient;
pub use options::RequestOptions;

pub use triage_core::errors::{PredictError, PredictResult, SchemaError};
pub use triage_core::models::{FeatureRecord, HealthStatus, ModelMeta, PredictResponse, Prediction};
pub use triage_core::traits::IPredictionService;
pub use triage_core::{BaseUrl, ClientConfig};
