//! One-shot functions taking the base URL per call.
//!
//! Each call builds its own client, so callers using different bases never
//! share anything. Prefer [`PredictionClient`] when making repeated calls.

use triage_core::errors::PredictResult;
use triage_core::models::{FeatureRecord, ModelMeta, PredictResponse};

use crate::client::PredictionClient;
use crate::options::RequestOptions;

/// `GET {base}/api/v1/model_meta`.
pub async fn fetch_model_meta(base: &str, opts: &RequestOptions) -> PredictResult<ModelMeta> {
    PredictionClient::from_base(base)?
        .model_meta_with(opts)
        .await
}

/// `POST {base}/api/v1/predict` with `{"records": [record]}`.
pub async fn predict(
    record: &FeatureRecord,
    base: &str,
    opts: &RequestOptions,
) -> PredictResult<PredictResponse> {
    PredictionClient::from_base(base)?
        .predict_with(record, opts)
        .await
}
