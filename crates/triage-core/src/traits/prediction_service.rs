use std::future::Future;

use crate::errors::PredictResult;
use crate::models::{FeatureRecord, HealthStatus, ModelMeta, PredictResponse};

/// A remote (or stubbed) model-serving endpoint.
///
/// Implemented by the HTTP client; consumers that only need inference can
/// depend on this trait and substitute an in-memory implementation in tests.
pub trait IPredictionService: Send + Sync {
    /// Fetch the model's expected input schema.
    fn model_meta(&self) -> impl Future<Output = PredictResult<ModelMeta>> + Send;

    /// Score one record.
    fn predict(
        &self,
        record: &FeatureRecord,
    ) -> impl Future<Output = PredictResult<PredictResponse>> + Send;

    /// Score several records in one exchange. `preds[i]` belongs to `records[i]`.
    fn predict_batch(
        &self,
        records: &[FeatureRecord],
    ) -> impl Future<Output = PredictResult<PredictResponse>> + Send;

    /// Liveness probe.
    fn health(&self) -> impl Future<Output = PredictResult<HealthStatus>> + Send;
}
