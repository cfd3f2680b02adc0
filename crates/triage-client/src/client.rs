//! PredictionClient — the typed entry point for the model-serving API.

use triage_core::constants::{HEALTH_PATH, MODEL_META_PATH, PREDICT_PATH};
use triage_core::errors::{PredictError, PredictResult};
use triage_core::models::{FeatureRecord, HealthStatus, ModelMeta, PredictResponse};
use triage_core::traits::IPredictionService;
use triage_core::{BaseUrl, ClientConfig};

use crate::options::RequestOptions;
use crate::transport::{HttpClient, PredictRequest};
use crate::validation;

/// Client for one prediction service.
///
/// Holds no mutable state. Concurrent calls are fully independent and may
/// complete in any order.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    transport: HttpClient,
    validate_responses: bool,
}

impl PredictionClient {
    /// Build a client from config. Fails if `base_url` is absent or invalid.
    pub fn new(config: &ClientConfig) -> PredictResult<Self> {
        Ok(Self {
            transport: HttpClient::new(config)?,
            validate_responses: config.effective_validate_responses(),
        })
    }

    /// Client for `base` with default settings.
    pub fn from_base(base: &str) -> PredictResult<Self> {
        Self::new(&ClientConfig::for_base(base))
    }

    /// Same settings, different origin. Shares the connection handle.
    pub fn with_base(&self, base: &str) -> PredictResult<Self> {
        Ok(Self {
            transport: self.transport.with_base(BaseUrl::parse(base)?),
            validate_responses: self.validate_responses,
        })
    }

    pub fn base_url(&self) -> &BaseUrl {
        self.transport.base()
    }

    /// `GET /api/v1/model_meta`.
    pub async fn model_meta_with(&self, opts: &RequestOptions) -> PredictResult<ModelMeta> {
        let meta: ModelMeta = self.transport.get(MODEL_META_PATH, opts).await?;
        tracing::debug!(
            features = meta.feature_count(),
            uses_scaler = meta.uses_scaler,
            "triage: model meta fetched"
        );
        Ok(meta)
    }

    /// `POST /api/v1/predict` with `{"records": [record]}`.
    pub async fn predict_with(
        &self,
        record: &FeatureRecord,
        opts: &RequestOptions,
    ) -> PredictResult<PredictResponse> {
        self.send_batch(std::slice::from_ref(record), opts).await
    }

    /// `POST /api/v1/predict` with every record in one request.
    pub async fn predict_batch_with(
        &self,
        records: &[FeatureRecord],
        opts: &RequestOptions,
    ) -> PredictResult<PredictResponse> {
        validation::validate_batch(records, None)?;
        self.send_batch(records, opts).await
    }

    /// Validate `record` against `meta` before sending; fails fast with
    /// [`PredictError::Schema`] without touching the network.
    pub async fn predict_checked(
        &self,
        record: &FeatureRecord,
        meta: &ModelMeta,
        opts: &RequestOptions,
    ) -> PredictResult<PredictResponse> {
        validation::validate_record(record, meta)?;
        self.send_batch(std::slice::from_ref(record), opts).await
    }

    /// `GET /api/v1/health`.
    pub async fn health_with(&self, opts: &RequestOptions) -> PredictResult<HealthStatus> {
        self.transport.get(HEALTH_PATH, opts).await
    }

    async fn send_batch(
        &self,
        records: &[FeatureRecord],
        opts: &RequestOptions,
    ) -> PredictResult<PredictResponse> {
        let body = PredictRequest::new(records);
        let response: PredictResponse = self.transport.post(PREDICT_PATH, &body, opts).await?;

        if self.validate_responses {
            if let Err(e) = validation::validate_predict_response(&response, records) {
                tracing::warn!(error = %e, "triage: predict response failed validation");
                return Err(e);
            }
        }

        tracing::debug!(
            records = records.len(),
            model_version = %response.model_version,
            "triage: predict complete"
        );
        Ok(response)
    }
}

impl IPredictionService for PredictionClient {
    async fn model_meta(&self) -> PredictResult<ModelMeta> {
        self.model_meta_with(&RequestOptions::default()).await
    }

    async fn predict(&self, record: &FeatureRecord) -> PredictResult<PredictResponse> {
        self.predict_with(record, &RequestOptions::default()).await
    }

    async fn predict_batch(&self, records: &[FeatureRecord]) -> PredictResult<PredictResponse> {
        self.predict_batch_with(records, &RequestOptions::default())
            .await
    }

    async fn health(&self) -> PredictResult<HealthStatus> {
        self.health_with(&RequestOptions::default()).await
    }
}

impl TryFrom<&ClientConfig> for PredictionClient {
    type Error = PredictError;

    fn try_from(config: &ClientConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}
