//! Wire payloads the client produces. Response payloads live in
//! `triage_core::models`.

use serde::Serialize;
use triage_core::models::FeatureRecord;

/// Body of `POST /api/v1/predict`: `{"records": [ {...}, ... ]}`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest<'a> {
    pub records: &'a [FeatureRecord],
}

impl<'a> PredictRequest<'a> {
    pub fn new(records: &'a [FeatureRecord]) -> Self {
        Self { records }
    }
}
