use triage_core::errors::{PredictError, SchemaError};
use triage_core::models::{FeatureRecord, PredictResponse};

fn invalid(reason: String) -> PredictError {
    PredictError::InvalidResponse { reason }
}

/// Check a decoded predict response against the records that were sent.
///
/// - one score per submitted record
/// - `labels`, when present, has one entry per score and comes with `threshold`
/// - `n_features` equals each record's width; a mismatch is the caller's
///   schema error, not the server's
pub fn validate_predict_response(
    response: &PredictResponse,
    records: &[FeatureRecord],
) -> Result<(), PredictError> {
    if response.preds.len() != records.len() {
        return Err(invalid(format!(
            "expected {} predictions, got {}",
            records.len(),
            response.preds.len()
        )));
    }

    if let Some(labels) = &response.labels {
        if labels.len() != response.preds.len() {
            return Err(invalid(format!(
                "{} labels for {} predictions",
                labels.len(),
                response.preds.len()
            )));
        }
        if response.threshold.is_none() {
            return Err(invalid("labels present without a threshold".to_string()));
        }
    }

    if let Some((index, record)) = records
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() != response.n_features)
    {
        return Err(SchemaError::FeatureCountMismatch {
            expected: response.n_features,
            actual: record.len(),
            record_index: index,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FeatureRecord {
        FeatureRecord::new()
            .with("age", 30.0)
            .with("fever", 1.0)
            .with("rainfall", 120.0)
    }

    fn response() -> PredictResponse {
        PredictResponse {
            preds: vec![0.82],
            labels: Some(vec![1.0]),
            threshold: Some(0.5),
            model_version: "v3".into(),
            n_features: 3,
            used_scaler: true,
        }
    }

    #[test]
    fn accepts_consistent_response() {
        assert!(validate_predict_response(&response(), &[record()]).is_ok());
    }

    #[test]
    fn rejects_pred_count_mismatch() {
        let mut resp = response();
        resp.preds.push(0.1);
        resp.labels = Some(vec![1.0, 0.0]);
        let err = validate_predict_response(&resp, &[record()]).unwrap_err();
        assert!(matches!(err, PredictError::InvalidResponse { .. }));
    }

    #[test]
    fn rejects_labels_without_threshold() {
        let mut resp = response();
        resp.threshold = None;
        let err = validate_predict_response(&resp, &[record()]).unwrap_err();
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn rejects_label_length_mismatch() {
        let mut resp = response();
        resp.labels = Some(vec![1.0, 0.0]);
        assert!(validate_predict_response(&resp, &[record()]).is_err());
    }

    #[test]
    fn width_mismatch_is_schema_error() {
        let mut resp = response();
        resp.n_features = 4;
        let err = validate_predict_response(&resp, &[record()]).unwrap_err();
        assert!(matches!(
            err,
            PredictError::Schema(SchemaError::FeatureCountMismatch {
                expected: 4,
                actual: 3,
                record_index: 0
            })
        ));
    }
}
