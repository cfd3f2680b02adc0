//! Canned request/response bodies for the reference malaria model.

use serde_json::{json, Map, Value};

pub const MODEL_META_PATH: &str = "/api/v1/model_meta";
pub const PREDICT_PATH: &str = "/api/v1/predict";
pub const HEALTH_PATH: &str = "/api/v1/health";

pub const REFERENCE_FEATURES: &[&str] = &["age", "fever", "rainfall"];

pub const META_JSON: &str = r#"{"features":["age","fever","rainfall"],"uses_scaler":true}"#;

pub const PREDICT_JSON: &str = r#"{"preds":[0.82],"labels":[1],"threshold":0.5,"model_version":"v3","n_features":3,"used_scaler":true}"#;

pub const HEALTH_JSON: &str = r#"{"status":"ok"}"#;

/// Body the server sends when no model is loaded.
pub const MODEL_UNAVAILABLE: &str = "model unavailable";

/// Score every record in a `{"records": [...]}` body the way a toy model
/// would: `s / (1 + s)` where `s` is the sum of the declared features.
/// All-zero records score exactly `0.0`. Missing features count as zero.
pub fn score_records(
    body: &str,
    features: &[&str],
    threshold: Option<f64>,
) -> Result<String, String> {
    let parsed: Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    let records = parsed
        .get("records")
        .and_then(Value::as_array)
        .ok_or_else(|| "body has no records array".to_string())?;

    let mut preds = Vec::with_capacity(records.len());
    for record in records {
        let record: &Map<String, Value> = record
            .as_object()
            .ok_or_else(|| "record is not an object".to_string())?;
        let sum: f64 = features
            .iter()
            .filter_map(|f| record.get(*f).and_then(Value::as_f64))
            .map(f64::abs)
            .sum();
        preds.push(sum / (1.0 + sum));
    }

    let mut out = json!({
        "preds": preds,
        "model_version": "mock::ToyScorer",
        "n_features": features.len(),
        "used_scaler": false,
    });
    if let Some(t) = threshold {
        let labels: Vec<i64> = preds.iter().map(|p| i64::from(*p >= t)).collect();
        out["labels"] = json!(labels);
        out["threshold"] = json!(t);
    }
    Ok(out.to_string())
}
