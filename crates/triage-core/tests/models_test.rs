use proptest::prelude::*;
use triage_core::models::{FeatureRecord, ModelMeta, PredictResponse};

fn meta(features: &[String]) -> ModelMeta {
    ModelMeta {
        features: features.to_vec(),
        uses_scaler: false,
        model_version: None,
    }
}

#[test]
fn reference_meta_decodes_exactly() {
    let meta: ModelMeta =
        serde_json::from_str(r#"{"features":["age","fever","rainfall"],"uses_scaler":true}"#)
            .unwrap();
    assert_eq!(
        meta,
        ModelMeta {
            features: vec!["age".into(), "fever".into(), "rainfall".into()],
            uses_scaler: true,
            model_version: None,
        }
    );
}

#[test]
fn reference_predict_response_decodes_exactly() {
    let resp: PredictResponse = serde_json::from_str(
        r#"{"preds":[0.82],"labels":[1],"threshold":0.5,"model_version":"v3","n_features":3,"used_scaler":true}"#,
    )
    .unwrap();
    assert_eq!(
        resp,
        PredictResponse {
            preds: vec![0.82],
            labels: Some(vec![1.0]),
            threshold: Some(0.5),
            model_version: "v3".into(),
            n_features: 3,
            used_scaler: true,
        }
    );
}

#[test]
fn extra_response_fields_are_tolerated() {
    let resp: PredictResponse = serde_json::from_str(
        r#"{"preds":[0.1],"model_version":"v3","n_features":1,"used_scaler":false,"latency_ms":4}"#,
    )
    .unwrap();
    assert_eq!(resp.len(), 1);
}

proptest! {
    #[test]
    fn zeros_record_has_declared_width(
        names in prop::collection::btree_set("[a-z_]{1,12}", 0..20)
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let record = FeatureRecord::zeros(&meta(&names));
        prop_assert_eq!(record.len(), names.len());
        prop_assert!(record.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn ordered_values_follow_meta_order(
        values in prop::collection::btree_map("[a-z]{1,8}", -1.0e6f64..1.0e6, 1..15)
    ) {
        let names: Vec<String> = values.keys().rev().cloned().collect();
        let record: FeatureRecord = values.clone().into();
        let ordered = record.ordered_values(&meta(&names)).unwrap();
        let expected: Vec<f64> = names.iter().map(|n| values[n]).collect();
        prop_assert_eq!(ordered, expected);
    }
}
