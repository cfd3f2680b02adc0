use proptest::prelude::*;
use triage_client::transport::PredictRequest;
use triage_client::validation::{validate_predict_response, validate_record};
use triage_client::{FeatureRecord, ModelMeta, PredictResponse};

fn arb_record() -> impl Strategy<Value = FeatureRecord> {
    prop::collection::btree_map("[a-z_]{1,10}", -1.0e9f64..1.0e9, 0..12).prop_map(FeatureRecord::from)
}

proptest! {
    #[test]
    fn envelope_is_records_singleton(record in arb_record()) {
        let records = [record.clone()];
        let body = serde_json::to_value(PredictRequest::new(&records)).unwrap();
        let expected = serde_json::json!({ "records": [serde_json::to_value(&record).unwrap()] });
        prop_assert_eq!(body, expected);
    }

    #[test]
    fn record_always_matches_meta_built_from_its_keys(record in arb_record()) {
        let meta = ModelMeta {
            features: record.names().map(str::to_string).collect(),
            uses_scaler: false,
            model_version: None,
        };
        prop_assert!(validate_record(&record, &meta).is_ok());
    }

    #[test]
    fn label_length_must_match_preds(n_preds in 1usize..6, n_labels in 0usize..6) {
        let record = FeatureRecord::new().with("age", 1.0);
        let records = vec![record; n_preds];
        let resp = PredictResponse {
            preds: vec![0.5; n_preds],
            labels: Some(vec![1.0; n_labels]),
            threshold: Some(0.5),
            model_version: "v3".into(),
            n_features: 1,
            used_scaler: false,
        };
        prop_assert_eq!(validate_predict_response(&resp, &records).is_ok(), n_labels == n_preds);
    }
}
