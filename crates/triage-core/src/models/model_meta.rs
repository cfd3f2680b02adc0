use serde::{Deserialize, Deserializer, Serialize};

/// Server-reported description of the deployed model's input schema.
///
/// `features` is ordered: it is the column order the server feeds the model.
/// A server without a declared schema reports `"features": null`, which
/// decodes as an empty list; a missing `features` key is a decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMeta {
    #[serde(deserialize_with = "null_as_empty")]
    pub features: Vec<String>,
    pub uses_scaler: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl ModelMeta {
    /// Whether the server declared a feature list at all.
    pub fn declares_schema(&self) -> bool {
        !self.features.is_empty()
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Position of `name` in the declared feature order.
    pub fn feature_index(&self, name: &str) -> Option<usize> {
        self.features.iter().position(|f| f == name)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_meta() {
        let meta: ModelMeta =
            serde_json::from_str(r#"{"features":["age","fever","rainfall"],"uses_scaler":true}"#)
                .unwrap();
        assert_eq!(meta.features, vec!["age", "fever", "rainfall"]);
        assert!(meta.uses_scaler);
        assert_eq!(meta.model_version, None);
        assert_eq!(meta.feature_index("fever"), Some(1));
    }

    #[test]
    fn null_features_mean_no_schema() {
        let meta: ModelMeta = serde_json::from_str(
            r#"{"features":null,"uses_scaler":false,"model_version":"pickle::MLPClassifier"}"#,
        )
        .unwrap();
        assert!(!meta.declares_schema());
        assert_eq!(meta.model_version.as_deref(), Some("pickle::MLPClassifier"));
    }

    #[test]
    fn missing_features_key_is_rejected() {
        let err = serde_json::from_str::<ModelMeta>(r#"{"uses_scaler":true}"#).unwrap_err();
        assert!(err.to_string().contains("features"));
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(serde_json::from_str::<ModelMeta>(r#"{"features":["a"],"uses_scaler":"yes"}"#)
            .is_err());
    }
}
