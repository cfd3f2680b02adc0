//! A single input sample: named numeric feature values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ModelMeta;
use crate::errors::SchemaError;

/// Feature name → value. Serializes as a flat JSON object.
///
/// Keys are kept sorted so the same record always produces the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureRecord(BTreeMap<String, f64>);

impl FeatureRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every feature the model declares, set to `0.0`.
    pub fn zeros(meta: &ModelMeta) -> Self {
        meta.features.iter().map(|f| (f.clone(), 0.0)).collect()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    /// Insert or overwrite a feature, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Values in the model's declared feature order.
    ///
    /// Fails with every missing feature named; features the model does not
    /// declare are dropped, the same restriction the server applies.
    pub fn ordered_values(&self, meta: &ModelMeta) -> Result<Vec<f64>, SchemaError> {
        let missing: Vec<String> = meta
            .features
            .iter()
            .filter(|f| !self.contains(f))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError::MissingFeatures { names: missing });
        }
        Ok(meta
            .features
            .iter()
            .filter_map(|f| self.get(f))
            .collect())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for FeatureRecord {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<BTreeMap<String, f64>> for FeatureRecord {
    fn from(map: BTreeMap<String, f64>) -> Self {
        Self(map)
    }
}

impl From<std::collections::HashMap<String, f64>> for FeatureRecord {
    fn from(map: std::collections::HashMap<String, f64>) -> Self {
        Self(map.into_iter().collect())
    }
}
