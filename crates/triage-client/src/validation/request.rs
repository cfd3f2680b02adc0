use triage_core::errors::SchemaError;
use triage_core::models::{FeatureRecord, ModelMeta};

/// Check one record against a previously fetched [`ModelMeta`].
///
/// A meta without declared features only gets the finiteness check: there
/// is nothing to compare names against.
pub fn validate_record(record: &FeatureRecord, meta: &ModelMeta) -> Result<(), SchemaError> {
    if meta.declares_schema() {
        let missing: Vec<String> = meta
            .features
            .iter()
            .filter(|f| !record.contains(f))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError::MissingFeatures { names: missing });
        }

        let unexpected: Vec<String> = record
            .names()
            .filter(|name| meta.feature_index(name).is_none())
            .map(str::to_string)
            .collect();
        if !unexpected.is_empty() {
            return Err(SchemaError::UnexpectedFeatures { names: unexpected });
        }
    }

    if let Some((name, value)) = record.iter().find(|(_, v)| !v.is_finite()) {
        return Err(SchemaError::NonFiniteValue {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}

/// Reject empty batches; optionally check every record against `meta`.
pub fn validate_batch(
    records: &[FeatureRecord],
    meta: Option<&ModelMeta>,
) -> Result<(), SchemaError> {
    if records.is_empty() {
        return Err(SchemaError::EmptyBatch);
    }
    if let Some(meta) = meta {
        for record in records {
            validate_record(record, meta)?;
        }
    }
    Ok(())
}
