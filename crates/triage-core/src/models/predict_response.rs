use serde::{Deserialize, Serialize};

/// Server's inference output for a batch of submitted records.
///
/// `preds[i]` is the score for the i-th submitted record. `labels` and
/// `threshold` are only present when the server applies a decision cutoff.
/// Labels are plain numbers: numpy-backed servers send `1.0`, others `1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub preds: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    pub model_version: String,
    pub n_features: usize,
    pub used_scaler: bool,
}

/// One record's result, pulled out of a [`PredictResponse`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub score: f64,
    pub label: Option<f64>,
}

impl PredictResponse {
    /// Number of scored records.
    pub fn len(&self) -> usize {
        self.preds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preds.is_empty()
    }

    /// Result for the record at `index`.
    pub fn prediction(&self, index: usize) -> Option<Prediction> {
        let score = *self.preds.get(index)?;
        let label = self
            .labels
            .as_ref()
            .and_then(|labels| labels.get(index).copied());
        Some(Prediction { score, label })
    }

    /// Result of a single-record call.
    pub fn first_prediction(&self) -> Option<Prediction> {
        self.prediction(0)
    }

    pub fn predictions(&self) -> impl Iterator<Item = Prediction> + '_ {
        (0..self.preds.len()).filter_map(|i| self.prediction(i))
    }
}
