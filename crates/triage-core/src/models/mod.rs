//! Request and response payloads exchanged with the prediction service.

pub mod feature_record;
pub mod health;
pub mod model_meta;
pub mod predict_response;

pub use feature_record::FeatureRecord;
pub use health::HealthStatus;
pub use model_meta::ModelMeta;
pub use predict_response::{PredictResponse, Prediction};
