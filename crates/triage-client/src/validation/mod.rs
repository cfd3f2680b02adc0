//! Checks on both sides of an exchange: records against a model's schema
//! before sending, decoded responses against the predict invariants after.

pub mod request;
pub mod response;

pub use request::{validate_batch, validate_record};
pub use response::validate_predict_response;
