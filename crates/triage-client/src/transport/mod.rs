//! Transport layer: HTTP exchange with deadline/cancellation and the wire protocol.

pub mod http_client;
pub mod protocol;

pub use http_client::HttpClient;
pub use protocol::PredictRequest;
