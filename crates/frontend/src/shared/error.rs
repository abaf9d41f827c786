use thiserror::Error;

/// Failures surfaced by the REST service layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The response arrived but its body did not match the expected payload.
    #[error("malformed payload: {0}")]
    Decode(String),
}
