use thiserror::Error;

/// Failure of one outbound provider call. The gateway never retries;
/// callers decide what a failed send means.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned HTTP {0}")]
    Status(u16),
    #[error("provider rejected message: {0}")]
    Rejected(String),
}
