use serde::{Deserialize, Serialize};

/// One outbound text. Immutable once constructed; a new instance is built
/// for every send attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    pub phone_number: String,
    pub tracking_number: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DispatchStatus {
    Sent,
    RateLimited,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchResult {
    pub phone_number: String,
    pub status: DispatchStatus,
}
