use poem_openapi::Enum;

use crate::domain::models::DispatchStatus;

/// Wire labels for per-recipient outcomes.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum DispatchStatusDto {
    #[oai(rename = "Sent")]
    Sent,
    #[oai(rename = "Rate limit exceeded")]
    RateLimited,
    #[oai(rename = "Failed")]
    Failed,
}

impl From<DispatchStatus> for DispatchStatusDto {
    fn from(value: DispatchStatus) -> Self {
        match value {
            DispatchStatus::Sent => DispatchStatusDto::Sent,
            DispatchStatus::RateLimited => DispatchStatusDto::RateLimited,
            DispatchStatus::Failed => DispatchStatusDto::Failed,
        }
    }
}
