use async_trait::async_trait;

use crate::domain::{errors::GatewayError, models::MessageRequest};

/// Stateless adapter to the external SMS provider. One outbound call per
/// invocation; retrying is the caller's decision and the dispatcher never
/// retries.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    async fn send(&self, request: &MessageRequest) -> Result<(), GatewayError>;
}
