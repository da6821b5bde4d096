use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    application::services::gateway::SmsGateway,
    domain::{errors::GatewayError, models::MessageRequest},
};

#[derive(Clone)]
pub struct SmsApiConfig {
    pub base_url: String,
    pub api_token: String,
    pub company_id: String,
}

/// HTTP client for the third-party SMS provider. One POST per message,
/// bearer-token auth, no internal retry.
pub struct HttpSmsGateway {
    http: Client,
    config: SmsApiConfig,
}

impl HttpSmsGateway {
    pub fn new(config: SmsApiConfig) -> Arc<dyn SmsGateway> {
        Arc::new(Self {
            http: Client::builder()
                .user_agent("sms-dispatch/gateway")
                .build()
                .expect("failed to build sms client"),
            config,
        }) as Arc<dyn SmsGateway>
    }
}

#[async_trait]
impl SmsGateway for HttpSmsGateway {
    async fn send(&self, request: &MessageRequest) -> Result<(), GatewayError> {
        let url = format!("{}/v1/messages", self.config.base_url);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.config.api_token)
            .json(&SendMessageBody {
                phone_number: &request.phone_number,
                tracking_number: &request.tracking_number,
                message: &request.body,
                company_id: &self.config.company_id,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        let payload: SendMessageResponse = response.json().await?;
        if !payload.success {
            return Err(GatewayError::Rejected(
                payload.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageBody<'a> {
    phone_number: &'a str,
    tracking_number: &'a str,
    message: &'a str,
    company_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    success: bool,
    error: Option<String>,
}
