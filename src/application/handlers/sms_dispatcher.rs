use std::sync::Arc;

use crate::{
    application::services::{gateway::SmsGateway, quota::QuotaTracker},
    domain::models::{DispatchResult, DispatchStatus, MessageRequest},
};

/// Consumes an ordered batch of message requests, consulting the shared
/// quota before each send. Requests are processed strictly sequentially so
/// quota consumption matches input order.
pub struct SmsDispatcher {
    quota: Arc<QuotaTracker>,
    gateway: Arc<dyn SmsGateway>,
}

impl SmsDispatcher {
    pub fn new(quota: Arc<QuotaTracker>, gateway: Arc<dyn SmsGateway>) -> Self {
        Self { quota, gateway }
    }

    /// Returns one result per request, in input order. A quota denial skips
    /// the send without consuming a unit and without halting the batch; a
    /// gateway failure keeps its consumed unit.
    pub async fn dispatch(&self, requests: Vec<MessageRequest>) -> Vec<DispatchResult> {
        let mut results = Vec::with_capacity(requests.len());

        for request in requests {
            if !self.quota.try_consume() {
                tracing::warn!(
                    phone_number = %request.phone_number,
                    "send quota exhausted, skipping"
                );
                results.push(DispatchResult {
                    phone_number: request.phone_number,
                    status: DispatchStatus::RateLimited,
                });
                continue;
            }

            let status = match self.gateway.send(&request).await {
                Ok(()) => DispatchStatus::Sent,
                Err(err) => {
                    tracing::warn!(
                        phone_number = %request.phone_number,
                        error = %err,
                        "gateway send failed"
                    );
                    DispatchStatus::Failed
                }
            };
            results.push(DispatchResult {
                phone_number: request.phone_number,
                status,
            });
        }

        let (hour_count, day_count) = self.quota.usage();
        tracing::debug!(
            dispatched = results.len(),
            hour_count,
            day_count,
            "batch dispatch complete"
        );

        results
    }
}
