use std::sync::Arc;

use crate::{
    application::handlers::sms_dispatcher::SmsDispatcher,
    domain::{models::MessageRequest, repositories::LeadRepository, value_objects::DropSlot},
};

/// One scan cycle of the weekly drop schedule: query the lead store for the
/// firing slot, flatten every matching drop into a message batch, dispatch
/// it, and log the per-recipient outcomes. Dispatch history is not
/// persisted; the log is the only record.
pub struct ScanScheduledDropsUseCase {
    leads: Arc<dyn LeadRepository>,
    dispatcher: Arc<SmsDispatcher>,
}

impl ScanScheduledDropsUseCase {
    pub fn new(leads: Arc<dyn LeadRepository>, dispatcher: Arc<SmsDispatcher>) -> Self {
        Self { leads, dispatcher }
    }

    /// Returns the number of requests dispatched. Zero matches completes as
    /// a no-op without touching the dispatcher.
    pub async fn execute(&self, slot: &DropSlot) -> anyhow::Result<usize> {
        let leads = self.leads.find_with_drops_at(slot).await?;

        // store order, then per-lead drop order
        let mut requests = Vec::new();
        for lead in &leads {
            for drop in &lead.drops {
                if drop.matches(slot) {
                    requests.push(MessageRequest {
                        phone_number: lead.phone_number.clone(),
                        tracking_number: drop.tracking_number.clone(),
                        body: drop.body.clone(),
                    });
                }
            }
        }

        if requests.is_empty() {
            tracing::info!(day = %slot.day, time = %slot.time, "no scheduled drops due");
            return Ok(0);
        }

        let results = self.dispatcher.dispatch(requests).await;
        for result in &results {
            tracing::info!(
                phone_number = %result.phone_number,
                status = ?result.status,
                "scheduled drop dispatched"
            );
        }

        Ok(results.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::{
        application::services::{
            gateway::SmsGateway,
            quota::{QuotaConfig, QuotaTracker},
        },
        domain::{
            errors::GatewayError,
            models::{Lead, ScheduledDrop},
        },
        infrastructure::repositories::in_memory::InMemoryLeadRepository,
    };

    struct RecordingGateway {
        sent: Mutex<Vec<MessageRequest>>,
    }

    impl RecordingGateway {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
            })
        }

        fn sent(&self) -> Vec<MessageRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SmsGateway for RecordingGateway {
        async fn send(&self, request: &MessageRequest) -> Result<(), GatewayError> {
            self.sent.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    fn drop_at(day: &str, time: &str, body: &str) -> ScheduledDrop {
        ScheduledDrop {
            scheduled_day: day.to_string(),
            scheduled_time: time.to_string(),
            body: body.to_string(),
            tracking_number: "+15550000100".to_string(),
        }
    }

    fn lead(phone_number: &str, drops: Vec<ScheduledDrop>) -> Lead {
        let now = Utc::now();
        Lead {
            id: Uuid::new_v4(),
            first_name: Some("Dana".to_string()),
            last_name: Some("Whitfield".to_string()),
            phone_number: phone_number.to_string(),
            drops,
            created_at: now,
            updated_at: now,
        }
    }

    fn usecase(
        repo: Arc<InMemoryLeadRepository>,
        gateway: Arc<RecordingGateway>,
    ) -> ScanScheduledDropsUseCase {
        let quota = Arc::new(QuotaTracker::new(QuotaConfig::default()));
        let dispatcher = Arc::new(SmsDispatcher::new(quota, gateway));
        ScanScheduledDropsUseCase::new(repo, dispatcher)
    }

    fn slot(day: &str, time: &str) -> DropSlot {
        DropSlot {
            day: day.to_string(),
            time: time.to_string(),
        }
    }

    #[tokio::test]
    async fn zero_matching_leads_is_a_no_op() {
        let repo = Arc::new(InMemoryLeadRepository::new());
        repo.upsert(lead(
            "+15551110001",
            vec![drop_at("Monday", "9:00 AM", "Checking in on your tax file.")],
        ))
        .await;

        let gateway = RecordingGateway::new();
        let scanner = usecase(repo, gateway.clone());

        let dispatched = scanner.execute(&slot("Tuesday", "5:00 PM")).await.unwrap();

        assert_eq!(dispatched, 0);
        assert!(gateway.sent().is_empty());
    }

    #[tokio::test]
    async fn day_comparison_is_case_sensitive() {
        let repo = Arc::new(InMemoryLeadRepository::new());
        repo.upsert(lead(
            "+15551110001",
            vec![drop_at("tuesday", "5:00 PM", "Your settlement review is ready.")],
        ))
        .await;

        let gateway = RecordingGateway::new();
        let scanner = usecase(repo, gateway.clone());

        // "tuesday" in the record never matches the "Tuesday" slot
        let dispatched = scanner.execute(&slot("Tuesday", "5:00 PM")).await.unwrap();

        assert_eq!(dispatched, 0);
        assert!(gateway.sent().is_empty());
    }

    #[tokio::test]
    async fn time_format_mismatch_matches_nothing() {
        let repo = Arc::new(InMemoryLeadRepository::new());
        repo.upsert(lead(
            "+15551110001",
            vec![drop_at("Tuesday", "05:00 PM", "Reminder about your documents.")],
        ))
        .await;

        let gateway = RecordingGateway::new();
        let scanner = usecase(repo, gateway.clone());

        let dispatched = scanner.execute(&slot("Tuesday", "5:00 PM")).await.unwrap();

        assert_eq!(dispatched, 0);
    }

    #[tokio::test]
    async fn flattens_only_due_drops_across_matching_leads() {
        let repo = Arc::new(InMemoryLeadRepository::new());
        repo.upsert(lead(
            "+15551110001",
            vec![
                drop_at("Tuesday", "5:00 PM", "Your case manager will call this week."),
                drop_at("Friday", "9:00 AM", "Friday follow-up."),
            ],
        ))
        .await;
        repo.upsert(lead(
            "+15551110002",
            vec![drop_at("Tuesday", "5:00 PM", "Documents received, next steps inside.")],
        ))
        .await;

        let gateway = RecordingGateway::new();
        let scanner = usecase(repo, gateway.clone());

        let dispatched = scanner.execute(&slot("Tuesday", "5:00 PM")).await.unwrap();

        assert_eq!(dispatched, 2);
        let sent = gateway.sent();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|r| r.body != "Friday follow-up."));
    }
}
