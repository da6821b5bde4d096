use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{models::Lead, repositories::LeadRepository, value_objects::DropSlot};

#[derive(Default)]
pub struct InMemoryLeadRepository {
    leads: Arc<RwLock<HashMap<Uuid, Lead>>>,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn upsert(&self, lead: Lead) {
        let mut leads = self.leads.write().await;
        leads.insert(lead.id, lead);
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn find_with_drops_at(&self, slot: &DropSlot) -> anyhow::Result<Vec<Lead>> {
        let leads = self.leads.read().await;
        let mut matching: Vec<Lead> = leads
            .values()
            .filter(|lead| lead.drops.iter().any(|drop| drop.matches(slot)))
            .cloned()
            .collect();
        // stable natural order for the map-backed store
        matching.sort_by_key(|lead| lead.created_at);
        Ok(matching)
    }
}
