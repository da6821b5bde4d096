use async_trait::async_trait;

use crate::domain::{models::Lead, value_objects::DropSlot};

#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Leads owning at least one drop whose day and time strings equal the
    /// slot's, in the store's natural return order.
    async fn find_with_drops_at(&self, slot: &DropSlot) -> anyhow::Result<Vec<Lead>>;
}
