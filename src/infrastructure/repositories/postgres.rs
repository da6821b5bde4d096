use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, Pool, Postgres};
use uuid::Uuid;

use crate::domain::{
    models::{Lead, ScheduledDrop},
    repositories::LeadRepository,
    value_objects::DropSlot,
};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresLeadRepository {
    pool: PgPool,
}

impl PostgresLeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadRepository for PostgresLeadRepository {
    async fn find_with_drops_at(&self, slot: &DropSlot) -> anyhow::Result<Vec<Lead>> {
        // JSONB containment: at least one drop element carries exactly these
        // day and time strings
        let probe = json!([{ "scheduledDay": slot.day, "scheduledTime": slot.time }]);

        let records = sqlx::query_as::<_, LeadRecord>(
            r#"
            SELECT id, first_name, last_name, phone_number, drops, created_at, updated_at
            FROM leads
            WHERE drops @> $1
            ORDER BY created_at
            "#,
        )
        .bind(probe)
        .fetch_all(&self.pool)
        .await?;

        records.into_iter().map(Lead::try_from).collect()
    }
}

#[derive(FromRow)]
struct LeadRecord {
    id: Uuid,
    first_name: Option<String>,
    last_name: Option<String>,
    phone_number: String,
    drops: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<LeadRecord> for Lead {
    type Error = anyhow::Error;

    fn try_from(record: LeadRecord) -> Result<Self, Self::Error> {
        let drops: Vec<ScheduledDrop> = serde_json::from_value(record.drops)?;
        Ok(Lead {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            phone_number: record.phone_number,
            drops,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}
