use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::DropSlot;

/// A message drop embedded in a lead record. Day and time are kept as the
/// raw strings the CRM stores ("Tuesday", "5:00 PM").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledDrop {
    pub scheduled_day: String,
    pub scheduled_time: String,
    pub body: String,
    pub tracking_number: String,
}

impl ScheduledDrop {
    /// Exact-string, case-sensitive: a drop stored as "tuesday" never
    /// matches a "Tuesday" slot.
    pub fn matches(&self, slot: &DropSlot) -> bool {
        self.scheduled_day == slot.day && self.scheduled_time == slot.time
    }
}

/// The slice of the CRM lead record this service reads. The drop collection
/// is a read-only snapshot at scan time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: String,
    pub drops: Vec<ScheduledDrop>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
