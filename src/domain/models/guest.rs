use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const MIN_GUEST_NAME_LEN: usize = 2;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuestRecord {
    pub id: String,
    pub name: String,
    pub invite_link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuestRecord {
    pub fn new(name: String, invite_link: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            invite_link,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Case-folded form of a guest name, used for exact case-insensitive lookup.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}
