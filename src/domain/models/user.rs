use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Profile cache for an externally authenticated identity. The id is the
/// stable subject issued by the auth collaborator and is never generated
/// here; rows are upserted by id on every profile refresh.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: String, email: Option<String>, first_name: Option<String>, last_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            first_name,
            last_name,
            created_at: now,
            updated_at: now,
        }
    }
}
