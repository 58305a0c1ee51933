use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Labels transactions of a single company. `kind` is either "income" or
/// "expense" and must match the transactions it labels.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Category {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub kind: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(company_id: String, name: String, kind: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            company_id,
            name,
            kind,
            description,
            created_at: Utc::now(),
        }
    }
}
