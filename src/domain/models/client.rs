use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Client {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Client {
    pub fn new(company_id: String, name: String, email: Option<String>, phone: Option<String>, address: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            company_id,
            name,
            email,
            phone,
            address,
            created_at: Utc::now(),
        }
    }
}
