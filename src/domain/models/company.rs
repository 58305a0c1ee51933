use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub currency: String,
    pub tax_rate: f64,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewCompanyParams {
    pub name: String,
    pub currency: Option<String>,
    pub tax_rate: Option<f64>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub owner_id: String,
}

impl Company {
    pub fn new(params: NewCompanyParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            currency: params.currency.unwrap_or_else(|| "USD".to_string()),
            tax_rate: params.tax_rate.unwrap_or(0.0),
            address: params.address,
            phone: params.phone,
            email: params.email,
            website: params.website,
            owner_id: params.owner_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Grants a non-owner user access to a company's ledger.
/// (company_id, user_id) is unique; the owner is never stored as a member.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct CompanyMember {
    pub id: String,
    pub company_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl CompanyMember {
    pub fn new(company_id: String, user_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            company_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
