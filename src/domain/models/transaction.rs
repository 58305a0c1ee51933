use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

pub const KIND_INCOME: &str = "income";
pub const KIND_EXPENSE: &str = "expense";

/// A single ledger entry. `kind` and `company_id` are fixed at creation;
/// `amount` is always non-negative, the sign is carried by `kind`.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Transaction {
    pub id: String,
    pub company_id: String,
    pub kind: String,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    pub category_id: Option<String>,
    pub client_id: Option<String>,
    pub attachment_url: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewTransactionParams {
    pub company_id: String,
    pub kind: String,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    pub category_id: Option<String>,
    pub client_id: Option<String>,
    pub attachment_url: Option<String>,
    pub created_by: String,
}

impl Transaction {
    pub fn new(params: NewTransactionParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            company_id: params.company_id,
            kind: params.kind,
            amount: params.amount,
            description: params.description,
            date: params.date,
            category_id: params.category_id,
            client_id: params.client_id,
            attachment_url: params.attachment_url,
            created_by: params.created_by,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Transaction row joined with the names of its optional category and
/// client references. Both names are absent when the reference is null.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct TransactionWithRefs {
    pub id: String,
    pub company_id: String,
    pub kind: String,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    pub category_id: Option<String>,
    pub client_id: Option<String>,
    pub attachment_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub category_name: Option<String>,
    pub client_name: Option<String>,
}

/// Per-category sum as returned by the grouped report query. A null
/// category name is the unlabeled group, not a dropped row.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct CategoryTotal {
    pub category_name: Option<String>,
    pub total: f64,
}
