use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

pub const INVOICE_STATUS_DRAFT: &str = "draft";
pub const INVOICE_STATUS_SENT: &str = "sent";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Invoice {
    pub id: String,
    pub company_id: String,
    pub invoice_number: String,
    pub status: String,
    pub client_id: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewInvoiceParams {
    pub company_id: String,
    pub invoice_number: String,
    pub status: Option<String>,
    pub client_id: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub notes: Option<String>,
    pub created_by: String,
}

impl Invoice {
    /// The stored total is fixed at creation time as subtotal + tax and is
    /// never recomputed from the line items afterwards.
    pub fn new(params: NewInvoiceParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            company_id: params.company_id,
            invoice_number: params.invoice_number,
            status: params.status.unwrap_or_else(|| INVOICE_STATUS_DRAFT.to_string()),
            client_id: params.client_id,
            issue_date: params.issue_date,
            due_date: params.due_date,
            subtotal: params.subtotal,
            tax_amount: params.tax_amount,
            total: params.subtotal + params.tax_amount,
            notes: params.notes,
            created_by: params.created_by,
            created_at: Utc::now(),
        }
    }
}

/// Line item, only ever created together with its invoice.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct InvoiceItem {
    pub id: String,
    pub invoice_id: String,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

impl InvoiceItem {
    pub fn new(invoice_id: String, description: String, quantity: f64, unit_price: f64, total: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            invoice_id,
            description,
            quantity,
            unit_price,
            total,
        }
    }
}

/// Invoice header joined with the contact fields of its client.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct InvoiceWithClient {
    pub id: String,
    pub company_id: String,
    pub invoice_number: String,
    pub status: String,
    pub client_id: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub client_address: Option<String>,
}
