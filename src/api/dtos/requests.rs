use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
    pub currency: Option<String>,
    pub tax_rate: Option<f64>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

#[derive(Deserialize)]
pub struct AddMemberRequest {
    pub user_id: String,
}

#[derive(Deserialize)]
pub struct TransactionPayload {
    pub company_id: String,
    pub kind: String,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    pub category_id: Option<String>,
    pub client_id: Option<String>,
    pub attachment_url: Option<String>,
}

#[derive(Deserialize)]
pub struct ListTransactionsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct CreateClientRequest {
    pub company_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub company_id: String,
    pub name: String,
    pub kind: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateInvoiceRequest {
    pub invoice: InvoiceHeaderPayload,
    pub items: Vec<InvoiceItemPayload>,
}

#[derive(Deserialize)]
pub struct InvoiceHeaderPayload {
    pub company_id: String,
    pub invoice_number: String,
    pub status: Option<String>,
    pub client_id: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct InvoiceItemPayload {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

#[derive(Deserialize)]
pub struct ReportRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
