use crate::domain::models::{
    user::User,
    company::{Company, CompanyMember},
    client::Client,
    category::Category,
    transaction::{CategoryTotal, Transaction, TransactionWithRefs},
    invoice::{Invoice, InvoiceItem, InvoiceWithClient},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create-or-update by id, bumping updated_at on conflict.
    async fn upsert(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Inserts the company together with its seed categories in one
    /// transaction; a failed seed leaves no company row behind.
    async fn create_with_categories(&self, company: &Company, categories: &[Category]) -> Result<Company, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Company>, AppError>;
    /// Companies the user owns plus companies where the user holds a
    /// membership, de-duplicated by id.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Company>, AppError>;
    async fn add_member(&self, member: &CompanyMember) -> Result<CompanyMember, AppError>;
    async fn find_member(&self, company_id: &str, user_id: &str) -> Result<Option<CompanyMember>, AppError>;
    async fn list_members(&self, company_id: &str) -> Result<Vec<CompanyMember>, AppError>;
    async fn remove_member(&self, company_id: &str, user_id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn create(&self, client: &Client) -> Result<Client, AppError>;
    async fn list_by_company(&self, company_id: &str) -> Result<Vec<Client>, AppError>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: &Category) -> Result<Category, AppError>;
    async fn list_by_company(&self, company_id: &str) -> Result<Vec<Category>, AppError>;
}

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn create(&self, transaction: &Transaction) -> Result<Transaction, AppError>;
    /// Unscoped lookup. Callers re-check access against the returned row's
    /// own company_id before acting on it.
    async fn find_by_id(&self, id: &str) -> Result<Option<Transaction>, AppError>;
    async fn update(&self, transaction: &Transaction) -> Result<Transaction, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    /// Page ordered by created_at descending (id descending as tiebreak),
    /// joined with category and client names.
    async fn list_page(&self, company_id: &str, limit: i64, offset: i64) -> Result<Vec<TransactionWithRefs>, AppError>;
    async fn count_by_company(&self, company_id: &str) -> Result<i64, AppError>;
    /// All rows in the inclusive date range, ordered date then id ascending
    /// so downstream running balances are deterministic.
    async fn list_in_range(&self, company_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<TransactionWithRefs>, AppError>;
    /// All rows dated on or after `start`, date ascending.
    async fn list_from_date(&self, company_id: &str, start: NaiveDate) -> Result<Vec<Transaction>, AppError>;
    async fn sum_in_range(&self, company_id: &str, kind: &str, start: NaiveDate, end: NaiveDate) -> Result<f64, AppError>;
    async fn sum_by_category(&self, company_id: &str, kind: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<CategoryTotal>, AppError>;
}

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Inserts the header and all items in one transaction; a failed item
    /// insert rolls the header back.
    async fn create_with_items(&self, invoice: &Invoice, items: &[InvoiceItem]) -> Result<Invoice, AppError>;
    async fn find_with_client(&self, id: &str) -> Result<Option<InvoiceWithClient>, AppError>;
    async fn list_by_company(&self, company_id: &str) -> Result<Vec<InvoiceWithClient>, AppError>;
    async fn list_items(&self, invoice_id: &str) -> Result<Vec<InvoiceItem>, AppError>;
    /// Sum of totals over invoices with status "sent", unbounded by date.
    async fn sum_outstanding(&self, company_id: &str) -> Result<f64, AppError>;
}
