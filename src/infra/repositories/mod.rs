pub mod postgres_user_repo;
pub mod postgres_company_repo;
pub mod postgres_client_repo;
pub mod postgres_category_repo;
pub mod postgres_transaction_repo;
pub mod postgres_invoice_repo;

pub mod sqlite_user_repo;
pub mod sqlite_company_repo;
pub mod sqlite_client_repo;
pub mod sqlite_category_repo;
pub mod sqlite_transaction_repo;
pub mod sqlite_invoice_repo;
