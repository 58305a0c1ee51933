use std::sync::Arc;
use crate::domain::ports::{
    CategoryRepository, ClientRepository, CompanyRepository, InvoiceRepository,
    TransactionRepository, UserRepository,
};
use crate::domain::services::access::AccessGuard;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub company_repo: Arc<dyn CompanyRepository>,
    pub client_repo: Arc<dyn ClientRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub transaction_repo: Arc<dyn TransactionRepository>,
    pub invoice_repo: Arc<dyn InvoiceRepository>,
    pub access: Arc<AccessGuard>,
}
