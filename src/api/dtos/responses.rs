use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::invoice::{InvoiceItem, InvoiceWithClient};
use crate::domain::models::transaction::{CategoryTotal, TransactionWithRefs};
use crate::domain::services::reports::CashFlowEntry;
use crate::domain::services::summary::MonthlyBucket;

#[derive(Serialize)]
pub struct TransactionPageResponse {
    pub transactions: Vec<TransactionWithRefs>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

#[derive(Serialize)]
pub struct FinancialSummary {
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub outstanding_invoices: f64,
}

#[derive(Serialize)]
pub struct ChartData {
    pub revenue: Vec<MonthlyBucket>,
    pub expenses: Vec<MonthlyBucket>,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub summary: FinancialSummary,
    pub recent_transactions: Vec<TransactionWithRefs>,
    pub charts: ChartData,
}

#[derive(Serialize)]
pub struct ReportPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Serialize)]
pub struct ProfitLossResponse {
    pub period: ReportPeriod,
    pub income: Vec<CategoryTotal>,
    pub expenses: Vec<CategoryTotal>,
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
}

#[derive(Serialize)]
pub struct CashFlowResponse {
    pub period: ReportPeriod,
    pub cash_flow: Vec<CashFlowEntry>,
    pub final_balance: f64,
}

#[derive(Serialize)]
pub struct InvoiceDetailsResponse {
    #[serde(flatten)]
    pub invoice: InvoiceWithClient,
    pub items: Vec<InvoiceItem>,
}
