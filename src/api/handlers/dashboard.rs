use axum::{extract::{Path, State}, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dtos::responses::{ChartData, DashboardResponse, FinancialSummary};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::transaction::{KIND_EXPENSE, KIND_INCOME};
use crate::domain::services::summary::{chart_window_start, month_bounds, monthly_buckets};
use crate::error::AppError;
use crate::state::AppState;

const RECENT_LIMIT: i64 = 5;

/// Several independent queries, deliberately not wrapped in a transaction:
/// the dashboard is an advisory summary and may observe a mix of
/// before/after state under concurrent writers.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(company_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.access.require_access(&company_id, &user.id).await?;

    let today = Utc::now().date_naive();
    let (month_start, month_end) = month_bounds(today);

    let total_revenue = state.transaction_repo
        .sum_in_range(&company_id, KIND_INCOME, month_start, month_end).await?;
    let total_expenses = state.transaction_repo
        .sum_in_range(&company_id, KIND_EXPENSE, month_start, month_end).await?;
    let outstanding_invoices = state.invoice_repo.sum_outstanding(&company_id).await?;

    let recent_transactions = state.transaction_repo
        .list_page(&company_id, RECENT_LIMIT, 0).await?;

    let window = state.transaction_repo
        .list_from_date(&company_id, chart_window_start(today)).await?;
    let (revenue, expenses) = monthly_buckets(&window);

    Ok(Json(DashboardResponse {
        summary: FinancialSummary {
            total_revenue,
            total_expenses,
            net_profit: total_revenue - total_expenses,
            outstanding_invoices,
        },
        recent_transactions,
        charts: ChartData { revenue, expenses },
    }))
}
