use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use std::sync::Arc;

use crate::api::dtos::requests::ReportRangeQuery;
use crate::api::dtos::responses::{CashFlowResponse, ProfitLossResponse, ReportPeriod};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::transaction::{KIND_EXPENSE, KIND_INCOME};
use crate::domain::services::reports::{sum_groups, with_running_balance};
use crate::error::AppError;
use crate::state::AppState;

pub async fn profit_loss(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(company_id): Path<String>,
    Query(range): Query<ReportRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    state.access.require_access(&company_id, &user.id).await?;

    let income = state.transaction_repo
        .sum_by_category(&company_id, KIND_INCOME, range.start_date, range.end_date).await?;
    let expenses = state.transaction_repo
        .sum_by_category(&company_id, KIND_EXPENSE, range.start_date, range.end_date).await?;

    let total_income = sum_groups(&income);
    let total_expenses = sum_groups(&expenses);

    Ok(Json(ProfitLossResponse {
        period: ReportPeriod { start_date: range.start_date, end_date: range.end_date },
        income,
        expenses,
        total_income,
        total_expenses,
        net_profit: total_income - total_expenses,
    }))
}

pub async fn cash_flow(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(company_id): Path<String>,
    Query(range): Query<ReportRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    state.access.require_access(&company_id, &user.id).await?;

    let rows = state.transaction_repo
        .list_in_range(&company_id, range.start_date, range.end_date).await?;
    let (cash_flow, final_balance) = with_running_balance(rows);

    Ok(Json(CashFlowResponse {
        period: ReportPeriod { start_date: range.start_date, end_date: range.end_date },
        cash_flow,
        final_balance,
    }))
}
