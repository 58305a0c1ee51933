use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{ListTransactionsQuery, TransactionPayload};
use crate::api::dtos::responses::TransactionPageResponse;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::transaction::{NewTransactionParams, Transaction, KIND_EXPENSE, KIND_INCOME};
use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 10;

fn validate_payload(payload: &TransactionPayload) -> Result<(), AppError> {
    if payload.kind != KIND_INCOME && payload.kind != KIND_EXPENSE {
        return Err(AppError::Validation("Kind must be income or expense".into()));
    }
    if payload.amount < 0.0 {
        return Err(AppError::Validation("Amount must not be negative".into()));
    }
    Ok(())
}

pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(company_id): Path<String>,
    Query(query): Query<ListTransactionsQuery>,
) -> Result<impl IntoResponse, AppError> {
    state.access.require_access(&company_id, &user.id).await?;

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let offset = (page - 1) * limit;

    let transactions = state.transaction_repo.list_page(&company_id, limit, offset).await?;
    let total = state.transaction_repo.count_by_company(&company_id).await?;

    Ok(Json(TransactionPageResponse { transactions, total, page, limit }))
}

pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<TransactionPayload>,
) -> Result<impl IntoResponse, AppError> {
    validate_payload(&payload)?;
    state.access.require_access(&payload.company_id, &user.id).await?;

    let transaction = Transaction::new(NewTransactionParams {
        company_id: payload.company_id,
        kind: payload.kind,
        amount: payload.amount,
        description: payload.description,
        date: payload.date,
        category_id: payload.category_id,
        client_id: payload.client_id,
        attachment_url: payload.attachment_url,
        created_by: user.id,
    });

    let created = state.transaction_repo.create(&transaction).await?;

    info!("Transaction created: {} ({})", created.id, created.company_id);
    Ok(Json(created))
}

pub async fn update_transaction(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(transaction_id): Path<String>,
    Json(payload): Json<TransactionPayload>,
) -> Result<impl IntoResponse, AppError> {
    validate_payload(&payload)?;

    let existing = state.transaction_repo.find_by_id(&transaction_id).await?
        .ok_or(AppError::NotFound("Transaction not found".into()))?;

    // Access is decided by the stored row, and the company is immutable.
    state.access.require_access(&existing.company_id, &user.id).await?;
    if payload.company_id != existing.company_id {
        return Err(AppError::Validation("Company of a transaction cannot change".into()));
    }

    let updated = state.transaction_repo.update(&Transaction {
        kind: payload.kind,
        amount: payload.amount,
        description: payload.description,
        date: payload.date,
        category_id: payload.category_id,
        client_id: payload.client_id,
        attachment_url: payload.attachment_url,
        updated_at: Utc::now(),
        ..existing
    }).await?;

    Ok(Json(updated))
}

/// Missing and forbidden deliberately collapse into one Unauthorized
/// outcome, so probing ids reveals nothing. The access check always runs
/// against the stored row's company, never a caller-supplied one.
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(transaction_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let existing = state.transaction_repo.find_by_id(&transaction_id).await?
        .ok_or(AppError::Unauthorized)?;

    state.access.require_access(&existing.company_id, &user.id).await?;

    state.transaction_repo.delete(&transaction_id).await?;

    info!("Transaction deleted: {}", transaction_id);
    Ok(Json(serde_json::json!({ "success": true })))
}
