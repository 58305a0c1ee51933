use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateInvoiceRequest;
use crate::api::dtos::responses::InvoiceDetailsResponse;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::invoice::{Invoice, InvoiceItem, NewInvoiceParams};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_invoices(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(company_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.access.require_access(&company_id, &user.id).await?;

    let invoices = state.invoice_repo.list_by_company(&company_id).await?;
    Ok(Json(invoices))
}

pub async fn create_invoice(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateInvoiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.invoice.subtotal < 0.0 || payload.invoice.tax_amount < 0.0 {
        return Err(AppError::Validation("Invoice amounts must not be negative".into()));
    }

    state.access.require_access(&payload.invoice.company_id, &user.id).await?;

    let invoice = Invoice::new(NewInvoiceParams {
        company_id: payload.invoice.company_id,
        invoice_number: payload.invoice.invoice_number,
        status: payload.invoice.status,
        client_id: payload.invoice.client_id,
        issue_date: payload.invoice.issue_date,
        due_date: payload.invoice.due_date,
        subtotal: payload.invoice.subtotal,
        tax_amount: payload.invoice.tax_amount,
        notes: payload.invoice.notes,
        created_by: user.id,
    });

    let items: Vec<InvoiceItem> = payload.items
        .into_iter()
        .map(|item| InvoiceItem::new(
            invoice.id.clone(),
            item.description,
            item.quantity,
            item.unit_price,
            item.total,
        ))
        .collect();

    let created = state.invoice_repo.create_with_items(&invoice, &items).await?;

    info!("Invoice created: {} ({} items)", created.id, items.len());
    Ok(Json(created))
}

/// Resolves the owning company from the stored invoice, never from the
/// caller. A missing invoice and a denied one are both Unauthorized.
pub async fn get_invoice_details(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(invoice_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = state.invoice_repo.find_with_client(&invoice_id).await?
        .ok_or(AppError::Unauthorized)?;

    state.access.require_access(&invoice.company_id, &user.id).await?;

    let items = state.invoice_repo.list_items(&invoice_id).await?;

    Ok(Json(InvoiceDetailsResponse { invoice, items }))
}
