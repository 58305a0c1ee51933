use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateCompanyRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::company::{Company, NewCompanyParams};
use crate::domain::services::defaults::default_categories;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_companies(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let companies = state.company_repo.list_for_user(&user.id).await?;
    Ok(Json(companies))
}

/// No access check here: anyone may create a company they will own. The
/// owner is always the caller, never a payload field.
pub async fn create_company(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateCompanyRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(rate) = payload.tax_rate {
        if rate < 0.0 {
            return Err(AppError::Validation("Tax rate must not be negative".into()));
        }
    }

    let company = Company::new(NewCompanyParams {
        name: payload.name,
        currency: payload.currency,
        tax_rate: payload.tax_rate,
        address: payload.address,
        phone: payload.phone,
        email: payload.email,
        website: payload.website,
        owner_id: user.id.clone(),
    });

    let categories = default_categories(&company.id);
    let created = state.company_repo.create_with_categories(&company, &categories).await?;

    info!("Company created: {} (owner {})", created.id, user.id);
    Ok(Json(created))
}

/// Display lookup: denied and absent both come back as NotFound, which is
/// safe here because the response carries no ledger data on the miss.
pub async fn get_company(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(company_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.access.has_access(&company_id, &user.id).await? {
        return Err(AppError::NotFound("Company not found".into()));
    }

    let company = state.company_repo.find_by_id(&company_id).await?
        .ok_or(AppError::NotFound("Company not found".into()))?;

    Ok(Json(company))
}
