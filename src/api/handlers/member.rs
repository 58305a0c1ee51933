use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::AddMemberRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::company::CompanyMember;
use crate::error::AppError;
use crate::state::AppState;

pub async fn add_member(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(company_id): Path<String>,
    Json(payload): Json<AddMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.access.require_access(&company_id, &user.id).await?;

    let company = state.company_repo.find_by_id(&company_id).await?
        .ok_or(AppError::NotFound("Company not found".into()))?;

    if company.owner_id == payload.user_id {
        return Err(AppError::Conflict("Owner already has access".into()));
    }
    if state.company_repo.find_member(&company_id, &payload.user_id).await?.is_some() {
        return Err(AppError::Conflict("User is already a member".into()));
    }

    let member = CompanyMember::new(company_id, payload.user_id);
    let created = state.company_repo.add_member(&member).await?;

    info!("Member {} added to company {}", created.user_id, created.company_id);
    Ok(Json(created))
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(company_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.access.require_access(&company_id, &user.id).await?;

    let members = state.company_repo.list_members(&company_id).await?;
    Ok(Json(members))
}

pub async fn remove_member(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path((company_id, member_user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.access.require_access(&company_id, &user.id).await?;

    state.company_repo.remove_member(&company_id, &member_user_id).await?;

    info!("Member {} removed from company {}", member_user_id, company_id);
    Ok(Json(serde_json::json!({ "status": "removed" })))
}
