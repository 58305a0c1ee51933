use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateCategoryRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::category::Category;
use crate::domain::models::transaction::{KIND_EXPENSE, KIND_INCOME};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(company_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.access.require_access(&company_id, &user.id).await?;

    let categories = state.category_repo.list_by_company(&company_id).await?;
    Ok(Json(categories))
}

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.kind != KIND_INCOME && payload.kind != KIND_EXPENSE {
        return Err(AppError::Validation("Kind must be income or expense".into()));
    }

    state.access.require_access(&payload.company_id, &user.id).await?;

    let category = Category::new(
        payload.company_id,
        payload.name,
        payload.kind,
        payload.description,
    );
    let created = state.category_repo.create(&category).await?;

    info!("Category created: {} ({})", created.id, created.company_id);
    Ok(Json(created))
}
