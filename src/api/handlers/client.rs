use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateClientRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::client::Client;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_clients(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(company_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.access.require_access(&company_id, &user.id).await?;

    let clients = state.client_repo.list_by_company(&company_id).await?;
    Ok(Json(clients))
}

pub async fn create_client(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.access.require_access(&payload.company_id, &user.id).await?;

    let client = Client::new(
        payload.company_id,
        payload.name,
        payload.email,
        payload.phone,
        payload.address,
    );
    let created = state.client_repo.create(&client).await?;

    info!("Client created: {} ({})", created.id, created.company_id);
    Ok(Json(created))
}
