use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::extractors::auth::AuthUser;
use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;

/// Refreshes the local profile cache from the verified identity headers
/// and returns the stored row. Upsert by id: a returning user keeps their
/// created_at, profile fields and updated_at are overwritten.
pub async fn get_current_user(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let profile = User::new(user.id.clone(), user.email, user.first_name, user.last_name);
    let stored = state.user_repo.upsert(&profile).await?;

    info!("Profile refreshed for user {}", stored.id);
    Ok(Json(stored))
}
