use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::user::{User, UserCreate};
use crate::state::AppState;

/// POST /users/
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(req): Json<UserCreate>,
) -> Result<Json<User>, AppError> {
    let email = req.email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("email cannot be empty".to_string()));
    }
    let user = state.store.create_user(email.to_string()).await;
    Ok(Json(user))
}
