use axum::{extract::State, http::StatusCode, Json};

use crate::errors::AppError;
use crate::linkedin::{LinkedInCallback, LinkedInError, LinkedInSession};
use crate::state::AppState;

impl From<LinkedInError> for AppError {
    fn from(err: LinkedInError) -> Self {
        match err {
            LinkedInError::NotConfigured => AppError::NotConfigured(err.to_string()),
            LinkedInError::MissingAccessToken => AppError::Validation(err.to_string()),
            LinkedInError::Api { status, detail } => AppError::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                detail,
            },
            LinkedInError::Http(e) => {
                AppError::Unexpected(format!("An unexpected error occurred: {e}"))
            }
        }
    }
}

/// POST /linkedin/callback
///
/// Completes the OAuth flow started by the front-end and returns the access
/// token together with the member profile.
pub async fn handle_linkedin_callback(
    State(state): State<AppState>,
    Json(callback): Json<LinkedInCallback>,
) -> Result<Json<LinkedInSession>, AppError> {
    if callback.code.trim().is_empty() {
        return Err(AppError::Validation("code cannot be empty".to_string()));
    }
    let session = state.linkedin.exchange(&callback).await?;
    Ok(Json(session))
}
