use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::job::{Job, JobMatch};
use crate::state::AppState;

/// GET /jobs/
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.jobs.to_vec())
}

/// GET /jobs/match/:resume_id
///
/// The resume id is not checked against stored uploads; the placeholder
/// matcher ignores it.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Path(resume_id): Path<u64>,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    let matches = state.job_matcher.match_jobs(resume_id, &state.jobs).await?;
    Ok(Json(matches))
}
