pub mod health;
pub mod users;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::linkedin::handlers as linkedin;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

// Paths keep the trailing slashes the existing front-end calls.
pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/users/", post(users::handle_create_user))
        // Resume intake
        .route("/resumes/", post(resumes::handle_upload_resume))
        .route("/resumes/:id", get(resumes::handle_get_resume))
        // Mock job board
        .route("/jobs/", get(jobs::handle_list_jobs))
        .route("/jobs/match/:resume_id", get(jobs::handle_match_jobs))
        // LinkedIn OAuth
        .route("/linkedin/callback", post(linkedin::handle_linkedin_callback))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
