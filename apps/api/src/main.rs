mod config;
mod errors;
mod extraction;
mod feedback;
mod jobs;
mod linkedin;
mod models;
mod resumes;
mod routes;
mod skills;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::skills::SkillVocabulary;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume World API v{}", env!("CARGO_PKG_VERSION"));

    // Skill vocabulary: file override or the built-in list
    let vocabulary = match &config.skills_file {
        Some(path) => {
            let vocabulary = SkillVocabulary::load(path)?;
            info!(
                "Skill vocabulary loaded from {} ({} entries)",
                path.display(),
                vocabulary.len()
            );
            vocabulary
        }
        None => {
            let vocabulary = SkillVocabulary::default();
            info!("Using built-in skill vocabulary ({} entries)", vocabulary.len());
            vocabulary
        }
    };

    let state = AppState::new(config.clone(), vocabulary);
    if !state.linkedin.is_configured() {
        warn!("LINKEDIN_CLIENT_ID/LINKEDIN_CLIENT_SECRET not set; /linkedin/callback will fail");
    }

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // front-end is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
