use std::sync::Arc;

use crate::config::Config;
use crate::jobs::catalog::mock_jobs;
use crate::jobs::matching::{FixedScoreMatcher, JobMatcher};
use crate::linkedin::LinkedInClient;
use crate::models::job::Job;
use crate::skills::SkillVocabulary;
use crate::store::MemoryStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable skill vocabulary handed to the tagger on every upload.
    pub vocabulary: SkillVocabulary,
    pub store: Arc<MemoryStore>,
    pub jobs: Arc<Vec<Job>>,
    /// Pluggable job matcher. Default: FixedScoreMatcher.
    pub job_matcher: Arc<dyn JobMatcher>,
    pub linkedin: LinkedInClient,
}

impl AppState {
    pub fn new(config: Config, vocabulary: SkillVocabulary) -> Self {
        let linkedin = LinkedInClient::new(
            config.linkedin_client_id.clone(),
            config.linkedin_client_secret.clone(),
        );
        Self {
            config,
            vocabulary,
            store: Arc::new(MemoryStore::new()),
            jobs: Arc::new(mock_jobs()),
            job_matcher: Arc::new(FixedScoreMatcher::default()),
            linkedin,
        }
    }
}
