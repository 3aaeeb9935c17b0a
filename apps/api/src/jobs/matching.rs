//! Job matching — trait-based so a real scorer can replace the placeholder
//! without touching the handler.
//!
//! `AppState` holds an `Arc<dyn JobMatcher>`.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::job::{Job, JobMatch};

/// Score every job against one uploaded resume.
#[async_trait]
pub trait JobMatcher: Send + Sync {
    async fn match_jobs(&self, resume_id: u64, jobs: &[Job]) -> Result<Vec<JobMatch>, AppError>;
}

pub const PLACEHOLDER_MATCH_SCORE: f64 = 0.85;

/// Gives every job the same score regardless of the resume.
pub struct FixedScoreMatcher {
    pub score: f64,
}

impl Default for FixedScoreMatcher {
    fn default() -> Self {
        Self {
            score: PLACEHOLDER_MATCH_SCORE,
        }
    }
}

#[async_trait]
impl JobMatcher for FixedScoreMatcher {
    async fn match_jobs(&self, _resume_id: u64, jobs: &[Job]) -> Result<Vec<JobMatch>, AppError> {
        Ok(jobs
            .iter()
            .map(|job| JobMatch {
                job: job.clone(),
                match_score: self.score,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::catalog::mock_jobs;

    #[tokio::test]
    async fn test_fixed_matcher_scores_every_job_the_same() {
        let matches = FixedScoreMatcher::default()
            .match_jobs(7, &mock_jobs())
            .await
            .unwrap();
        assert_eq!(matches.len(), 3);
        assert!(matches
            .iter()
            .all(|m| (m.match_score - PLACEHOLDER_MATCH_SCORE).abs() < f64::EPSILON));
        assert_eq!(matches[0].job.title, "Frontend Developer");
    }
}
