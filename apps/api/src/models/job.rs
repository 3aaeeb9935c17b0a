use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub skills_required: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub job: Job,
    pub match_score: f64,
}
