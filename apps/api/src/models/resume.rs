use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An analysed upload kept for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: u64,
    pub user_id: u64,
    pub content: String,
    pub skills: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
}
