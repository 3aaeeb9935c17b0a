use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::resume::ResumeRecord;
use crate::models::user::User;

/// The single user every upload is attributed to until real accounts exist.
pub const DEFAULT_USER_ID: u64 = 1;

/// Process-local record store. Ids are sequential, starting at 1.
/// Everything is lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    resumes: RwLock<Vec<ResumeRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        info!("In-memory record store initialized");
        Self::default()
    }

    pub async fn create_user(&self, email: String) -> User {
        let mut users = self.users.write().await;
        let user = User {
            id: users.len() as u64 + 1,
            email,
        };
        users.push(user.clone());
        user
    }

    pub async fn insert_resume(&self, content: String, skills: Vec<String>) -> ResumeRecord {
        let mut resumes = self.resumes.write().await;
        let record = ResumeRecord {
            id: resumes.len() as u64 + 1,
            user_id: DEFAULT_USER_ID,
            content,
            skills,
            uploaded_at: Utc::now(),
        };
        resumes.push(record.clone());
        record
    }

    pub async fn get_resume(&self, id: u64) -> Option<ResumeRecord> {
        self.resumes
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    pub async fn resume_count(&self) -> usize {
        self.resumes.read().await.len()
    }
}
