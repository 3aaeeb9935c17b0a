use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
}

/// Sign-up payload. The password is accepted for API compatibility but never
/// stored: the service has no authentication.
#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub email: String,
    #[allow(dead_code)]
    pub password: String,
}
