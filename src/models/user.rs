use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Candidate,
    Recruiter,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Candidate => write!(f, "candidate"),
            UserRole::Recruiter => write!(f, "recruiter"),
        }
    }
}

/// Portal account as synced from the external identity provider. This core
/// only reads users; account lifecycle lives elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub subject: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}
