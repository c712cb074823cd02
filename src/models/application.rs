use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    Interview,
    Rejected,
    Offer,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Offer => "offer",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub status: ApplicationStatus,
    pub resume_key: Option<String>,
    pub resume_filename: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
