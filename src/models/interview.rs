use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "interview_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Scheduled,
    Rescheduled,
    Cancelled,
}

impl std::fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InterviewStatus::Scheduled => "scheduled",
            InterviewStatus::Rescheduled => "rescheduled",
            InterviewStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "interview_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    Online,
    Offline,
    Telephone,
}

impl InterviewType {
    pub fn label(&self) -> &'static str {
        match self {
            InterviewType::Online => "Online",
            InterviewType::Offline => "Offline",
            InterviewType::Telephone => "Telephone",
        }
    }
}

/// The single interview attached to an application. Never hard-deleted;
/// cancellation is a status change.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interview {
    pub id: Uuid,
    pub application_id: Uuid,
    pub interview_type: InterviewType,
    pub meeting_link: Option<String>,
    pub location: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub status: InterviewStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Interview {
    /// Meeting link for online interviews, location otherwise.
    pub fn venue(&self) -> &str {
        self.meeting_link
            .as_deref()
            .or(self.location.as_deref())
            .unwrap_or("To be announced")
    }
}
