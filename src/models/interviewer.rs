use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interviewer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Join row attaching an interviewer to an interview. Written once at
/// scheduling time, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewInterviewer {
    pub interview_id: Uuid,
    pub interviewer_id: Uuid,
}
