use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::interviewer::Interviewer;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInterviewerPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<Interviewer> for InterviewerResponse {
    fn from(value: Interviewer) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
        }
    }
}
