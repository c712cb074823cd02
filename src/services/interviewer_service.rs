use sqlx::PgPool;

use crate::dto::interviewer_dto::CreateInterviewerPayload;
use crate::error::{Error, Result};
use crate::models::interviewer::Interviewer;

#[derive(Clone)]
pub struct InterviewerService {
    pool: PgPool,
}

impl InterviewerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Interviewer>> {
        let interviewers = sqlx::query_as::<_, Interviewer>(
            "SELECT id, name, email, created_at FROM interviewers ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(interviewers)
    }

    pub async fn create(&self, payload: CreateInterviewerPayload) -> Result<Interviewer> {
        let existing = sqlx::query_scalar::<_, uuid::Uuid>(
            "SELECT id FROM interviewers WHERE email = $1",
        )
        .bind(&payload.email)
        .fetch_optional(&self.pool)
        .await?;
        if existing.is_some() {
            return Err(Error::InvalidState(
                "Interviewer with this email already exists".to_string(),
            ));
        }

        let interviewer = sqlx::query_as::<_, Interviewer>(
            "INSERT INTO interviewers (name, email) VALUES ($1, $2) \
             RETURNING id, name, email, created_at",
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(interviewer)
    }
}
