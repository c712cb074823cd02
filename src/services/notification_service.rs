use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::notification::Notification;

#[derive(Clone)]
pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn user_id_for_subject(&self, subject: &str) -> Result<Uuid> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE subject = $1")
            .bind(subject)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))
    }

    pub async fn list_for(&self, subject: &str) -> Result<Vec<Notification>> {
        let user_id = self.user_id_for_subject(subject).await?;
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT id, user_id, title, message, is_read, created_at \
             FROM notifications WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notifications)
    }

    /// Marks one of the caller's notifications read. A no-op when the id
    /// does not belong to the caller.
    pub async fn mark_read(&self, subject: &str, notification_id: Uuid) -> Result<()> {
        let user_id = self.user_id_for_subject(subject).await?;
        sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1 AND user_id = $2")
            .bind(notification_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
