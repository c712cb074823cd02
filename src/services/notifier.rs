use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;

/// In-app notification sink. Callers treat it as fire-and-forget: the
/// scheduling engine logs failures and never lets them surface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, user_id: Uuid, title: &str, message: &str) -> Result<()>;
}

#[derive(Clone)]
pub struct PgNotificationSink {
    pool: PgPool,
}

impl PgNotificationSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationSink for PgNotificationSink {
    async fn notify(&self, user_id: Uuid, title: &str, message: &str) -> Result<()> {
        sqlx::query(
            r#"INSERT INTO notifications (user_id, title, message) VALUES ($1, $2, $3)"#,
        )
        .bind(user_id)
        .bind(title)
        .bind(message)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
