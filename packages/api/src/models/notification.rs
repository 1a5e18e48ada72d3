//! Notification rows and their wire projection.
//!
//! A notification is stored once per recipient. The `read` flag the client
//! sees is derived from the nullable `read_at` timestamp, so marking read
//! is a single timestamp write and naturally idempotent.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

/// Full notification record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct NotificationRow {
    pub id: i64,
    pub user_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

impl NotificationRow {
    /// Project into the wire model shared with the frontends.
    pub fn to_info(&self) -> client::Notification {
        client::Notification {
            id: self.id,
            message: self.message.clone(),
            date: self.created_at.format("%b %e, %Y %H:%M").to_string(),
            read: self.read_at.is_some(),
        }
    }
}

/// Insert a notification for a single recipient.
pub async fn notify(pool: &PgPool, user_id: Uuid, message: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO notifications (user_id, message) VALUES ($1, $2)")
        .bind(user_id)
        .bind(message)
        .execute(pool)
        .await?;
    Ok(())
}

/// Insert the same notification for every user holding `role`.
pub async fn notify_role(pool: &PgPool, role: &str, message: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO notifications (user_id, message) SELECT id, $1 FROM users WHERE role = $2")
        .bind(message)
        .bind(role)
        .execute(pool)
        .await?;
    Ok(())
}
