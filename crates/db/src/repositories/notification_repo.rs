//! Repository for the `notifications` table.

use sqlx::PgPool;

use eventsphere_core::types::DbId;

use crate::models::notification::Notification;

/// Column list for notifications queries.
const NOTIFICATION_COLUMNS: &str = "id, recipient_id, message, kind, is_read, created_at";

/// Provides notification operations.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a notification, returning the created row.
    pub async fn create(
        pool: &PgPool,
        recipient_id: DbId,
        message: &str,
        kind: &str,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (recipient_id, message, kind)
             VALUES ($1, $2, $3)
             RETURNING {NOTIFICATION_COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(recipient_id)
            .bind(message)
            .bind(kind)
            .fetch_one(pool)
            .await
    }

    /// List a user's notifications, newest first, optionally unread only.
    pub async fn list_for_user(
        pool: &PgPool,
        recipient_id: DbId,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications
             WHERE recipient_id = $1
               AND (NOT $2 OR is_read = FALSE)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(recipient_id)
            .bind(unread_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark one of the user's notifications read. Returns `None` when the
    /// notification does not exist or belongs to someone else.
    pub async fn mark_read(
        pool: &PgPool,
        id: DbId,
        recipient_id: DbId,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications SET is_read = TRUE
             WHERE id = $1 AND recipient_id = $2
             RETURNING {NOTIFICATION_COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .bind(recipient_id)
            .fetch_optional(pool)
            .await
    }
}
