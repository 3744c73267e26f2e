//! Repository for the `messages` table.

use sqlx::PgPool;

use eventsphere_core::types::DbId;

use crate::models::message::{Conversation, Message};

/// Join used by message queries: message plus both identities.
const MESSAGE_SELECT: &str = "SELECT
        m.id, m.sender_id, m.recipient_id, m.content, m.sent_at,
        s.name AS sender_name, s.email AS sender_email,
        r.name AS recipient_name, r.email AS recipient_email
     FROM messages m
     JOIN users s ON s.id = m.sender_id
     JOIN users r ON r.id = m.recipient_id";

/// Provides direct-message operations.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a message, returning it with identities expanded.
    pub async fn create(
        pool: &PgPool,
        sender_id: DbId,
        recipient_id: DbId,
        content: &str,
    ) -> Result<Message, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO messages (sender_id, recipient_id, content)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(sender_id)
        .bind(recipient_id)
        .bind(content)
        .fetch_one(pool)
        .await?;

        let query = format!("{MESSAGE_SELECT} WHERE m.id = $1");
        sqlx::query_as::<_, Message>(&query).bind(id).fetch_one(pool).await
    }

    /// The full thread between two users, chronological.
    pub async fn thread(
        pool: &PgPool,
        user_id: DbId,
        other_user_id: DbId,
    ) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!(
            "{MESSAGE_SELECT}
             WHERE (m.sender_id = $1 AND m.recipient_id = $2)
                OR (m.sender_id = $2 AND m.recipient_id = $1)
             ORDER BY m.sent_at ASC"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(user_id)
            .bind(other_user_id)
            .fetch_all(pool)
            .await
    }

    /// The user's conversations: one row per counterpart carrying the
    /// latest message, newest conversation first.
    ///
    /// `DISTINCT ON` keeps the grouping in the database instead of loading
    /// every message into memory.
    pub async fn conversations(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Conversation>, sqlx::Error> {
        sqlx::query_as::<_, Conversation>(
            "SELECT * FROM (
                SELECT DISTINCT ON (counterpart_id)
                    counterpart_id, u.name AS counterpart_name,
                    u.email AS counterpart_email,
                    m.id AS last_message_id, m.sender_id AS last_message_sender_id,
                    m.content AS last_message_content, m.sent_at AS last_message_sent_at
                FROM (
                    SELECT *,
                        CASE WHEN sender_id = $1 THEN recipient_id ELSE sender_id END
                            AS counterpart_id
                    FROM messages
                    WHERE sender_id = $1 OR recipient_id = $1
                ) m
                JOIN users u ON u.id = m.counterpart_id
                ORDER BY counterpart_id, m.sent_at DESC
             ) conv
             ORDER BY last_message_sent_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
