//! Repository for the `bookmarks` table.

use sqlx::PgPool;

use eventsphere_core::types::DbId;

use crate::models::session::Session;

/// Provides the per-user session bookmark set.
pub struct BookmarkRepo;

impl BookmarkRepo {
    /// Flip a session in and out of the user's bookmark set.
    ///
    /// Returns `true` when the call added the bookmark and `false` when it
    /// removed an existing one. The insert-first order makes a concurrent
    /// double toggle settle on one add and one remove.
    pub async fn toggle(
        pool: &PgPool,
        user_id: DbId,
        session_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let inserted = sqlx::query(
            "INSERT INTO bookmarks (user_id, session_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, session_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(session_id)
        .execute(pool)
        .await?;
        if inserted.rows_affected() > 0 {
            return Ok(true);
        }

        sqlx::query("DELETE FROM bookmarks WHERE user_id = $1 AND session_id = $2")
            .bind(user_id)
            .bind(session_id)
            .execute(pool)
            .await?;
        Ok(false)
    }

    /// The user's bookmarked session ids, oldest bookmark first.
    pub async fn list_session_ids(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT session_id FROM bookmarks WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// The user's bookmarked sessions, expanded.
    pub async fn list_sessions(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Session>, sqlx::Error> {
        sqlx::query_as::<_, Session>(
            "SELECT s.id, s.expo_id, s.title, s.description, s.session_type,
                s.start_time, s.end_time, s.location, s.speaker_name, s.speaker_bio,
                s.speaker_company, s.speaker_title, s.max_attendees, s.status,
                s.created_at, s.updated_at
             FROM bookmarks b
             JOIN sessions s ON s.id = b.session_id
             WHERE b.user_id = $1
             ORDER BY b.created_at ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
