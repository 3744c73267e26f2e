//! Repository for the `feedback` table.

use sqlx::PgPool;

use eventsphere_core::types::DbId;

use crate::models::feedback::{CreateFeedback, Feedback, FeedbackFilter};

/// Column list for feedback queries.
const FEEDBACK_COLUMNS: &str = "id, user_id, feedback_type, subject, message, status, \
    response, responded_by, created_at, updated_at";

/// Provides feedback operations.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert feedback in state `open`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (user_id, feedback_type, subject, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {FEEDBACK_COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(input.user_id)
            .bind(&input.feedback_type)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List all feedback, optionally filtered by status and/or type, newest
    /// first.
    pub async fn list(
        pool: &PgPool,
        filter: &FeedbackFilter,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!(
            "SELECT {FEEDBACK_COLUMNS} FROM feedback
             WHERE ($1::text IS NULL OR status = $1)
               AND ($2::text IS NULL OR feedback_type = $2)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(filter.status.as_deref())
            .bind(filter.feedback_type.as_deref())
            .fetch_all(pool)
            .await
    }

    /// List one user's feedback, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!(
            "SELECT {FEEDBACK_COLUMNS} FROM feedback
             WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Record a response and status change. Returns `None` when the
    /// feedback does not exist.
    pub async fn respond(
        pool: &PgPool,
        id: DbId,
        responder_id: DbId,
        response: &str,
        status: &str,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!(
            "UPDATE feedback
             SET response = $3, responded_by = $2, status = $4, updated_at = now()
             WHERE id = $1
             RETURNING {FEEDBACK_COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .bind(responder_id)
            .bind(response)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
