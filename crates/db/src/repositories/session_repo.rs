//! Repository for the `sessions` and `session_registrations` tables.
//!
//! Roster capacity is enforced under a row lock on the session: the count
//! and the append happen inside one transaction holding `FOR UPDATE` on
//! the session row, so N requests racing on the last open slot produce
//! exactly one winner.

use sqlx::PgPool;

use eventsphere_core::types::DbId;

use crate::models::session::{
    CreateSession, RosterMember, Session, SessionFilter, SessionWithCount, UpdateSession,
};

/// Column list for sessions queries.
const SESSION_COLUMNS: &str = "id, expo_id, title, description, session_type, start_time, \
    end_time, location, speaker_name, speaker_bio, speaker_company, speaker_title, \
    max_attendees, status, created_at, updated_at";

/// Same columns qualified for joined queries.
const SESSION_COLUMNS_QUALIFIED: &str = "s.id, s.expo_id, s.title, s.description, \
    s.session_type, s.start_time, s.end_time, s.location, s.speaker_name, s.speaker_bio, \
    s.speaker_company, s.speaker_title, s.max_attendees, s.status, s.created_at, \
    s.updated_at";

/// Outcome of a session register attempt.
#[derive(Debug)]
pub enum SessionRegisterOutcome {
    Registered,
    AlreadyRegistered,
    /// The roster is at `max_attendees`.
    Full,
}

/// Provides CRUD and roster operations for sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions
                (expo_id, title, description, session_type, start_time, end_time,
                 location, speaker_name, speaker_bio, speaker_company, speaker_title,
                 max_attendees)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {SESSION_COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.expo_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.session_type)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.location)
            .bind(&input.speaker_name)
            .bind(&input.speaker_bio)
            .bind(&input.speaker_company)
            .bind(&input.speaker_title)
            .bind(input.max_attendees)
            .fetch_one(pool)
            .await
    }

    /// Find a session by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {SESSION_COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a session with its roster size.
    pub async fn find_with_count(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SessionWithCount>, sqlx::Error> {
        let query = format!(
            "SELECT {SESSION_COLUMNS_QUALIFIED},
                (SELECT count(*) FROM session_registrations sr
                 WHERE sr.session_id = s.id) AS registered_count
             FROM sessions s
             WHERE s.id = $1"
        );
        sqlx::query_as::<_, SessionWithCount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List sessions with roster sizes, optionally filtered by expo, type,
    /// and status; ordered by start time.
    pub async fn list(
        pool: &PgPool,
        filter: &SessionFilter,
    ) -> Result<Vec<SessionWithCount>, sqlx::Error> {
        let query = format!(
            "SELECT {SESSION_COLUMNS_QUALIFIED},
                (SELECT count(*) FROM session_registrations sr
                 WHERE sr.session_id = s.id) AS registered_count
             FROM sessions s
             WHERE ($1::bigint IS NULL OR s.expo_id = $1)
               AND ($2::text IS NULL OR s.session_type = $2)
               AND ($3::text IS NULL OR s.status = $3)
             ORDER BY s.start_time ASC"
        );
        sqlx::query_as::<_, SessionWithCount>(&query)
            .bind(filter.expo_id)
            .bind(filter.session_type.as_deref())
            .bind(filter.status.as_deref())
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSession,
    ) -> Result<Session, sqlx::Error> {
        let query = format!(
            "UPDATE sessions SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                session_type = COALESCE($4, session_type),
                start_time = COALESCE($5, start_time),
                end_time = COALESCE($6, end_time),
                location = COALESCE($7, location),
                speaker_name = COALESCE($8, speaker_name),
                speaker_bio = COALESCE($9, speaker_bio),
                speaker_company = COALESCE($10, speaker_company),
                speaker_title = COALESCE($11, speaker_title),
                max_attendees = COALESCE($12, max_attendees),
                status = COALESCE($13, status),
                updated_at = now()
             WHERE id = $1
             RETURNING {SESSION_COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.session_type)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.location)
            .bind(&input.speaker_name)
            .bind(&input.speaker_bio)
            .bind(&input.speaker_company)
            .bind(&input.speaker_title)
            .bind(input.max_attendees)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Delete a session (roster and bookmarks cascade). Returns whether a
    /// row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the expanded roster of a session, in registration order.
    pub async fn roster(pool: &PgPool, session_id: DbId) -> Result<Vec<RosterMember>, sqlx::Error> {
        sqlx::query_as::<_, RosterMember>(
            "SELECT sr.user_id, u.name, u.email, sr.created_at AS registered_at
             FROM session_registrations sr
             JOIN users u ON u.id = sr.user_id
             WHERE sr.session_id = $1
             ORDER BY sr.created_at ASC",
        )
        .bind(session_id)
        .fetch_all(pool)
        .await
    }

    /// Append a user to a session roster, capacity-checked under a session
    /// row lock.
    ///
    /// `FOR UPDATE` on the session row serializes all registrations for
    /// that session, so the count observed here is exact: a racing request
    /// blocks until the winner commits and then sees the grown roster. The
    /// unique index absorbs duplicate-identity races on top.
    pub async fn register(
        pool: &PgPool,
        session_id: DbId,
        user_id: DbId,
    ) -> Result<SessionRegisterOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let max_attendees: i32 =
            sqlx::query_scalar("SELECT max_attendees FROM sessions WHERE id = $1 FOR UPDATE")
                .bind(session_id)
                .fetch_one(&mut *tx)
                .await?;

        let count: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM session_registrations WHERE session_id = $1",
        )
        .bind(session_id)
        .fetch_one(&mut *tx)
        .await?;

        if count >= i64::from(max_attendees) {
            tx.rollback().await?;
            return Ok(SessionRegisterOutcome::Full);
        }

        let inserted: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO session_registrations (session_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT (session_id, user_id) DO NOTHING
             RETURNING id",
        )
        .bind(session_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        if inserted.is_none() {
            tx.rollback().await?;
            return Ok(SessionRegisterOutcome::AlreadyRegistered);
        }

        tx.commit().await?;
        Ok(SessionRegisterOutcome::Registered)
    }

    /// Remove a user from a session roster. No-op if absent.
    pub async fn unregister(
        pool: &PgPool,
        session_id: DbId,
        user_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "DELETE FROM session_registrations WHERE session_id = $1 AND user_id = $2",
        )
        .bind(session_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
