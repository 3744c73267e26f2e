//! Repository for the `expo_registrations` table.
//!
//! Register is a reactivate-or-insert: a cancelled row for the same
//! (expo, attendee) pair is flipped back to `registered` in place so the
//! row id stays stable across cancel/register cycles, otherwise a fresh row
//! is inserted with the unique index as the race backstop.

use sqlx::PgPool;

use eventsphere_core::types::DbId;

use crate::models::registration::{ExpoRegistration, RegistrationWithExpo};

/// Column list for expo_registrations queries.
const REGISTRATION_COLUMNS: &str =
    "id, expo_id, attendee_id, status, notes, created_at, updated_at";

/// Outcome of a register attempt.
#[derive(Debug)]
pub enum RegisterOutcome {
    Registered(ExpoRegistration),
    /// An active registration already exists for the pair.
    AlreadyRegistered,
}

/// Provides workflow operations for expo registrations.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Register an attendee for an expo (expo-status gating happens in the
    /// handler, which owns the domain error message).
    pub async fn register(
        pool: &PgPool,
        expo_id: DbId,
        attendee_id: DbId,
    ) -> Result<RegisterOutcome, sqlx::Error> {
        // Reactivate a cancelled row first; the condition makes the flip
        // atomic, so a concurrent register of the same pair loses here and
        // falls through to the insert below.
        let reactivate = format!(
            "UPDATE expo_registrations
             SET status = 'registered', updated_at = now()
             WHERE expo_id = $1 AND attendee_id = $2 AND status = 'cancelled'
             RETURNING {REGISTRATION_COLUMNS}"
        );
        if let Some(registration) = sqlx::query_as::<_, ExpoRegistration>(&reactivate)
            .bind(expo_id)
            .bind(attendee_id)
            .fetch_optional(pool)
            .await?
        {
            return Ok(RegisterOutcome::Registered(registration));
        }

        let insert = format!(
            "INSERT INTO expo_registrations (expo_id, attendee_id)
             VALUES ($1, $2)
             ON CONFLICT (expo_id, attendee_id) DO NOTHING
             RETURNING {REGISTRATION_COLUMNS}"
        );
        match sqlx::query_as::<_, ExpoRegistration>(&insert)
            .bind(expo_id)
            .bind(attendee_id)
            .fetch_optional(pool)
            .await?
        {
            Some(registration) => Ok(RegisterOutcome::Registered(registration)),
            // A row exists and is not cancelled: the pair is already
            // actively registered.
            None => Ok(RegisterOutcome::AlreadyRegistered),
        }
    }

    /// Cancel an active registration. Returns `None` when no active
    /// registration exists for the pair.
    pub async fn cancel(
        pool: &PgPool,
        expo_id: DbId,
        attendee_id: DbId,
    ) -> Result<Option<ExpoRegistration>, sqlx::Error> {
        let query = format!(
            "UPDATE expo_registrations
             SET status = 'cancelled', updated_at = now()
             WHERE expo_id = $1 AND attendee_id = $2 AND status = 'registered'
             RETURNING {REGISTRATION_COLUMNS}"
        );
        sqlx::query_as::<_, ExpoRegistration>(&query)
            .bind(expo_id)
            .bind(attendee_id)
            .fetch_optional(pool)
            .await
    }

    /// List an attendee's active registrations with embedded expo detail,
    /// newest first.
    pub async fn list_active_for_attendee(
        pool: &PgPool,
        attendee_id: DbId,
    ) -> Result<Vec<RegistrationWithExpo>, sqlx::Error> {
        sqlx::query_as::<_, RegistrationWithExpo>(
            "SELECT
                r.id, r.expo_id, r.attendee_id, r.status, r.created_at,
                e.title AS expo_title, e.start_date AS expo_start_date,
                e.end_date AS expo_end_date, e.venue AS expo_venue,
                e.city AS expo_city, e.status AS expo_status
             FROM expo_registrations r
             JOIN expos e ON e.id = r.expo_id
             WHERE r.attendee_id = $1 AND r.status = 'registered'
             ORDER BY r.created_at DESC",
        )
        .bind(attendee_id)
        .fetch_all(pool)
        .await
    }
}
