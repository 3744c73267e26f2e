//! Repository for the `expos` and `booths` tables.
//!
//! Booths are an owned sub-collection of their expo: they are written only
//! here (create / floor-plan replace) and in `ApplicationRepo::approve`
//! (booth claim), always inside the transaction of the operation that
//! touches them.

use sqlx::{PgPool, Postgres, Transaction};

use eventsphere_core::types::DbId;

use crate::models::expo::{Booth, BoothInput, CreateExpo, Expo, UpdateExpo};

/// Column list for expos queries.
const EXPO_COLUMNS: &str = "id, title, description, theme, start_date, end_date, venue, \
    address, city, state, country, zip_code, status, organizer_id, max_exhibitors, \
    registration_deadline, created_at, updated_at";

/// Column list for booths queries.
pub(crate) const BOOTH_COLUMNS: &str = "id, expo_id, booth_number, pos_x, pos_y, width, \
    height, status, exhibitor_id, created_at, updated_at";

/// Provides CRUD operations for expos and their floor plans.
pub struct ExpoRepo;

impl ExpoRepo {
    /// Insert a new expo together with its initial floor plan, atomically.
    pub async fn create(
        pool: &PgPool,
        input: &CreateExpo,
        booths: &[BoothInput],
    ) -> Result<Expo, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO expos
                (title, description, theme, start_date, end_date, venue, address,
                 city, state, country, zip_code, status, organizer_id,
                 max_exhibitors, registration_deadline)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                     COALESCE($14, 100), $15)
             RETURNING {EXPO_COLUMNS}"
        );
        let expo = sqlx::query_as::<_, Expo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.theme)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.venue)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.country)
            .bind(&input.zip_code)
            .bind(&input.status)
            .bind(input.organizer_id)
            .bind(input.max_exhibitors)
            .bind(input.registration_deadline)
            .fetch_one(&mut *tx)
            .await?;

        insert_booths(&mut tx, expo.id, booths).await?;

        tx.commit().await?;
        Ok(expo)
    }

    /// Find an expo by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Expo>, sqlx::Error> {
        let query = format!("SELECT {EXPO_COLUMNS} FROM expos WHERE id = $1");
        sqlx::query_as::<_, Expo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List expos, optionally filtered by status and/or organizer, newest
    /// first.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        organizer_id: Option<DbId>,
    ) -> Result<Vec<Expo>, sqlx::Error> {
        let query = format!(
            "SELECT {EXPO_COLUMNS} FROM expos
             WHERE ($1::text IS NULL OR status = $1)
               AND ($2::bigint IS NULL OR organizer_id = $2)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Expo>(&query)
            .bind(status)
            .bind(organizer_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExpo,
    ) -> Result<Expo, sqlx::Error> {
        let query = format!(
            "UPDATE expos SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                theme = COALESCE($4, theme),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                venue = COALESCE($7, venue),
                address = COALESCE($8, address),
                city = COALESCE($9, city),
                state = COALESCE($10, state),
                country = COALESCE($11, country),
                zip_code = COALESCE($12, zip_code),
                status = COALESCE($13, status),
                max_exhibitors = COALESCE($14, max_exhibitors),
                registration_deadline = COALESCE($15, registration_deadline),
                updated_at = now()
             WHERE id = $1
             RETURNING {EXPO_COLUMNS}"
        );
        sqlx::query_as::<_, Expo>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.theme)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.venue)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.country)
            .bind(&input.zip_code)
            .bind(&input.status)
            .bind(input.max_exhibitors)
            .bind(input.registration_deadline)
            .fetch_one(pool)
            .await
    }

    /// Delete an expo (booths, sessions, applications, and registrations
    /// cascade). Returns whether a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM expos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the floor plan of an expo, ordered by booth number.
    pub async fn list_booths(pool: &PgPool, expo_id: DbId) -> Result<Vec<Booth>, sqlx::Error> {
        let query = format!(
            "SELECT {BOOTH_COLUMNS} FROM booths WHERE expo_id = $1 ORDER BY booth_number ASC"
        );
        sqlx::query_as::<_, Booth>(&query)
            .bind(expo_id)
            .fetch_all(pool)
            .await
    }

    /// Replace an expo's floor plan atomically.
    ///
    /// Booths with an assigned exhibitor are kept as-is (removing them would
    /// orphan approved applications); all unassigned booths are dropped and
    /// re-created from the input, skipping numbers that collide with a kept
    /// booth.
    pub async fn replace_floor_plan(
        pool: &PgPool,
        expo_id: DbId,
        booths: &[BoothInput],
    ) -> Result<Vec<Booth>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM booths WHERE expo_id = $1 AND exhibitor_id IS NULL")
            .bind(expo_id)
            .execute(&mut *tx)
            .await?;

        let kept: Vec<String> =
            sqlx::query_scalar("SELECT booth_number FROM booths WHERE expo_id = $1")
                .bind(expo_id)
                .fetch_all(&mut *tx)
                .await?;

        let fresh: Vec<BoothInput> = booths
            .iter()
            .filter(|b| !kept.contains(&b.booth_number))
            .cloned()
            .collect();
        insert_booths(&mut tx, expo_id, &fresh).await?;

        let query = format!(
            "SELECT {BOOTH_COLUMNS} FROM booths WHERE expo_id = $1 ORDER BY booth_number ASC"
        );
        let plan = sqlx::query_as::<_, Booth>(&query)
            .bind(expo_id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(plan)
    }
}

/// Insert floor-plan booths inside an open transaction.
async fn insert_booths(
    tx: &mut Transaction<'_, Postgres>,
    expo_id: DbId,
    booths: &[BoothInput],
) -> Result<(), sqlx::Error> {
    for booth in booths {
        sqlx::query(
            "INSERT INTO booths (expo_id, booth_number, pos_x, pos_y, width, height)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(expo_id)
        .bind(&booth.booth_number)
        .bind(booth.pos_x)
        .bind(booth.pos_y)
        .bind(booth.width)
        .bind(booth.height)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}
