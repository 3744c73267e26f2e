//! Repository for the `exhibitor_applications` table.
//!
//! The approve/reject operations are written as atomic conditional updates
//! (`WHERE status <> ...`) so two racing admins cannot both flip the same
//! application, and the booth claim shares the approval's transaction: if
//! the requested booth is not available the whole approval rolls back.

use sqlx::PgPool;

use eventsphere_core::types::DbId;

use crate::models::application::{
    ApplicationDetail, ApplicationFilter, ApprovedExhibitor, CreateApplication,
    ExhibitorApplication,
};
use crate::models::expo::Booth;
use crate::repositories::expo_repo::BOOTH_COLUMNS;

/// Column list for exhibitor_applications queries.
const APPLICATION_COLUMNS: &str = "id, expo_id, exhibitor_id, company_name, \
    company_description, products, services, website, status, booth_id, booth_number, \
    rejection_reason, approved_at, approved_by, created_at, updated_at";

/// Join used by every detail/listing query: application plus expo summary,
/// exhibitor identity, and approver identity.
const DETAIL_SELECT: &str = "SELECT
        a.id, a.expo_id, a.exhibitor_id, a.company_name, a.company_description,
        a.products, a.services, a.website, a.status, a.booth_id, a.booth_number,
        a.rejection_reason, a.approved_at, a.approved_by, a.created_at,
        e.title AS expo_title, e.start_date AS expo_start_date,
        e.end_date AS expo_end_date, e.status AS expo_status,
        u.name AS exhibitor_name, u.email AS exhibitor_email,
        ap.name AS approver_name, ap.email AS approver_email
     FROM exhibitor_applications a
     JOIN expos e ON e.id = a.expo_id
     JOIN users u ON u.id = a.exhibitor_id
     LEFT JOIN users ap ON ap.id = a.approved_by";

/// Outcome of an approve attempt.
///
/// Both failure arms are conflicts at the API layer; they are split so the
/// handler can report an actionable message for each.
#[derive(Debug)]
pub enum ApproveOutcome {
    Approved(ExhibitorApplication),
    /// The conditional status flip matched no row: the application was
    /// already approved (possibly by a concurrent request).
    AlreadyApproved,
    /// The requested booth was not `available`; the approval was rolled
    /// back.
    BoothUnavailable,
}

/// Provides CRUD and workflow operations for exhibitor applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a new application in state `pending`, returning the created
    /// row.
    ///
    /// Fails with a unique-constraint violation
    /// (`uq_applications_expo_exhibitor`) when the pair already applied;
    /// callers precheck with [`find_by_pair`](Self::find_by_pair) for the
    /// friendly message and rely on the constraint under race.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplication,
    ) -> Result<ExhibitorApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO exhibitor_applications
                (expo_id, exhibitor_id, company_name, company_description,
                 products, services, website)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {APPLICATION_COLUMNS}"
        );
        sqlx::query_as::<_, ExhibitorApplication>(&query)
            .bind(input.expo_id)
            .bind(input.exhibitor_id)
            .bind(&input.company_name)
            .bind(&input.company_description)
            .bind(&input.products)
            .bind(&input.services)
            .bind(&input.website)
            .fetch_one(pool)
            .await
    }

    /// Find an application by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ExhibitorApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {APPLICATION_COLUMNS} FROM exhibitor_applications WHERE id = $1"
        );
        sqlx::query_as::<_, ExhibitorApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an application by its (expo, exhibitor) pair.
    pub async fn find_by_pair(
        pool: &PgPool,
        expo_id: DbId,
        exhibitor_id: DbId,
    ) -> Result<Option<ExhibitorApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {APPLICATION_COLUMNS} FROM exhibitor_applications
             WHERE expo_id = $1 AND exhibitor_id = $2"
        );
        sqlx::query_as::<_, ExhibitorApplication>(&query)
            .bind(expo_id)
            .bind(exhibitor_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an application with cross-references expanded.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ApplicationDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE a.id = $1");
        sqlx::query_as::<_, ApplicationDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List applications with cross-references, optionally filtered by expo
    /// and/or status, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &ApplicationFilter,
    ) -> Result<Vec<ApplicationDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE ($1::bigint IS NULL OR a.expo_id = $1)
               AND ($2::text IS NULL OR a.status = $2)
             ORDER BY a.created_at DESC"
        );
        sqlx::query_as::<_, ApplicationDetail>(&query)
            .bind(filter.expo_id)
            .bind(filter.status.as_deref())
            .fetch_all(pool)
            .await
    }

    /// List one exhibitor's applications with cross-references, newest
    /// first.
    pub async fn list_for_exhibitor(
        pool: &PgPool,
        exhibitor_id: DbId,
    ) -> Result<Vec<ApplicationDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT} WHERE a.exhibitor_id = $1 ORDER BY a.created_at DESC"
        );
        sqlx::query_as::<_, ApplicationDetail>(&query)
            .bind(exhibitor_id)
            .fetch_all(pool)
            .await
    }

    /// Public listing of approved exhibitors, optionally scoped to one expo.
    ///
    /// Excludes application bookkeeping fields; ordered by company name.
    pub async fn list_approved(
        pool: &PgPool,
        expo_id: Option<DbId>,
    ) -> Result<Vec<ApprovedExhibitor>, sqlx::Error> {
        sqlx::query_as::<_, ApprovedExhibitor>(
            "SELECT
                a.id AS application_id, a.expo_id, a.exhibitor_id,
                u.name AS exhibitor_name, a.company_name, a.company_description,
                a.products, a.services, a.website, a.booth_number
             FROM exhibitor_applications a
             JOIN users u ON u.id = a.exhibitor_id
             WHERE a.status = 'approved'
               AND ($1::bigint IS NULL OR a.expo_id = $1)
             ORDER BY a.company_name ASC",
        )
        .bind(expo_id)
        .fetch_all(pool)
        .await
    }

    /// Approve an application, optionally claiming a booth, in one
    /// transaction.
    ///
    /// The status flip guards on `status <> 'approved'` (matching the
    /// original workflow, which allows approving a rejected application but
    /// never re-approving). When `booth_id` is given, the booth is claimed
    /// with `WHERE status = 'available'`; a non-available booth aborts the
    /// whole approval.
    pub async fn approve(
        pool: &PgPool,
        id: DbId,
        approver_id: DbId,
        booth_id: Option<DbId>,
    ) -> Result<ApproveOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let flip = format!(
            "UPDATE exhibitor_applications
             SET status = 'approved', approved_at = now(), approved_by = $2,
                 updated_at = now()
             WHERE id = $1 AND status <> 'approved'
             RETURNING {APPLICATION_COLUMNS}"
        );
        let Some(application) = sqlx::query_as::<_, ExhibitorApplication>(&flip)
            .bind(id)
            .bind(approver_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            tx.rollback().await?;
            return Ok(ApproveOutcome::AlreadyApproved);
        };

        let application = match booth_id {
            None => application,
            Some(booth_id) => {
                let claim = format!(
                    "UPDATE booths
                     SET status = 'reserved', exhibitor_id = $3, updated_at = now()
                     WHERE id = $1 AND expo_id = $2 AND status = 'available'
                     RETURNING {BOOTH_COLUMNS}"
                );
                let Some(booth) = sqlx::query_as::<_, Booth>(&claim)
                    .bind(booth_id)
                    .bind(application.expo_id)
                    .bind(application.exhibitor_id)
                    .fetch_optional(&mut *tx)
                    .await?
                else {
                    tx.rollback().await?;
                    return Ok(ApproveOutcome::BoothUnavailable);
                };

                let stamp = format!(
                    "UPDATE exhibitor_applications
                     SET booth_id = $2, booth_number = $3, updated_at = now()
                     WHERE id = $1
                     RETURNING {APPLICATION_COLUMNS}"
                );
                sqlx::query_as::<_, ExhibitorApplication>(&stamp)
                    .bind(id)
                    .bind(booth.id)
                    .bind(&booth.booth_number)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(ApproveOutcome::Approved(application))
    }

    /// Reject an application with a reason.
    ///
    /// Atomic conditional update; returns `None` when the application was
    /// already rejected. No booth interaction.
    pub async fn reject(
        pool: &PgPool,
        id: DbId,
        reason: &str,
    ) -> Result<Option<ExhibitorApplication>, sqlx::Error> {
        let query = format!(
            "UPDATE exhibitor_applications
             SET status = 'rejected', rejection_reason = $2, updated_at = now()
             WHERE id = $1 AND status <> 'rejected'
             RETURNING {APPLICATION_COLUMNS}"
        );
        sqlx::query_as::<_, ExhibitorApplication>(&query)
            .bind(id)
            .bind(reason)
            .fetch_optional(pool)
            .await
    }
}
