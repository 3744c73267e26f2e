//! Handlers for the exhibitor application workflow: submission, organizer
//! review (approve with booth assignment, reject with reason), and the
//! public approved-exhibitor directory.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use eventsphere_core::application::ApplicationStatus;
use eventsphere_core::error::CoreError;
use eventsphere_core::notification::{KIND_ALERT, KIND_SUCCESS};
use eventsphere_core::types::DbId;
use eventsphere_db::models::application::{
    ApplicationDetail, ApplicationFilter, ApprovedExhibitor, CreateApplication,
    ExhibitorApplication,
};
use eventsphere_db::repositories::{ApplicationRepo, ApproveOutcome, ExpoRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::expos::ensure_expo_owner;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireExhibitor, RequireOrganizer};
use crate::notifications::notify;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Reason recorded when an organizer rejects without providing one.
const DEFAULT_REJECTION_REASON: &str = "Application rejected by organizer";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /exhibitors/applications`.
#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub expo_id: DbId,
    /// Falls back to the exhibitor's profile company name when omitted.
    pub company_name: Option<String>,
    pub company_description: Option<String>,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    pub website: Option<String>,
}

/// Request body for `PUT /exhibitors/applications/{id}/approve`.
#[derive(Debug, Default, Deserialize)]
pub struct ApproveRequest {
    /// Booth to assign; approval without a booth is allowed.
    pub booth_id: Option<DbId>,
}

/// Request body for `PUT /exhibitors/applications/{id}/reject`.
#[derive(Debug, Default, Deserialize)]
pub struct RejectRequest {
    pub reason: Option<String>,
}

/// Query parameters for `GET /exhibitors/approved`.
#[derive(Debug, Deserialize)]
pub struct ApprovedParams {
    pub expo_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// POST /api/v1/exhibitors/applications
///
/// Submit an application for an expo. One application per exhibitor per
/// expo; a repeat submission is rejected whatever state the first one is in.
pub async fn create_application(
    RequireExhibitor(user): RequireExhibitor,
    State(state): State<AppState>,
    Json(input): Json<ApplyRequest>,
) -> AppResult<Json<ApiResponse<ExhibitorApplication>>> {
    let expo = ExpoRepo::find_by_id(&state.pool, input.expo_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expo",
            id: input.expo_id,
        }))?;

    // Profile fallback for the company name.
    let company_name = match input.company_name.filter(|n| !n.trim().is_empty()) {
        Some(name) => name.trim().to_string(),
        None => {
            let profile = UserRepo::find_by_id(&state.pool, user.user_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "User",
                    id: user.user_id,
                }))?;
            profile.company_name.filter(|n| !n.trim().is_empty()).ok_or_else(|| {
                AppError::Core(CoreError::Validation("Company name is required".into()))
            })?
        }
    };

    // Precheck for the friendly message; the unique index on
    // (expo_id, exhibitor_id) backstops the race, and the sqlx error
    // classifier maps that violation to the same response.
    if ApplicationRepo::find_by_pair(&state.pool, expo.id, user.user_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "You have already applied for this expo".into(),
        )));
    }

    let application = ApplicationRepo::create(
        &state.pool,
        &CreateApplication {
            expo_id: expo.id,
            exhibitor_id: user.user_id,
            company_name,
            company_description: input.company_description,
            products: input.products,
            services: input.services,
            website: input.website,
        },
    )
    .await?;

    tracing::info!(
        application_id = application.id,
        expo_id = expo.id,
        exhibitor_id = user.user_id,
        "Exhibitor application submitted"
    );

    notify(
        &state.pool,
        expo.organizer_id,
        format!(
            "New exhibitor application from {} for \"{}\"",
            application.company_name, expo.title
        ),
        eventsphere_core::notification::KIND_INFO,
    );

    Ok(Json(ApiResponse::with_message(
        application,
        "Application submitted successfully",
    )))
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// GET /api/v1/exhibitors/applications
///
/// Applications with cross-referenced expo and identity detail, filterable
/// by expo and status. Organizer or admin only.
pub async fn list_applications(
    RequireOrganizer(_user): RequireOrganizer,
    State(state): State<AppState>,
    Query(filter): Query<ApplicationFilter>,
) -> AppResult<Json<ApiResponse<Vec<ApplicationDetail>>>> {
    if let Some(status) = &filter.status {
        status
            .parse::<ApplicationStatus>()
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let applications = ApplicationRepo::list(&state.pool, &filter).await?;
    Ok(Json(ApiResponse::new(applications)))
}

/// GET /api/v1/exhibitors/my-applications
///
/// The authenticated exhibitor's own applications.
pub async fn my_applications(
    RequireExhibitor(user): RequireExhibitor,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ApplicationDetail>>>> {
    let applications = ApplicationRepo::list_for_exhibitor(&state.pool, user.user_id).await?;
    Ok(Json(ApiResponse::new(applications)))
}

/// GET /api/v1/exhibitors/applications/{id}
///
/// A single application with full detail. Any authenticated user; an
/// exhibitor uses this to follow their own application by id.
pub async fn get_application(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<ApplicationDetail>>> {
    let application = ApplicationRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Application",
            id,
        }))?;

    Ok(Json(ApiResponse::new(application)))
}

/// GET /api/v1/exhibitors/approved
///
/// Public directory of approved exhibitors, optionally scoped to one expo.
pub async fn approved_exhibitors(
    State(state): State<AppState>,
    Query(params): Query<ApprovedParams>,
) -> AppResult<Json<ApiResponse<Vec<ApprovedExhibitor>>>> {
    let exhibitors = ApplicationRepo::list_approved(&state.pool, params.expo_id).await?;
    Ok(Json(ApiResponse::new(exhibitors)))
}

// ---------------------------------------------------------------------------
// Review
// ---------------------------------------------------------------------------

/// PUT /api/v1/exhibitors/applications/{id}/approve
///
/// Approve an application, optionally assigning a booth in the same
/// transaction. A rejected application can be approved; an approved one can
/// not be approved again. If the requested booth is no longer available the
/// whole approval fails and the application keeps its previous status.
pub async fn approve_application(
    RequireOrganizer(user): RequireOrganizer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ApproveRequest>,
) -> AppResult<Json<ApiResponse<ExhibitorApplication>>> {
    let existing = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Application",
            id,
        }))?;

    let expo = ensure_expo_owner(&state, existing.expo_id, &user).await?;

    // Guard up front for the common case; the conditional UPDATE in the
    // repository is the backstop for concurrent reviewers.
    existing
        .status
        .parse::<ApplicationStatus>()
        .map_err(CoreError::Internal)?
        .check_approvable()
        .map_err(CoreError::Conflict)?;

    match ApplicationRepo::approve(&state.pool, id, user.user_id, input.booth_id).await? {
        ApproveOutcome::Approved(application) => {
            tracing::info!(
                application_id = id,
                approver_id = user.user_id,
                booth_id = input.booth_id,
                "Application approved"
            );

            notify(
                &state.pool,
                application.exhibitor_id,
                match &application.booth_number {
                    Some(number) => format!(
                        "Your application for \"{}\" has been approved (booth {number})",
                        expo.title
                    ),
                    None => format!("Your application for \"{}\" has been approved", expo.title),
                },
                KIND_SUCCESS,
            );

            Ok(Json(ApiResponse::with_message(
                application,
                "Application approved successfully",
            )))
        }
        ApproveOutcome::AlreadyApproved => Err(AppError::Core(CoreError::Conflict(
            "Application already approved".into(),
        ))),
        ApproveOutcome::BoothUnavailable => Err(AppError::Core(CoreError::Conflict(
            "Booth is not available".into(),
        ))),
    }
}

/// PUT /api/v1/exhibitors/applications/{id}/reject
///
/// Reject an application with a reason. Rejecting an already-rejected
/// application fails; an approved one can be rejected (its booth, if any,
/// stays assigned until reassigned through the floor plan).
pub async fn reject_application(
    RequireOrganizer(user): RequireOrganizer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RejectRequest>,
) -> AppResult<Json<ApiResponse<ExhibitorApplication>>> {
    let existing = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Application",
            id,
        }))?;

    let expo = ensure_expo_owner(&state, existing.expo_id, &user).await?;

    existing
        .status
        .parse::<ApplicationStatus>()
        .map_err(CoreError::Internal)?
        .check_rejectable()
        .map_err(CoreError::Conflict)?;

    let reason = input
        .reason
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REJECTION_REASON.to_string());

    let application = ApplicationRepo::reject(&state.pool, id, &reason)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict("Application already rejected".into()))
        })?;

    tracing::info!(
        application_id = id,
        user_id = user.user_id,
        "Application rejected"
    );

    notify(
        &state.pool,
        application.exhibitor_id,
        format!(
            "Your application for \"{}\" was rejected: {reason}",
            expo.title
        ),
        KIND_ALERT,
    );

    Ok(Json(ApiResponse::with_message(
        application,
        "Application rejected",
    )))
}
