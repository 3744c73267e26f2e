//! Handlers for the `/expos` resource: expo CRUD, floor plans, and attendee
//! registration.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use eventsphere_core::error::CoreError;
use eventsphere_core::expo::ExpoStatus;
use eventsphere_core::notification::{KIND_INFO, KIND_SUCCESS};
use eventsphere_core::types::DbId;
use eventsphere_db::models::expo::{
    Booth, BoothInput, CreateExpo, Expo, ExpoWithFloorPlan, UpdateExpo,
};
use eventsphere_db::models::registration::{ExpoRegistration, RegistrationWithExpo};
use eventsphere_db::repositories::{ExpoRepo, RegisterOutcome, RegistrationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAttendee, RequireOrganizer};
use crate::notifications::notify;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /expos`.
#[derive(Debug, Deserialize)]
pub struct ExpoListParams {
    pub status: Option<String>,
    pub organizer_id: Option<DbId>,
}

/// Request body for `POST /expos`.
#[derive(Debug, Deserialize)]
pub struct CreateExpoRequest {
    pub title: String,
    pub description: String,
    pub theme: Option<String>,
    pub start_date: eventsphere_core::types::Timestamp,
    pub end_date: eventsphere_core::types::Timestamp,
    pub venue: String,
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub zip_code: Option<String>,
    /// Defaults to `draft` when omitted.
    pub status: Option<String>,
    pub max_exhibitors: Option<i32>,
    pub registration_deadline: Option<eventsphere_core::types::Timestamp>,
    /// Initial floor plan; may be empty.
    #[serde(default)]
    pub booths: Vec<BoothInput>,
}

/// Request body for `PUT /expos/{id}/floor-plan`.
#[derive(Debug, Deserialize)]
pub struct FloorPlanRequest {
    pub booths: Vec<BoothInput>,
}

// ---------------------------------------------------------------------------
// Expo CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/expos
///
/// Public listing, optionally filtered by status and/or organizer.
pub async fn list_expos(
    State(state): State<AppState>,
    Query(params): Query<ExpoListParams>,
) -> AppResult<Json<ApiResponse<Vec<Expo>>>> {
    if let Some(status) = &params.status {
        status
            .parse::<ExpoStatus>()
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let expos = ExpoRepo::list(&state.pool, params.status.as_deref(), params.organizer_id).await?;
    Ok(Json(ApiResponse::new(expos)))
}

/// GET /api/v1/expos/{id}
///
/// A single expo with its full floor plan.
pub async fn get_expo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<ExpoWithFloorPlan>>> {
    let expo = ExpoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Expo", id }))?;
    let booths = ExpoRepo::list_booths(&state.pool, id).await?;

    Ok(Json(ApiResponse::new(ExpoWithFloorPlan { expo, booths })))
}

/// POST /api/v1/expos
///
/// Create an expo and its initial floor plan. Organizer or admin only.
pub async fn create_expo(
    RequireOrganizer(user): RequireOrganizer,
    State(state): State<AppState>,
    Json(input): Json<CreateExpoRequest>,
) -> AppResult<Json<ApiResponse<ExpoWithFloorPlan>>> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title is required".into(),
        )));
    }
    if input.end_date < input.start_date {
        return Err(AppError::Core(CoreError::Validation(
            "End date must not be before start date".into(),
        )));
    }
    if let Some(max) = input.max_exhibitors {
        if max <= 0 {
            return Err(AppError::Core(CoreError::Validation(
                "max_exhibitors must be positive".into(),
            )));
        }
    }

    let status = match &input.status {
        Some(s) => s
            .parse::<ExpoStatus>()
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?,
        None => ExpoStatus::Draft,
    };

    let create = CreateExpo {
        title: input.title.trim().to_string(),
        description: input.description,
        theme: input.theme,
        start_date: input.start_date,
        end_date: input.end_date,
        venue: input.venue,
        address: input.address,
        city: input.city,
        state: input.state,
        country: input.country,
        zip_code: input.zip_code,
        status: status.as_str().to_string(),
        organizer_id: user.user_id,
        max_exhibitors: input.max_exhibitors,
        registration_deadline: input.registration_deadline,
    };

    let expo = ExpoRepo::create(&state.pool, &create, &input.booths).await?;
    let booths = ExpoRepo::list_booths(&state.pool, expo.id).await?;

    tracing::info!(expo_id = expo.id, organizer_id = user.user_id, "Expo created");

    Ok(Json(ApiResponse::with_message(
        ExpoWithFloorPlan { expo, booths },
        "Expo created successfully",
    )))
}

/// PUT /api/v1/expos/{id}
///
/// Partial update. Only the owning organizer or an admin may update.
pub async fn update_expo(
    RequireOrganizer(user): RequireOrganizer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExpo>,
) -> AppResult<Json<ApiResponse<Expo>>> {
    ensure_expo_owner(&state, id, &user).await?;

    if let Some(status) = &input.status {
        status
            .parse::<ExpoStatus>()
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }
    if let (Some(start), Some(end)) = (&input.start_date, &input.end_date) {
        if end < start {
            return Err(AppError::Core(CoreError::Validation(
                "End date must not be before start date".into(),
            )));
        }
    }

    let expo = ExpoRepo::update(&state.pool, id, &input).await?;

    Ok(Json(ApiResponse::with_message(
        expo,
        "Expo updated successfully",
    )))
}

/// DELETE /api/v1/expos/{id}
///
/// Delete an expo and (via cascade) its booths, sessions, applications, and
/// registrations. Only the owning organizer or an admin.
pub async fn delete_expo(
    RequireOrganizer(user): RequireOrganizer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    ensure_expo_owner(&state, id, &user).await?;

    let deleted = ExpoRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Expo", id }));
    }

    tracing::info!(expo_id = id, user_id = user.user_id, "Expo deleted");

    Ok(Json(ApiResponse::with_message(
        (),
        "Expo deleted successfully",
    )))
}

// ---------------------------------------------------------------------------
// Floor plan
// ---------------------------------------------------------------------------

/// GET /api/v1/expos/{id}/booths
///
/// The expo's booths, ordered by booth number.
pub async fn list_booths(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Vec<Booth>>>> {
    ExpoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Expo", id }))?;

    let booths = ExpoRepo::list_booths(&state.pool, id).await?;
    Ok(Json(ApiResponse::new(booths)))
}

/// PUT /api/v1/expos/{id}/floor-plan
///
/// Replace the expo's floor plan. Booths already assigned to an exhibitor
/// survive the replacement.
pub async fn replace_floor_plan(
    RequireOrganizer(user): RequireOrganizer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<FloorPlanRequest>,
) -> AppResult<Json<ApiResponse<Vec<Booth>>>> {
    ensure_expo_owner(&state, id, &user).await?;

    let booths = ExpoRepo::replace_floor_plan(&state.pool, id, &input.booths).await?;

    tracing::info!(
        expo_id = id,
        booth_count = booths.len(),
        "Floor plan replaced"
    );

    Ok(Json(ApiResponse::with_message(
        booths,
        "Floor plan updated successfully",
    )))
}

// ---------------------------------------------------------------------------
// Attendee registration
// ---------------------------------------------------------------------------

/// POST /api/v1/expos/{id}/register
///
/// Register the authenticated attendee for an expo. Registration is only
/// open while the expo is published or ongoing. A cancelled registration is
/// reactivated rather than duplicated.
pub async fn register_for_expo(
    RequireAttendee(user): RequireAttendee,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<ExpoRegistration>>> {
    let expo = ExpoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Expo", id }))?;

    let status: ExpoStatus = expo
        .status
        .parse()
        .map_err(|msg: String| AppError::InternalError(msg))?;
    if !status.registration_open() {
        return Err(AppError::Core(CoreError::Validation(
            "Registration is not open for this expo".into(),
        )));
    }

    match RegistrationRepo::register(&state.pool, id, user.user_id).await? {
        RegisterOutcome::Registered(registration) => {
            tracing::info!(expo_id = id, attendee_id = user.user_id, "Expo registration");

            notify(
                &state.pool,
                user.user_id,
                format!("You are registered for \"{}\"", expo.title),
                KIND_SUCCESS,
            );

            Ok(Json(ApiResponse::with_message(
                registration,
                "Registered for expo successfully",
            )))
        }
        RegisterOutcome::AlreadyRegistered => Err(AppError::Core(CoreError::Conflict(
            "You are already registered for this expo".into(),
        ))),
    }
}

/// DELETE /api/v1/expos/{id}/register
///
/// Cancel the attendee's active registration. The row is kept with a
/// `cancelled` status so a later re-register reuses it.
pub async fn cancel_registration(
    RequireAttendee(user): RequireAttendee,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<ExpoRegistration>>> {
    let expo = ExpoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Expo", id }))?;

    let registration = RegistrationRepo::cancel(&state.pool, id, user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "You are not registered for this expo".into(),
            ))
        })?;

    notify(
        &state.pool,
        user.user_id,
        format!("Your registration for \"{}\" was cancelled", expo.title),
        KIND_INFO,
    );

    Ok(Json(ApiResponse::with_message(
        registration,
        "Registration cancelled successfully",
    )))
}

/// GET /api/v1/expos/my-registrations
///
/// The attendee's active registrations with embedded expo detail.
pub async fn my_registrations(
    RequireAttendee(user): RequireAttendee,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<RegistrationWithExpo>>>> {
    let registrations =
        RegistrationRepo::list_active_for_attendee(&state.pool, user.user_id).await?;
    Ok(Json(ApiResponse::new(registrations)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load an expo and check that `user` owns it (or is an admin).
pub(crate) async fn ensure_expo_owner(
    state: &AppState,
    expo_id: DbId,
    user: &AuthUser,
) -> AppResult<Expo> {
    let expo = ExpoRepo::find_by_id(&state.pool, expo_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expo",
            id: expo_id,
        }))?;

    if !user.is_admin() && expo.organizer_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not manage this expo".into(),
        )));
    }

    Ok(expo)
}
