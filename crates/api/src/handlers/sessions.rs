//! Handlers for the `/sessions` resource: session CRUD, capacity-limited
//! rosters, and attendee self-registration.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use eventsphere_core::error::CoreError;
use eventsphere_core::session::{
    validate_session_status, validate_session_type, SESSION_STATUS_SCHEDULED,
};
use eventsphere_core::types::{DbId, Timestamp};
use eventsphere_db::models::session::{
    CreateSession, RosterMember, Session, SessionFilter, SessionWithCount, UpdateSession,
};
use eventsphere_db::repositories::{SessionRegisterOutcome, SessionRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::expos::ensure_expo_owner;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAttendee, RequireOrganizer};
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /sessions`.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub expo_id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub session_type: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub location: String,
    pub speaker_name: String,
    pub speaker_bio: Option<String>,
    pub speaker_company: Option<String>,
    pub speaker_title: Option<String>,
    pub max_attendees: i32,
}

// ---------------------------------------------------------------------------
// Session CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/sessions
///
/// Public listing with roster sizes, filterable by expo, type, and status.
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(filter): Query<SessionFilter>,
) -> AppResult<Json<ApiResponse<Vec<SessionWithCount>>>> {
    if let Some(t) = &filter.session_type {
        validate_session_type(t).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }
    if let Some(s) = &filter.status {
        validate_session_status(s).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let sessions = SessionRepo::list(&state.pool, &filter).await?;
    Ok(Json(ApiResponse::new(sessions)))
}

/// GET /api/v1/sessions/{id}
///
/// A single session with its current roster size.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<SessionWithCount>>> {
    let session = SessionRepo::find_with_count(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))?;

    Ok(Json(ApiResponse::new(session)))
}

/// POST /api/v1/sessions
///
/// Schedule a session for an expo. Only the expo's organizer or an admin.
pub async fn create_session(
    RequireOrganizer(user): RequireOrganizer,
    State(state): State<AppState>,
    Json(input): Json<CreateSessionRequest>,
) -> AppResult<Json<ApiResponse<Session>>> {
    ensure_expo_owner(&state, input.expo_id, &user).await?;

    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title is required".into(),
        )));
    }
    validate_session_type(&input.session_type)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    if input.end_time <= input.start_time {
        return Err(AppError::Core(CoreError::Validation(
            "End time must be after start time".into(),
        )));
    }
    if input.max_attendees <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "max_attendees must be positive".into(),
        )));
    }

    let session = SessionRepo::create(
        &state.pool,
        &CreateSession {
            expo_id: input.expo_id,
            title: input.title.trim().to_string(),
            description: input.description,
            session_type: input.session_type,
            start_time: input.start_time,
            end_time: input.end_time,
            location: input.location,
            speaker_name: input.speaker_name,
            speaker_bio: input.speaker_bio,
            speaker_company: input.speaker_company,
            speaker_title: input.speaker_title,
            max_attendees: input.max_attendees,
        },
    )
    .await?;

    tracing::info!(
        session_id = session.id,
        expo_id = session.expo_id,
        "Session created"
    );

    Ok(Json(ApiResponse::with_message(
        session,
        "Session created successfully",
    )))
}

/// PUT /api/v1/sessions/{id}
///
/// Partial update. Only the owning expo's organizer or an admin.
pub async fn update_session(
    RequireOrganizer(user): RequireOrganizer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSession>,
) -> AppResult<Json<ApiResponse<Session>>> {
    let session = load_owned_session(&state, id, &user).await?;

    if let Some(t) = &input.session_type {
        validate_session_type(t).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }
    if let Some(s) = &input.status {
        validate_session_status(s).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }
    let start = input.start_time.unwrap_or(session.start_time);
    let end = input.end_time.unwrap_or(session.end_time);
    if end <= start {
        return Err(AppError::Core(CoreError::Validation(
            "End time must be after start time".into(),
        )));
    }
    if let Some(max) = input.max_attendees {
        if max <= 0 {
            return Err(AppError::Core(CoreError::Validation(
                "max_attendees must be positive".into(),
            )));
        }
    }

    let session = SessionRepo::update(&state.pool, id, &input).await?;

    Ok(Json(ApiResponse::with_message(
        session,
        "Session updated successfully",
    )))
}

/// DELETE /api/v1/sessions/{id}
///
/// Delete a session and its roster. Only the owning expo's organizer or an
/// admin.
pub async fn delete_session(
    RequireOrganizer(user): RequireOrganizer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    load_owned_session(&state, id, &user).await?;

    SessionRepo::delete(&state.pool, id).await?;

    tracing::info!(session_id = id, user_id = user.user_id, "Session deleted");

    Ok(Json(ApiResponse::with_message(
        (),
        "Session deleted successfully",
    )))
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// POST /api/v1/sessions/{id}/register
///
/// Join a session roster. Fails once the roster reaches `max_attendees`;
/// under concurrent requests for the last slot exactly one wins.
pub async fn register_for_session(
    RequireAttendee(user): RequireAttendee,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<SessionWithCount>>> {
    let session = SessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))?;

    if session.status != SESSION_STATUS_SCHEDULED {
        return Err(AppError::Core(CoreError::Validation(
            "Session is not open for registration".into(),
        )));
    }

    match SessionRepo::register(&state.pool, id, user.user_id).await? {
        SessionRegisterOutcome::Registered => {}
        SessionRegisterOutcome::AlreadyRegistered => {
            return Err(AppError::Core(CoreError::Conflict(
                "You are already registered for this session".into(),
            )));
        }
        SessionRegisterOutcome::Full => {
            return Err(AppError::Core(CoreError::Conflict("Session is full".into())));
        }
    }

    tracing::info!(session_id = id, user_id = user.user_id, "Session roster join");

    let session = SessionRepo::find_with_count(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))?;

    Ok(Json(ApiResponse::with_message(
        session,
        "Registered for session successfully",
    )))
}

/// DELETE /api/v1/sessions/{id}/register
///
/// Leave a session roster. No-op if the user was not registered.
pub async fn unregister_from_session(
    RequireAttendee(user): RequireAttendee,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    SessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))?;

    SessionRepo::unregister(&state.pool, id, user.user_id).await?;

    Ok(Json(ApiResponse::with_message(
        (),
        "Unregistered from session successfully",
    )))
}

/// GET /api/v1/sessions/{id}/attendees
///
/// The session roster. Only the owning expo's organizer or an admin.
pub async fn session_roster(
    RequireOrganizer(user): RequireOrganizer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Vec<RosterMember>>>> {
    load_owned_session(&state, id, &user).await?;

    let roster = SessionRepo::roster(&state.pool, id).await?;
    Ok(Json(ApiResponse::new(roster)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a session and check ownership of its expo.
async fn load_owned_session(state: &AppState, id: DbId, user: &AuthUser) -> AppResult<Session> {
    let session = SessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))?;

    ensure_expo_owner(state, session.expo_id, user).await?;
    Ok(session)
}
