//! Handlers for session bookmarks (per-user saved sessions).

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use eventsphere_core::error::CoreError;
use eventsphere_core::types::DbId;
use eventsphere_db::models::session::Session;
use eventsphere_db::repositories::{BookmarkRepo, SessionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Result of a bookmark toggle: which branch ran, plus the resulting set.
#[derive(Debug, Serialize)]
pub struct BookmarkToggle {
    pub added: bool,
    pub bookmarks: Vec<DbId>,
}

/// GET /api/v1/users/bookmarks
///
/// The authenticated user's bookmarked sessions, expanded.
pub async fn list_bookmarks(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Session>>>> {
    let sessions = BookmarkRepo::list_sessions(&state.pool, auth.user_id).await?;
    Ok(Json(ApiResponse::new(sessions)))
}

/// POST /api/v1/users/bookmarks/{session_id}
///
/// Toggle a session in the caller's bookmark set: bookmark it if absent,
/// un-bookmark it if present. The response carries the branch taken and
/// the resulting session-id set.
pub async fn toggle_bookmark(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<BookmarkToggle>>> {
    SessionRepo::find_by_id(&state.pool, session_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id: session_id,
        }))?;

    let added = BookmarkRepo::toggle(&state.pool, auth.user_id, session_id).await?;
    let bookmarks = BookmarkRepo::list_session_ids(&state.pool, auth.user_id).await?;

    let message = if added {
        "Session bookmarked"
    } else {
        "Bookmark removed"
    };
    Ok(Json(ApiResponse::with_message(
        BookmarkToggle { added, bookmarks },
        message,
    )))
}
