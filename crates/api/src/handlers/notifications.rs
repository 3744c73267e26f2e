//! Handlers for the authenticated user's notification feed.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use eventsphere_core::error::CoreError;
use eventsphere_core::types::DbId;
use eventsphere_db::models::notification::Notification;
use eventsphere_db::repositories::NotificationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationListParams {
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/notifications
///
/// The user's notifications, newest first, with offset pagination.
pub async fn list_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<NotificationListParams>,
) -> AppResult<Json<ApiResponse<Vec<Notification>>>> {
    let limit = params.limit.unwrap_or(50).clamp(1, 200);
    let offset = params.offset.unwrap_or(0).max(0);

    let notifications = NotificationRepo::list_for_user(
        &state.pool,
        auth.user_id,
        params.unread_only,
        limit,
        offset,
    )
    .await?;

    Ok(Json(ApiResponse::new(notifications)))
}

/// PUT /api/v1/notifications/{id}/read
///
/// Mark one of the user's notifications as read. Another user's
/// notification is indistinguishable from a missing one.
pub async fn mark_notification_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Notification>>> {
    let notification = NotificationRepo::mark_read(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }))?;

    Ok(Json(ApiResponse::new(notification)))
}
