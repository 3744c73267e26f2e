//! Route definitions for the notification feed.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET /              -> list_notifications
/// PUT /{id}/read     -> mark_notification_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications::list_notifications))
        .route("/{id}/read", put(notifications::mark_notification_read))
}
