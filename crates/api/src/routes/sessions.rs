//! Route definitions for the `/sessions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// GET    /                  -> list_sessions (public)
/// POST   /                  -> create_session (expo owner or admin)
/// GET    /{id}              -> get_session (public)
/// PUT    /{id}              -> update_session (expo owner or admin)
/// DELETE /{id}              -> delete_session (expo owner or admin)
/// POST   /{id}/register     -> register_for_session (attendee)
/// DELETE /{id}/register     -> unregister_from_session (attendee)
/// GET    /{id}/attendees    -> session_roster (expo owner or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(sessions::list_sessions).post(sessions::create_session),
        )
        .route(
            "/{id}",
            get(sessions::get_session)
                .put(sessions::update_session)
                .delete(sessions::delete_session),
        )
        .route(
            "/{id}/register",
            post(sessions::register_for_session).delete(sessions::unregister_from_session),
        )
        .route("/{id}/attendees", get(sessions::session_roster))
}
