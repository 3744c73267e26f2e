//! Route definitions for the exhibitor application workflow.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::exhibitors;
use crate::state::AppState;

/// Routes mounted at `/exhibitors`.
///
/// ```text
/// POST /applications                  -> create_application (exhibitor)
/// GET  /applications                  -> list_applications (organizer)
/// GET  /my-applications               -> my_applications (exhibitor)
/// GET  /applications/{id}             -> get_application (any authenticated)
/// PUT  /applications/{id}/approve     -> approve_application (expo owner or admin)
/// PUT  /applications/{id}/reject      -> reject_application (expo owner or admin)
/// GET  /approved                      -> approved_exhibitors (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/applications",
            get(exhibitors::list_applications).post(exhibitors::create_application),
        )
        .route("/my-applications", get(exhibitors::my_applications))
        .route("/applications/{id}", get(exhibitors::get_application))
        .route(
            "/applications/{id}/approve",
            put(exhibitors::approve_application),
        )
        .route(
            "/applications/{id}/reject",
            put(exhibitors::reject_application),
        )
        .route("/approved", get(exhibitors::approved_exhibitors))
}
