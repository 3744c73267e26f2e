//! Route definitions for platform feedback.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Routes mounted at `/feedback`.
///
/// ```text
/// POST /                 -> submit_feedback
/// GET  /                 -> list_feedback (admin or organizer)
/// GET  /my-feedback      -> my_feedback
/// PUT  /{id}             -> respond_to_feedback (admin or organizer)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(feedback::list_feedback).post(feedback::submit_feedback),
        )
        .route("/my-feedback", get(feedback::my_feedback))
        .route("/{id}", put(feedback::respond_to_feedback))
}
