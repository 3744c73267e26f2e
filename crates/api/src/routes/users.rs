//! Route definitions for per-user resources (session bookmarks).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::bookmarks;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET  /bookmarks                -> list_bookmarks
/// POST /bookmarks/{session_id}   -> toggle_bookmark
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(bookmarks::list_bookmarks))
        .route("/bookmarks/{session_id}", post(bookmarks::toggle_bookmark))
}
