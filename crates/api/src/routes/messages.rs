//! Route definitions for direct messages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// POST /                     -> send_message
/// GET  /conversations        -> list_conversations
/// GET  /{user_id}            -> get_thread
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(messages::send_message))
        // Static segment before the `{user_id}` matcher.
        .route("/conversations", get(messages::list_conversations))
        .route("/{user_id}", get(messages::get_thread))
}
