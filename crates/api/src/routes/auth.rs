//! Route definitions for the `/auth` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /register         -> register
/// POST /login            -> login
/// POST /forgot-password  -> forgot_password
/// POST /reset-password   -> reset_password
/// GET  /me               -> me (requires auth)
/// PUT  /profile          -> update_profile (requires auth)
/// PUT  /change-password  -> change_password (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/forgot-password", post(auth::forgot_password))
        .route("/reset-password", post(auth::reset_password))
        .route("/me", get(auth::me))
        .route("/profile", put(auth::update_profile))
        .route("/change-password", put(auth::change_password))
}
