//! Route definitions for the `/expos` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::expos;
use crate::state::AppState;

/// Routes mounted at `/expos`.
///
/// ```text
/// GET    /                   -> list_expos (public)
/// POST   /                   -> create_expo (organizer)
/// GET    /my-registrations   -> my_registrations (attendee)
/// GET    /{id}               -> get_expo (public)
/// PUT    /{id}               -> update_expo (owner or admin)
/// DELETE /{id}               -> delete_expo (owner or admin)
/// GET    /{id}/booths        -> list_booths (public)
/// PUT    /{id}/floor-plan    -> replace_floor_plan (owner or admin)
/// POST   /{id}/register      -> register_for_expo (attendee)
/// DELETE /{id}/register      -> cancel_registration (attendee)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(expos::list_expos).post(expos::create_expo))
        // Static segment before the `{id}` matcher.
        .route("/my-registrations", get(expos::my_registrations))
        .route(
            "/{id}",
            get(expos::get_expo)
                .put(expos::update_expo)
                .delete(expos::delete_expo),
        )
        .route("/{id}/booths", get(expos::list_booths))
        .route("/{id}/floor-plan", put(expos::replace_floor_plan))
        .route(
            "/{id}/register",
            post(expos::register_for_expo).delete(expos::cancel_registration),
        )
}
