pub mod auth;
pub mod exhibitors;
pub mod expos;
pub mod feedback;
pub mod health;
pub mod messages;
pub mod notifications;
pub mod sessions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                               register (public)
/// /auth/login                                  login (public)
/// /auth/forgot-password                        issue reset token (public)
/// /auth/reset-password                         consume reset token (public)
/// /auth/me                                     own profile
/// /auth/profile                                update profile (PUT)
/// /auth/change-password                        change password (PUT)
///
/// /expos                                       list (public), create (organizer)
/// /expos/{id}                                  get (public), update, delete
/// /expos/{id}/booths                           floor plan booths (public)
/// /expos/{id}/floor-plan                       replace floor plan (PUT, organizer)
/// /expos/{id}/register                         register / cancel (attendee)
/// /expos/my-registrations                      own registrations (attendee)
///
/// /sessions                                    list (public), create (organizer)
/// /sessions/{id}                               get (public), update, delete
/// /sessions/{id}/register                      join / leave roster (attendee)
/// /sessions/{id}/attendees                     roster (organizer)
///
/// /exhibitors/applications                     submit (exhibitor), list w/ filters (organizer)
/// /exhibitors/my-applications                  own applications (exhibitor)
/// /exhibitors/applications/{id}                get (any authenticated)
/// /exhibitors/applications/{id}/approve        approve + booth (PUT, organizer)
/// /exhibitors/applications/{id}/reject         reject w/ reason (PUT, organizer)
/// /exhibitors/approved                         approved directory (public)
///
/// /users/bookmarks                             list own bookmarks
/// /users/bookmarks/{session_id}                toggle (POST)
///
/// /messages                                    send (POST)
/// /messages/conversations                      conversation summaries
/// /messages/{user_id}                          full thread
///
/// /notifications                               own feed
/// /notifications/{id}/read                     mark read (PUT)
///
/// /feedback                                    submit (POST), list (admin/organizer)
/// /feedback/my-feedback                        own feedback
/// /feedback/{id}                               respond (PUT, admin/organizer)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/expos", expos::router())
        .nest("/sessions", sessions::router())
        .nest("/exhibitors", exhibitors::router())
        .nest("/users", users::router())
        .nest("/messages", messages::router())
        .nest("/notifications", notifications::router())
        .nest("/feedback", feedback::router())
}
