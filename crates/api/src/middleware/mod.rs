//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireOrganizer`] -- Requires `organizer` or `admin` role.
//! - [`rbac::RequireExhibitor`] -- Requires the `exhibitor` role.
//! - [`rbac::RequireAttendee`] -- Requires the `attendee` role.

pub mod auth;
pub mod rbac;
