//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the minimum requirement. Use these in route handlers to enforce
//! authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use eventsphere_core::error::CoreError;
use eventsphere_core::roles::{ROLE_ATTENDEE, ROLE_EXHIBITOR, ROLE_ORGANIZER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires `organizer` or `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn organizer_or_admin(RequireOrganizer(user): RequireOrganizer) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireOrganizer(pub AuthUser);

impl FromRequestParts<AppState> for RequireOrganizer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() && user.role != ROLE_ORGANIZER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Organizer or Admin role required".into(),
            )));
        }
        Ok(RequireOrganizer(user))
    }
}

/// Requires the `exhibitor` role. Rejects with 403 Forbidden otherwise.
pub struct RequireExhibitor(pub AuthUser);

impl FromRequestParts<AppState> for RequireExhibitor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_EXHIBITOR {
            return Err(AppError::Core(CoreError::Forbidden(
                "Exhibitor role required".into(),
            )));
        }
        Ok(RequireExhibitor(user))
    }
}

/// Requires the `attendee` role. Rejects with 403 Forbidden otherwise.
pub struct RequireAttendee(pub AuthUser);

impl FromRequestParts<AppState> for RequireAttendee {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ATTENDEE {
            return Err(AppError::Core(CoreError::Forbidden(
                "Attendee role required".into(),
            )));
        }
        Ok(RequireAttendee(user))
    }
}
