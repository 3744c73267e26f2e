//! Session entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use eventsphere_core::types::{DbId, Timestamp};

/// A row from the `sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    pub id: DbId,
    pub expo_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub session_type: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub location: String,
    pub speaker_name: String,
    pub speaker_bio: Option<String>,
    pub speaker_company: Option<String>,
    pub speaker_title: Option<String>,
    pub max_attendees: i32,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A session with its roster size, for capacity-aware listings that do not
/// need the full attendee identities.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SessionWithCount {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub session: Session,
    pub registered_count: i64,
}

/// One roster member, for session detail views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RosterMember {
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub registered_at: Timestamp,
}

/// DTO for inserting a new session.
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub expo_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub session_type: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub location: String,
    pub speaker_name: String,
    pub speaker_bio: Option<String>,
    pub speaker_company: Option<String>,
    pub speaker_title: Option<String>,
    pub max_attendees: i32,
}

/// DTO for updating a session. `None` fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSession {
    pub title: Option<String>,
    pub description: Option<String>,
    pub session_type: Option<String>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub location: Option<String>,
    pub speaker_name: Option<String>,
    pub speaker_bio: Option<String>,
    pub speaker_company: Option<String>,
    pub speaker_title: Option<String>,
    pub max_attendees: Option<i32>,
    pub status: Option<String>,
}

/// Optional filters for session listing.
#[derive(Debug, Default, Deserialize)]
pub struct SessionFilter {
    pub expo_id: Option<DbId>,
    #[serde(rename = "type")]
    pub session_type: Option<String>,
    pub status: Option<String>,
}
