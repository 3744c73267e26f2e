//! Expo registration entity models.

use serde::Serialize;
use sqlx::FromRow;

use eventsphere_core::types::{DbId, Timestamp};

/// A row from the `expo_registrations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExpoRegistration {
    pub id: DbId,
    pub expo_id: DbId,
    pub attendee_id: DbId,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A registration joined with its expo detail, for "my registrations".
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RegistrationWithExpo {
    pub id: DbId,
    pub expo_id: DbId,
    pub attendee_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub expo_title: String,
    pub expo_start_date: Timestamp,
    pub expo_end_date: Timestamp,
    pub expo_venue: String,
    pub expo_city: String,
    pub expo_status: String,
}
