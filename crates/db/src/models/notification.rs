//! Notification entity models.

use serde::Serialize;
use sqlx::FromRow;

use eventsphere_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub recipient_id: DbId,
    pub message: String,
    pub kind: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}
