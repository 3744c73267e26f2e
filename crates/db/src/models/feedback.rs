//! Feedback entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use eventsphere_core::types::{DbId, Timestamp};

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub user_id: DbId,
    pub feedback_type: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub response: Option<String>,
    pub responded_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting feedback.
#[derive(Debug, Clone)]
pub struct CreateFeedback {
    pub user_id: DbId,
    pub feedback_type: String,
    pub subject: String,
    pub message: String,
}

/// Optional filters for the admin/organizer feedback listing.
#[derive(Debug, Default, Deserialize)]
pub struct FeedbackFilter {
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub feedback_type: Option<String>,
}
