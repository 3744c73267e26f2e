//! Direct-message entity models.

use serde::Serialize;
use sqlx::FromRow;

use eventsphere_core::types::{DbId, Timestamp};

/// A message joined with sender/recipient identities.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: DbId,
    pub sender_id: DbId,
    pub recipient_id: DbId,
    pub content: String,
    pub sent_at: Timestamp,
    pub sender_name: String,
    pub sender_email: String,
    pub recipient_name: String,
    pub recipient_email: String,
}

/// One conversation entry: the counterpart plus the latest message with
/// them, newest conversation first.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Conversation {
    pub counterpart_id: DbId,
    pub counterpart_name: String,
    pub counterpart_email: String,
    pub last_message_id: DbId,
    pub last_message_sender_id: DbId,
    pub last_message_content: String,
    pub last_message_sent_at: Timestamp,
}
