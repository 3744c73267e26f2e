//! Fire-and-forget notification delivery.
//!
//! Workflow handlers (application approval, rejection, feedback responses)
//! produce notifications as a side effect of the main operation. Delivery is
//! spawned onto a background task so a notification insert failure never fails
//! the request that triggered it.

use eventsphere_core::types::DbId;
use eventsphere_db::repositories::NotificationRepo;
use eventsphere_db::DbPool;

/// Spawn a background task that records a notification for `recipient_id`.
///
/// Failures are logged and swallowed; the caller's transaction has already
/// committed by the time this runs.
pub fn notify(pool: &DbPool, recipient_id: DbId, message: String, kind: &'static str) {
    let pool = pool.clone();
    tokio::spawn(async move {
        if let Err(err) = NotificationRepo::create(&pool, recipient_id, &message, kind).await {
            tracing::warn!(
                recipient_id,
                kind,
                error = %err,
                "failed to deliver notification"
            );
        }
    });
}
