//! Well-known notification kind constants.
//!
//! These must match the values accepted by `ck_notifications_kind` in
//! `20260301000010_create_notifications.sql`.

pub const KIND_INFO: &str = "info";
pub const KIND_ALERT: &str = "alert";
pub const KIND_SUCCESS: &str = "success";
pub const KIND_WARNING: &str = "warning";
