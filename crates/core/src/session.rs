//! Session type and status values.

/// Session format. Stored in `sessions.session_type`.
pub const SESSION_TYPE_KEYNOTE: &str = "keynote";
pub const SESSION_TYPE_WORKSHOP: &str = "workshop";
pub const SESSION_TYPE_PANEL: &str = "panel";
pub const SESSION_TYPE_NETWORKING: &str = "networking";

/// All valid session types.
pub const VALID_SESSION_TYPES: &[&str] = &[
    SESSION_TYPE_KEYNOTE,
    SESSION_TYPE_WORKSHOP,
    SESSION_TYPE_PANEL,
    SESSION_TYPE_NETWORKING,
];

/// Session lifecycle status. Stored in `sessions.status`.
pub const SESSION_STATUS_SCHEDULED: &str = "scheduled";
pub const SESSION_STATUS_ONGOING: &str = "ongoing";
pub const SESSION_STATUS_COMPLETED: &str = "completed";
pub const SESSION_STATUS_CANCELLED: &str = "cancelled";

/// All valid session status values.
pub const VALID_SESSION_STATUSES: &[&str] = &[
    SESSION_STATUS_SCHEDULED,
    SESSION_STATUS_ONGOING,
    SESSION_STATUS_COMPLETED,
    SESSION_STATUS_CANCELLED,
];

/// Validate a session type string.
pub fn validate_session_type(session_type: &str) -> Result<(), String> {
    if VALID_SESSION_TYPES.contains(&session_type) {
        Ok(())
    } else {
        Err(format!(
            "Invalid session type '{session_type}'. Must be one of: {}",
            VALID_SESSION_TYPES.join(", ")
        ))
    }
}

/// Validate a session status string.
pub fn validate_session_status(status: &str) -> Result<(), String> {
    if VALID_SESSION_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid session status '{status}'. Must be one of: {}",
            VALID_SESSION_STATUSES.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_types_accepted() {
        for t in VALID_SESSION_TYPES {
            assert!(validate_session_type(t).is_ok());
        }
        assert!(validate_session_type("webinar").is_err());
    }

    #[test]
    fn test_valid_statuses_accepted() {
        for s in VALID_SESSION_STATUSES {
            assert!(validate_session_status(s).is_ok());
        }
        assert!(validate_session_status("archived").is_err());
    }
}
