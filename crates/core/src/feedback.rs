//! Feedback type and status values.

pub const FEEDBACK_TYPE_SUGGESTION: &str = "suggestion";
pub const FEEDBACK_TYPE_BUG: &str = "bug";
pub const FEEDBACK_TYPE_COMPLAINT: &str = "complaint";
pub const FEEDBACK_TYPE_COMPLIMENT: &str = "compliment";
pub const FEEDBACK_TYPE_OTHER: &str = "other";

pub const VALID_FEEDBACK_TYPES: &[&str] = &[
    FEEDBACK_TYPE_SUGGESTION,
    FEEDBACK_TYPE_BUG,
    FEEDBACK_TYPE_COMPLAINT,
    FEEDBACK_TYPE_COMPLIMENT,
    FEEDBACK_TYPE_OTHER,
];

pub const FEEDBACK_STATUS_OPEN: &str = "open";
pub const FEEDBACK_STATUS_IN_PROGRESS: &str = "in-progress";
pub const FEEDBACK_STATUS_RESOLVED: &str = "resolved";
pub const FEEDBACK_STATUS_CLOSED: &str = "closed";

pub const VALID_FEEDBACK_STATUSES: &[&str] = &[
    FEEDBACK_STATUS_OPEN,
    FEEDBACK_STATUS_IN_PROGRESS,
    FEEDBACK_STATUS_RESOLVED,
    FEEDBACK_STATUS_CLOSED,
];

/// Validate a feedback type string.
pub fn validate_feedback_type(feedback_type: &str) -> Result<(), String> {
    if VALID_FEEDBACK_TYPES.contains(&feedback_type) {
        Ok(())
    } else {
        Err(format!(
            "Invalid feedback type '{feedback_type}'. Must be one of: {}",
            VALID_FEEDBACK_TYPES.join(", ")
        ))
    }
}

/// Validate a feedback status string.
pub fn validate_feedback_status(status: &str) -> Result<(), String> {
    if VALID_FEEDBACK_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid feedback status '{status}'. Must be one of: {}",
            VALID_FEEDBACK_STATUSES.join(", ")
        ))
    }
}
