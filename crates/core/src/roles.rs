//! Well-known role name constants.
//!
//! These must match the values accepted by the `ck_users_role` CHECK
//! constraint in `20260301000001_create_users.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_ORGANIZER: &str = "organizer";
pub const ROLE_EXHIBITOR: &str = "exhibitor";
pub const ROLE_ATTENDEE: &str = "attendee";

/// All valid role values, in privilege order.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_ORGANIZER, ROLE_EXHIBITOR, ROLE_ATTENDEE];

/// Validate that a role string is one of the accepted values.
pub fn validate_role(role: &str) -> Result<(), String> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_roles_accepted() {
        for role in VALID_ROLES {
            assert!(validate_role(role).is_ok());
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        let err = validate_role("superuser").unwrap_err();
        assert!(err.contains("Invalid role"));
    }
}
