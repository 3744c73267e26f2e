//! Exhibitor application status state machine.
//!
//! An application moves `pending -> approved` or `pending -> rejected`.
//! Re-approving or re-rejecting is a conflict, but a rejected application
//! may still be approved. The guards live here so every caller (handlers,
//! repos, tests) shares a single definition instead of ad hoc string
//! comparisons per endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Status of an exhibitor application.
///
/// Stored in the `exhibitor_applications.status` column as lowercase text;
/// see `as_str` / `FromStr` for the wire representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Guard for the approve operation.
    ///
    /// Matches the conditional-update guard in the repository
    /// (`WHERE status <> 'approved'`): re-approving an already-approved
    /// application is a conflict, not a silent no-op.
    pub fn check_approvable(self) -> Result<(), String> {
        if self == ApplicationStatus::Approved {
            return Err("Application already approved".to_string());
        }
        Ok(())
    }

    /// Guard for the reject operation (`WHERE status <> 'rejected'`).
    pub fn check_rejectable(self) -> Result<(), String> {
        if self == ApplicationStatus::Rejected {
            return Err("Application already rejected".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(format!("Invalid application status '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_guard() {
        assert!(ApplicationStatus::Pending.check_approvable().is_ok());
        // The original workflow guards only against double-approval, so a
        // rejected application may still be approved.
        assert!(ApplicationStatus::Rejected.check_approvable().is_ok());
        assert!(ApplicationStatus::Approved.check_approvable().is_err());
    }

    #[test]
    fn test_reject_guard() {
        assert!(ApplicationStatus::Pending.check_rejectable().is_ok());
        assert!(ApplicationStatus::Rejected.check_rejectable().is_err());
    }

    #[test]
    fn test_round_trip_str() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Approved,
            ApplicationStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<ApplicationStatus>(), Ok(status));
        }
        assert!("nonsense".parse::<ApplicationStatus>().is_err());
    }
}
