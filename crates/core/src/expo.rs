//! Expo lifecycle status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of an expo, stored as lowercase text in
/// `expos.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpoStatus {
    Draft,
    Published,
    Ongoing,
    Completed,
    Cancelled,
}

impl ExpoStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ExpoStatus::Draft => "draft",
            ExpoStatus::Published => "published",
            ExpoStatus::Ongoing => "ongoing",
            ExpoStatus::Completed => "completed",
            ExpoStatus::Cancelled => "cancelled",
        }
    }

    /// Whether attendees may register for an expo in this status.
    ///
    /// Registration is open only while the expo is published or ongoing;
    /// draft, completed, and cancelled expos reject registration.
    pub fn registration_open(self) -> bool {
        matches!(self, ExpoStatus::Published | ExpoStatus::Ongoing)
    }
}

impl fmt::Display for ExpoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ExpoStatus::Draft),
            "published" => Ok(ExpoStatus::Published),
            "ongoing" => Ok(ExpoStatus::Ongoing),
            "completed" => Ok(ExpoStatus::Completed),
            "cancelled" => Ok(ExpoStatus::Cancelled),
            other => Err(format!("Invalid expo status '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_gating() {
        assert!(ExpoStatus::Published.registration_open());
        assert!(ExpoStatus::Ongoing.registration_open());
        assert!(!ExpoStatus::Draft.registration_open());
        assert!(!ExpoStatus::Completed.registration_open());
        assert!(!ExpoStatus::Cancelled.registration_open());
    }

    #[test]
    fn test_round_trip_str() {
        for status in [
            ExpoStatus::Draft,
            ExpoStatus::Published,
            ExpoStatus::Ongoing,
            ExpoStatus::Completed,
            ExpoStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<ExpoStatus>(), Ok(status));
        }
    }
}
