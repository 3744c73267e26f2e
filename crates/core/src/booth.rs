//! Booth status within an expo floor plan.
//!
//! Invariant (enforced by `ck_booths_assignment` in
//! `20260301000003_create_booths.sql`): a booth carries an assigned
//! exhibitor only when its status is not `available`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoothStatus {
    Available,
    Reserved,
    Occupied,
}

impl BoothStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BoothStatus::Available => "available",
            BoothStatus::Reserved => "reserved",
            BoothStatus::Occupied => "occupied",
        }
    }
}

impl fmt::Display for BoothStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoothStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(BoothStatus::Available),
            "reserved" => Ok(BoothStatus::Reserved),
            "occupied" => Ok(BoothStatus::Occupied),
            other => Err(format!("Invalid booth status '{other}'")),
        }
    }
}
