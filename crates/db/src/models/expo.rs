//! Expo and booth entity models and DTOs.
//!
//! Booths belong to their expo (cascade delete) and are mutated only
//! through the expo update path and the application-approval workflow.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use eventsphere_core::types::{DbId, Timestamp};

/// A row from the `expos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub theme: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub venue: String,
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub zip_code: Option<String>,
    pub status: String,
    pub organizer_id: DbId,
    pub max_exhibitors: i32,
    pub registration_deadline: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `booths` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booth {
    pub id: DbId,
    pub expo_id: DbId,
    pub booth_number: String,
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub status: String,
    pub exhibitor_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An expo with its embedded floor plan, as returned by detail endpoints.
#[derive(Debug, Serialize)]
pub struct ExpoWithFloorPlan {
    #[serde(flatten)]
    pub expo: Expo,
    pub booths: Vec<Booth>,
}

/// One booth in a floor-plan create/replace request.
#[derive(Debug, Clone, Deserialize)]
pub struct BoothInput {
    pub booth_number: String,
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// DTO for inserting a new expo.
#[derive(Debug, Clone)]
pub struct CreateExpo {
    pub title: String,
    pub description: String,
    pub theme: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub venue: String,
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub zip_code: Option<String>,
    pub status: String,
    pub organizer_id: DbId,
    pub max_exhibitors: Option<i32>,
    pub registration_deadline: Option<Timestamp>,
}

/// DTO for updating an expo. `None` fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateExpo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub venue: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
    pub status: Option<String>,
    pub max_exhibitors: Option<i32>,
    pub registration_deadline: Option<Timestamp>,
}
