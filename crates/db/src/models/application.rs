//! Exhibitor application entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use eventsphere_core::types::{DbId, Timestamp};

/// A row from the `exhibitor_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExhibitorApplication {
    pub id: DbId,
    pub expo_id: DbId,
    pub exhibitor_id: DbId,
    pub company_name: String,
    pub company_description: Option<String>,
    pub products: Vec<String>,
    pub services: Vec<String>,
    pub website: Option<String>,
    pub status: String,
    pub booth_id: Option<DbId>,
    pub booth_number: Option<String>,
    pub rejection_reason: Option<String>,
    pub approved_at: Option<Timestamp>,
    pub approved_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An application joined with its expo summary, exhibitor identity, and
/// approver identity, for admin/organizer and "my applications" listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationDetail {
    pub id: DbId,
    pub expo_id: DbId,
    pub exhibitor_id: DbId,
    pub company_name: String,
    pub company_description: Option<String>,
    pub products: Vec<String>,
    pub services: Vec<String>,
    pub website: Option<String>,
    pub status: String,
    pub booth_id: Option<DbId>,
    pub booth_number: Option<String>,
    pub rejection_reason: Option<String>,
    pub approved_at: Option<Timestamp>,
    pub approved_by: Option<DbId>,
    pub created_at: Timestamp,
    pub expo_title: String,
    pub expo_start_date: Timestamp,
    pub expo_end_date: Timestamp,
    pub expo_status: String,
    pub exhibitor_name: String,
    pub exhibitor_email: String,
    pub approver_name: Option<String>,
    pub approver_email: Option<String>,
}

/// Public view of an approved exhibitor for an expo. Excludes application
/// bookkeeping (status, approver, rejection fields) irrelevant to attendees.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApprovedExhibitor {
    pub application_id: DbId,
    pub expo_id: DbId,
    pub exhibitor_id: DbId,
    pub exhibitor_name: String,
    pub company_name: String,
    pub company_description: Option<String>,
    pub products: Vec<String>,
    pub services: Vec<String>,
    pub website: Option<String>,
    pub booth_number: Option<String>,
}

/// DTO for inserting a new application (always `pending`).
#[derive(Debug, Clone)]
pub struct CreateApplication {
    pub expo_id: DbId,
    pub exhibitor_id: DbId,
    pub company_name: String,
    pub company_description: Option<String>,
    pub products: Vec<String>,
    pub services: Vec<String>,
    pub website: Option<String>,
}

/// Optional filters for the admin/organizer application listing.
#[derive(Debug, Default, Deserialize)]
pub struct ApplicationFilter {
    pub expo_id: Option<DbId>,
    pub status: Option<String>,
}
