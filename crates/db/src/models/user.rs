//! User entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use eventsphere_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// `password_hash` and the reset-token columns never leave the server; use
/// [`PublicUser`] for anything that serializes into a response.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub is_active: bool,
    pub reset_token_hash: Option<String>,
    pub reset_token_expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// User fields safe to expose in API responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublicUser {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        PublicUser {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            phone: u.phone,
            company_name: u.company_name,
            is_active: u.is_active,
            created_at: u.created_at,
        }
    }
}

/// DTO for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
}

/// DTO for profile updates. `None` fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
}
