//! Repository for the `users` table.

use sqlx::PgPool;

use eventsphere_core::types::{DbId, Timestamp};

use crate::models::user::{CreateUser, UpdateProfile, User};

/// Column list for users queries.
const USER_COLUMNS: &str = "id, name, email, password_hash, role, phone, company_name, \
    is_active, reset_token_hash, reset_token_expires_at, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Fails with a unique-constraint violation (`uq_users_email`) if the
    /// email is already taken.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash, role, phone, company_name)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .bind(&input.phone)
            .bind(&input.company_name)
            .fetch_one(pool)
            .await
    }

    /// Find a user by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE lower(email) = lower($1)");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial profile update, returning the updated row.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                company_name = COALESCE($4, company_name),
                updated_at = now()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.company_name)
            .fetch_one(pool)
            .await
    }

    /// Replace the stored password hash.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET password_hash = $2, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Store a password-reset token hash with its expiry.
    pub async fn set_reset_token(
        pool: &PgPool,
        id: DbId,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET reset_token_hash = $2, reset_token_expires_at = $3,
                updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Find the user holding an unexpired reset token hash.
    pub async fn find_by_reset_token(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE reset_token_hash = $1 AND reset_token_expires_at > now()"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Clear any outstanding reset token after a successful reset.
    pub async fn clear_reset_token(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET reset_token_hash = NULL, reset_token_expires_at = NULL,
                updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
