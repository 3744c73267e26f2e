//! Handlers for the `/auth` resource (registration, login, profile, password flows).

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use eventsphere_core::error::CoreError;
use eventsphere_core::roles::{validate_role, ROLE_ADMIN, ROLE_ATTENDEE};
use eventsphere_db::models::user::{CreateUser, PublicUser, UpdateProfile};
use eventsphere_db::repositories::UserRepo;

use crate::auth::jwt::{generate_access_token, generate_reset_token, hash_reset_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Password-reset token lifetime in minutes.
const RESET_TOKEN_EXPIRY_MINS: i64 = 60;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Defaults to `attendee` when omitted.
    pub role: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `PUT /auth/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Request body for `POST /auth/forgot-password`.
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Request body for `POST /auth/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Successful authentication response returned by registration and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: PublicUser,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Register a new account. Email must be unique (case-insensitive); the
/// `admin` role can not be self-assigned.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name is required".into(),
        )));
    }

    let email = input.email.trim().to_lowercase();
    if !email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "A valid email address is required".into(),
        )));
    }

    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = input.role.unwrap_or_else(|| ROLE_ATTENDEE.to_string());
    validate_role(&role).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    if role == ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Admin accounts can not be created through registration".into(),
        )));
    }

    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "User already exists with this email".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: name.to_string(),
            email,
            password_hash,
            role,
            phone: input.phone,
            company_name: input.company_name,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, role = %user.role, "New user registered");

    let response = build_auth_response(&state, user.into())?;
    Ok(Json(ApiResponse::with_message(
        response,
        "User registered successfully",
    )))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let response = build_auth_response(&state, user.into())?;
    Ok(Json(ApiResponse::with_message(response, "Login successful")))
}

/// GET /api/v1/auth/me
///
/// The authenticated user's own profile.
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<ApiResponse<PublicUser>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    Ok(Json(ApiResponse::new(user.into())))
}

/// PUT /api/v1/auth/profile
///
/// Partial update of the authenticated user's profile fields.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<ApiResponse<PublicUser>>> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Name can not be empty".into(),
            )));
        }
    }

    let user = UserRepo::update_profile(&state.pool, auth.user_id, &input).await?;

    Ok(Json(ApiResponse::with_message(
        user.into(),
        "Profile updated successfully",
    )))
}

/// PUT /api/v1/auth/change-password
///
/// Change the password; the current password must verify first.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    let current_valid = verify_password(&input.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password(&state.pool, user.id, &password_hash).await?;

    Ok(Json(ApiResponse::with_message(
        (),
        "Password changed successfully",
    )))
}

/// POST /api/v1/auth/forgot-password
///
/// Issue a password-reset token. The response is identical whether or not
/// the email exists, to avoid leaking which addresses are registered. With
/// no mailer wired up, the plaintext token is returned in the response body.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(input): Json<ForgotPasswordRequest>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let message = "If that email is registered, a password reset token has been issued";

    let Some(user) = UserRepo::find_by_email(&state.pool, input.email.trim()).await? else {
        return Ok(Json(ApiResponse::with_message(
            serde_json::Value::Null,
            message,
        )));
    };

    let (plaintext, token_hash) = generate_reset_token();
    let expires_at = Utc::now() + chrono::Duration::minutes(RESET_TOKEN_EXPIRY_MINS);
    UserRepo::set_reset_token(&state.pool, user.id, &token_hash, expires_at).await?;

    tracing::info!(user_id = user.id, "Password reset token issued");

    Ok(Json(ApiResponse::with_message(
        serde_json::json!({ "reset_token": plaintext }),
        message,
    )))
}

/// POST /api/v1/auth/reset-password
///
/// Consume a reset token and set a new password. The token is single-use;
/// it is cleared whether the rest of the flow succeeds or not.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let token_hash = hash_reset_token(&input.token);

    let user = UserRepo::find_by_reset_token(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired reset token".into(),
            ))
        })?;

    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password(&state.pool, user.id, &password_hash).await?;
    UserRepo::clear_reset_token(&state.pool, user.id).await?;

    tracing::info!(user_id = user.id, "Password reset completed");

    Ok(Json(ApiResponse::with_message(
        (),
        "Password reset successfully",
    )))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate an access token and wrap it with the public user view.
fn build_auth_response(state: &AppState, user: PublicUser) -> AppResult<AuthResponse> {
    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        token,
        expires_in: state.config.jwt.token_expiry_hours * 3600,
        user,
    })
}
