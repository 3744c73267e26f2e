//! Handlers for platform feedback: submission, staff triage, responses.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use eventsphere_core::error::CoreError;
use eventsphere_core::feedback::{
    validate_feedback_status, validate_feedback_type, FEEDBACK_STATUS_RESOLVED,
};
use eventsphere_core::notification::KIND_INFO;
use eventsphere_core::types::DbId;
use eventsphere_db::models::feedback::{CreateFeedback, Feedback, FeedbackFilter};
use eventsphere_db::repositories::FeedbackRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireOrganizer;
use crate::notifications::notify;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /feedback`.
#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    #[serde(rename = "type")]
    pub feedback_type: String,
    pub subject: String,
    pub message: String,
}

/// Request body for `PUT /feedback/{id}`.
#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub response: String,
    /// Defaults to `resolved` when omitted.
    pub status: Option<String>,
}

/// POST /api/v1/feedback
///
/// Submit feedback; any authenticated user.
pub async fn submit_feedback(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitFeedbackRequest>,
) -> AppResult<Json<ApiResponse<Feedback>>> {
    validate_feedback_type(&input.feedback_type)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    if input.subject.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Subject is required".into(),
        )));
    }
    if input.message.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Message is required".into(),
        )));
    }

    let feedback = FeedbackRepo::create(
        &state.pool,
        &CreateFeedback {
            user_id: auth.user_id,
            feedback_type: input.feedback_type,
            subject: input.subject.trim().to_string(),
            message: input.message.trim().to_string(),
        },
    )
    .await?;

    Ok(Json(ApiResponse::with_message(
        feedback,
        "Feedback submitted successfully",
    )))
}

/// GET /api/v1/feedback
///
/// All feedback, filterable by status and type. Admin or organizer.
pub async fn list_feedback(
    RequireOrganizer(_staff): RequireOrganizer,
    State(state): State<AppState>,
    Query(filter): Query<FeedbackFilter>,
) -> AppResult<Json<ApiResponse<Vec<Feedback>>>> {
    if let Some(status) = &filter.status {
        validate_feedback_status(status)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }
    if let Some(t) = &filter.feedback_type {
        validate_feedback_type(t).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let feedback = FeedbackRepo::list(&state.pool, &filter).await?;
    Ok(Json(ApiResponse::new(feedback)))
}

/// GET /api/v1/feedback/my-feedback
///
/// The authenticated user's own feedback.
pub async fn my_feedback(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Feedback>>>> {
    let feedback = FeedbackRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(ApiResponse::new(feedback)))
}

/// PUT /api/v1/feedback/{id}
///
/// Record a staff response and move the feedback's status. Admin or
/// organizer. The submitter is notified.
pub async fn respond_to_feedback(
    RequireOrganizer(staff): RequireOrganizer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RespondRequest>,
) -> AppResult<Json<ApiResponse<Feedback>>> {
    if input.response.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Response is required".into(),
        )));
    }
    let status = input
        .status
        .unwrap_or_else(|| FEEDBACK_STATUS_RESOLVED.to_string());
    validate_feedback_status(&status).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let feedback = FeedbackRepo::respond(&state.pool, id, staff.user_id, input.response.trim(), &status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))?;

    notify(
        &state.pool,
        feedback.user_id,
        format!("Your feedback \"{}\" received a response", feedback.subject),
        KIND_INFO,
    );

    Ok(Json(ApiResponse::with_message(
        feedback,
        "Response recorded",
    )))
}
