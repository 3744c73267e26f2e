//! Handlers for direct messages between users.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use eventsphere_core::error::CoreError;
use eventsphere_core::types::DbId;
use eventsphere_db::models::message::{Conversation, Message};
use eventsphere_db::repositories::{MessageRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /messages`.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub recipient_id: DbId,
    pub content: String,
}

/// POST /api/v1/messages
///
/// Send a direct message to another user.
pub async fn send_message(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SendMessageRequest>,
) -> AppResult<Json<ApiResponse<Message>>> {
    if input.content.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Message content can not be empty".into(),
        )));
    }
    if input.recipient_id == auth.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "You can not message yourself".into(),
        )));
    }

    UserRepo::find_by_id(&state.pool, input.recipient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.recipient_id,
        }))?;

    let message = MessageRepo::create(
        &state.pool,
        auth.user_id,
        input.recipient_id,
        input.content.trim(),
    )
    .await?;

    Ok(Json(ApiResponse::with_message(message, "Message sent")))
}

/// GET /api/v1/messages/conversations
///
/// One entry per counterpart, carrying the latest message, newest first.
pub async fn list_conversations(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Conversation>>>> {
    let conversations = MessageRepo::conversations(&state.pool, auth.user_id).await?;
    Ok(Json(ApiResponse::new(conversations)))
}

/// GET /api/v1/messages/{user_id}
///
/// The full thread between the authenticated user and another user,
/// chronological.
pub async fn get_thread(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Vec<Message>>>> {
    let messages = MessageRepo::thread(&state.pool, auth.user_id, user_id).await?;
    Ok(Json(ApiResponse::new(messages)))
}
