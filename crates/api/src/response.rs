//! Shared response envelope types for API handlers.
//!
//! All success responses use the `{ "success": true, "data": ..., "message": ... }`
//! envelope; errors are produced by `AppError` in the matching
//! `{ "success": false, "error": ..., "code": ... }` shape. Use
//! [`ApiResponse`] instead of ad-hoc `serde_json::json!` so the envelope
//! stays consistent and type-checked.

use serde::Serialize;

/// Standard success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::with_message(expo, "Expo created successfully")))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload with no message.
    pub fn new(data: T) -> Self {
        ApiResponse {
            success: true,
            message: None,
            data,
        }
    }

    /// Wrap a payload with a human-readable message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}
