use crate::api::AppState;
use crate::api::middleware::AuthUser;
use crate::api::schemas::messages::{MessageDetailsResponse, MessageResponse, SendMessage};
use crate::error::Result;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

/// Sends a message from the caller to `receiver_id`.
///
/// # Errors
/// Returns `AppError::BadRequest` for empty content.
/// Returns `AppError::Database` if the receiver does not exist or the insert fails.
pub async fn send_message(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(receiver_id): Path<Uuid>,
    Json(payload): Json<SendMessage>,
) -> Result<impl IntoResponse> {
    let message = state.message_service.send_message(auth_user.user_id, receiver_id, &payload.content).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}

/// Lists the messages between the caller and `user_id`, oldest first.
///
/// # Errors
/// Returns `AppError::Database` if the query fails.
pub async fn get_conversation(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let messages = state.message_service.conversation(auth_user.user_id, user_id).await?;
    Ok(Json(messages.into_iter().map(MessageDetailsResponse::from).collect::<Vec<_>>()))
}

/// Marks everything `sender_id` sent to the caller as read and returns the changed messages.
///
/// # Errors
/// Returns `AppError::Database` if the update fails.
pub async fn mark_as_read(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(sender_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let updated = state.message_service.mark_as_read(sender_id, auth_user.user_id).await?;
    Ok(Json(updated.into_iter().map(MessageResponse::from).collect::<Vec<_>>()))
}
