use crate::api::AppState;
use crate::api::schemas::users::{Signup, UserResponse};
use crate::domain::user::Role;
use crate::error::{AppError, Result};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Registers a client or driver account.
///
/// # Errors
/// Returns `AppError::BadRequest` for an unknown role or blank fields.
/// Returns `AppError::Conflict` if the email is taken.
pub async fn signup(State(state): State<AppState>, Json(payload): Json<Signup>) -> Result<impl IntoResponse> {
    let role: Role = payload.role.parse().map_err(AppError::BadRequest)?;
    let user = state.account_service.signup(&payload.name, &payload.email, role, payload.photo.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
