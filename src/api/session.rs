use crate::api::AppState;
use crate::api::schemas::session::StoreSession;
use crate::auth::Claims;
use crate::error::Result;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;

/// Stores an externally issued bearer token in the token cookie after verifying it.
///
/// # Errors
/// Returns `AppError::AuthError` if the token does not verify.
pub async fn store_session(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<StoreSession>,
) -> Result<impl IntoResponse> {
    Claims::decode(&payload.token, &state.config.auth.jwt_secret)?;
    Ok((state.token_store.set_token(jar, payload.token), StatusCode::NO_CONTENT))
}

/// Clears the token cookie.
pub async fn clear_session(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    (state.token_store.delete_token(jar), StatusCode::NO_CONTENT)
}
