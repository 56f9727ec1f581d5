use crate::api::AppState;
use crate::auth::Claims;
use crate::error::AppError;
use axum::{
    extract::FromRequestParts,
    http::{Request, header, request::Parts},
};
use axum_extra::extract::CookieJar;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// The caller identified by a verified bearer token.
///
/// The token is taken from the `Authorization` header when present, otherwise from
/// the token cookie.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = match parts.headers.get(header::AUTHORIZATION) {
            Some(value) => {
                let auth_str = value.to_str().map_err(|_| AppError::AuthError)?;
                auth_str.strip_prefix("Bearer ").ok_or(AppError::AuthError)?.to_string()
            }
            None => {
                let jar = CookieJar::from_headers(&parts.headers);
                state.token_store.get_token(&jar).ok_or(AppError::AuthError)?
            }
        };

        let claims = Claims::decode(&token, &state.config.auth.jwt_secret)?;
        tracing::Span::current().record("user_id", tracing::field::display(claims.sub));

        Ok(Self { user_id: claims.sub })
    }
}

/// Generates a time-ordered request id when the client did not send one.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        Uuid::now_v7().to_string().parse().ok().map(RequestId::new)
    }
}
