use crate::api::AppState;
use crate::api::middleware::AuthUser;
use crate::api::schemas::drivers::{NewDriver, RosterResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

pub async fn get_roster(_auth_user: AuthUser, State(state): State<AppState>) -> impl IntoResponse {
    Json(RosterResponse::from(state.driver_store.snapshot().as_ref()))
}

pub async fn add_driver(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<NewDriver>,
) -> impl IntoResponse {
    state.driver_store.add_pending_driver(payload.into());
    (StatusCode::CREATED, Json(RosterResponse::from(state.driver_store.snapshot().as_ref())))
}

/// Approving a driver that is not pending leaves the roster unchanged.
pub async fn approve_driver(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    if !state.driver_store.approve_driver(id) {
        tracing::debug!(driver_id = %id, "Approval ignored, driver not pending");
    }
    Json(RosterResponse::from(state.driver_store.snapshot().as_ref()))
}

/// Rejecting a driver that is not pending is not an error.
pub async fn reject_driver(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    state.driver_store.reject_driver(id);
    StatusCode::NO_CONTENT
}
