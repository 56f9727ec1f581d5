use crate::api::AppState;
use crate::api::middleware::AuthUser;
use crate::api::schemas::bookings::{BookingDetailsResponse, BookingResponse, CreateBooking, ListBookings, UpdateStatus};
use crate::domain::booking::{NewBooking, UserType};
use crate::error::{AppError, Result};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

/// Creates a booking request with the caller as the client.
///
/// # Errors
/// Returns `AppError::BadRequest` if the date range is inverted.
/// Returns `AppError::Database` if the driver does not exist or the insert fails.
pub async fn create_booking(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateBooking>,
) -> Result<impl IntoResponse> {
    let booking = state
        .booking_service
        .request_booking(NewBooking {
            driver_id: payload.driver_id,
            client_id: auth_user.user_id,
            start_date: payload.start_date,
            end_date: payload.end_date,
            route: payload.route,
            requirements: payload.requirements,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(BookingResponse::from(booking))))
}

/// Lists the caller's bookings from the driver or client side, newest first.
///
/// # Errors
/// Returns `AppError::BadRequest` if `as` is neither `driver` nor `client`.
pub async fn list_bookings(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ListBookings>,
) -> Result<impl IntoResponse> {
    let user_type: UserType = query.user_type.parse().map_err(AppError::BadRequest)?;
    let bookings = state.booking_service.list_for_user(auth_user.user_id, user_type).await?;
    Ok(Json(bookings.into_iter().map(BookingDetailsResponse::from).collect::<Vec<_>>()))
}

/// Sets a booking's status. Any string is accepted; only the driver or client may
/// change it.
///
/// # Errors
/// Returns `AppError::NotFound` if the booking does not exist or the caller is not a party to it.
pub async fn update_status(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatus>,
) -> Result<impl IntoResponse> {
    let booking = state.booking_service.update_status(auth_user.user_id, id, &payload.status).await?;
    Ok(Json(BookingResponse::from(booking)))
}
