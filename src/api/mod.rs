use crate::auth::token_store::TokenStore;
use crate::config::Config;
use crate::roster::DriverStore;
use crate::services::account_service::AccountService;
use crate::services::booking_service::BookingService;
use crate::services::health_service::HealthService;
use crate::services::message_service::MessageService;
use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tower_http::request_id::{PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod bookings;
pub mod drivers;
pub mod health;
pub mod messages;
pub mod middleware;
pub mod schemas;
pub mod session;
pub mod users;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub account_service: AccountService,
    pub booking_service: BookingService,
    pub message_service: MessageService,
    pub token_store: TokenStore,
    pub driver_store: DriverStore,
}

#[derive(Clone, Debug)]
pub struct MgmtState {
    pub health_service: HealthService,
}

#[derive(Debug)]
pub struct ServiceContainer {
    pub account_service: AccountService,
    pub booking_service: BookingService,
    pub message_service: MessageService,
    pub driver_store: DriverStore,
}

/// Configures and returns the public API router.
pub fn app_router(config: Config, services: ServiceContainer) -> Router {
    let token_store = TokenStore::new(config.auth.token_cookie.clone());

    let state = AppState {
        config,
        account_service: services.account_service,
        booking_service: services.booking_service,
        message_service: services.message_service,
        token_store,
        driver_store: services.driver_store,
    };

    let public_routes = Router::new()
        .route("/users", post(users::signup))
        .route("/session", put(session::store_session))
        .route("/session", delete(session::clear_session));

    let api_routes = Router::new()
        .route("/bookings", post(bookings::create_booking))
        .route("/bookings", get(bookings::list_bookings))
        .route("/bookings/{id}/status", patch(bookings::update_status))
        .route("/messages/{userId}", post(messages::send_message))
        .route("/messages/{userId}", get(messages::get_conversation))
        .route("/messages/{userId}/read", post(messages::mark_as_read))
        .route("/drivers", get(drivers::get_roster))
        .route("/drivers", post(drivers::add_driver))
        .route("/drivers/{id}/approve", post(drivers::approve_driver))
        .route("/drivers/{id}", delete(drivers::reject_driver));

    Router::new()
        .nest("/v1", public_routes.merge(api_routes))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER)))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestId>()
                        .and_then(|id| id.header_value().to_str().ok())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                        "http.response.status_code" = tracing::field::Empty,
                        "otel.kind" = "server",
                        "user_id" = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, span: &tracing::Span| {
                        let status = response.status();
                        span.record("http.response.status_code", status.as_u16());

                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %status.as_u16(),
                            "request completed"
                        );
                    },
                )
                .on_failure(|error, _latency, _span: &tracing::Span| {
                    tracing::error!(error = %error, "request failed");
                }),
        )
        .layer(SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), middleware::MakeRequestUuidV7))
        .with_state(state)
}

pub fn mgmt_router(state: MgmtState) -> Router {
    Router::new().route("/livez", get(health::livez)).route("/readyz", get(health::readyz)).with_state(state)
}
