#![allow(clippy::unwrap_used, clippy::panic, missing_debug_implementations, unreachable_pub)]
use drivehire_server::auth::Claims;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, COOKIE};
use uuid::Uuid;

mod common;

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = common::TestApp::spawn_offline().await;

    for path in ["/v1/bookings?as=client", "/v1/drivers"] {
        let resp = app.client.get(format!("{}{path}", app.api_url)).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
async fn test_non_bearer_scheme_is_unauthorized() {
    let app = common::TestApp::spawn_offline().await;
    let token = common::token_for(Uuid::new_v4());

    let resp = app
        .client
        .get(format!("{}/v1/drivers", app.api_url))
        .header(AUTHORIZATION, format!("Basic {token}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = common::TestApp::spawn_offline().await;
    let expired = Claims { sub: Uuid::new_v4(), exp: 1_000 }.encode(common::JWT_SECRET).unwrap();

    let resp = app
        .client
        .get(format!("{}/v1/drivers", app.api_url))
        .header(COOKIE, format!("auth_token={expired}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_booking_side_is_bad_request() {
    let app = common::TestApp::spawn_offline().await;

    let resp = app
        .client
        .get(format!("{}/v1/bookings?as=admin", app.api_url))
        .bearer_auth(common::token_for(Uuid::new_v4()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = common::TestApp::spawn_offline().await;

    let resp = app.client.get(format!("{}/v1/drivers", app.api_url)).send().await.unwrap();
    assert!(resp.headers().get("x-request-id").is_some());

    let resp = app
        .client
        .get(format!("{}/v1/drivers", app.api_url))
        .header("x-request-id", "req-123")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "req-123");
}
