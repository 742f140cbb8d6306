// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests.
//!
//! These run against an offline mock database: validation happens before
//! any store access, so rejected requests never need a live Firestore.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_create_user_empty_username() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_post("/api/users", serde_json::json!({"username": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_whitespace_username() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/users",
            serde_json::json!({"username": "   "}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_exercise_non_numeric_duration() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/users/some-id/exercises",
            serde_json::json!({"description": "jog", "duration": "a while"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_exercise_zero_duration() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/users/some-id/exercises",
            serde_json::json!({"description": "jog", "duration": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_exercise_invalid_date() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/users/some-id/exercises",
            serde_json::json!({"description": "jog", "duration": 30, "date": "yesterday"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_exercise_empty_description() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/users/some-id/exercises",
            serde_json::json!({"description": " ", "duration": 30}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logs_invalid_from_date() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users/some-id/logs?from=invalid-date")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logs_invalid_limit() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users/some-id/logs?limit=many")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_store_failure_surfaces_as_500() {
    let (app, _) = common::create_test_app();

    // Valid input against the offline mock: the store write fails and the
    // client sees only the generic message.
    let response = app
        .oneshot(json_post(
            "/api/users",
            serde_json::json!({"username": "alice"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn test_list_users_store_failure() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_landing_page() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/users")
                .header(header::ORIGIN, "http://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}
