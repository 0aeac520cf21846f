// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Newsletter signup endpoint.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_subscribe_then_count() {
    let (app, state, _dir) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::post_json(
            "/api/newsletter",
            json!({"email": "Parent@Example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = common::json_body(response).await;
    assert_eq!(body["message"], "Successfully subscribed");

    let response = app.oneshot(common::get("/api/newsletter")).await.unwrap();
    let body = common::json_body(response).await;
    assert_eq!(body["count"], 1);

    let saved = std::fs::read_to_string(&state.config.newsletter_file).unwrap();
    let signups: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(signups[0]["email"], "parent@example.com");
    assert!(signups[0]["createdAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_duplicate_subscription_conflicts() {
    let (app, _state, _dir) = common::create_test_app();

    let first = app
        .clone()
        .oneshot(common::post_json(
            "/api/newsletter",
            json!({"email": "family@example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(common::post_json(
            "/api/newsletter",
            json!({"email": "FAMILY@example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = common::json_body(second).await;
    assert_eq!(body["details"], "Email already subscribed");
}

#[tokio::test]
async fn test_missing_or_invalid_email_is_bad_request() {
    let (app, _state, _dir) = common::create_test_app();

    for (payload, details) in [
        (json!({}), "Email is required"),
        (json!({"email": ""}), "Email is required"),
        (json!({"email": 42}), "Email is required"),
        (json!({"email": "not-an-email"}), "Invalid email format"),
    ] {
        let response = app
            .clone()
            .oneshot(common::post_json("/api/newsletter", payload.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", payload);
        let body = common::json_body(response).await;
        assert_eq!(body["details"], details, "{}", payload);
    }
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (app, _state, _dir) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/newsletter")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_corrupt_signup_file_is_not_overwritten() {
    let (app, state, _dir) = common::create_test_app();
    let truncated = r#"[{"email": "a@b.com", "createdAt": "2024-01-01T00:00:00.000Z"}, {"em"#;
    std::fs::write(&state.config.newsletter_file, truncated).unwrap();

    let response = app
        .clone()
        .oneshot(common::post_json(
            "/api/newsletter",
            json!({"email": "new@example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = app.oneshot(common::get("/api/newsletter")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(
        std::fs::read_to_string(&state.config.newsletter_file).unwrap(),
        truncated
    );
}
