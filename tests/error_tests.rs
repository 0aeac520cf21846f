// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use kidfriendly_flagstaff::error::AppError;
use kidfriendly_flagstaff::services::{AirtableError, CatalogError, NewsletterError};

mod common;

#[tokio::test]
async fn test_error_bodies() {
    let response = AppError::NotFound("Listing x".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::json_body(response).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["details"], "Listing x");

    // Internal details stay in the logs
    let response = AppError::Internal(anyhow::anyhow!("disk on fire")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = common::json_body(response).await;
    assert_eq!(body["error"], "internal_error");
    assert!(body.get("details").is_none());
}

#[test]
fn test_service_errors_map_to_status() {
    let cases = [
        (AppError::from(NewsletterError::Missing), StatusCode::BAD_REQUEST),
        (AppError::from(NewsletterError::InvalidFormat), StatusCode::BAD_REQUEST),
        (AppError::from(NewsletterError::AlreadySubscribed), StatusCode::CONFLICT),
        (
            AppError::from(NewsletterError::Io("read-only".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            AppError::from(NewsletterError::Corrupt("eof".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            AppError::from(AirtableError::Parse("bad page".to_string())),
            StatusCode::BAD_GATEWAY,
        ),
        (
            AppError::from(CatalogError::Parse("hike".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (err, status) in cases {
        assert_eq!(err.into_response().status(), status);
    }
}
