// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Site metadata, sitemap and response headers.

use axum::http::{header, StatusCode};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_site_metadata() {
    let (app, _state, _dir) = common::create_test_app();

    let response = app.oneshot(common::get("/api/site")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await;
    assert_eq!(body["name"], "Kid Friendly Flagstaff");
    assert_eq!(body["jsonLd"][0]["@type"], "Organization");
    assert_eq!(body["jsonLd"][1]["@type"], "WebSite");
    assert_eq!(
        body["jsonLd"][1]["potentialAction"]["target"]["urlTemplate"],
        "https://kidfriendlyflagstaff.com/search?q={search_term_string}"
    );
    assert_eq!(body["metadata"]["openGraph"]["siteName"], "Kid Friendly Flagstaff");
}

#[tokio::test]
async fn test_sitemap_xml() {
    let (app, state, _dir) = common::create_test_app();

    let response = app.oneshot(common::get("/sitemap.xml")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("application/xml"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let xml = String::from_utf8(bytes.to_vec()).unwrap();

    assert_eq!(xml.matches("<url>").count(), 1 + 5 + state.catalog.len());
    assert!(xml.contains("<loc>https://kidfriendlyflagstaff.com/hike</loc>"));
    assert!(xml.contains("<loc>https://kidfriendlyflagstaff.com/listing/lowell-observatory</loc>"));
    assert!(xml.contains("<changefreq>monthly</changefreq>"));
}

#[tokio::test]
async fn test_security_headers_on_api_responses() {
    let (app, _state, _dir) = common::create_test_app();

    let response = app.oneshot(common::get("/api/categories")).await.unwrap();
    let headers = response.headers();

    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
}

#[tokio::test]
async fn test_cors_allows_frontend_origin() {
    let (app, _state, _dir) = common::create_test_app();

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .uri("/api/categories")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
}
