// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Favorites endpoints and the visitor cookie.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use kidfriendly_flagstaff::middleware::VISITOR_COOKIE;
use tower::ServiceExt;

mod common;

const VISITOR: &str = "00112233445566778899aabbccddeeff";

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, format!("{}={}", VISITOR_COOKIE, VISITOR))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_first_visit_sets_cookie() {
    let (app, _state, _dir) = common::create_test_app();

    let response = app.oneshot(common::get("/api/favorites")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("visitor cookie should be set")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with(&format!("{}=", VISITOR_COOKIE)));

    let body = common::json_body(response).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_catalog_routes_do_not_set_cookie() {
    let (app, _state, _dir) = common::create_test_app();

    let response = app.oneshot(common::get("/api/top-picks")).await.unwrap();
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_add_list_and_remove() {
    let (app, state, _dir) = common::create_test_app();

    for id in ["hike-buffalo-park", "eat-pizzicletta", "hike-buffalo-park"] {
        let response = app
            .clone()
            .oneshot(request("POST", &format!("/api/favorites/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = common::json_body(response).await;
        assert_eq!(body["favorite"], true);
    }
    assert_eq!(state.favorites.count(VISITOR), 2);

    let response = app
        .clone()
        .oneshot(request("GET", "/api/favorites"))
        .await
        .unwrap();
    let body = common::json_body(response).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["favorites"][0]["id"], "hike-buffalo-park");
    assert!(body["favorites"][0]["addedAt"].is_string());
    assert_eq!(body["listings"][1]["slug"], "pizzicletta");

    let response = app
        .oneshot(request("DELETE", "/api/favorites/hike-buffalo-park"))
        .await
        .unwrap();
    let body = common::json_body(response).await;
    assert_eq!(body["favorite"], false);
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn test_toggle_and_clear() {
    let (app, state, _dir) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(request("POST", "/api/favorites/shop-toy-emporium/toggle"))
        .await
        .unwrap();
    let body = common::json_body(response).await;
    assert_eq!(body["favorite"], true);

    let response = app
        .clone()
        .oneshot(request("POST", "/api/favorites/shop-toy-emporium/toggle"))
        .await
        .unwrap();
    let body = common::json_body(response).await;
    assert_eq!(body["favorite"], false);

    state.favorites.add(VISITOR, "learn-lowell-observatory");
    let response = app
        .oneshot(request("DELETE", "/api/favorites"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(state.favorites.count(VISITOR), 0);
}

#[tokio::test]
async fn test_unknown_listing_is_404() {
    let (app, state, _dir) = common::create_test_app();

    let response = app
        .oneshot(request("POST", "/api/favorites/not-a-listing"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(state.favorites.count(VISITOR), 0);
}
