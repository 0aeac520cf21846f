// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use kidfriendly_flagstaff::config::Config;
use kidfriendly_flagstaff::models::Listing;
use kidfriendly_flagstaff::routes::create_router;
use kidfriendly_flagstaff::services::ListingCatalog;
use kidfriendly_flagstaff::AppState;
use std::sync::Arc;
use tempfile::TempDir;

/// Bundled sample listings.
#[allow(dead_code)]
pub fn sample_catalog() -> ListingCatalog {
    ListingCatalog::load_from_dir("data/listings").expect("Failed to load sample listings")
}

/// Create a test app over the sample listings.
/// The newsletter file lives in the returned temp dir; keep it alive.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Config {
        newsletter_file: dir.path().join("newsletter-signups.json"),
        ..Config::default()
    };

    let state = Arc::new(AppState::new(config, sample_catalog()));
    (create_router(state.clone()), state, dir)
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Build a listing from flat JSON, filling the base fields a test doesn't care about.
#[allow(dead_code)]
pub fn listing(id: &str, category: &str, extra: serde_json::Value) -> Listing {
    let mut value = serde_json::json!({
        "id": id,
        "slug": id,
        "name": format!("Listing {}", id),
        "category": category,
        "kidFriendlinessScore": 3,
        "lastUpdated": "2024-01-01",
    });
    for (k, v) in extra.as_object().unwrap() {
        value[k] = v.clone();
    }
    serde_json::from_value(value).unwrap()
}
