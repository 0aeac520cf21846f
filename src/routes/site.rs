// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Site-wide metadata and the XML sitemap.

use crate::services::seo::{self, PageMetadata};
use crate::AppState;
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/site", get(get_site))
        .route("/sitemap.xml", get(get_sitemap))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteResponse {
    pub name: &'static str,
    pub url: String,
    pub metadata: PageMetadata,
    pub json_ld: Vec<serde_json::Value>,
}

async fn get_site(State(state): State<Arc<AppState>>) -> Json<SiteResponse> {
    let site_url = &state.config.site_url;
    Json(SiteResponse {
        name: seo::SITE_NAME,
        url: site_url.clone(),
        metadata: seo::home_metadata(site_url),
        json_ld: vec![
            seo::organization_json_ld(site_url),
            seo::website_json_ld(site_url),
        ],
    })
}

async fn get_sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    let entries = seo::sitemap_entries(&state.config.site_url, &state.catalog, today);
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        seo::render_sitemap_xml(&entries),
    )
}
