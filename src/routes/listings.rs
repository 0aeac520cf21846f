// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Listing detail pages and editorial lists.

use crate::error::{AppError, Result};
use crate::format::{format_distance, format_duration, format_elevation, parse_distance_to_miles};
use crate::models::listing::{Listing, ListingDetails};
use crate::services::seo::{self, Breadcrumb, PageMetadata};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const DEFAULT_FEATURED: usize = 6;
const MAX_FEATURED: usize = 50;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/listings/{slug}", get(get_listing))
        .route("/api/top-picks", get(get_top_picks))
        .route("/api/featured", get(get_featured))
}

// ─── Detail Page ─────────────────────────────────────────────

/// Trail stats ready for display.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailStats {
    pub distance: String,
    pub distance_miles: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    pub listing: Listing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail: Option<TrailStats>,
    pub metadata: PageMetadata,
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Schema.org documents for the page: the listing, then its breadcrumbs.
    pub json_ld: Vec<serde_json::Value>,
}

async fn get_listing(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<ListingPage>> {
    let listing = state
        .catalog
        .by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Listing {}", slug)))?;

    let site_url = &state.config.site_url;
    let breadcrumbs = seo::listing_breadcrumbs(site_url, listing);
    let json_ld = vec![
        seo::listing_json_ld(site_url, listing),
        seo::breadcrumb_json_ld(&breadcrumbs),
    ];

    let trail = match &listing.details {
        ListingDetails::Hike(hike) => Some(TrailStats {
            distance: format_distance(&hike.distance),
            distance_miles: parse_distance_to_miles(&hike.distance),
            elevation_gain: hike.elevation_gain.as_deref().map(format_elevation),
            duration: hike.duration.as_deref().map(format_duration),
        }),
        _ => None,
    };

    Ok(Json(ListingPage {
        listing: listing.clone(),
        trail,
        metadata: seo::listing_metadata(site_url, listing),
        breadcrumbs,
        json_ld,
    }))
}

// ─── Editorial Lists ─────────────────────────────────────────

async fn get_top_picks(State(state): State<Arc<AppState>>) -> Json<Vec<Listing>> {
    Json(state.catalog.top_picks().into_iter().cloned().collect())
}

#[derive(Deserialize)]
pub struct FeaturedParams {
    pub count: Option<usize>,
}

async fn get_featured(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeaturedParams>,
) -> Json<Vec<Listing>> {
    let count = params.count.unwrap_or(DEFAULT_FEATURED).min(MAX_FEATURED);
    Json(state.catalog.featured(count).into_iter().cloned().collect())
}
