// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Category pages and faceted search within a category.

use super::category_from_path;
use crate::error::{AppError, Result};
use crate::models::category::{CategoryInfo, CATEGORY_INFO};
use crate::models::filters::{filter_groups, FilterCriteria, FilterGroup};
use crate::models::listing::Listing;
use crate::services::filter::ListingFilter;
use crate::services::seo::{self, PageMetadata};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/categories", get(list_categories))
        .route("/api/categories/{slug}", get(get_category))
        .route("/api/categories/{slug}/listings", get(get_category_listings))
        .route("/api/categories/{slug}/search", post(search_category))
}

// ─── Category Index ──────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    #[serde(flatten)]
    pub info: &'static CategoryInfo,
    pub listing_count: usize,
}

async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Vec<CategorySummary>> {
    Json(
        CATEGORY_INFO
            .iter()
            .map(|info| CategorySummary {
                info,
                listing_count: state.catalog.by_category(info.id).len(),
            })
            .collect(),
    )
}

// ─── Category Page ───────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    pub info: &'static CategoryInfo,
    pub metadata: PageMetadata,
    pub top_pick: Option<Listing>,
    pub listing_count: usize,
    pub default_criteria: FilterCriteria,
    pub filters: Vec<FilterGroup>,
}

async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryPage>> {
    let category = category_from_path(&slug)?;

    Ok(Json(CategoryPage {
        info: category.info(),
        metadata: seo::category_metadata(&state.config.site_url, category),
        top_pick: state.catalog.top_pick_for(category).cloned(),
        listing_count: state.catalog.by_category(category).len(),
        default_criteria: FilterCriteria::default_for(Some(category)),
        filters: filter_groups(Some(category)),
    }))
}

async fn get_category_listings(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Listing>>> {
    let category = category_from_path(&slug)?;
    Ok(Json(
        state
            .catalog
            .by_category(category)
            .into_iter()
            .cloned()
            .collect(),
    ))
}

// ─── Search ──────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub listings: Vec<Listing>,
    pub total: usize,
    pub active_filters: usize,
    pub has_active_filters: bool,
}

/// Filter one category's listings.
///
/// The criteria must be tagged with this category, or be base-only
/// (`"category": "all"`).
async fn search_category(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(criteria): Json<FilterCriteria>,
) -> Result<Json<SearchResponse>> {
    let category = category_from_path(&slug)?;

    if let Some(tagged) = criteria.category() {
        if tagged != category {
            return Err(AppError::BadRequest(format!(
                "{} criteria cannot filter {} listings",
                tagged, category
            )));
        }
    }

    let candidates = state.catalog.by_category(category);
    let listings: Vec<Listing> = criteria
        .apply(candidates)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        category = %category,
        matched = listings.len(),
        active = criteria.active_count(),
        "Category search"
    );

    Ok(Json(SearchResponse {
        total: listings.len(),
        listings,
        active_filters: criteria.active_count(),
        has_active_filters: criteria.is_active(),
    }))
}
