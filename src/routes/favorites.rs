// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Favorites for the current visitor.
//!
//! The visitor middleware is applied here as a route layer, so only these
//! routes issue the visitor cookie.

use crate::error::{AppError, Result};
use crate::middleware::visitor::{ensure_visitor, Visitor};
use crate::models::favorite::FavoriteItem;
use crate::models::listing::Listing;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/favorites", get(list_favorites).delete(clear_favorites))
        .route("/api/favorites/{id}", post(add_favorite).delete(remove_favorite))
        .route("/api/favorites/{id}/toggle", post(toggle_favorite))
        .route_layer(middleware::from_fn(ensure_visitor))
}

#[derive(Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<FavoriteItem>,
    /// Saved listings still in the catalog, in saved order.
    pub listings: Vec<Listing>,
    pub count: usize,
}

#[derive(Serialize)]
pub struct FavoriteStatus {
    pub id: String,
    pub favorite: bool,
    pub count: usize,
}

async fn list_favorites(
    State(state): State<Arc<AppState>>,
    Extension(visitor): Extension<Visitor>,
) -> Json<FavoritesResponse> {
    let favorites = state.favorites.list(&visitor.id);
    let listings = favorites
        .iter()
        .filter_map(|f| state.catalog.by_id(&f.id).cloned())
        .collect();

    Json(FavoritesResponse {
        count: favorites.len(),
        favorites,
        listings,
    })
}

fn require_listing(state: &AppState, id: &str) -> Result<()> {
    match state.catalog.by_id(id) {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound(format!("Listing {}", id))),
    }
}

fn status(state: &AppState, visitor: &Visitor, id: String) -> Json<FavoriteStatus> {
    Json(FavoriteStatus {
        favorite: state.favorites.is_favorite(&visitor.id, &id),
        count: state.favorites.count(&visitor.id),
        id,
    })
}

async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Extension(visitor): Extension<Visitor>,
    Path(id): Path<String>,
) -> Result<Json<FavoriteStatus>> {
    require_listing(&state, &id)?;
    state.favorites.add(&visitor.id, &id);
    Ok(status(&state, &visitor, id))
}

async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Extension(visitor): Extension<Visitor>,
    Path(id): Path<String>,
) -> Result<Json<FavoriteStatus>> {
    require_listing(&state, &id)?;
    state.favorites.remove(&visitor.id, &id);
    Ok(status(&state, &visitor, id))
}

async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Extension(visitor): Extension<Visitor>,
    Path(id): Path<String>,
) -> Result<Json<FavoriteStatus>> {
    require_listing(&state, &id)?;
    let now_saved = state.favorites.toggle(&visitor.id, &id);
    tracing::debug!(listing = %id, saved = now_saved, "Toggled favorite");
    Ok(status(&state, &visitor, id))
}

async fn clear_favorites(
    State(state): State<Arc<AppState>>,
    Extension(visitor): Extension<Visitor>,
) -> StatusCode {
    state.favorites.clear(&visitor.id);
    StatusCode::NO_CONTENT
}
