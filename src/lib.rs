// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Kid Friendly Flagstaff: a family activity directory for Flagstaff, Arizona.
//!
//! This crate provides the backend API: the listing catalog, faceted
//! filtering with its filter-state reducer, newsletter signups, favorites
//! and search-engine metadata.

pub mod config;
pub mod error;
pub mod format;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::{FavoritesStore, ListingCatalog, NewsletterStore};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub catalog: ListingCatalog,
    pub newsletter: NewsletterStore,
    pub favorites: FavoritesStore,
}

impl AppState {
    pub fn new(config: Config, catalog: ListingCatalog) -> Self {
        let newsletter = NewsletterStore::new(config.newsletter_file.clone());
        Self {
            config,
            catalog,
            newsletter,
            favorites: FavoritesStore::new(),
        }
    }
}
