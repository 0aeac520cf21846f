// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod airtable;
pub mod catalog;
pub mod favorites;
pub mod filter;
pub mod newsletter;
pub mod reducer;
pub mod seo;

pub use airtable::{AirtableClient, AirtableError};
pub use catalog::{CatalogError, ListingCatalog};
pub use favorites::FavoritesStore;
pub use filter::{
    count_active_filters, count_all_active_filters, filter_eat, filter_hike, filter_learn,
    filter_listings, filter_play, filter_shop, has_active_filters, ListingFilter,
};
pub use newsletter::{NewsletterError, NewsletterStore};
pub use reducer::reduce;
