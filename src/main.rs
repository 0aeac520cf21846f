// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Kid Friendly Flagstaff API Server
//!
//! Serves the family activity directory: listings, faceted search,
//! favorites, newsletter signups and SEO metadata.

use kidfriendly_flagstaff::{
    config::Config,
    services::{AirtableClient, ListingCatalog},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Kid Friendly Flagstaff API");

    let catalog = load_catalog(&config).await?;
    tracing::info!(count = catalog.len(), "Listing catalog ready");

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), catalog));

    // Build router
    let app = kidfriendly_flagstaff::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Airtable when configured, falling back to the bundled JSON files.
async fn load_catalog(config: &Config) -> Result<ListingCatalog, Box<dyn std::error::Error>> {
    if let Some(ref airtable) = config.airtable {
        let client = AirtableClient::new(
            airtable.api_key.clone(),
            airtable.base_id.clone(),
            airtable.table_name.clone(),
        );
        match client.fetch_listings().await {
            Ok(listings) => return Ok(ListingCatalog::from_listings(listings)),
            Err(e) => {
                tracing::warn!(error = %e, "Airtable fetch failed, using local listing files");
            }
        }
    }

    let dir = config.listings_dir();
    tracing::info!(path = %dir.display(), "Loading listings from disk");
    Ok(ListingCatalog::load_from_dir(dir)?)
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kidfriendly_flagstaff=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
