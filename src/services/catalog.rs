// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Listing catalog: the in-memory set of published listings.
//!
//! The catalog is loaded once at startup (from JSON files or Airtable) and
//! held in application state. This is the ingestion boundary, so records that
//! break the listing invariants are dropped here and never reach the filters.

use crate::models::category::Category;
use crate::models::listing::Listing;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use validator::Validate;

/// Cached listings in category order, then source order within a category.
#[derive(Debug, Default, Clone)]
pub struct ListingCatalog {
    listings: Vec<Listing>,
}

impl ListingCatalog {
    /// Build a catalog, dropping invalid and duplicate records.
    pub fn from_listings(listings: impl IntoIterator<Item = Listing>) -> Self {
        let mut seen_ids = HashSet::new();
        let mut seen_slugs = HashSet::new();
        let mut accepted = Vec::new();

        for listing in listings {
            if let Err(reason) = validate_listing(&listing) {
                tracing::warn!(id = %listing.id(), reason = %reason, "Skipping invalid listing");
                continue;
            }
            if !seen_ids.insert(listing.id().to_string()) {
                tracing::warn!(id = %listing.id(), "Skipping listing with duplicate id");
                continue;
            }
            if !seen_slugs.insert(listing.slug().to_string()) {
                tracing::warn!(slug = %listing.slug(), "Skipping listing with duplicate slug");
                continue;
            }
            accepted.push(listing);
        }

        // Stable sort keeps source order within each category
        accepted.sort_by_key(|l| category_rank(l.category()));

        Self { listings: accepted }
    }

    /// Load `<dir>/{play,hike,eat,learn,shop}.json`.
    ///
    /// A missing file is an empty category. `explore.json` is read for the
    /// learn category when `learn.json` does not exist.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let mut listings = Vec::new();

        for category in Category::ALL {
            let mut path = dir.join(format!("{}.json", category.as_str()));
            if category == Category::Learn && !path.exists() {
                path = dir.join("explore.json");
            }
            if !path.exists() {
                tracing::debug!(path = %path.display(), "No data file for category");
                continue;
            }

            let json = fs::read_to_string(&path).map_err(|e| CatalogError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            let loaded = parse_category_json(category, &json)?;
            tracing::info!(category = %category, count = loaded.len(), "Loaded listings");
            listings.extend(loaded);
        }

        Ok(Self::from_listings(listings))
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn by_category(&self, category: Category) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| l.category() == category)
            .collect()
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.slug() == slug)
    }

    pub fn by_id(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id() == id)
    }

    pub fn top_picks(&self) -> Vec<&Listing> {
        self.listings.iter().filter(|l| l.is_top_pick()).collect()
    }

    /// The first top pick of a category, if any.
    pub fn top_pick_for(&self, category: Category) -> Option<&Listing> {
        self.listings
            .iter()
            .find(|l| l.category() == category && l.is_top_pick())
    }

    /// Top picks first, then by kid-friendliness score, highest first.
    pub fn featured(&self, count: usize) -> Vec<&Listing> {
        let mut sorted: Vec<&Listing> = self.listings.iter().collect();
        sorted.sort_by(|a, b| {
            b.is_top_pick()
                .cmp(&a.is_top_pick())
                .then_with(|| {
                    b.base
                        .kid_friendliness_score
                        .cmp(&a.base.kid_friendliness_score)
                })
        });
        sorted.truncate(count);
        sorted
    }

    pub fn all_slugs(&self) -> Vec<&str> {
        self.listings.iter().map(|l| l.slug()).collect()
    }
}

fn category_rank(category: Category) -> usize {
    Category::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap_or(Category::ALL.len())
}

/// Parse one category file. The file must be a JSON array; individual
/// records that don't parse, or that belong to another category, are skipped.
pub fn parse_category_json(category: Category, json: &str) -> Result<Vec<Listing>, CatalogError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(json)
        .map_err(|e| CatalogError::Parse(format!("{} listings: {}", category, e)))?;

    let mut listings = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Listing>(record) {
            Ok(listing) if listing.category() == category => listings.push(listing),
            Ok(listing) => {
                tracing::warn!(
                    id = %listing.id(),
                    expected = %category,
                    found = %listing.category(),
                    "Skipping listing filed under the wrong category"
                );
            }
            Err(e) => {
                tracing::warn!(category = %category, index, error = %e, "Skipping malformed listing");
            }
        }
    }

    Ok(listings)
}

/// Check the invariants serde can't express.
fn validate_listing(listing: &Listing) -> Result<(), String> {
    listing.base.validate().map_err(|e| e.to_string())?;

    if !is_url_safe_slug(listing.slug()) {
        return Err(format!("slug {:?} is not URL-safe", listing.slug()));
    }

    Ok(())
}

/// Lowercase ASCII letters, digits and single hyphens between them.
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.split('-').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_json(id: &str, slug: &str, category: &str, score: u8, top: bool) -> serde_json::Value {
        let mut value = serde_json::json!({
            "id": id,
            "slug": slug,
            "name": format!("Listing {}", id),
            "category": category,
            "kidFriendlinessScore": score,
            "isTopPick": top,
            "lastUpdated": "2024-01-01",
        });
        let extra = match category {
            "play" => serde_json::json!({"playType": "playground", "setting": "outdoor"}),
            "hike" => serde_json::json!({
                "difficulty": "easy", "distance": "1 mile", "surface": "dirt", "hikeType": "loop"
            }),
            "eat" => serde_json::json!({"cuisine": "Pizza", "mealTypes": [], "features": []}),
            "learn" => serde_json::json!({"learnType": "museum", "setting": "indoor"}),
            _ => serde_json::json!({"shopType": "toys"}),
        };
        for (k, v) in extra.as_object().unwrap() {
            value[k] = v.clone();
        }
        value
    }

    fn listing(id: &str, slug: &str, category: &str, score: u8, top: bool) -> Listing {
        serde_json::from_value(listing_json(id, slug, category, score, top)).unwrap()
    }

    #[test]
    fn test_duplicates_and_invalid_records_are_dropped() {
        let catalog = ListingCatalog::from_listings(vec![
            listing("a", "alpha", "play", 3, false),
            listing("a", "alpha-2", "play", 3, false),
            listing("b", "alpha", "hike", 3, false),
            listing("c", "Not Safe", "eat", 3, false),
            listing("d", "delta", "eat", 0, false),
            listing("e", "echo", "shop", 5, false),
        ]);

        let ids: Vec<&str> = catalog.all().iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["a", "e"]);
    }

    #[test]
    fn test_catalog_is_grouped_by_category() {
        let catalog = ListingCatalog::from_listings(vec![
            listing("s1", "s1", "shop", 3, false),
            listing("p1", "p1", "play", 3, false),
            listing("s2", "s2", "shop", 3, false),
            listing("h1", "h1", "hike", 3, false),
        ]);

        let ids: Vec<&str> = catalog.all().iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["p1", "h1", "s1", "s2"]);
        assert_eq!(catalog.by_category(Category::Shop).len(), 2);
    }

    #[test]
    fn test_featured_orders_top_picks_then_score() {
        let catalog = ListingCatalog::from_listings(vec![
            listing("low", "low", "play", 2, false),
            listing("high", "high", "play", 5, false),
            listing("pick", "pick", "hike", 1, true),
            listing("mid", "mid", "eat", 4, false),
        ]);

        let featured: Vec<&str> = catalog.featured(3).iter().map(|l| l.id()).collect();
        assert_eq!(featured, vec!["pick", "high", "mid"]);
        assert_eq!(catalog.top_pick_for(Category::Hike).map(|l| l.id()), Some("pick"));
        assert!(catalog.top_pick_for(Category::Play).is_none());
    }

    #[test]
    fn test_parse_skips_wrong_category_and_malformed_records() {
        let json = serde_json::to_string(&vec![
            listing_json("ok", "ok", "play", 4, false),
            listing_json("wrong", "wrong", "hike", 4, false),
            serde_json::json!({"id": "broken", "category": "play"}),
        ])
        .unwrap();

        let parsed = parse_category_json(Category::Play, &json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id(), "ok");

        assert!(parse_category_json(Category::Play, "{not json").is_err());
    }

    #[test]
    fn test_slug_rules() {
        assert!(is_url_safe_slug("buffalo-park"));
        assert!(is_url_safe_slug("route-66-diner"));
        assert!(!is_url_safe_slug("Buffalo Park"));
        assert!(!is_url_safe_slug("trailing-"));
        assert!(!is_url_safe_slug("double--dash"));
        assert!(!is_url_safe_slug(""));
    }
}
