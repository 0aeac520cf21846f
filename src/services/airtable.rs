// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Airtable client for loading listings from the editorial base.
//!
//! Handles:
//! - Paged record listing (Airtable returns at most 100 records per page)
//! - Filtering to published records
//! - Mapping loosely-typed Airtable fields onto [`Listing`]

use crate::models::category::Category;
use crate::models::listing::{
    BaseListing, Coordinates, EatDetails, HikeDetails, LearnDetails, Listing, ListingDetails,
    PlayDetails, ShopDetails,
};
use crate::models::vocab::{
    Difficulty, HikeType, LearnType, PlayType, Setting, ShopType, Surface,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::str::FromStr;

const PUBLISHED_FORMULA: &str = "OR({status} = 'Published', {status} = '')";

/// Airtable REST client.
#[derive(Clone)]
pub struct AirtableClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    base_id: String,
    table_name: String,
}

impl AirtableClient {
    pub fn new(api_key: String, base_id: String, table_name: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: "https://api.airtable.com/v0".to_string(),
            api_key,
            base_id,
            table_name,
        }
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch every published listing, sorted by category then name.
    pub async fn fetch_listings(&self) -> Result<Vec<Listing>, AirtableError> {
        let url = format!(
            "{}/{}/{}",
            self.base_url,
            self.base_id,
            urlencoding::encode(&self.table_name)
        );

        let mut listings = Vec::new();
        let mut offset: Option<String> = None;
        let mut pages = 0u32;

        loop {
            let mut query = vec![(
                "filterByFormula".to_string(),
                PUBLISHED_FORMULA.to_string(),
            )];
            for (i, field) in ["category", "name"].iter().enumerate() {
                query.push((format!("sort[{}][field]", i), field.to_string()));
                query.push((format!("sort[{}][direction]", i), "asc".to_string()));
            }
            if let Some(ref offset) = offset {
                query.push(("offset".to_string(), offset.clone()));
            }

            let response = self
                .http
                .get(&url)
                .bearer_auth(&self.api_key)
                .query(&query)
                .send()
                .await
                .map_err(|e| AirtableError::Http(e.to_string()))?;

            let page: RecordPage = check_response_json(response).await?;
            pages += 1;

            for record in page.records {
                if let Some(listing) = transform_record(&record.id, record.fields) {
                    listings.push(listing);
                }
            }

            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        tracing::info!(count = listings.len(), pages, "Fetched listings from Airtable");
        Ok(listings)
    }
}

/// Check response status and parse the JSON body.
async fn check_response_json<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, AirtableError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.as_u16() == 429 {
            tracing::warn!("Airtable rate limit hit (429)");
        }

        return Err(AirtableError::Status {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json()
        .await
        .map_err(|e| AirtableError::Parse(e.to_string()))
}

#[derive(Debug, Deserialize)]
struct RecordPage {
    records: Vec<AirtableRecord>,
    offset: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AirtableRecord {
    id: String,
    #[serde(default)]
    fields: AirtableFields,
}

#[derive(Debug, Deserialize)]
pub struct AirtableImage {
    pub url: String,
}

/// Raw Airtable fields. Everything is optional; editors leave cells blank.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AirtableFields {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub hours: Option<String>,
    pub price_range: Option<String>,
    pub kid_friendliness_score: Option<f64>,
    pub age_ranges: Vec<String>,
    pub weather: Vec<String>,
    pub amenities: Vec<String>,
    pub accessibility: Option<Vec<String>>,
    pub images: Vec<AirtableImage>,
    pub is_top_pick: Option<bool>,
    pub top_pick_reason: Option<String>,
    /// Comma-separated.
    pub tips: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub last_updated: Option<String>,

    // Play
    pub play_type: Option<String>,
    pub setting: Option<String>,
    pub has_fenced_area: Option<bool>,
    pub play_features: Option<String>,

    // Hike
    pub difficulty: Option<String>,
    pub distance: Option<String>,
    pub elevation_gain: Option<String>,
    pub surface: Option<String>,
    pub hike_type: Option<String>,
    pub is_loop: Option<bool>,
    pub trailhead_parking: Option<String>,
    pub best_season: Option<Vec<String>>,
    pub hike_features: Option<String>,
    pub shade_coverage: Option<String>,
    pub duration: Option<String>,

    // Eat
    pub cuisine: Option<String>,
    pub meal_types: Vec<String>,
    pub eat_features: Vec<String>,
    pub noise_level: Option<String>,

    // Learn
    #[serde(alias = "exploreType")]
    pub learn_type: Option<String>,
    pub admission_required: Option<bool>,
    pub advance_booking: Option<bool>,
    #[serde(alias = "exploreFeatures")]
    pub learn_features: Option<String>,

    // Shop
    pub shop_type: Option<String>,
    pub shop_features: Option<String>,
}

/// Map one Airtable record onto a listing.
///
/// Returns `None` for unpublished records and records missing a name, slug
/// or known category.
pub fn transform_record(record_id: &str, fields: AirtableFields) -> Option<Listing> {
    if let Some(status) = fields.status.as_deref() {
        if !status.is_empty() && status != "Published" {
            return None;
        }
    }

    let (Some(name), Some(slug), Some(category_name)) = (
        non_empty(fields.name.clone()),
        non_empty(fields.slug.clone()),
        non_empty(fields.category.clone()),
    ) else {
        tracing::warn!(record = %record_id, "Skipping record: missing required fields");
        return None;
    };

    let Some(category) = Category::from_slug(&category_name) else {
        tracing::warn!(record = %record_id, category = %category_name, "Skipping record: unknown category");
        return None;
    };

    let coordinates = match (fields.latitude, fields.longitude) {
        (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
        _ => None,
    };

    let last_updated = fields
        .last_updated
        .as_deref()
        .and_then(|s| NaiveDate::parse_from_str(s.get(..10).unwrap_or(s), "%Y-%m-%d").ok())
        .unwrap_or_else(|| Utc::now().date_naive());

    let kid_friendliness_score = fields
        .kid_friendliness_score
        .filter(|s| *s > 0.0)
        .map(|s| s.round().min(u8::MAX as f64) as u8)
        .unwrap_or(3);

    let base = BaseListing {
        id: non_empty(fields.id).unwrap_or_else(|| format!("{}-{}", category, slug)),
        slug,
        name,
        description: fields.description.unwrap_or_default(),
        short_description: fields.short_description.unwrap_or_default(),
        address: fields.address.unwrap_or_default(),
        phone: non_empty(fields.phone),
        website: non_empty(fields.website),
        hours: non_empty(fields.hours),
        price_range: parse_one(fields.price_range.as_deref()),
        kid_friendliness_score,
        age_ranges: parse_all(&fields.age_ranges),
        weather: parse_all(&fields.weather),
        amenities: parse_all(&fields.amenities),
        accessibility: fields.accessibility.as_deref().map(parse_all),
        images: fields.images.into_iter().map(|img| img.url).collect(),
        is_top_pick: fields.is_top_pick.unwrap_or(false),
        top_pick_reason: non_empty(fields.top_pick_reason),
        tips: fields.tips.as_deref().map(split_list),
        coordinates,
        last_updated,
    };

    let details = match category {
        Category::Play => ListingDetails::Play(PlayDetails {
            play_type: parse_one(fields.play_type.as_deref()).unwrap_or(PlayType::Playground),
            setting: parse_one(fields.setting.as_deref()).unwrap_or(Setting::Outdoor),
            has_fenced_area: fields.has_fenced_area,
            shade_coverage: parse_one(fields.shade_coverage.as_deref()),
            features: fields.play_features.as_deref().map(parse_split),
        }),
        Category::Hike => {
            let hike_type = parse_one(fields.hike_type.as_deref()).unwrap_or(
                if fields.is_loop.unwrap_or(false) {
                    HikeType::Loop
                } else {
                    HikeType::OutAndBack
                },
            );
            ListingDetails::Hike(HikeDetails {
                difficulty: parse_one(fields.difficulty.as_deref()).unwrap_or(Difficulty::Easy),
                distance: fields.distance.unwrap_or_default(),
                elevation_gain: non_empty(fields.elevation_gain),
                surface: parse_one(fields.surface.as_deref()).unwrap_or(Surface::Mixed),
                hike_type,
                trailhead_parking: non_empty(fields.trailhead_parking),
                best_season: fields.best_season,
                features: fields.hike_features.as_deref().map(parse_split),
                shade_coverage: parse_one(fields.shade_coverage.as_deref()),
                duration: non_empty(fields.duration),
            })
        }
        Category::Eat => ListingDetails::Eat(EatDetails {
            cuisine: fields.cuisine.unwrap_or_default(),
            meal_types: parse_all(&fields.meal_types),
            features: parse_all(&fields.eat_features),
            noise_level: parse_one(fields.noise_level.as_deref()),
        }),
        Category::Learn => ListingDetails::Learn(LearnDetails {
            learn_type: parse_one(fields.learn_type.as_deref()).unwrap_or(LearnType::Attraction),
            setting: parse_one(fields.setting.as_deref()).unwrap_or(Setting::Indoor),
            admission_required: fields.admission_required.unwrap_or(false),
            advance_booking: fields.advance_booking,
            features: fields.learn_features.as_deref().map(parse_split),
        }),
        Category::Shop => ListingDetails::Shop(ShopDetails {
            shop_type: parse_one(fields.shop_type.as_deref()).unwrap_or(ShopType::General),
            features: fields.shop_features.as_deref().map(parse_split),
        }),
    };

    Some(Listing { base, details })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Split a comma-separated cell, trimming and dropping empty entries.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_one<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Parse known vocabulary values, dropping anything unrecognized.
fn parse_all<T: FromStr>(values: &[String]) -> Vec<T> {
    values
        .iter()
        .filter_map(|v| match v.trim().parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                tracing::debug!(value = %v, "Dropping unknown vocabulary value");
                None
            }
        })
        .collect()
}

fn parse_split<T: FromStr>(value: &str) -> Vec<T> {
    parse_all(&split_list(value))
}

/// Errors talking to Airtable.
#[derive(Debug, thiserror::Error)]
pub enum AirtableError {
    #[error("Airtable request failed: {0}")]
    Http(String),

    #[error("Airtable returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Airtable response parse error: {0}")]
    Parse(String),
}
