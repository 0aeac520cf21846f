// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Listing model: a common base record plus one category-specific extension.

use crate::models::category::Category;
use crate::models::vocab::{
    Accessibility, AgeRange, Amenity, Difficulty, EatFeature, HikeFeature, HikeType,
    LearnFeature, LearnType, MealType, NoiseLevel, PlayFeature, PlayType, PriceRange, Setting,
    ShadeCoverage, ShopFeature, ShopType, Surface, Weather,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A directory entry. The JSON shape is flat: base fields and the
/// category-specific fields sit side by side, discriminated by `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(flatten)]
    pub base: BaseListing,
    #[serde(flatten)]
    pub details: ListingDetails,
}

impl Listing {
    pub fn category(&self) -> Category {
        self.details.category()
    }

    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn slug(&self) -> &str {
        &self.base.slug
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn is_top_pick(&self) -> bool {
        self.base.is_top_pick
    }
}

/// Fields shared by every category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BaseListing {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[validate(range(min = 1, max = 5))]
    pub kid_friendliness_score: u8,
    #[serde(default)]
    pub age_ranges: Vec<AgeRange>,
    #[serde(default)]
    pub weather: Vec<Weather>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Vec<Accessibility>>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_top_pick: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_pick_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub last_updated: NaiveDate,
}

impl BaseListing {
    /// Accessibility attributes, empty when the record omits them.
    pub fn accessibility(&self) -> &[Accessibility] {
        self.accessibility.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Category-specific extension, tagged by `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum ListingDetails {
    Play(PlayDetails),
    Hike(HikeDetails),
    Eat(EatDetails),
    #[serde(alias = "explore")]
    Learn(LearnDetails),
    Shop(ShopDetails),
}

impl ListingDetails {
    pub fn category(&self) -> Category {
        match self {
            ListingDetails::Play(_) => Category::Play,
            ListingDetails::Hike(_) => Category::Hike,
            ListingDetails::Eat(_) => Category::Eat,
            ListingDetails::Learn(_) => Category::Learn,
            ListingDetails::Shop(_) => Category::Shop,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayDetails {
    pub play_type: PlayType,
    pub setting: Setting,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_fenced_area: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shade_coverage: Option<ShadeCoverage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<PlayFeature>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HikeDetails {
    pub difficulty: Difficulty,
    /// Free text, e.g. "1.5 miles".
    pub distance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<String>,
    pub surface: Surface,
    pub hike_type: HikeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailhead_parking: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_season: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<HikeFeature>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shade_coverage: Option<ShadeCoverage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EatDetails {
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub meal_types: Vec<MealType>,
    #[serde(default)]
    pub features: Vec<EatFeature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_level: Option<NoiseLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnDetails {
    #[serde(alias = "exploreType")]
    pub learn_type: LearnType,
    pub setting: Setting,
    #[serde(default)]
    pub admission_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advance_booking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<LearnFeature>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopDetails {
    pub shop_type: ShopType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<ShopFeature>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIKE_JSON: &str = r#"{
        "id": "hike-buffalo-park",
        "slug": "buffalo-park",
        "name": "Buffalo Park Loop",
        "category": "hike",
        "description": "A flat gravel loop with views of the San Francisco Peaks.",
        "shortDescription": "Easy 2-mile loop",
        "address": "2400 N Gemini Rd, Flagstaff, AZ",
        "kidFriendlinessScore": 5,
        "ageRanges": ["toddler", "preschool"],
        "weather": ["sunny"],
        "amenities": ["restrooms", "parking"],
        "images": [],
        "lastUpdated": "2024-05-01",
        "difficulty": "easy",
        "distance": "2 miles",
        "surface": "gravel",
        "hikeType": "loop",
        "shadeCoverage": "none"
    }"#;

    #[test]
    fn test_flat_json_deserializes_into_variant() {
        let listing: Listing = serde_json::from_str(HIKE_JSON).unwrap();

        assert_eq!(listing.category(), Category::Hike);
        assert_eq!(listing.slug(), "buffalo-park");
        assert!(listing.base.accessibility().is_empty());
        match &listing.details {
            ListingDetails::Hike(hike) => {
                assert_eq!(hike.hike_type, HikeType::Loop);
                assert_eq!(hike.shade_coverage, Some(ShadeCoverage::None));
                assert_eq!(hike.features, None);
            }
            other => panic!("expected hike details, got {:?}", other),
        }
    }

    #[test]
    fn test_serializes_back_to_flat_shape() {
        let listing: Listing = serde_json::from_str(HIKE_JSON).unwrap();
        let value = serde_json::to_value(&listing).unwrap();

        assert_eq!(value["category"], "hike");
        assert_eq!(value["hikeType"], "loop");
        assert_eq!(value["kidFriendlinessScore"], 5);
        assert!(value.get("phone").is_none());
    }

    #[test]
    fn test_explore_records_load_as_learn() {
        let json = r#"{
            "id": "lowell", "slug": "lowell-observatory", "name": "Lowell Observatory",
            "category": "explore", "kidFriendlinessScore": 5, "lastUpdated": "2024-02-02",
            "exploreType": "observatory", "setting": "both", "admissionRequired": true
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();

        assert_eq!(listing.category(), Category::Learn);
    }

    #[test]
    fn test_score_out_of_range_fails_validation() {
        let mut listing: Listing = serde_json::from_str(HIKE_JSON).unwrap();
        listing.base.kid_friendliness_score = 6;
        assert!(listing.base.validate().is_err());

        listing.base.kid_friendliness_score = 1;
        assert!(listing.base.validate().is_ok());
    }
}
