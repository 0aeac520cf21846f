// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Directory categories and their static page metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// The five listing categories. This is the discriminant of [`crate::models::Listing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Play,
    Hike,
    Eat,
    /// Formerly "explore"; the old name is still accepted on input.
    #[serde(alias = "explore")]
    Learn,
    Shop,
}

impl Category {
    /// Categories in navigation order.
    pub const ALL: [Category; 5] = [
        Category::Play,
        Category::Hike,
        Category::Eat,
        Category::Learn,
        Category::Shop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Play => "play",
            Category::Hike => "hike",
            Category::Eat => "eat",
            Category::Learn => "learn",
            Category::Shop => "shop",
        }
    }

    /// Resolve a URL slug. `explore` is kept working for old links.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "play" => Some(Category::Play),
            "hike" => Some(Category::Hike),
            "eat" => Some(Category::Eat),
            "learn" | "explore" => Some(Category::Learn),
            "shop" => Some(Category::Shop),
            _ => None,
        }
    }

    pub fn info(self) -> &'static CategoryInfo {
        match self {
            Category::Play => &CATEGORY_INFO[0],
            Category::Hike => &CATEGORY_INFO[1],
            Category::Eat => &CATEGORY_INFO[2],
            Category::Learn => &CATEGORY_INFO[3],
            Category::Shop => &CATEGORY_INFO[4],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static presentation data for a category page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
    /// Short blurb for category cards.
    pub description: &'static str,
    /// Longer description used for page metadata.
    pub page_description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub slug: &'static str,
}

pub static CATEGORY_INFO: [CategoryInfo; 5] = [
    CategoryInfo {
        id: Category::Play,
        name: "Play",
        description: "Playgrounds, parks, and indoor play spaces",
        page_description:
            "Discover kid-friendly playgrounds, parks, and indoor play spaces in Flagstaff, Arizona.",
        icon: "Tent",
        color: "bg-category-play",
        slug: "play",
    },
    CategoryInfo {
        id: Category::Hike,
        name: "Hike",
        description: "Kid-friendly trails and nature walks",
        page_description: "Find kid-friendly hiking trails and nature walks in Flagstaff, Arizona.",
        icon: "Footprints",
        color: "bg-category-hike",
        slug: "hike",
    },
    CategoryInfo {
        id: Category::Eat,
        name: "Eat",
        description: "Family-friendly restaurants and cafes",
        page_description: "Discover family-friendly restaurants and cafes in Flagstaff, Arizona.",
        icon: "UtensilsCrossed",
        color: "bg-category-eat",
        slug: "eat",
    },
    CategoryInfo {
        id: Category::Learn,
        name: "Learn",
        description: "Museums, attractions, and educational experiences",
        page_description:
            "Find museums, attractions, and educational experiences for kids in Flagstaff, Arizona.",
        icon: "GraduationCap",
        color: "bg-category-learn",
        slug: "learn",
    },
    CategoryInfo {
        id: Category::Shop,
        name: "Shop",
        description: "Kid-friendly stores and shops",
        page_description: "Find kid-friendly stores and shops in Flagstaff, Arizona.",
        icon: "ShoppingBag",
        color: "bg-category-shop",
        slug: "shop",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_table_matches_enum() {
        for category in Category::ALL {
            assert_eq!(category.info().id, category);
            assert_eq!(category.info().slug, category.as_str());
        }
    }

    #[test]
    fn test_explore_alias() {
        assert_eq!(Category::from_slug("explore"), Some(Category::Learn));
        let parsed: Category = serde_json::from_str("\"explore\"").unwrap();
        assert_eq!(parsed, Category::Learn);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"learn\"");
        assert_eq!(Category::from_slug("museums"), None);
    }
}
