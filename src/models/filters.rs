// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter criteria, filter actions and filter option tables.
//!
//! Criteria mirror the listing model: a base shape shared by every category,
//! extended per category. [`FilterCriteria`] carries its category as an
//! explicit tag so that resetting never has to guess which defaults apply.

use crate::models::category::Category;
use crate::models::vocab::{
    Accessibility, AgeRange, Amenity, Difficulty, EatFeature, HikeType, LearnFeature, MealType,
    PlayFeature, Setting, ShadeCoverage, ShopFeature, Surface, Weather,
};
use serde::{Deserialize, Serialize};

/// Criteria shared by every category. Empty sets and an empty query mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseCriteria {
    pub age_ranges: Vec<AgeRange>,
    pub weather: Vec<Weather>,
    pub amenities: Vec<Amenity>,
    pub accessibility: Vec<Accessibility>,
    pub search_query: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HikeCriteria {
    #[serde(flatten)]
    pub base: BaseCriteria,
    pub difficulty: Vec<Difficulty>,
    pub surface: Vec<Surface>,
    /// `None` means any hike type.
    pub hike_type: Option<HikeType>,
    pub shade_coverage: Option<ShadeCoverage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EatCriteria {
    #[serde(flatten)]
    pub base: BaseCriteria,
    pub meal_types: Vec<MealType>,
    pub features: Vec<EatFeature>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayCriteria {
    #[serde(flatten)]
    pub base: BaseCriteria,
    /// Tri-state: `None` is "any".
    pub has_fenced_area: Option<bool>,
    pub setting: Option<Setting>,
    pub shade_coverage: Option<ShadeCoverage>,
    pub features: Vec<PlayFeature>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearnCriteria {
    #[serde(flatten)]
    pub base: BaseCriteria,
    /// Tri-state: `None` is "any".
    pub admission_required: Option<bool>,
    pub setting: Option<Setting>,
    pub features: Vec<LearnFeature>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopCriteria {
    #[serde(flatten)]
    pub base: BaseCriteria,
    pub features: Vec<ShopFeature>,
}

/// Criteria for any page, tagged with the category they were created for.
///
/// On the wire: `{"category": "hike", "difficulty": ["easy"], ...}`; base-only
/// criteria use `"category": "all"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum FilterCriteria {
    #[serde(rename = "all")]
    Base(BaseCriteria),
    Hike(HikeCriteria),
    Eat(EatCriteria),
    Play(PlayCriteria),
    #[serde(alias = "explore")]
    Learn(LearnCriteria),
    Shop(ShopCriteria),
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria::Base(BaseCriteria::default())
    }
}

impl FilterCriteria {
    /// Initial criteria for a category page, or base-only criteria for `None`.
    pub fn default_for(category: Option<Category>) -> Self {
        match category {
            None => FilterCriteria::Base(BaseCriteria::default()),
            Some(Category::Hike) => FilterCriteria::Hike(HikeCriteria::default()),
            Some(Category::Eat) => FilterCriteria::Eat(EatCriteria::default()),
            Some(Category::Play) => FilterCriteria::Play(PlayCriteria::default()),
            Some(Category::Learn) => FilterCriteria::Learn(LearnCriteria::default()),
            Some(Category::Shop) => FilterCriteria::Shop(ShopCriteria::default()),
        }
    }

    /// The category these criteria were created for; `None` for base-only criteria.
    pub fn category(&self) -> Option<Category> {
        match self {
            FilterCriteria::Base(_) => None,
            FilterCriteria::Hike(_) => Some(Category::Hike),
            FilterCriteria::Eat(_) => Some(Category::Eat),
            FilterCriteria::Play(_) => Some(Category::Play),
            FilterCriteria::Learn(_) => Some(Category::Learn),
            FilterCriteria::Shop(_) => Some(Category::Shop),
        }
    }

    pub fn base(&self) -> &BaseCriteria {
        match self {
            FilterCriteria::Base(base) => base,
            FilterCriteria::Hike(c) => &c.base,
            FilterCriteria::Eat(c) => &c.base,
            FilterCriteria::Play(c) => &c.base,
            FilterCriteria::Learn(c) => &c.base,
            FilterCriteria::Shop(c) => &c.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut BaseCriteria {
        match self {
            FilterCriteria::Base(base) => base,
            FilterCriteria::Hike(c) => &mut c.base,
            FilterCriteria::Eat(c) => &mut c.base,
            FilterCriteria::Play(c) => &mut c.base,
            FilterCriteria::Learn(c) => &mut c.base,
            FilterCriteria::Shop(c) => &mut c.base,
        }
    }
}

/// A filter-control interaction. Serialized as `{"type": "...", "payload": ...}`.
///
/// Actions targeting a field the current criteria do not have (e.g.
/// `TOGGLE_DIFFICULTY` on eat criteria) leave the criteria unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterAction {
    SetAgeRanges(Vec<AgeRange>),
    ToggleAgeRange(AgeRange),
    SetWeather(Vec<Weather>),
    ToggleWeather(Weather),
    SetAmenities(Vec<Amenity>),
    ToggleAmenity(Amenity),
    SetAccessibility(Vec<Accessibility>),
    ToggleAccessibility(Accessibility),
    SetSearchQuery(String),
    SetDifficulty(Vec<Difficulty>),
    ToggleDifficulty(Difficulty),
    SetSurface(Vec<Surface>),
    ToggleSurface(Surface),
    SetHikeType(Option<HikeType>),
    SetShadeCoverage(Option<ShadeCoverage>),
    SetMealTypes(Vec<MealType>),
    ToggleMealType(MealType),
    SetEatFeatures(Vec<EatFeature>),
    ToggleEatFeature(EatFeature),
    SetFencedArea(Option<bool>),
    SetSetting(Option<Setting>),
    SetAdmissionRequired(Option<bool>),
    SetPlayFeatures(Vec<PlayFeature>),
    TogglePlayFeature(PlayFeature),
    SetLearnFeatures(Vec<LearnFeature>),
    ToggleLearnFeature(LearnFeature),
    SetShopFeatures(Vec<ShopFeature>),
    ToggleShopFeature(ShopFeature),
    ResetFilters,
    /// Any action type this version does not know about.
    #[serde(other)]
    Unknown,
}

impl FilterAction {
    /// Decode an action from JSON.
    ///
    /// An unrecognized `type` decodes as [`FilterAction::Unknown`] whatever
    /// its payload; a known type with a bad payload is still an error.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        match serde_json::from_value(value.clone()) {
            Ok(action) => Ok(action),
            Err(err) => {
                let tag_only = serde_json::json!({ "type": value.get("type") });
                match serde_json::from_value(tag_only) {
                    Ok(FilterAction::Unknown) => Ok(FilterAction::Unknown),
                    _ => Err(err),
                }
            }
        }
    }
}

// ─── Option Tables ───────────────────────────────────────────

/// How a filter control selects values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionKind {
    /// Any number of values (a set).
    Multi,
    /// One value or "any".
    Single,
    /// Yes / no / any.
    TriState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// One filter control: the criteria field it drives and its choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterGroup {
    pub field: &'static str,
    pub label: &'static str,
    pub kind: SelectionKind,
    pub options: Vec<FilterOption>,
}

macro_rules! options {
    ($vocab:ty) => {
        <$vocab>::ALL
            .iter()
            .map(|v| FilterOption {
                value: v.as_str(),
                label: v.label(),
            })
            .collect::<Vec<_>>()
    };
}

fn group(
    field: &'static str,
    label: &'static str,
    kind: SelectionKind,
    options: Vec<FilterOption>,
) -> FilterGroup {
    FilterGroup {
        field,
        label,
        kind,
        options,
    }
}

fn yes_no() -> Vec<FilterOption> {
    vec![
        FilterOption {
            value: "true",
            label: "Yes",
        },
        FilterOption {
            value: "false",
            label: "No",
        },
    ]
}

/// Filter controls for a category page (`None` for base-only pages).
pub fn filter_groups(category: Option<Category>) -> Vec<FilterGroup> {
    use SelectionKind::{Multi, Single, TriState};

    let mut groups = vec![
        group("ageRanges", "Age", Multi, options!(AgeRange)),
        group("weather", "Weather", Multi, options!(Weather)),
        group("amenities", "Amenities", Multi, options!(Amenity)),
        group("accessibility", "Accessibility", Multi, options!(Accessibility)),
    ];

    match category {
        None => {}
        Some(Category::Hike) => groups.extend([
            group("difficulty", "Difficulty", Multi, options!(Difficulty)),
            group("surface", "Surface", Multi, options!(Surface)),
            group("hikeType", "Trail Type", Single, options!(HikeType)),
            group("shadeCoverage", "Shade", Single, options!(ShadeCoverage)),
        ]),
        Some(Category::Eat) => groups.extend([
            group("mealTypes", "Meals", Multi, options!(MealType)),
            group("features", "Features", Multi, options!(EatFeature)),
        ]),
        Some(Category::Play) => groups.extend([
            group("hasFencedArea", "Fenced Area", TriState, yes_no()),
            group("setting", "Setting", Single, options!(Setting)),
            group("shadeCoverage", "Shade", Single, options!(ShadeCoverage)),
            group("features", "Features", Multi, options!(PlayFeature)),
        ]),
        Some(Category::Learn) => groups.extend([
            group("admissionRequired", "Admission", TriState, yes_no()),
            group("setting", "Setting", Single, options!(Setting)),
            group("features", "Features", Multi, options!(LearnFeature)),
        ]),
        Some(Category::Shop) => {
            groups.push(group("features", "Features", Multi, options!(ShopFeature)))
        }
    }

    groups
}
