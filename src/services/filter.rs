// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Faceted filtering of listings.
//!
//! Every check is a pure, record-local predicate, so a filter pass is a
//! stable subsequence of its input. Within one dimension the semantics are:
//!
//! - age ranges, weather, meal types: the listing needs at least one selected value
//! - amenities, accessibility, features: the listing needs every selected value
//! - difficulty, surface: the listing's single value must be one of the selected
//! - single-valued and tri-state criteria: exact match unless "any"
//!
//! Dimensions are combined with AND. An empty selection never filters.

use crate::models::filters::{
    BaseCriteria, EatCriteria, FilterCriteria, HikeCriteria, LearnCriteria, PlayCriteria,
    ShopCriteria,
};
use crate::models::listing::{BaseListing, Listing, ListingDetails};
use crate::models::vocab::Setting;

/// A set of criteria that can decide whether a listing is shown.
pub trait ListingFilter {
    fn matches(&self, listing: &Listing) -> bool;

    /// Keep the matching listings, in their original order.
    fn apply<'a, I>(&self, listings: I) -> Vec<&'a Listing>
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        listings
            .into_iter()
            .filter(|listing| self.matches(listing))
            .collect()
    }
}

// ─── Set Semantics ───────────────────────────────────────────

/// OR-intersection: nothing selected, or at least one selected value present.
fn any_selected<T: PartialEq>(selected: &[T], values: &[T]) -> bool {
    selected.is_empty() || selected.iter().any(|s| values.contains(s))
}

/// AND-superset: every selected value present.
fn all_selected<T: PartialEq>(selected: &[T], values: &[T]) -> bool {
    selected.iter().all(|s| values.contains(s))
}

/// Membership of a single value in the selection.
fn one_of<T: PartialEq>(selected: &[T], value: &T) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Exact match unless the criterion is "any". A listing that leaves the
/// field unset never matches a concrete selection.
fn exactly<T: PartialEq>(wanted: Option<T>, actual: Option<T>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual == Some(wanted),
    }
}

/// Setting comparison. A `both` venue satisfies an indoor or outdoor request;
/// a request for `both` only matches `both` venues.
pub fn matches_setting(listing: Setting, wanted: Option<Setting>) -> bool {
    match wanted {
        None => true,
        Some(Setting::Both) => listing == Setting::Both,
        Some(wanted) => listing == wanted || listing == Setting::Both,
    }
}

// ─── Base Predicate ──────────────────────────────────────────

/// Case-insensitive substring search over name, description and short description.
fn matches_search(listing: &BaseListing, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let haystack = format!(
        "{} {} {}",
        listing.name, listing.description, listing.short_description
    )
    .to_lowercase();

    haystack.contains(&query.to_lowercase())
}

/// Checks shared by every category.
pub fn matches_base(listing: &BaseListing, criteria: &BaseCriteria) -> bool {
    matches_search(listing, &criteria.search_query)
        && any_selected(&criteria.age_ranges, &listing.age_ranges)
        && any_selected(&criteria.weather, &listing.weather)
        && all_selected(&criteria.amenities, &listing.amenities)
        && all_selected(&criteria.accessibility, listing.accessibility())
}

impl ListingFilter for BaseCriteria {
    fn matches(&self, listing: &Listing) -> bool {
        matches_base(&listing.base, self)
    }
}

// ─── Category Predicates ─────────────────────────────────────
//
// A listing from another category never matches category criteria: the
// category tag decides which extension fields exist.

impl ListingFilter for HikeCriteria {
    fn matches(&self, listing: &Listing) -> bool {
        let ListingDetails::Hike(hike) = &listing.details else {
            return false;
        };

        matches_base(&listing.base, &self.base)
            && one_of(&self.difficulty, &hike.difficulty)
            && one_of(&self.surface, &hike.surface)
            && exactly(self.hike_type, Some(hike.hike_type))
            && exactly(self.shade_coverage, hike.shade_coverage)
    }
}

impl ListingFilter for EatCriteria {
    fn matches(&self, listing: &Listing) -> bool {
        let ListingDetails::Eat(eat) = &listing.details else {
            return false;
        };

        matches_base(&listing.base, &self.base)
            && any_selected(&self.meal_types, &eat.meal_types)
            && all_selected(&self.features, &eat.features)
    }
}

impl ListingFilter for PlayCriteria {
    fn matches(&self, listing: &Listing) -> bool {
        let ListingDetails::Play(play) = &listing.details else {
            return false;
        };

        matches_base(&listing.base, &self.base)
            && exactly(self.has_fenced_area, play.has_fenced_area)
            && matches_setting(play.setting, self.setting)
            && exactly(self.shade_coverage, play.shade_coverage)
            && all_selected(&self.features, play.features.as_deref().unwrap_or_default())
    }
}

impl ListingFilter for LearnCriteria {
    fn matches(&self, listing: &Listing) -> bool {
        let ListingDetails::Learn(learn) = &listing.details else {
            return false;
        };

        matches_base(&listing.base, &self.base)
            && exactly(self.admission_required, Some(learn.admission_required))
            && matches_setting(learn.setting, self.setting)
            && all_selected(&self.features, learn.features.as_deref().unwrap_or_default())
    }
}

impl ListingFilter for ShopCriteria {
    fn matches(&self, listing: &Listing) -> bool {
        let ListingDetails::Shop(shop) = &listing.details else {
            return false;
        };

        matches_base(&listing.base, &self.base)
            && all_selected(&self.features, shop.features.as_deref().unwrap_or_default())
    }
}

impl ListingFilter for FilterCriteria {
    fn matches(&self, listing: &Listing) -> bool {
        match self {
            FilterCriteria::Base(c) => c.matches(listing),
            FilterCriteria::Hike(c) => c.matches(listing),
            FilterCriteria::Eat(c) => c.matches(listing),
            FilterCriteria::Play(c) => c.matches(listing),
            FilterCriteria::Learn(c) => c.matches(listing),
            FilterCriteria::Shop(c) => c.matches(listing),
        }
    }
}

// ─── Entry Points ────────────────────────────────────────────

/// Filter any listings by the shared criteria only.
pub fn filter_listings<'a, I>(listings: I, criteria: &BaseCriteria) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    criteria.apply(listings)
}

pub fn filter_hike<'a, I>(listings: I, criteria: &HikeCriteria) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    criteria.apply(listings)
}

pub fn filter_eat<'a, I>(listings: I, criteria: &EatCriteria) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    criteria.apply(listings)
}

pub fn filter_play<'a, I>(listings: I, criteria: &PlayCriteria) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    criteria.apply(listings)
}

pub fn filter_learn<'a, I>(listings: I, criteria: &LearnCriteria) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    criteria.apply(listings)
}

pub fn filter_shop<'a, I>(listings: I, criteria: &ShopCriteria) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    criteria.apply(listings)
}

// ─── Active Filter Counts ────────────────────────────────────

/// Number of active base dimensions (ages, weather, amenities, accessibility, search).
pub fn count_active_filters(criteria: &BaseCriteria) -> usize {
    [
        !criteria.age_ranges.is_empty(),
        !criteria.weather.is_empty(),
        !criteria.amenities.is_empty(),
        !criteria.accessibility.is_empty(),
        !criteria.search_query.is_empty(),
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

/// Number of active category-specific dimensions.
fn count_category_filters(criteria: &FilterCriteria) -> usize {
    let dimensions: Vec<bool> = match criteria {
        FilterCriteria::Base(_) => vec![],
        FilterCriteria::Hike(c) => vec![
            !c.difficulty.is_empty(),
            !c.surface.is_empty(),
            c.hike_type.is_some(),
            c.shade_coverage.is_some(),
        ],
        FilterCriteria::Eat(c) => vec![!c.meal_types.is_empty(), !c.features.is_empty()],
        FilterCriteria::Play(c) => vec![
            c.has_fenced_area.is_some(),
            c.setting.is_some(),
            c.shade_coverage.is_some(),
            !c.features.is_empty(),
        ],
        FilterCriteria::Learn(c) => vec![
            c.admission_required.is_some(),
            c.setting.is_some(),
            !c.features.is_empty(),
        ],
        FilterCriteria::Shop(c) => vec![!c.features.is_empty()],
    };

    dimensions.into_iter().filter(|active| *active).count()
}

/// Every active dimension, base and category-specific.
pub fn count_all_active_filters(criteria: &FilterCriteria) -> usize {
    count_active_filters(criteria.base()) + count_category_filters(criteria)
}

/// Whether anything differs from the category's defaults.
pub fn has_active_filters(criteria: &FilterCriteria) -> bool {
    count_all_active_filters(criteria) > 0
}

impl FilterCriteria {
    /// Number of active dimensions, base and category-specific.
    pub fn active_count(&self) -> usize {
        count_all_active_filters(self)
    }

    pub fn is_active(&self) -> bool {
        has_active_filters(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vocab::{Amenity, PlayFeature};

    #[test]
    fn test_matches_setting_both_is_wildcard_on_listing_side() {
        use Setting::{Both, Indoor, Outdoor};

        assert!(matches_setting(Both, Some(Indoor)));
        assert!(matches_setting(Both, Some(Outdoor)));
        assert!(matches_setting(Both, Some(Both)));
        assert!(matches_setting(Both, None));

        assert!(matches_setting(Indoor, Some(Indoor)));
        assert!(matches_setting(Indoor, None));
        assert!(!matches_setting(Indoor, Some(Outdoor)));
        assert!(!matches_setting(Indoor, Some(Both)));
    }

    #[test]
    fn test_set_helpers_tolerate_duplicates() {
        let have = [Amenity::Parking, Amenity::Parking];
        assert!(all_selected(&[Amenity::Parking, Amenity::Parking], &have));
        assert!(!all_selected(&[Amenity::Parking, Amenity::Restrooms], &have));
        assert!(any_selected(&[Amenity::Restrooms, Amenity::Parking], &have));
        assert!(all_selected::<PlayFeature>(&[], &[]));
    }

    #[test]
    fn test_exactly_treats_unset_listing_field_as_no_match() {
        assert!(exactly::<bool>(None, None));
        assert!(exactly(Some(true), Some(true)));
        assert!(!exactly(Some(false), None));
    }

    #[test]
    fn test_count_includes_accessibility() {
        let criteria = BaseCriteria {
            accessibility: vec![crate::models::vocab::Accessibility::Stroller],
            ..Default::default()
        };
        assert_eq!(count_active_filters(&criteria), 1);
    }
}
