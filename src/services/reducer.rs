// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter-state reducer driving interactive filter controls.

use crate::models::filters::{FilterAction, FilterCriteria};

/// Remove `value` if selected, otherwise append it.
///
/// Removal drops every copy so a malformed selection can't stay "half on".
/// Toggling twice restores the list only when `value` starts unselected; a
/// selected value comes back at the end.
fn toggle<T: PartialEq + Copy>(values: &mut Vec<T>, value: T) {
    if values.contains(&value) {
        values.retain(|v| *v != value);
    } else {
        values.push(value);
    }
}

/// Apply one action to the current criteria, returning the next criteria.
///
/// Reset restores the defaults of the category the criteria were created
/// for. Unknown actions, and actions for fields the current category does
/// not have, return the criteria unchanged.
pub fn reduce(state: &FilterCriteria, action: &FilterAction) -> FilterCriteria {
    use FilterAction as A;
    use FilterCriteria as C;

    let mut next = state.clone();

    match (action, &mut next) {
        (A::SetAgeRanges(v), s) => s.base_mut().age_ranges = v.clone(),
        (A::ToggleAgeRange(v), s) => toggle(&mut s.base_mut().age_ranges, *v),
        (A::SetWeather(v), s) => s.base_mut().weather = v.clone(),
        (A::ToggleWeather(v), s) => toggle(&mut s.base_mut().weather, *v),
        (A::SetAmenities(v), s) => s.base_mut().amenities = v.clone(),
        (A::ToggleAmenity(v), s) => toggle(&mut s.base_mut().amenities, *v),
        (A::SetAccessibility(v), s) => s.base_mut().accessibility = v.clone(),
        (A::ToggleAccessibility(v), s) => toggle(&mut s.base_mut().accessibility, *v),
        (A::SetSearchQuery(q), s) => s.base_mut().search_query = q.clone(),

        (A::SetDifficulty(v), C::Hike(c)) => c.difficulty = v.clone(),
        (A::ToggleDifficulty(v), C::Hike(c)) => toggle(&mut c.difficulty, *v),
        (A::SetSurface(v), C::Hike(c)) => c.surface = v.clone(),
        (A::ToggleSurface(v), C::Hike(c)) => toggle(&mut c.surface, *v),
        (A::SetHikeType(v), C::Hike(c)) => c.hike_type = *v,
        (A::SetShadeCoverage(v), C::Hike(c)) => c.shade_coverage = *v,

        (A::SetMealTypes(v), C::Eat(c)) => c.meal_types = v.clone(),
        (A::ToggleMealType(v), C::Eat(c)) => toggle(&mut c.meal_types, *v),
        (A::SetEatFeatures(v), C::Eat(c)) => c.features = v.clone(),
        (A::ToggleEatFeature(v), C::Eat(c)) => toggle(&mut c.features, *v),

        (A::SetFencedArea(v), C::Play(c)) => c.has_fenced_area = *v,
        (A::SetSetting(v), C::Play(c)) => c.setting = *v,
        (A::SetShadeCoverage(v), C::Play(c)) => c.shade_coverage = *v,
        (A::SetPlayFeatures(v), C::Play(c)) => c.features = v.clone(),
        (A::TogglePlayFeature(v), C::Play(c)) => toggle(&mut c.features, *v),

        (A::SetAdmissionRequired(v), C::Learn(c)) => c.admission_required = *v,
        (A::SetSetting(v), C::Learn(c)) => c.setting = *v,
        (A::SetLearnFeatures(v), C::Learn(c)) => c.features = v.clone(),
        (A::ToggleLearnFeature(v), C::Learn(c)) => toggle(&mut c.features, *v),

        (A::SetShopFeatures(v), C::Shop(c)) => c.features = v.clone(),
        (A::ToggleShopFeature(v), C::Shop(c)) => toggle(&mut c.features, *v),

        (A::ResetFilters, s) => *s = FilterCriteria::default_for(state.category()),

        _ => {}
    }

    next
}
