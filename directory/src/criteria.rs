use crate::enums::{Dietary, DistanceBucket, Feature, PriceTier, SortKey, Suggested};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Label of the location dropdown entry that disables location filtering
pub const ALL_LOCATIONS: &str = "All Locations";

/// Filter state of one browsing session.
///
/// Every mutation consumes the value and returns the updated one, so previous
/// states can be kept for comparison or undo.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search_query: String,
    /// None means all locations
    pub location: Option<String>,
    pub min_rating: f64,
    pub price_tiers: BTreeSet<PriceTier>,
    pub categories: BTreeSet<String>,
    pub cuisines: BTreeSet<String>,
    pub sort_by: SortKey,
    pub features: BTreeSet<Feature>,
    pub suggested: BTreeSet<Suggested>,
    pub dietary: BTreeSet<Dietary>,
    pub distance: Option<DistanceBucket>,
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if set.contains(&value) {
        set.remove(&value);
    } else {
        set.insert(value);
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str) -> Self {
        self.search_query = query.to_string();
        self
    }

    /// Select a location. Empty input or the "All Locations" label clears the selection.
    pub fn with_location(mut self, location: &str) -> Self {
        let trimmed = location.trim();
        self.location = if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_LOCATIONS) {
            None
        } else {
            Some(location.to_string())
        };
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn with_sort(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_distance(mut self, distance: Option<DistanceBucket>) -> Self {
        self.distance = distance;
        self
    }

    pub fn toggle_price_tier(mut self, tier: PriceTier) -> Self {
        toggle(&mut self.price_tiers, tier);
        self
    }

    pub fn toggle_category(mut self, category: &str) -> Self {
        toggle(&mut self.categories, category.to_string());
        self
    }

    pub fn toggle_cuisine(mut self, cuisine: &str) -> Self {
        toggle(&mut self.cuisines, cuisine.to_string());
        self
    }

    pub fn toggle_feature(mut self, feature: Feature) -> Self {
        toggle(&mut self.features, feature);
        self
    }

    pub fn toggle_suggested(mut self, suggested: Suggested) -> Self {
        toggle(&mut self.suggested, suggested);
        self
    }

    pub fn toggle_dietary(mut self, dietary: Dietary) -> Self {
        toggle(&mut self.dietary, dietary);
        self
    }

    /// Reset the sidebar filters and sort order. Search text and location are kept.
    pub fn clear_filters(self) -> Self {
        Self {
            search_query: self.search_query,
            location: self.location,
            ..Self::default()
        }
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    /// Whether any sidebar filter differs from its default. The sort key does not count.
    pub fn has_active_filters(&self) -> bool {
        self.min_rating > 0.0
            || !self.price_tiers.is_empty()
            || !self.categories.is_empty()
            || !self.cuisines.is_empty()
            || !self.features.is_empty()
            || self.distance.is_some()
            || !self.suggested.is_empty()
            || !self.dietary.is_empty()
    }

    /// Whether the result list is narrowed by anything, including search text and location
    pub fn is_narrowed(&self) -> bool {
        !self.search_query.is_empty() || self.location.is_some() || self.has_active_filters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_filters() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.sort_by, SortKey::Rating);
        assert!(!criteria.has_active_filters());
        assert!(!criteria.is_narrowed());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let criteria = FilterCriteria::new().toggle_dietary(Dietary::Vegan);
        assert!(criteria.dietary.contains(&Dietary::Vegan));
        let criteria = criteria.toggle_dietary(Dietary::Vegan);
        assert!(criteria.dietary.is_empty());
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_updates_produce_new_values() {
        let before = FilterCriteria::new().with_search("sushi");
        let after = before.clone().toggle_price_tier(PriceTier::Luxury);
        assert_ne!(before, after);
        assert!(before.price_tiers.is_empty());
        assert_eq!(after.search_query, "sushi");
    }

    #[test]
    fn test_all_locations_label_clears_location() {
        let criteria = FilterCriteria::new().with_location("Dubai");
        assert_eq!(criteria.location.as_deref(), Some("Dubai"));
        assert!(criteria.is_narrowed());
        assert!(!criteria.has_active_filters());

        let criteria = criteria.with_location("all locations");
        assert_eq!(criteria.location, None);
        let criteria = criteria.with_location("");
        assert_eq!(criteria.location, None);
    }

    #[test]
    fn test_clear_filters_keeps_search_and_location() {
        let criteria = FilterCriteria::new()
            .with_search("pizza")
            .with_location("Riyadh")
            .with_min_rating(4.0)
            .with_sort(SortKey::Name)
            .with_distance(Some(DistanceBucket::ByBike))
            .toggle_feature(Feature::FullBar)
            .toggle_category("Italian");
        assert!(criteria.has_active_filters());

        let cleared = criteria.clear_filters();
        assert!(!cleared.has_active_filters());
        assert_eq!(cleared.search_query, "pizza");
        assert_eq!(cleared.location.as_deref(), Some("Riyadh"));
        assert_eq!(cleared.sort_by, SortKey::Rating);
        assert!(cleared.is_narrowed());

        assert_eq!(cleared.reset(), FilterCriteria::default());
    }

    #[test]
    fn test_distance_counts_as_active_filter() {
        let criteria = FilterCriteria::new().with_distance(Some(DistanceBucket::OnFoot));
        assert!(criteria.has_active_filters());
    }
}
