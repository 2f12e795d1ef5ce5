use crate::criteria::FilterCriteria;
use crate::enums::SortKey;
use crate::restaurant::Restaurant;
use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Narrow and order `records` according to `criteria`.
///
/// Every criteria dimension is an independent predicate and an empty selection
/// never constrains. Features and suggested flags must all be present on a
/// restaurant, while a single matching dietary flag is enough. Sorting is stable
/// and runs last.
pub fn evaluate<'a>(records: &'a [Restaurant], criteria: &FilterCriteria) -> Vec<&'a Restaurant> {
    let query = criteria.search_query.to_lowercase();

    let mut filtered: Vec<&Restaurant> = records
        .iter()
        .filter(|r| matches_search(r, &query))
        .filter(|r| matches_location(r, criteria))
        .filter(|r| {
            criteria.min_rating.is_nan()
                || criteria.min_rating <= 0.0
                || r.rating >= criteria.min_rating
        })
        .filter(|r| criteria.price_tiers.is_empty() || criteria.price_tiers.contains(&r.price_range))
        .filter(|r| criteria.cuisines.is_empty() || criteria.cuisines.contains(&r.cuisine))
        .filter(|r| {
            criteria.categories.is_empty()
                || r.categories.iter().any(|c| criteria.categories.contains(c))
        })
        .filter(|r| criteria.features.iter().all(|f| r.has_feature(*f)))
        .filter(|r| criteria.suggested.iter().all(|s| r.has_suggested(*s)))
        .filter(|r| criteria.dietary.is_empty() || criteria.dietary.iter().any(|d| r.has_dietary(*d)))
        .collect();

    // Distance buckets are accepted but there is no location data to measure against.

    sort_restaurants(&mut filtered, criteria.sort_by);

    tracing::debug!(
        total = records.len(),
        matched = filtered.len(),
        sort = %criteria.sort_by,
        "evaluated restaurant filters"
    );

    filtered
}

fn matches_search(restaurant: &Restaurant, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    restaurant.name.to_lowercase().contains(query)
        || restaurant.description.to_lowercase().contains(query)
        || restaurant.location.to_lowercase().contains(query)
        || restaurant
            .categories
            .iter()
            .any(|c| c.to_lowercase().contains(query))
}

fn matches_location(restaurant: &Restaurant, criteria: &FilterCriteria) -> bool {
    match &criteria.location {
        Some(location) => restaurant.location.contains(location.as_str()),
        None => true,
    }
}

/// Stable in-place sort by the given key
pub fn sort_restaurants(restaurants: &mut [&Restaurant], sort_by: SortKey) {
    match sort_by {
        SortKey::Rating => restaurants.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Reviews => restaurants.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
        SortKey::Name => restaurants.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::DeliveryTime => {
            restaurants.sort_by(|a, b| compare_delivery(a.delivery_minutes(), b.delivery_minutes()))
        }
        SortKey::Original => {}
    }
}

/// Collation-style name ordering.
///
/// Names compare by their base letters first, ignoring case and accents, so
/// "Éclair" sorts between "Bistro" and "Zaatar". Ties are broken unaccented
/// first and then lowercase first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold_name(a)
        .cmp(&fold_name(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn fold_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

// Unparsable delivery times go last.
fn compare_delivery(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
