use crate::enums::unknown_value;
use crate::errors::DirectoryError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_name: String,
    #[serde(default)]
    pub user_location: String,
    pub badge: Option<String>,
    #[serde(default)]
    pub reviews_count: u32,
    pub rating: u8,
    pub date: String,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSort {
    /// Newest first. Review ids are assigned in posting order.
    #[default]
    Recent,
    RatingDesc,
    RatingAsc,
}

impl std::fmt::Display for ReviewSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewSort::Recent => write!(f, "recent"),
            ReviewSort::RatingDesc => write!(f, "rating_desc"),
            ReviewSort::RatingAsc => write!(f, "rating_asc"),
        }
    }
}

impl FromStr for ReviewSort {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "recent" => Ok(ReviewSort::Recent),
            "rating_desc" | "highest" => Ok(ReviewSort::RatingDesc),
            "rating_asc" | "lowest" => Ok(ReviewSort::RatingAsc),
            _ => Err(unknown_value(
                "review sort",
                s,
                &["recent", "rating_desc", "rating_asc"],
            )),
        }
    }
}

/// Review listing options on the restaurant detail page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewQuery {
    pub rating: Option<u8>,
    pub search: String,
    pub sort: ReviewSort,
}

impl ReviewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only show reviews with exactly this many stars
    pub fn with_rating(mut self, rating: Option<u8>) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn with_sort(mut self, sort: ReviewSort) -> Self {
        self.sort = sort;
        self
    }
}

pub fn filter_reviews<'a>(reviews: &'a [Review], query: &ReviewQuery) -> Vec<&'a Review> {
    let mut list: Vec<&Review> = reviews.iter().collect();

    if let Some(rating) = query.rating {
        list.retain(|r| r.rating == rating);
    }

    if !query.search.trim().is_empty() {
        let q = query.search.to_lowercase();
        list.retain(|r| r.user_name.to_lowercase().contains(&q) || r.text.to_lowercase().contains(&q));
    }

    list.sort_by(|a, b| match query.sort {
        ReviewSort::RatingDesc => b.rating.cmp(&a.rating),
        ReviewSort::RatingAsc => a.rating.cmp(&b.rating),
        ReviewSort::Recent => compare_ids_desc(&a.id, &b.id),
    });

    list
}

// Numeric ids compare numerically so "10" is newer than "9".
fn compare_ids_desc(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => b.cmp(&a),
        _ => b.cmp(a),
    }
}

/// Number of reviews per star, index 0 holding 5-star reviews and index 4 holding 1-star reviews
pub fn rating_breakdown(reviews: &[Review]) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for review in reviews {
        if (1..=5).contains(&review.rating) {
            counts[(5 - review.rating) as usize] += 1;
        }
    }
    counts
}
