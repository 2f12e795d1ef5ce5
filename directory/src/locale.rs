//! Two-locale translation table.
//!
//! UI strings are looked up by `(Locale, TextKey)` instead of being chosen with
//! inline conditionals at every call site.

use crate::enums::unknown_value;
use crate::errors::DirectoryError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn toggle(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ar => write!(f, "ar"),
        }
    }
}

impl FromStr for Locale {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ar" | "arabic" => Ok(Locale::Ar),
            _ => Err(unknown_value("locale", s, &["en", "ar"])),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    FiltersApplied,
    NoResultsTitle,
    NoResultsHint,
    ClearAll,
    SortByRating,
    SortByReviews,
    SortByName,
    SortByDeliveryTime,
    AllLocations,
    OpeningHours,
    Closed,
    ClosedNow,
    Address,
    Amenities,
    Photos,
}

pub fn translate(locale: Locale, key: TextKey) -> &'static str {
    match (locale, key) {
        (Locale::En, TextKey::FiltersApplied) => "Showing results based on your filters",
        (Locale::Ar, TextKey::FiltersApplied) => {
            "يتم عرض النتائج بناءً على عوامل التصفية الخاصة بك"
        }
        (Locale::En, TextKey::NoResultsTitle) => "No restaurants found",
        (Locale::Ar, TextKey::NoResultsTitle) => "لم يتم العثور على مطاعم",
        (Locale::En, TextKey::NoResultsHint) => "Try adjusting your filters or search query.",
        (Locale::Ar, TextKey::NoResultsHint) => "حاول تعديل عوامل التصفية أو كلمات البحث.",
        (Locale::En, TextKey::ClearAll) => "Clear all",
        (Locale::Ar, TextKey::ClearAll) => "مسح الكل",
        (Locale::En, TextKey::SortByRating) => "Highest Rated",
        (Locale::Ar, TextKey::SortByRating) => "الأعلى تقييماً",
        (Locale::En, TextKey::SortByReviews) => "Most Reviews",
        (Locale::Ar, TextKey::SortByReviews) => "الأكثر مراجعات",
        (Locale::En, TextKey::SortByName) => "Name (A-Z)",
        (Locale::Ar, TextKey::SortByName) => "الاسم (أ-ي)",
        (Locale::En, TextKey::SortByDeliveryTime) => "Fastest Delivery",
        (Locale::Ar, TextKey::SortByDeliveryTime) => "أسرع توصيل",
        (Locale::En, TextKey::AllLocations) => "All Locations",
        (Locale::Ar, TextKey::AllLocations) => "جميع المواقع",
        (Locale::En, TextKey::OpeningHours) => "Opening hours",
        (Locale::Ar, TextKey::OpeningHours) => "ساعات العمل",
        (Locale::En, TextKey::Closed) => "Closed",
        (Locale::Ar, TextKey::Closed) => "مغلق",
        (Locale::En, TextKey::ClosedNow) => "Closed now",
        (Locale::Ar, TextKey::ClosedNow) => "مغلق الآن",
        (Locale::En, TextKey::Address) => "Address",
        (Locale::Ar, TextKey::Address) => "العنوان",
        (Locale::En, TextKey::Amenities) => "Amenities",
        (Locale::Ar, TextKey::Amenities) => "المرافق",
        (Locale::En, TextKey::Photos) => "Photos",
        (Locale::Ar, TextKey::Photos) => "الصور",
    }
}

/// Heading above the result list, e.g. "3 Restaurants Found"
pub fn results_heading(locale: Locale, count: usize) -> String {
    match locale {
        Locale::En => format!(
            "{} Restaurant{} Found",
            count,
            if count != 1 { "s" } else { "" }
        ),
        Locale::Ar => format!("تم العثور على {} مطعم", count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Locale::En.toggle(), Locale::Ar);
        assert_eq!(Locale::En.toggle().toggle(), Locale::En);
        assert!(Locale::Ar.is_rtl());
        assert!(!Locale::En.is_rtl());
    }

    #[test]
    fn test_results_heading_pluralization() {
        assert_eq!(results_heading(Locale::En, 0), "0 Restaurants Found");
        assert_eq!(results_heading(Locale::En, 1), "1 Restaurant Found");
        assert_eq!(results_heading(Locale::En, 12), "12 Restaurants Found");
        assert_eq!(results_heading(Locale::Ar, 2), "تم العثور على 2 مطعم");
    }

    #[test]
    fn test_translate_differs_per_locale() {
        assert_eq!(
            translate(Locale::En, TextKey::NoResultsTitle),
            "No restaurants found"
        );
        assert_ne!(
            translate(Locale::En, TextKey::ClearAll),
            translate(Locale::Ar, TextKey::ClearAll)
        );
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("arabic".parse::<Locale>().unwrap(), Locale::Ar);
        assert!("fr".parse::<Locale>().is_err());
    }
}
