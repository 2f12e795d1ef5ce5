use crate::enums::{Amenity, Dietary, Feature, PriceTier, Suggested};
use crate::locale::Locale;
use crate::reviews::Review;
use serde::{Deserialize, Serialize};

/// A restaurant record as supplied by the static dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub name_ar: Option<String>,
    pub location: String,
    pub location_ar: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub rating: f64,
    pub review_count: u32,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub price_range: PriceTier,
    pub cuisine: String,
    pub delivery_time: String,
    #[serde(default)]
    pub delivery_fee: f64,
    pub opening_hours: Option<Vec<OpeningHours>>,
    #[serde(default)]
    pub closed_now: bool,

    #[serde(flatten)]
    pub features: FeatureFlags,
    #[serde(flatten)]
    pub suggested: SuggestedFlags,
    #[serde(flatten)]
    pub dietary: DietaryFlags,
    #[serde(flatten)]
    pub amenities: AmenityFlags,

    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    #[serde(default)]
    pub suitable_for_lunch: bool,
    #[serde(default)]
    pub suitable_for_children: bool,
    #[serde(default)]
    pub suitable_for_groups: bool,
    #[serde(default)]
    pub dogs_allowed: bool,
    #[serde(default)]
    pub full_bar: bool,
    #[serde(default)]
    pub suitable_for_brunch: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedFlags {
    #[serde(default)]
    pub open_now: bool,
    #[serde(default)]
    pub offers_delivery: bool,
    #[serde(default)]
    pub takeaway_available: bool,
    #[serde(default)]
    pub suitable_for_dinner: bool,
    #[serde(default)]
    pub new_and_trendy: bool,
    #[serde(default)]
    pub terrace: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryFlags {
    #[serde(default)]
    pub halal: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub kosher: bool,
}

/// Detail-page amenities. Unlike the filter flags, a missing amenity is
/// assumed present, except `driveIn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityFlags {
    #[serde(default = "default_true")]
    pub accepts_reservations: bool,
    #[serde(default = "default_true")]
    pub accessible: bool,
    #[serde(default = "default_true")]
    pub casual: bool,
    #[serde(default = "default_true")]
    pub happy_hour: bool,
    #[serde(default = "default_true")]
    pub television: bool,
    #[serde(default = "default_true")]
    pub wifi: bool,
    #[serde(default)]
    pub drive_in: bool,
    /// Falls back to `suitableForDinner` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_for_dinner: Option<bool>,
}

impl Default for AmenityFlags {
    fn default() -> Self {
        Self {
            accepts_reservations: true,
            accessible: true,
            casual: true,
            happy_hour: true,
            television: true,
            wifi: true,
            drive_in: false,
            ideal_for_dinner: None,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    pub day: String,
    pub hours: String,
    pub note: Option<String>,
    #[serde(default)]
    pub is_closed: bool,
}

impl OpeningHours {
    fn open(day: &str, hours: &str) -> Self {
        Self {
            day: day.to_string(),
            hours: hours.to_string(),
            note: None,
            is_closed: false,
        }
    }
}

/// Weekly hours shown when a restaurant does not publish its own
pub fn default_opening_hours() -> Vec<OpeningHours> {
    const WEEKDAY: &str = "12:00 PM - 11:00 PM";
    const WEEKEND: &str = "12:00 PM - 12:00 AM (the following day)";
    vec![
        OpeningHours::open("Mon", WEEKDAY),
        OpeningHours::open("Tue", WEEKDAY),
        OpeningHours::open("Wed", WEEKDAY),
        OpeningHours::open("Thu", WEEKDAY),
        OpeningHours::open("Fri", WEEKEND),
        OpeningHours::open("Sat", WEEKEND),
        OpeningHours::open("Sun", "12:00 PM - 10:00 PM"),
    ]
}

impl Restaurant {
    pub fn has_feature(&self, feature: Feature) -> bool {
        let flags = &self.features;
        match feature {
            Feature::SuitableForLunch => flags.suitable_for_lunch,
            Feature::SuitableForChildren => flags.suitable_for_children,
            Feature::SuitableForGroups => flags.suitable_for_groups,
            Feature::DogsAllowed => flags.dogs_allowed,
            Feature::FullBar => flags.full_bar,
            Feature::SuitableForBrunch => flags.suitable_for_brunch,
        }
    }

    pub fn has_suggested(&self, suggested: Suggested) -> bool {
        let flags = &self.suggested;
        match suggested {
            Suggested::OpenNow => flags.open_now,
            Suggested::OffersDelivery => flags.offers_delivery,
            Suggested::TakeawayAvailable => flags.takeaway_available,
            Suggested::SuitableForDinner => flags.suitable_for_dinner,
            Suggested::NewAndTrendy => flags.new_and_trendy,
            Suggested::Terrace => flags.terrace,
        }
    }

    pub fn has_dietary(&self, dietary: Dietary) -> bool {
        let flags = &self.dietary;
        match dietary {
            Dietary::Halal => flags.halal,
            Dietary::Vegan => flags.vegan,
            Dietary::Vegetarian => flags.vegetarian,
            Dietary::Kosher => flags.kosher,
        }
    }

    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        let flags = &self.amenities;
        match amenity {
            Amenity::AcceptsReservations => flags.accepts_reservations,
            Amenity::OffersDelivery => self.suggested.offers_delivery,
            Amenity::Accessible => flags.accessible,
            Amenity::Terrace => self.suggested.terrace,
            Amenity::Casual => flags.casual,
            Amenity::FullBar => self.features.full_bar,
            Amenity::HappyHour => flags.happy_hour,
            Amenity::Television => flags.television,
            Amenity::Wifi => flags.wifi,
            Amenity::DriveIn => flags.drive_in,
            Amenity::IdealForDinner => flags
                .ideal_for_dinner
                .unwrap_or(self.suggested.suitable_for_dinner),
        }
    }

    /// Amenities available at the restaurant, in display order
    pub fn amenities(&self) -> Vec<Amenity> {
        Amenity::ALL
            .into_iter()
            .filter(|a| self.has_amenity(*a))
            .collect()
    }

    /// Gallery images; the single `image` when no gallery is published.
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    pub fn address_line1_or_location(&self) -> &str {
        self.address_line1.as_deref().unwrap_or(&self.location)
    }

    /// Lower bound of the delivery window in minutes: "30-45" gives 30, "20" gives 20.
    /// Returns None when the string does not start with a number.
    pub fn delivery_minutes(&self) -> Option<u32> {
        parse_leading_minutes(&self.delivery_time)
    }

    pub fn display_name(&self, locale: Locale) -> &str {
        match (locale, &self.name_ar) {
            (Locale::Ar, Some(name)) => name,
            _ => &self.name,
        }
    }

    pub fn display_location(&self, locale: Locale) -> &str {
        match (locale, &self.location_ar) {
            (Locale::Ar, Some(location)) => location,
            _ => &self.location,
        }
    }

    pub fn opening_hours_or_default(&self) -> Vec<OpeningHours> {
        self.opening_hours
            .clone()
            .unwrap_or_else(default_opening_hours)
    }

    pub fn feature_badges(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.has_feature(*f))
            .collect()
    }

    pub fn suggested_badges(&self) -> Vec<Suggested> {
        Suggested::ALL
            .into_iter()
            .filter(|s| self.has_suggested(*s))
            .collect()
    }

    pub fn dietary_badges(&self) -> Vec<Dietary> {
        Dietary::ALL
            .into_iter()
            .filter(|d| self.has_dietary(*d))
            .collect()
    }
}

fn parse_leading_minutes(value: &str) -> Option<u32> {
    let first = value.split('-').next()?.trim_start();
    let digits_end = first
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(first.len());
    first[..digits_end].parse().ok()
}
