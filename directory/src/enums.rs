use crate::errors::DirectoryError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strsim::jaro_winkler;

const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Build an `UnknownValue` error, suggesting the closest known name if any is similar enough
pub(crate) fn unknown_value(
    kind: &'static str,
    value: &str,
    candidates: &[&'static str],
) -> DirectoryError {
    let needle = value.to_lowercase();
    let suggestion = candidates
        .iter()
        .map(|c| (*c, jaro_winkler(&needle, &c.to_lowercase())))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(c, _)| c);
    DirectoryError::UnknownValue {
        kind,
        value: value.to_string(),
        suggestion,
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Expensive,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceTier {
    pub const ALL: [PriceTier; 4] = [
        PriceTier::Budget,
        PriceTier::Moderate,
        PriceTier::Expensive,
        PriceTier::Luxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Budget => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Expensive => "$$$",
            PriceTier::Luxury => "$$$$",
        }
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PriceTier {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "$" | "1" | "budget" => Ok(PriceTier::Budget),
            "$$" | "2" | "moderate" => Ok(PriceTier::Moderate),
            "$$$" | "3" | "expensive" => Ok(PriceTier::Expensive),
            "$$$$" | "4" | "luxury" => Ok(PriceTier::Luxury),
            _ => Err(unknown_value(
                "price tier",
                s,
                &["$", "$$", "$$$", "$$$$"],
            )),
        }
    }
}

/// Ordering applied to the filtered restaurant list
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Rating,
    Reviews,
    Name,
    DeliveryTime,
    /// Keep the dataset order
    Original,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Rating,
        SortKey::Reviews,
        SortKey::Name,
        SortKey::DeliveryTime,
        SortKey::Original,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Reviews => "reviews",
            SortKey::Name => "name",
            SortKey::DeliveryTime => "deliveryTime",
            SortKey::Original => "original",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rating" => Ok(SortKey::Rating),
            "reviews" | "reviewcount" | "review-count" => Ok(SortKey::Reviews),
            "name" => Ok(SortKey::Name),
            "deliverytime" | "delivery-time" | "delivery" => Ok(SortKey::DeliveryTime),
            "original" | "none" => Ok(SortKey::Original),
            _ => Err(unknown_value(
                "sort key",
                s,
                &SortKey::ALL.map(|k| k.as_str()),
            )),
        }
    }
}

/// Venue suitability flags, combined with AND when filtering
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    SuitableForLunch,
    SuitableForChildren,
    SuitableForGroups,
    DogsAllowed,
    FullBar,
    SuitableForBrunch,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::SuitableForLunch,
        Feature::SuitableForChildren,
        Feature::SuitableForGroups,
        Feature::DogsAllowed,
        Feature::FullBar,
        Feature::SuitableForBrunch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::SuitableForLunch => "suitableForLunch",
            Feature::SuitableForChildren => "suitableForChildren",
            Feature::SuitableForGroups => "suitableForGroups",
            Feature::DogsAllowed => "dogsAllowed",
            Feature::FullBar => "fullBar",
            Feature::SuitableForBrunch => "suitableForBrunch",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Feature::SuitableForLunch => "Suitable for lunch",
            Feature::SuitableForChildren => "Suitable for children",
            Feature::SuitableForGroups => "Suitable for groups",
            Feature::DogsAllowed => "Dogs allowed",
            Feature::FullBar => "Full bar",
            Feature::SuitableForBrunch => "Suitable for brunch",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Feature {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "suitableforlunch" | "lunch" => Ok(Feature::SuitableForLunch),
            "suitableforchildren" | "children" => Ok(Feature::SuitableForChildren),
            "suitableforgroups" | "groups" => Ok(Feature::SuitableForGroups),
            "dogsallowed" | "dogs" => Ok(Feature::DogsAllowed),
            "fullbar" | "bar" => Ok(Feature::FullBar),
            "suitableforbrunch" | "brunch" => Ok(Feature::SuitableForBrunch),
            _ => Err(unknown_value(
                "feature",
                s,
                &Feature::ALL.map(|f| f.as_str()),
            )),
        }
    }
}

/// Suggestion flags shown at the top of the filter sidebar, combined with AND
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Suggested {
    OpenNow,
    OffersDelivery,
    TakeawayAvailable,
    SuitableForDinner,
    NewAndTrendy,
    Terrace,
}

impl Suggested {
    pub const ALL: [Suggested; 6] = [
        Suggested::OpenNow,
        Suggested::OffersDelivery,
        Suggested::TakeawayAvailable,
        Suggested::SuitableForDinner,
        Suggested::NewAndTrendy,
        Suggested::Terrace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Suggested::OpenNow => "openNow",
            Suggested::OffersDelivery => "offersDelivery",
            Suggested::TakeawayAvailable => "takeawayAvailable",
            Suggested::SuitableForDinner => "suitableForDinner",
            Suggested::NewAndTrendy => "newAndTrendy",
            Suggested::Terrace => "terrace",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Suggested::OpenNow => "Open now",
            Suggested::OffersDelivery => "Offers delivery",
            Suggested::TakeawayAvailable => "Takeaway available",
            Suggested::SuitableForDinner => "Suitable for dinner",
            Suggested::NewAndTrendy => "New and trendy",
            Suggested::Terrace => "Terrace",
        }
    }
}

impl std::fmt::Display for Suggested {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Suggested {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "opennow" | "open" => Ok(Suggested::OpenNow),
            "offersdelivery" | "delivery" => Ok(Suggested::OffersDelivery),
            "takeawayavailable" | "takeaway" => Ok(Suggested::TakeawayAvailable),
            "suitablefordinner" | "dinner" => Ok(Suggested::SuitableForDinner),
            "newandtrendy" | "trendy" => Ok(Suggested::NewAndTrendy),
            "terrace" => Ok(Suggested::Terrace),
            _ => Err(unknown_value(
                "suggested flag",
                s,
                &Suggested::ALL.map(|f| f.as_str()),
            )),
        }
    }
}

/// Dietary options; any selected option is enough for a restaurant to match
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Dietary {
    Halal,
    Vegan,
    Vegetarian,
    Kosher,
}

impl Dietary {
    pub const ALL: [Dietary; 4] = [
        Dietary::Halal,
        Dietary::Vegan,
        Dietary::Vegetarian,
        Dietary::Kosher,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dietary::Halal => "halal",
            Dietary::Vegan => "vegan",
            Dietary::Vegetarian => "vegetarian",
            Dietary::Kosher => "kosher",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dietary::Halal => "Halal",
            Dietary::Vegan => "Vegan",
            Dietary::Vegetarian => "Vegetarian",
            Dietary::Kosher => "Kosher",
        }
    }
}

impl std::fmt::Display for Dietary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dietary {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "halal" => Ok(Dietary::Halal),
            "vegan" => Ok(Dietary::Vegan),
            "vegetarian" | "veggie" => Ok(Dietary::Vegetarian),
            "kosher" => Ok(Dietary::Kosher),
            _ => Err(unknown_value(
                "dietary restriction",
                s,
                &Dietary::ALL.map(|d| d.as_str()),
            )),
        }
    }
}

/// Amenities listed on the detail page. Display only, never filtered on.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Amenity {
    AcceptsReservations,
    OffersDelivery,
    Accessible,
    Terrace,
    Casual,
    FullBar,
    HappyHour,
    Television,
    Wifi,
    DriveIn,
    IdealForDinner,
}

impl Amenity {
    pub const ALL: [Amenity; 11] = [
        Amenity::AcceptsReservations,
        Amenity::OffersDelivery,
        Amenity::Accessible,
        Amenity::Terrace,
        Amenity::Casual,
        Amenity::FullBar,
        Amenity::HappyHour,
        Amenity::Television,
        Amenity::Wifi,
        Amenity::DriveIn,
        Amenity::IdealForDinner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Amenity::AcceptsReservations => "acceptsReservations",
            Amenity::OffersDelivery => "offersDelivery",
            Amenity::Accessible => "accessible",
            Amenity::Terrace => "terrace",
            Amenity::Casual => "casual",
            Amenity::FullBar => "fullBar",
            Amenity::HappyHour => "happyHour",
            Amenity::Television => "television",
            Amenity::Wifi => "wifi",
            Amenity::DriveIn => "driveIn",
            Amenity::IdealForDinner => "idealForDinner",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Amenity::AcceptsReservations => "Accepts reservations",
            Amenity::OffersDelivery => "Offers delivery",
            Amenity::Accessible => "Accessible to people with reduced mobility",
            Amenity::Terrace => "Terrace",
            Amenity::Casual => "Casual",
            Amenity::FullBar => "Full bar",
            Amenity::HappyHour => "Happy hour specials",
            Amenity::Television => "Television",
            Amenity::Wifi => "Wi-Fi",
            Amenity::DriveIn => "Drive-in",
            Amenity::IdealForDinner => "Great for dinner",
        }
    }
}

impl std::fmt::Display for Amenity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Distance selector. Accepted by the criteria but not evaluated.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DistanceBucket {
    AsTheCrowFlies,
    ByCar,
    ByBike,
    OnFoot,
    #[serde(rename = "within500m")]
    Within500m,
}

impl DistanceBucket {
    pub const ALL: [DistanceBucket; 5] = [
        DistanceBucket::AsTheCrowFlies,
        DistanceBucket::ByCar,
        DistanceBucket::ByBike,
        DistanceBucket::OnFoot,
        DistanceBucket::Within500m,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceBucket::AsTheCrowFlies => "asTheCrowFlies",
            DistanceBucket::ByCar => "byCar",
            DistanceBucket::ByBike => "byBike",
            DistanceBucket::OnFoot => "onFoot",
            DistanceBucket::Within500m => "within500m",
        }
    }
}

impl std::fmt::Display for DistanceBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DistanceBucket {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asthecrowflies" | "crow" => Ok(DistanceBucket::AsTheCrowFlies),
            "bycar" | "car" => Ok(DistanceBucket::ByCar),
            "bybike" | "bike" => Ok(DistanceBucket::ByBike),
            "onfoot" | "foot" | "walk" => Ok(DistanceBucket::OnFoot),
            "within500m" | "500m" => Ok(DistanceBucket::Within500m),
            _ => Err(unknown_value(
                "distance",
                s,
                &DistanceBucket::ALL.map(|d| d.as_str()),
            )),
        }
    }
}
