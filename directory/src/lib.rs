pub mod catalog;
pub mod criteria;
pub mod enums;
pub mod errors;
pub mod evaluator;
pub mod locale;
pub mod restaurant;
pub mod reviews;

pub use catalog::{Catalog, DataFormat};
pub use criteria::{FilterCriteria, ALL_LOCATIONS};
pub use enums::{Amenity, Dietary, DistanceBucket, Feature, PriceTier, SortKey, Suggested};
pub use errors::DirectoryError;
pub use evaluator::evaluate;
pub use locale::{results_heading, translate, Locale, TextKey};
pub use restaurant::{
    default_opening_hours, AmenityFlags, DietaryFlags, FeatureFlags, OpeningHours, Restaurant,
    SuggestedFlags,
};
pub use reviews::{filter_reviews, rating_breakdown, Review, ReviewQuery, ReviewSort};
