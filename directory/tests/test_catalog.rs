use restaurant_directory::{
    filter_reviews, Catalog, DataFormat, DirectoryError, PriceTier, ReviewQuery, ReviewSort,
};
use std::fs;
use std::path::Path;
use tempfile::Builder;
mod common;
use common::*;

const SAMPLE_YAML: &str = r#"
- id: "y1"
  name: Falafel House
  location: Deira, Dubai
  rating: 4.2
  reviewCount: 75
  description: Crispy falafel wraps
  categories: [Street Food, Vegetarian]
  priceRange: "$"
  cuisine: Lebanese
  deliveryTime: 10-20
  vegetarian: true
  openingHours:
    - day: Mon
      hours: 9:00 AM - 11:00 PM
    - day: Fri
      hours: ""
      isClosed: true
      note: Friday prayers
"#;

#[test]
fn test_catalog_basic_operations() {
    let catalog = sample_catalog();
    assert_eq!(catalog.len(), 5);
    assert!(!catalog.is_empty());

    let sushi = catalog.get("1").expect("restaurant 1 should exist");
    assert_eq!(sushi.name, "Sushi Go");
    assert_eq!(sushi.price_range, PriceTier::Moderate);
    assert_eq!(sushi.images.len(), 2);

    assert!(catalog.get("missing").is_none());
    assert!(matches!(
        catalog.get_or_err("missing"),
        Err(DirectoryError::RestaurantNotFound(_))
    ));
}

#[test]
fn test_catalog_from_yaml() {
    let catalog = Catalog::new_from_str(SAMPLE_YAML, DataFormat::Yaml).unwrap();
    assert_eq!(catalog.len(), 1);

    let falafel = catalog.get("y1").unwrap();
    assert_eq!(falafel.delivery_minutes(), Some(10));
    assert!(falafel.dietary.vegetarian);

    let hours = falafel.opening_hours_or_default();
    assert_eq!(hours.len(), 2);
    assert!(hours[1].is_closed);
    assert_eq!(hours[1].note.as_deref(), Some("Friday prayers"));
}

#[test]
fn test_catalog_from_file_picks_format_by_extension() {
    let json_file = Builder::new().suffix(".json").tempfile().unwrap();
    fs::write(json_file.path(), SAMPLE_JSON).unwrap();
    let catalog = Catalog::new_from_file(json_file.path()).unwrap();
    assert_eq!(catalog.len(), 5);

    let yaml_file = Builder::new().suffix(".yml").tempfile().unwrap();
    fs::write(yaml_file.path(), SAMPLE_YAML).unwrap();
    let catalog = Catalog::new_from_file(yaml_file.path()).unwrap();
    assert_eq!(catalog.len(), 1);

    let csv_file = Builder::new().suffix(".csv").tempfile().unwrap();
    assert!(matches!(
        Catalog::new_from_file(csv_file.path()),
        Err(DirectoryError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_catalog_missing_file() {
    let result = Catalog::new_from_file(Path::new("does-not-exist.json"));
    assert!(matches!(result, Err(DirectoryError::IoError(_))));
}

#[test]
fn test_catalog_rejects_malformed_input() {
    assert!(matches!(
        Catalog::new_from_str("not json", DataFormat::Json),
        Err(DirectoryError::SerdeJsonError(_))
    ));

    let bad_tier = SAMPLE_JSON.replace("\"$$$$\"", "\"$$$$$\"");
    assert!(Catalog::new_from_str(&bad_tier, DataFormat::Json).is_err());
}

#[test]
fn test_catalog_rejects_duplicate_ids() {
    let records = vec![
        restaurant("dup", "First", 4.0, PriceTier::Budget),
        restaurant("dup", "Second", 3.0, PriceTier::Budget),
    ];
    match Catalog::new(records) {
        Err(DirectoryError::DuplicateId(id)) => assert_eq!(id, "dup"),
        other => panic!("expected duplicate id error, got {:?}", other.map(|c| c.len())),
    }
}

#[test]
fn test_catalog_rejects_out_of_range_ratings() {
    for rating in [-0.1, 5.1, f64::NAN] {
        let records = vec![restaurant("r", "Odd", rating, PriceTier::Budget)];
        assert!(matches!(
            Catalog::new(records),
            Err(DirectoryError::InvalidRating(_, _))
        ));
    }
    let edges = vec![
        restaurant("lo", "Low", 0.0, PriceTier::Budget),
        restaurant("hi", "High", 5.0, PriceTier::Budget),
    ];
    assert_eq!(Catalog::new(edges).unwrap().len(), 2);
}

#[test]
fn test_catalog_facets_keep_first_seen_order() {
    let catalog = sample_catalog();
    assert_eq!(
        catalog.locations(),
        vec![
            "Dubai Marina, Dubai",
            "Downtown, Dubai",
            "Olaya, Riyadh",
            "Jumeirah, Dubai",
            "Al Malaz, Riyadh"
        ]
    );
    assert_eq!(
        catalog.cuisines(),
        vec!["Japanese", "American", "Vegan", "French", "Middle Eastern"]
    );
    let categories = catalog.categories();
    assert_eq!(categories.len(), 9);
    assert_eq!(&categories[..3], &["Japanese", "Seafood", "American"]);
}

#[test]
fn test_restaurant_reviews_listing() {
    let catalog = sample_catalog();
    let bait = catalog.get("5").unwrap();
    assert_eq!(bait.reviews.len(), 2);

    let query = ReviewQuery::new().with_sort(ReviewSort::RatingAsc);
    let listed = filter_reviews(&bait.reviews, &query);
    assert_eq!(listed[0].user_name, "Lina K.");

    let query = ReviewQuery::new().with_search("KABSA");
    assert_eq!(filter_reviews(&bait.reviews, &query).len(), 1);
}
