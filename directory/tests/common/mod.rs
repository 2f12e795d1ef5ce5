//! Common test utilities and shared test data for the restaurant-directory crate

#![allow(dead_code)]

use restaurant_directory::{
    AmenityFlags, Catalog, DataFormat, DietaryFlags, FeatureFlags, PriceTier, Restaurant,
    SuggestedFlags,
};

/// Sample dataset with a mix of flags, ratings and delivery windows
pub const SAMPLE_JSON: &str = r#"[
  {
    "id": "1",
    "name": "Sushi Go",
    "nameAr": "سوشي جو",
    "location": "Dubai Marina, Dubai",
    "rating": 4.5,
    "reviewCount": 320,
    "description": "Fresh nigiri and maki rolls",
    "image": "sushi.jpg",
    "images": ["sushi.jpg", "sushi-2.jpg"],
    "categories": ["Japanese", "Seafood"],
    "priceRange": "$$",
    "cuisine": "Japanese",
    "deliveryTime": "30-45",
    "deliveryFee": 5.0,
    "suitableForLunch": true,
    "suitableForGroups": true,
    "offersDelivery": true,
    "halal": true
  },
  {
    "id": "2",
    "name": "Burger Bar",
    "location": "Downtown, Dubai",
    "rating": 3.0,
    "reviewCount": 85,
    "description": "Smash burgers and shakes",
    "categories": ["American", "Fast Food"],
    "priceRange": "$",
    "cuisine": "American",
    "deliveryTime": "15-25",
    "deliveryFee": 0,
    "suitableForLunch": true,
    "dogsAllowed": true,
    "offersDelivery": true,
    "takeawayAvailable": true,
    "vegan": true
  },
  {
    "id": "3",
    "name": "Green Leaf",
    "location": "Olaya, Riyadh",
    "rating": 4.5,
    "reviewCount": 140,
    "description": "Plant-based bowls",
    "categories": ["Healthy", "Vegan"],
    "priceRange": "$$",
    "cuisine": "Vegan",
    "deliveryTime": "20",
    "deliveryFee": 3.5,
    "suitableForBrunch": true,
    "terrace": true,
    "vegan": true,
    "vegetarian": true
  },
  {
    "id": "4",
    "name": "Le Comptoir",
    "location": "Jumeirah, Dubai",
    "rating": 4.8,
    "reviewCount": 540,
    "description": "French bistro with a full bar",
    "categories": ["French", "Fine Dining"],
    "priceRange": "$$$$",
    "cuisine": "French",
    "deliveryTime": "call ahead",
    "deliveryFee": 12.0,
    "fullBar": true,
    "suitableForGroups": true,
    "suitableForDinner": true,
    "openNow": true
  },
  {
    "id": "5",
    "name": "al Bait",
    "location": "Al Malaz, Riyadh",
    "rating": 3.9,
    "reviewCount": 60,
    "description": "Home-style kabsa",
    "categories": ["Saudi"],
    "priceRange": "$$",
    "cuisine": "Middle Eastern",
    "deliveryTime": "25-40",
    "deliveryFee": 2.0,
    "suitableForChildren": true,
    "suitableForGroups": true,
    "halal": true,
    "reviews": [
      {"id": "1", "userName": "Gregg Y.", "rating": 5, "date": "Dec 1, 2025", "text": "Best kabsa in town"},
      {"id": "2", "userName": "Lina K.", "rating": 3, "date": "Dec 3, 2025", "text": "Rice was cold"}
    ]
  }
]"#;

pub fn sample_catalog() -> Catalog {
    Catalog::new_from_str(SAMPLE_JSON, DataFormat::Json).expect("Failed to parse sample dataset")
}

/// Minimal record with all flags off
pub fn restaurant(id: &str, name: &str, rating: f64, price: PriceTier) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        name_ar: None,
        location: "Downtown".to_string(),
        location_ar: None,
        address_line1: None,
        address_line2: None,
        rating,
        review_count: 0,
        description: String::new(),
        image: String::new(),
        images: Vec::new(),
        categories: Vec::new(),
        price_range: price,
        cuisine: "Other".to_string(),
        delivery_time: "30-45".to_string(),
        delivery_fee: 0.0,
        opening_hours: None,
        closed_now: false,
        features: FeatureFlags::default(),
        suggested: SuggestedFlags::default(),
        dietary: DietaryFlags::default(),
        amenities: AmenityFlags::default(),
        reviews: Vec::new(),
    }
}

pub fn ids<'a>(restaurants: &[&'a Restaurant]) -> Vec<&'a str> {
    restaurants.iter().map(|r| r.id.as_str()).collect()
}

/// Test case insensitive parsing for enums
pub fn test_enum_case_insensitive<T, E, P>(test_cases: Vec<(&str, T)>, parse_func: P)
where
    T: std::fmt::Debug + PartialEq,
    P: Fn(&str) -> Result<T, E>,
{
    for (input, expected) in test_cases {
        let parsed = parse_func(input).unwrap_or_else(|_| {
            panic!("Failed to parse enum value: {}", input);
        });
        assert_eq!(parsed, expected);
    }
}

/// Test invalid enum parsing
pub fn test_enum_invalid_parsing<T, E, P>(invalid_inputs: Vec<&str>, parse_func: P)
where
    P: Fn(&str) -> Result<T, E>,
{
    for input in invalid_inputs {
        assert!(
            parse_func(input).is_err(),
            "Expected error for input: {}",
            input
        );
    }
}
