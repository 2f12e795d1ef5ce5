use crate::criteria::FilterCriteria;
use crate::errors::DirectoryError;
use crate::evaluator::evaluate;
use crate::restaurant::Restaurant;
use indexmap::IndexSet;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, DirectoryError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(DataFormat::Json),
            "yaml" | "yml" => Ok(DataFormat::Yaml),
            _ => Err(DirectoryError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Immutable restaurant dataset for one session, indexed by id
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and ratings outside 0.0-5.0
    pub fn new(restaurants: Vec<Restaurant>) -> Result<Self, DirectoryError> {
        let mut by_id = HashMap::with_capacity(restaurants.len());

        for (idx, restaurant) in restaurants.iter().enumerate() {
            if !(0.0..=5.0).contains(&restaurant.rating) {
                return Err(DirectoryError::InvalidRating(
                    restaurant.id.clone(),
                    restaurant.rating,
                ));
            }
            if by_id.insert(restaurant.id.clone(), idx).is_some() {
                return Err(DirectoryError::DuplicateId(restaurant.id.clone()));
            }
        }

        Ok(Self { restaurants, by_id })
    }

    pub fn new_from_file(path: &Path) -> Result<Self, DirectoryError> {
        let format = DataFormat::from_path(path)?;
        let input = fs_err::read_to_string(path)?;
        let catalog = Self::new_from_str(&input, format)?;
        tracing::info!(
            "Loaded {} restaurants from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn new_from_str(input: &str, format: DataFormat) -> Result<Self, DirectoryError> {
        let restaurants: Vec<Restaurant> = match format {
            DataFormat::Json => serde_json::from_str(input)?,
            DataFormat::Yaml => serde_yaml_ng::from_str(input)?,
        };
        Self::new(restaurants)
    }

    pub fn get(&self, id: &str) -> Option<&Restaurant> {
        self.by_id.get(id).map(|idx| &self.restaurants[*idx])
    }

    pub fn get_or_err(&self, id: &str) -> Result<&Restaurant, DirectoryError> {
        self.get(id)
            .ok_or_else(|| DirectoryError::RestaurantNotFound(id.to_string()))
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    pub fn search(&self, criteria: &FilterCriteria) -> Vec<&Restaurant> {
        evaluate(&self.restaurants, criteria)
    }

    /// Distinct locations in dataset order
    pub fn locations(&self) -> Vec<&str> {
        let set: IndexSet<&str> = self.restaurants.iter().map(|r| r.location.as_str()).collect();
        set.into_iter().collect()
    }

    /// Distinct category labels in dataset order
    pub fn categories(&self) -> Vec<&str> {
        let set: IndexSet<&str> = self
            .restaurants
            .iter()
            .flat_map(|r| r.categories.iter().map(String::as_str))
            .collect();
        set.into_iter().collect()
    }

    /// Distinct cuisines in dataset order
    pub fn cuisines(&self) -> Vec<&str> {
        let set: IndexSet<&str> = self.restaurants.iter().map(|r| r.cuisine.as_str()).collect();
        set.into_iter().collect()
    }
}
