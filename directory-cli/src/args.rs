use clap::Args;
use restaurant_directory::{
    Dietary, DistanceBucket, Feature, FilterCriteria, PriceTier, SortKey, Suggested,
};

/// Filter flags of the `list` command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Free-text search over name, description, location and categories
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only restaurants whose location contains this value
    #[arg(long)]
    pub location: Option<String>,

    /// Minimum rating (0 disables the filter)
    #[arg(long, default_value = "0")]
    pub min_rating: f64,

    /// Accepted price tiers ($ to $$$$), repeatable
    #[arg(long = "price")]
    pub prices: Vec<PriceTier>,

    /// Accepted categories, repeatable
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Accepted cuisines, repeatable
    #[arg(long = "cuisine")]
    pub cuisines: Vec<String>,

    /// Required features, all must match
    #[arg(long = "feature")]
    pub features: Vec<Feature>,

    /// Required suggested flags, all must match
    #[arg(long = "suggested")]
    pub suggested: Vec<Suggested>,

    /// Dietary options, any may match
    #[arg(long = "dietary")]
    pub dietary: Vec<Dietary>,

    /// Distance bucket
    #[arg(long)]
    pub distance: Option<DistanceBucket>,

    /// Sort key: rating, reviews, name, deliveryTime, original
    #[arg(long)]
    pub sort: Option<SortKey>,
}

impl ListArgs {
    /// Build criteria from the flags. Repeating a value selects it once.
    pub fn into_criteria(self, default_sort: SortKey) -> FilterCriteria {
        let mut criteria = FilterCriteria::new()
            .with_search(&self.search)
            .with_min_rating(self.min_rating)
            .with_sort(self.sort.unwrap_or(default_sort))
            .with_distance(self.distance);
        if let Some(location) = &self.location {
            criteria = criteria.with_location(location);
        }
        criteria.price_tiers.extend(self.prices);
        criteria.categories.extend(self.categories);
        criteria.cuisines.extend(self.cuisines);
        criteria.features.extend(self.features);
        criteria.suggested.extend(self.suggested);
        criteria.dietary.extend(self.dietary);
        criteria
    }
}
