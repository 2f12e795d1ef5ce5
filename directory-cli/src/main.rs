use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use directory_cli::{
    args::ListArgs,
    config::Config,
    render::{render_details, render_facets, render_list},
};
use restaurant_directory::{filter_reviews, Catalog, Locale, ReviewQuery, ReviewSort};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "restaurants", version)]
#[command(about = "Browse, filter and sort a restaurant directory", long_about = None)]
struct Cli {
    /// Path to configuration file (default: restaurants.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Restaurant dataset (.json or .yaml), overrides the config file
    #[arg(long)]
    data: Option<PathBuf>,

    /// Display language: en or ar
    #[arg(long)]
    locale: Option<Locale>,

    /// Enable debug logging
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List restaurants matching the given filters
    List(ListArgs),
    /// Show one restaurant with its opening hours and reviews
    Show {
        /// Restaurant id
        id: String,

        /// Only show reviews with exactly this many stars
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        review_rating: Option<u8>,

        /// Search within review author names and texts
        #[arg(long, default_value = "")]
        review_search: String,

        /// Review order: recent, rating_desc, rating_asc
        #[arg(long, default_value = "recent")]
        review_sort: ReviewSort,
    },
    /// Print the available locations, categories and cuisines
    Facets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load_or_default(cli.config.as_deref())?;
    let data_path = cli.data.unwrap_or(config.data.path);
    let locale = cli.locale.unwrap_or(config.display.locale);

    let catalog = Catalog::new_from_file(&data_path)
        .with_context(|| format!("Failed to load restaurants from {}", data_path.display()))?;

    match cli.command {
        Commands::List(args) => {
            let criteria = args.into_criteria(config.display.sort);
            let results = catalog.search(&criteria);
            info!("{} of {} restaurants match", results.len(), catalog.len());
            print!("{}", render_list(&results, &criteria, locale)?);
        }
        Commands::Show {
            id,
            review_rating,
            review_search,
            review_sort,
        } => {
            let restaurant = catalog.get_or_err(&id)?;
            let query = ReviewQuery::new()
                .with_rating(review_rating)
                .with_search(&review_search)
                .with_sort(review_sort);
            let reviews = filter_reviews(&restaurant.reviews, &query);
            print!("{}", render_details(restaurant, &reviews, locale)?);
        }
        Commands::Facets => {
            print!("{}", render_facets(&catalog)?);
        }
    }

    Ok(())
}
