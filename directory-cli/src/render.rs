use restaurant_directory::{
    rating_breakdown, results_heading, translate, Catalog, FilterCriteria, Locale, Restaurant,
    Review, TextKey,
};
use std::fmt::Write;
use tabular::{Row, Table};

pub fn render_list(
    results: &[&Restaurant],
    criteria: &FilterCriteria,
    locale: Locale,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", results_heading(locale, results.len()))?;
    if criteria.is_narrowed() {
        writeln!(out, "{}", translate(locale, TextKey::FiltersApplied))?;
    }

    if results.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", translate(locale, TextKey::NoResultsTitle))?;
        writeln!(out, "{}", translate(locale, TextKey::NoResultsHint))?;
        return Ok(out);
    }

    let mut table = Table::new("{:<}  {:<}  {:<}  {:>}  {:>}  {:<}  {:>}").with_row(
        Row::from_cells(
            ["Id", "Name", "Location", "Rating", "Reviews", "Price", "Delivery"]
                .iter()
                .cloned(),
        ),
    );
    for restaurant in results {
        table.add_row(
            Row::new()
                .with_cell(&restaurant.id)
                .with_cell(restaurant.display_name(locale))
                .with_cell(restaurant.display_location(locale))
                .with_cell(format!("{:.1}", restaurant.rating))
                .with_cell(restaurant.review_count)
                .with_cell(restaurant.price_range)
                .with_cell(format!("{} min", restaurant.delivery_time)),
        );
    }
    writeln!(out)?;
    write!(out, "{}", table)?;
    Ok(out)
}

pub fn render_details(
    restaurant: &Restaurant,
    reviews: &[&Review],
    locale: Locale,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", restaurant.display_name(locale))?;
    writeln!(
        out,
        "{:.1} ({} reviews) · {} · {}",
        restaurant.rating,
        restaurant.review_count,
        restaurant.price_range,
        restaurant.categories.join(", ")
    )?;
    writeln!(out, "{}", restaurant.display_location(locale))?;
    writeln!(out)?;
    writeln!(out, "{}", restaurant.description)?;

    writeln!(out)?;
    writeln!(out, "{}:", translate(locale, TextKey::Address))?;
    writeln!(out, "  {}", restaurant.address_line1_or_location())?;
    if let Some(line2) = &restaurant.address_line2 {
        writeln!(out, "  {}", line2)?;
    }

    writeln!(out)?;
    if restaurant.closed_now {
        writeln!(
            out,
            "{}: {}",
            translate(locale, TextKey::OpeningHours),
            translate(locale, TextKey::ClosedNow)
        )?;
    } else {
        writeln!(out, "{}:", translate(locale, TextKey::OpeningHours))?;
    }
    for hours in restaurant.opening_hours_or_default() {
        let shown = if hours.is_closed {
            translate(locale, TextKey::Closed)
        } else {
            hours.hours.as_str()
        };
        match &hours.note {
            Some(note) => writeln!(out, "  {:<4} {} ({})", hours.day, shown, note)?,
            None => writeln!(out, "  {:<4} {}", hours.day, shown)?,
        }
    }

    let badges: Vec<&str> = restaurant
        .feature_badges()
        .iter()
        .map(|f| f.label())
        .chain(restaurant.suggested_badges().iter().map(|s| s.label()))
        .chain(restaurant.dietary_badges().iter().map(|d| d.label()))
        .collect();
    if !badges.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", badges.join(" | "))?;
    }

    let amenities: Vec<&str> = restaurant.amenities().iter().map(|a| a.label()).collect();
    if !amenities.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}:", translate(locale, TextKey::Amenities))?;
        for label in amenities {
            writeln!(out, "  {}", label)?;
        }
    }

    let gallery: Vec<&str> = restaurant
        .gallery()
        .into_iter()
        .filter(|image| !image.is_empty())
        .collect();
    if !gallery.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}: {}", translate(locale, TextKey::Photos), gallery.join(", "))?;
    }

    if !restaurant.reviews.is_empty() {
        writeln!(out)?;
        let breakdown = rating_breakdown(&restaurant.reviews);
        for (idx, count) in breakdown.iter().enumerate() {
            writeln!(out, "  {} stars: {}", 5 - idx, count)?;
        }
        for review in reviews {
            writeln!(out)?;
            writeln!(
                out,
                "{} ({}) · {}/5 · {}",
                review.user_name, review.user_location, review.rating, review.date
            )?;
            writeln!(out, "{}", review.text)?;
        }
    }
    Ok(out)
}

pub fn render_facets(catalog: &Catalog) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Locations:  {}", catalog.locations().join(", "))?;
    writeln!(out, "Categories: {}", catalog.categories().join(", "))?;
    writeln!(out, "Cuisines:   {}", catalog.cuisines().join(", "))?;
    Ok(out)
}
