//! Catalog ordering pipeline
//!
//! Produces the restaurant list the catalog displays from the fetched records
//! and the current filter descriptor. Pure: the same inputs always give the
//! same output, with no hidden state.
//!
//! Steps, in order:
//! 1. search: case-insensitive substring of name OR location, query taken as
//!    typed (whitespace included); only an empty query matches everything
//! 2. category: exact `category_id` equality unless the "all" sentinel is set
//! 3. price: known average prices outside a restricted range are dropped
//! 4. stable sort by key, natural order under `Descending`
//! 5. truncate to `limit` unless `show_all`

use super::Restaurant;
use crate::state::{FilterState, SortDirection, SortKey};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// One page of the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'a> {
    pub restaurants: Vec<&'a Restaurant>,
    /// Matches before pagination
    pub total_matches: usize,
    /// More matches exist beyond this page
    pub has_more: bool,
}

fn matches_search(restaurant: &Restaurant, needle: &str) -> bool {
    needle.is_empty()
        || restaurant.name.to_lowercase().contains(needle)
        || restaurant.location.to_lowercase().contains(needle)
}

fn matches_category(restaurant: &Restaurant, filter: &FilterState) -> bool {
    filter.is_all_categories() || restaurant.category_id.as_deref() == Some(filter.category.as_str())
}

fn matches_price(restaurant: &Restaurant, filter: &FilterState) -> bool {
    if filter.price_range.is_full() {
        return true;
    }
    restaurant
        .average_price
        .map_or(true, |price| filter.price_range.contains(price))
}

/// Primary collation key: decomposed, accents dropped, lowercased
fn name_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Alphabetical order that ignores case and accents first ("Éclair" sorts
/// with "eclair", not after "z"), then breaks ties by lowercase text and
/// finally by bytes, so names differing only in case or accent never
/// depend on input order.
///
/// Not a full locale tailoring: every language shares the root order.
fn compare_names(a: &str, b: &str) -> Ordering {
    name_key(a)
        .cmp(&name_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Natural order per key: rating high→low, name A→Z, distance near→far,
/// price cheap→expensive.
fn natural_order(a: &Restaurant, b: &Restaurant, key: SortKey) -> Ordering {
    match key {
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::Distance => a.distance_km.total_cmp(&b.distance_km),
        SortKey::Price => a
            .average_price
            .unwrap_or(0)
            .cmp(&b.average_price.unwrap_or(0)),
    }
}

/// Build the displayed catalog page
pub fn display_list<'a>(
    records: &'a [Restaurant],
    filter: &FilterState,
    limit: usize,
    show_all: bool,
) -> CatalogPage<'a> {
    let needle = filter.search_query.to_lowercase();

    let mut matches: Vec<&Restaurant> = records
        .iter()
        .filter(|r| matches_search(r, &needle))
        .filter(|r| matches_category(r, filter))
        .filter(|r| matches_price(r, filter))
        .collect();

    // Vec::sort_by is stable; reversing the comparator keeps ties in input order.
    matches.sort_by(|a, b| {
        let ordering = natural_order(a, b, filter.sort_key);
        match filter.sort_direction {
            SortDirection::Descending => ordering,
            SortDirection::Ascending => ordering.reverse(),
        }
    });

    let total_matches = matches.len();
    if !show_all {
        matches.truncate(limit);
    }
    CatalogPage {
        has_more: matches.len() < total_matches,
        restaurants: matches,
        total_matches,
    }
}
