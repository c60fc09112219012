use crate::listings::traits::ListingSource;
use crate::listings::types::{Criteria, FilterMode, SortOrder};
use crate::models::{Property, SearchFilters};
use anyhow::{Context, Result};
use std::collections::HashSet;
use tracing::{debug, info};

/// Listings shown on the results screen for the given filters
pub fn search(
    source: &dyn ListingSource,
    filters: &SearchFilters,
    sort: SortOrder,
    mode: FilterMode,
) -> Result<Vec<Property>> {
    let mut results: Vec<Property> = match mode {
        FilterMode::Strict => {
            let criteria = Criteria::from_filters(filters).context("Failed to parse search filters")?;
            source
                .listings()
                .iter()
                .filter(|p| criteria.matches(p))
                .cloned()
                .collect()
        }
        FilterMode::Cosmetic => {
            debug!("Cosmetic filtering, ignoring {:?}", filters);
            source.listings().to_vec()
        }
    };

    sort.sort(&mut results);

    info!(
        "🔎 {} of {} listings from {} match",
        results.len(),
        source.listings().len(),
        source.source_name()
    );

    Ok(results)
}

/// Saved listings, optionally narrowed by a title/location text query
pub fn saved_listings(
    source: &dyn ListingSource,
    saved_ids: &HashSet<String>,
    query: Option<&str>,
) -> Vec<Property> {
    let needle = query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    source
        .listings()
        .iter()
        .filter(|p| saved_ids.contains(&p.id))
        .filter(|p| match &needle {
            Some(needle) => {
                p.title.to_lowercase().contains(needle) || p.location.to_lowercase().contains(needle)
            }
            None => true,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::MockCatalog;

    fn ids(listings: &[Property]) -> Vec<&str> {
        listings.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn strict_search_narrows_and_sorts() {
        let catalog = MockCatalog::new();
        let filters = SearchFilters::of_type("apartment");

        let results = search(&catalog, &filters, SortOrder::PriceLow, FilterMode::Strict).unwrap();
        assert_eq!(ids(&results), vec!["6", "3", "1", "4"]);

        let results = search(&catalog, &filters, SortOrder::PriceHigh, FilterMode::Strict).unwrap();
        assert_eq!(ids(&results), vec!["4", "1", "3", "6"]);
    }

    #[test]
    fn newest_first_uses_listing_date() {
        let catalog = MockCatalog::new();
        let results =
            search(&catalog, &SearchFilters::any(), SortOrder::Newest, FilterMode::Strict).unwrap();
        assert_eq!(ids(&results), vec!["7", "3", "4", "1", "5", "2", "6"]);
    }

    #[test]
    fn verified_unfurnished_by_size() {
        let catalog = MockCatalog::new();
        let filters = SearchFilters {
            furnished: Some(false),
            verified_only: true,
            ..SearchFilters::any()
        };
        let results = search(&catalog, &filters, SortOrder::Size, FilterMode::Strict).unwrap();
        assert_eq!(ids(&results), vec!["2", "7", "4"]);

        let everything =
            search(&catalog, &SearchFilters::any(), SortOrder::Size, FilterMode::Strict).unwrap();
        assert_eq!(ids(&everything), vec!["2", "5", "7", "4", "3", "1", "6"]);
    }

    #[test]
    fn cosmetic_search_ignores_filters() {
        let catalog = MockCatalog::new();
        let filters = SearchFilters::of_type("house");

        let results = search(&catalog, &filters, SortOrder::PriceLow, FilterMode::Cosmetic).unwrap();
        assert_eq!(results.len(), catalog.listings().len());
    }

    #[test]
    fn strict_search_reports_bad_filters() {
        let catalog = MockCatalog::new();
        let filters = SearchFilters {
            bedrooms: "many".to_string(),
            ..SearchFilters::any()
        };
        assert!(search(&catalog, &filters, SortOrder::PriceLow, FilterMode::Strict).is_err());
    }

    #[test]
    fn saved_listings_follow_the_saved_set() {
        let catalog = MockCatalog::new();
        let saved: HashSet<String> = ["2", "4", "42"].iter().map(|s| s.to_string()).collect();

        assert_eq!(ids(&saved_listings(&catalog, &saved, None)), vec!["2", "4"]);
        assert_eq!(ids(&saved_listings(&catalog, &saved, Some("cmc"))), vec!["4"]);
        assert_eq!(ids(&saved_listings(&catalog, &saved, Some("  "))), vec!["2", "4"]);
        assert!(saved_listings(&catalog, &saved, Some("kirkos")).is_empty());
    }
}
