//! The catalog query engine: filter, then stable sort.

use crate::catalog::{Catalog, Product};
use crate::search::{FilterCriteria, PriceRange, SortKey};
use tracing::debug;

/// Query the catalog: filter by the criteria, then apply a stable sort.
///
/// Pure and deterministic for identical inputs. Returns borrowed views into
/// the catalog in result order — never copies that could diverge from the
/// source records. An empty catalog or a criteria matching nothing yields an
/// empty vec, not an error.
pub fn query_products<'a>(
    catalog: &'a Catalog,
    criteria: &FilterCriteria,
    sort: SortKey,
) -> Vec<&'a Product> {
    let range = criteria.price_range.normalized();
    let needle = criteria.search_term.to_lowercase();

    let mut results: Vec<&Product> = catalog
        .iter()
        .filter(|product| matches(product, criteria, &needle, &range))
        .collect();

    sort_products(&mut results, sort);

    debug!(
        total = catalog.len(),
        matched = results.len(),
        sort = sort.as_str(),
        "catalog query"
    );

    results
}

/// The filter predicate: a product is included iff every clause holds.
fn matches(
    product: &Product,
    criteria: &FilterCriteria,
    needle: &str,
    range: &PriceRange,
) -> bool {
    // Search: case-insensitive substring over name and brand.
    if !needle.is_empty()
        && !product.name.to_lowercase().contains(needle)
        && !product.brand.to_lowercase().contains(needle)
    {
        return false;
    }

    // Brand: membership of the lower-cased brand.
    if !criteria.brands.is_empty() && !criteria.brands.contains(&product.brand.to_lowercase()) {
        return false;
    }

    // Sizes: any-of, at least one selected size must be carried.
    if !criteria.sizes.is_empty() && !product.sizes.iter().any(|s| criteria.sizes.contains(s)) {
        return false;
    }

    // Category: exact membership.
    if !criteria.categories.is_empty() && !criteria.categories.contains(&product.category) {
        return false;
    }

    range.contains(product.price)
}

/// Stable sort: ties keep their relative (catalog) order.
fn sort_products(products: &mut [&Product], sort: SortKey) {
    match sort {
        SortKey::PriceLow => products.sort_by_key(|p| p.price),
        SortKey::PriceHigh => products.sort_by_key(|p| std::cmp::Reverse(p.price)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Popular => products.sort_by_key(|p| std::cmp::Reverse(p.reviews)),
        // Stable partition: new arrivals first. The data model carries no
        // created-date, so there is nothing finer to sort by.
        SortKey::Newest => products.sort_by_key(|p| !p.is_new),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::money::Money;

    /// The five-product catalog from the storefront's reference example:
    /// ids 1-5, prices 110/85/100/140/75, brands Nike/Nike/Adidas/New Balance/Nike.
    fn reference_catalog() -> Catalog {
        Catalog::from_products(vec![
            Product::new("1", "Air Force 1 Low", "Nike", Money::from_dollars(110.0))
                .with_sizes(&["8", "9", "10"]),
            Product::new("2", "Air Max LTD 3", "Nike", Money::from_dollars(85.0))
                .with_sizes(&["9", "10"]),
            Product::new("3", "Samba OG", "Adidas", Money::from_dollars(100.0))
                .with_sizes(&["8", "9"]),
            Product::new("4", "2002R", "New Balance", Money::from_dollars(140.0))
                .with_sizes(&["7", "8"]),
            Product::new("5", "Air Max Portal", "Nike", Money::from_dollars(75.0))
                .with_sizes(&["10", "11"]),
        ])
        .unwrap()
    }

    fn ids(results: &[&Product]) -> Vec<String> {
        results.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_unrestricted_query_is_identity_under_newest() {
        let catalog = reference_catalog();
        let results = query_products(&catalog, &FilterCriteria::new(), SortKey::Newest);
        // Nothing is flagged new, so catalog order survives.
        assert_eq!(ids(&results), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_brand_and_price_reference_example() {
        let catalog = reference_catalog();
        let criteria = FilterCriteria::new()
            .with_brand("nike")
            .with_price_range(PriceRange::new(Money::ZERO, Money::from_dollars(100.0)));

        let results = query_products(&catalog, &criteria, SortKey::Newest);
        // Nike at $85 and $75; catalog order preserved under the default sort.
        assert_eq!(ids(&results), vec!["2", "5"]);
    }

    #[test]
    fn test_result_is_subset_of_catalog() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::new().with_search("air");
        let results = query_products(&catalog, &criteria, SortKey::Popular);

        assert!(results.len() <= catalog.len());
        for product in &results {
            assert!(catalog.get(&product.id).is_some());
        }
    }

    #[test]
    fn test_search_matches_name_and_brand_case_insensitively() {
        let catalog = reference_catalog();

        let by_name = query_products(
            &catalog,
            &FilterCriteria::new().with_search("SAMBA"),
            SortKey::Newest,
        );
        assert_eq!(ids(&by_name), vec!["3"]);

        let by_brand = query_products(
            &catalog,
            &FilterCriteria::new().with_search("new balance"),
            SortKey::Newest,
        );
        assert_eq!(ids(&by_brand), vec!["4"]);
    }

    #[test]
    fn test_search_no_match_yields_empty() {
        let catalog = reference_catalog();
        let results = query_products(
            &catalog,
            &FilterCriteria::new().with_search("crocs"),
            SortKey::Newest,
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_size_any_of_semantics() {
        let catalog = Catalog::from_products(vec![Product::new(
            "1",
            "Test",
            "Nike",
            Money::from_dollars(100.0),
        )
        .with_sizes(&["9", "10"])])
        .unwrap();

        // {10, 11} intersects {9, 10} -> included.
        let overlapping = FilterCriteria::new().with_size("10").with_size("11");
        assert_eq!(query_products(&catalog, &overlapping, SortKey::Newest).len(), 1);

        // {7, 8} is disjoint from {9, 10} -> excluded.
        let disjoint = FilterCriteria::new().with_size("7").with_size("8");
        assert!(query_products(&catalog, &disjoint, SortKey::Newest).is_empty());
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let catalog = reference_catalog();
        // Product 3 sits exactly at both bounds.
        let at_min = FilterCriteria::new()
            .with_price_range(PriceRange::new(Money::from_dollars(100.0), Money::from_dollars(200.0)));
        assert!(ids(&query_products(&catalog, &at_min, SortKey::Newest)).contains(&"3".to_string()));

        let at_max = FilterCriteria::new()
            .with_price_range(PriceRange::new(Money::ZERO, Money::from_dollars(100.0)));
        assert!(ids(&query_products(&catalog, &at_max, SortKey::Newest)).contains(&"3".to_string()));
    }

    #[test]
    fn test_swapped_price_range_does_not_crash() {
        let catalog = reference_catalog();
        let criteria = FilterCriteria::new()
            .with_price_range(PriceRange::new(Money::from_dollars(100.0), Money::ZERO));
        let results = query_products(&catalog, &criteria, SortKey::Newest);
        // Same as [0, 100] after normalization.
        assert_eq!(ids(&results), vec!["2", "3", "5"]);
    }

    #[test]
    fn test_sort_price_low_and_high() {
        let catalog = reference_catalog();
        let low = query_products(&catalog, &FilterCriteria::new(), SortKey::PriceLow);
        assert_eq!(ids(&low), vec!["5", "2", "3", "1", "4"]);

        let high = query_products(&catalog, &FilterCriteria::new(), SortKey::PriceHigh);
        assert_eq!(ids(&high), vec!["4", "1", "3", "2", "5"]);
    }

    #[test]
    fn test_sort_rating_and_popular() {
        let catalog = sample_catalog();

        let by_rating = query_products(&catalog, &FilterCriteria::new(), SortKey::Rating);
        for pair in by_rating.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }

        let by_reviews = query_products(&catalog, &FilterCriteria::new(), SortKey::Popular);
        for pair in by_reviews.windows(2) {
            assert!(pair[0].reviews >= pair[1].reviews);
        }
    }

    #[test]
    fn test_newest_is_stable_partition() {
        let catalog = sample_catalog();
        let results = query_products(&catalog, &FilterCriteria::new(), SortKey::Newest);
        // New arrivals (3, 4, 8) first in catalog order, then the rest in
        // catalog order.
        assert_eq!(ids(&results), vec!["3", "4", "8", "1", "2", "5", "6", "7"]);
    }

    #[test]
    fn test_stable_sort_idempotence() {
        let catalog = sample_catalog();
        let first = query_products(&catalog, &FilterCriteria::new(), SortKey::PriceLow);
        let first_ids = ids(&first);

        // Re-sorting the already-sorted list must not reorder ties.
        let resorted = Catalog::from_products(first.into_iter().cloned().collect()).unwrap();
        let second = query_products(&resorted, &FilterCriteria::new(), SortKey::PriceLow);
        assert_eq!(ids(&second), first_ids);
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let catalog = Catalog::default();
        let results = query_products(&catalog, &FilterCriteria::new(), SortKey::Rating);
        assert!(results.is_empty());
    }

    #[test]
    fn test_category_filter() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::new().with_category("running");
        let results = query_products(&catalog, &criteria, SortKey::Newest);
        assert_eq!(ids(&results), vec!["2", "5"]);
    }
}
