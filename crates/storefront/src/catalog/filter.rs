//! Filtering and sorting of a fetched product list.
//!
//! Pure functions over a `&[Product]` slice; the catalog client already
//! fetched everything, so there is no pagination and no backend round-trip
//! here.

use rust_decimal::Decimal;

use golden_fig_core::Product;

/// Criteria a product must satisfy to stay in a listing.
///
/// Empty criteria match everything; all set criteria must hold at once.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Exact category name (case-insensitive).
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
    /// Substring of the display name (case-insensitive).
    pub query: Option<String>,
}

impl ProductFilter {
    /// Whether a product satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            let found = product
                .categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(category));
            if !found {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }

        if let Some(query) = &self.query {
            let name = product.name.to_lowercase();
            if !name.contains(&query.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

/// Listing sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PriceAscending,
    PriceDescending,
    NameAscending,
    NameDescending,
}

/// Filter a product list, then sort it.
///
/// `None` keeps the input order of the surviving products (the backend's
/// default ordering). Sorts are stable, so equal keys also keep input order.
#[must_use]
pub fn filter_and_sort(
    products: &[Product],
    filter: &ProductFilter,
    sort: Option<SortOrder>,
) -> Vec<Product> {
    let mut results: Vec<Product> = products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect();

    match sort {
        Some(SortOrder::PriceAscending) => results.sort_by_key(|p| p.price),
        Some(SortOrder::PriceDescending) => results.sort_by(|a, b| b.price.cmp(&a.price)),
        Some(SortOrder::NameAscending) => {
            results.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        Some(SortOrder::NameDescending) => {
            results.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
        }
        None => {}
    }

    results
}
