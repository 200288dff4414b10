//! Catalog query engine: search, filter and sort the product list for display.
//!
//! Pure and synchronous. Inputs are never mutated and every call recomputes from
//! scratch, so concurrent callers need no coordination.

use tracing::{debug, trace};

use crate::category::FlavorCategoryMap;
use crate::filter::FilterSelection;
use crate::product::Product;
use crate::sort::{NameCollator, SortKey};

/// Run the catalog pipeline with the built-in flavor categories.
///
/// Empty input, an empty search and an empty [`FilterSelection`] are all valid:
/// the result is then a sorted copy of `products`.
pub fn query(
    products: &[Product],
    search_query: &str,
    filters: &FilterSelection,
    sort_by: SortKey,
) -> Vec<Product> {
    CatalogQuery::new(search_query, filters, sort_by).run(products)
}

/// A configured catalog query.
#[derive(Debug, Clone, Copy)]
pub struct CatalogQuery<'a> {
    search_query: &'a str,
    filters: &'a FilterSelection,
    sort_by: SortKey,
    categories: &'a FlavorCategoryMap,
}

impl<'a> CatalogQuery<'a> {
    pub fn new(search_query: &'a str, filters: &'a FilterSelection, sort_by: SortKey) -> Self {
        Self {
            search_query,
            filters,
            sort_by,
            categories: FlavorCategoryMap::builtin(),
        }
    }

    /// Use another flavor grouping for the category filter.
    pub fn with_categories(mut self, categories: &'a FlavorCategoryMap) -> Self {
        self.categories = categories;
        self
    }

    /// Apply search, strength, flavor-category and featured filters in that
    /// order, then a stable sort on the active key.
    pub fn run(&self, products: &[Product]) -> Vec<Product> {
        let mut candidates: Vec<&Product> = products.iter().collect();

        // The search text is used as typed; surrounding whitespace is significant.
        if !self.search_query.is_empty() {
            let needle = self.search_query.to_lowercase();
            candidates.retain(|p| p.matches_search(&needle));
            trace!(stage = "search", remaining = candidates.len());
        }

        if self.filters.strength.is_some() {
            candidates.retain(|p| self.filters.matches_strength(p));
            trace!(stage = "strength", remaining = candidates.len());
        }

        if self.filters.flavor_category.is_some() {
            candidates.retain(|p| self.filters.matches_flavor_category(p, self.categories));
            trace!(stage = "flavor_category", remaining = candidates.len());
        }

        if self.filters.featured {
            candidates.retain(|p| self.filters.matches_featured(p));
            trace!(stage = "featured", remaining = candidates.len());
        }

        // `sort_by` is stable: equal products keep their input order.
        let mut collator = NameCollator::new();
        candidates.sort_by(|a, b| self.sort_by.compare_with(&mut collator, a, b));

        debug!(
            total = products.len(),
            matched = candidates.len(),
            sort_by = %self.sort_by,
            "catalog query"
        );

        candidates.into_iter().cloned().collect()
    }
}
