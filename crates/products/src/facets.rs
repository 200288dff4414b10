//! Filter options derived from the loaded catalog.

use std::collections::{BTreeSet, HashSet};

use tracing::warn;

use crate::category::{FlavorCategory, FlavorCategoryMap};
use crate::product::{Product, parse_strength_mg};

/// Distinct strength labels in the catalog, weakest first.
pub fn available_strengths(products: &[Product]) -> Vec<String> {
    let ordered: BTreeSet<(i64, &str)> = products
        .iter()
        .filter_map(|p| p.nicotine_strength.as_deref())
        .map(|label| (parse_strength_mg(label).unwrap_or(0), label))
        .collect();
    ordered.into_iter().map(|(_, label)| label.to_string()).collect()
}

/// Flavors no category lists, in first-seen order.
///
/// Products with these flavors disappear whenever a category filter is active.
pub fn uncategorized_flavors(products: &[Product], categories: &FlavorCategoryMap) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut missing: Vec<String> = Vec::new();
    for flavor in products.iter().filter_map(|p| p.flavor.as_deref()) {
        if seen.insert(flavor) && categories.category_of(flavor).is_none() {
            warn!(flavor = %flavor, "flavor is not assigned to any category");
            missing.push(flavor.to_string());
        }
    }
    missing
}

/// Number of products per category, in category order.
pub fn category_counts(
    products: &[Product],
    categories: &FlavorCategoryMap,
) -> Vec<(FlavorCategory, usize)> {
    FlavorCategory::ALL
        .into_iter()
        .map(|category| {
            let count = products
                .iter()
                .filter(|p| {
                    p.flavor
                        .as_deref()
                        .is_some_and(|f| categories.contains(category, f))
                })
                .count();
            (category, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("A", "1.00").with_strength("16mg").with_flavor("Cool Mint"),
            Product::new("B", "1.00").with_strength("6mg").with_flavor("Mango"),
            Product::new("C", "1.00").with_strength("16mg").with_flavor("Cherry"),
            Product::new("D", "1.00").with_flavor("Mango"),
            Product::new("E", "1.00").with_strength("22mg").with_flavor("Peppermint"),
        ]
    }

    #[test]
    fn strengths_are_distinct_and_numerically_ordered() {
        assert_eq!(available_strengths(&catalog()), ["6mg", "16mg", "22mg"]);
        assert!(available_strengths(&[]).is_empty());
    }

    #[test]
    fn strengths_with_equal_milligrams_stay_distinct() {
        let products = vec![
            Product::new("A", "1.00").with_strength("6mg"),
            Product::new("B", "1.00").with_strength("06mg"),
            Product::new("C", "1.00").with_strength("6mg"),
            Product::new("D", "1.00").with_strength("4mg"),
        ];
        assert_eq!(available_strengths(&products), ["4mg", "06mg", "6mg"]);
    }

    #[test]
    fn reports_each_uncategorized_flavor_once() {
        let missing = uncategorized_flavors(&catalog(), FlavorCategoryMap::builtin());
        assert_eq!(missing, ["Mango"]);
    }

    #[test]
    fn counts_products_per_category() {
        let counts = category_counts(&catalog(), FlavorCategoryMap::builtin());
        assert_eq!(
            counts,
            vec![
                (FlavorCategory::Mint, 2),
                (FlavorCategory::Fruit, 1),
                (FlavorCategory::Citrus, 0),
                (FlavorCategory::Unique, 0),
            ]
        );
    }
}
