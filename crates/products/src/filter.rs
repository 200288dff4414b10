use serde::{Deserialize, Serialize};

use crate::category::{FlavorCategory, FlavorCategoryMap};
use crate::product::Product;

/// Filter state held by the browse page. All active filters are AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSelection {
    /// Exact strength label, including the `mg` suffix.
    pub strength: Option<String>,
    pub flavor_category: Option<FlavorCategory>,
    pub featured: bool,
}

impl FilterSelection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_strength(mut self, strength: impl Into<String>) -> Self {
        self.strength = Some(strength.into());
        self
    }

    pub fn with_flavor_category(mut self, category: FlavorCategory) -> Self {
        self.flavor_category = Some(category);
        self
    }

    pub fn featured_only(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.strength.is_none() && self.flavor_category.is_none() && !self.featured
    }

    pub fn matches_strength(&self, product: &Product) -> bool {
        match &self.strength {
            Some(strength) => product.nicotine_strength.as_deref() == Some(strength.as_str()),
            None => true,
        }
    }

    pub fn matches_flavor_category(&self, product: &Product, categories: &FlavorCategoryMap) -> bool {
        match self.flavor_category {
            Some(category) => product
                .flavor
                .as_deref()
                .is_some_and(|flavor| categories.contains(category, flavor)),
            None => true,
        }
    }

    pub fn matches_featured(&self, product: &Product) -> bool {
        !self.featured || product.is_featured
    }

    /// Whether `product` passes every active filter.
    pub fn matches(&self, product: &Product, categories: &FlavorCategoryMap) -> bool {
        self.matches_strength(product)
            && self.matches_flavor_category(product, categories)
            && self.matches_featured(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> &'static FlavorCategoryMap {
        FlavorCategoryMap::builtin()
    }

    #[test]
    fn empty_selection_matches_everything() {
        let filters = FilterSelection::none();
        assert!(filters.is_empty());
        assert!(filters.matches(&Product::new("Anything", "1.00"), map()));
    }

    #[test]
    fn strength_is_exact_label_match() {
        let filters = FilterSelection::none().with_strength("16mg");

        assert!(filters.matches(&Product::new("A", "1.00").with_strength("16mg"), map()));
        assert!(!filters.matches(&Product::new("B", "1.00").with_strength("16"), map()));
        assert!(!filters.matches(&Product::new("C", "1.00").with_strength("16MG"), map()));
        assert!(!filters.matches(&Product::new("D", "1.00"), map()));
    }

    #[test]
    fn flavor_category_requires_a_listed_flavor() {
        let filters = FilterSelection::none().with_flavor_category(FlavorCategory::Fruit);

        assert!(filters.matches(&Product::new("A", "1.00").with_flavor("Cherry"), map()));
        assert!(!filters.matches(&Product::new("B", "1.00").with_flavor("Cool Mint"), map()));
        assert!(!filters.matches(&Product::new("C", "1.00").with_flavor("Mango"), map()));
        assert!(!filters.matches(&Product::new("D", "1.00"), map()));
    }

    #[test]
    fn active_filters_are_and_combined() {
        let filters = FilterSelection::none()
            .with_strength("6mg")
            .with_flavor_category(FlavorCategory::Mint)
            .featured_only();

        let all = Product::new("All", "1.00")
            .with_strength("6mg")
            .with_flavor("Spearmint")
            .featured();
        let not_featured = Product::new("NotFeatured", "1.00")
            .with_strength("6mg")
            .with_flavor("Spearmint");
        let wrong_strength = Product::new("Wrong", "1.00")
            .with_strength("12mg")
            .with_flavor("Spearmint")
            .featured();

        assert!(filters.matches(&all, map()));
        assert!(!filters.matches(&not_featured, map()));
        assert!(!filters.matches(&wrong_strength, map()));
    }

    #[test]
    fn deserializes_partial_ui_state() {
        let filters: FilterSelection =
            serde_json::from_str(r#"{"flavorCategory":"citrus"}"#).unwrap();

        assert_eq!(filters.flavor_category, Some(FlavorCategory::Citrus));
        assert_eq!(filters.strength, None);
        assert!(!filters.featured);
    }
}
