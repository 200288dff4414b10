//! Flavor categories used by the browse page's flavor filter.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use pouchstore_core::DomainError;

/// Flavor bucket shown in the catalog filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlavorCategory {
    Mint,
    Fruit,
    Citrus,
    Unique,
}

impl FlavorCategory {
    pub const ALL: [FlavorCategory; 4] = [
        FlavorCategory::Mint,
        FlavorCategory::Fruit,
        FlavorCategory::Citrus,
        FlavorCategory::Unique,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FlavorCategory::Mint => "mint",
            FlavorCategory::Fruit => "fruit",
            FlavorCategory::Citrus => "citrus",
            FlavorCategory::Unique => "unique",
        }
    }
}

impl core::fmt::Display for FlavorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for FlavorCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlavorCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown flavor category: {s}")))
    }
}

static BUILTIN: LazyLock<FlavorCategoryMap> = LazyLock::new(|| {
    FlavorCategoryMap::new()
        .with_category(FlavorCategory::Mint, ["Cool Mint", "Spearmint", "Peppermint"])
        .with_category(
            FlavorCategory::Fruit,
            [
                "Cherry",
                "Watermelon",
                "Strawberry",
                "Raspberry",
                "Blueberry",
                "Grape",
                "Peach",
            ],
        )
        .with_category(FlavorCategory::Citrus, ["Citrus"])
        .with_category(FlavorCategory::Unique, ["Cola", "Wintergreen", "Applemint"])
});

/// Category -> flavor names. Membership is exact string equality.
///
/// Every flavor sold should appear in exactly one category; a flavor missing from
/// the map is silently dropped whenever a category filter is active (see
/// [`crate::facets::uncategorized_flavors`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlavorCategoryMap {
    categories: BTreeMap<FlavorCategory, Vec<String>>,
}

impl FlavorCategoryMap {
    /// An empty map (every category filter excludes everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// The storefront's fixed grouping.
    pub fn builtin() -> &'static FlavorCategoryMap {
        &BUILTIN
    }

    pub fn with_category<I, S>(mut self, category: FlavorCategory, flavors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories
            .insert(category, flavors.into_iter().map(Into::into).collect());
        self
    }

    pub fn flavors(&self, category: FlavorCategory) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: FlavorCategory, flavor: &str) -> bool {
        self.flavors(category).iter().any(|f| f == flavor)
    }

    /// First category (in category order) listing `flavor`.
    pub fn category_of(&self, flavor: &str) -> Option<FlavorCategory> {
        self.categories
            .iter()
            .find(|(_, flavors)| flavors.iter().any(|f| f == flavor))
            .map(|(category, _)| *category)
    }
}
