//! Sort keys for the catalog and their comparators.

use core::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};
use serde::{Deserialize, Serialize};

use pouchstore_core::DomainError;

use crate::product::Product;

/// Catalog sort order. Exactly one is active; defaults to `name-asc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "name-desc")]
    NameDesc,
    #[serde(rename = "strength-asc")]
    StrengthAsc,
    #[serde(rename = "strength-desc")]
    StrengthDesc,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::StrengthAsc,
        SortKey::StrengthDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::StrengthAsc => "strength-asc",
            SortKey::StrengthDesc => "strength-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    /// Compare two products under this key.
    ///
    /// Products with an unparsable price sort after every priced product in
    /// both price directions.
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        self.compare_with(&mut NameCollator::new(), a, b)
    }

    /// Like [`SortKey::compare`], reusing `collator` across comparisons.
    pub fn compare_with(self, collator: &mut NameCollator, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::NameAsc => collator.compare(&a.name, &b.name),
            SortKey::NameDesc => collator.compare(&b.name, &a.name),
            SortKey::StrengthAsc => a.strength_mg().cmp(&b.strength_mg()),
            SortKey::StrengthDesc => b.strength_mg().cmp(&a.strength_mg()),
            SortKey::PriceAsc => compare_prices(a.price_value(), b.price_value(), false),
            SortKey::PriceDesc => compare_prices(a.price_value(), b.price_value(), true),
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown sort key: {s}")))
    }
}

/// Unicode Collation Algorithm over the CLDR root locale.
///
/// Base letters decide first, then accents, then case (lowercase ahead of
/// uppercase). Spaces and punctuation are not ignored. Only identical strings
/// compare equal.
pub struct NameCollator {
    inner: Collator,
}

impl NameCollator {
    pub fn new() -> Self {
        Self {
            inner: Collator::new(Tailoring::Cldr(Locale::Root), false, true),
        }
    }

    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.inner.collate(a, b)
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for NameCollator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("NameCollator(cldr-root)")
    }
}

/// One-off name comparison; sorting should hold a [`NameCollator`] instead.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameCollator::new().compare(a, b)
}

fn compare_prices(a: f64, b: f64, descending: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) if descending => b.total_cmp(&a),
        (false, false) => a.total_cmp(&b),
    }
}
