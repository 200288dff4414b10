use serde::{Deserialize, Serialize};

use pouchstore_core::decimal;
use pouchstore_core::ProductId;

/// Catalog product as served by the products endpoint.
///
/// Strength and price stay in their wire form: the strength filter matches the
/// label verbatim and the price is only ever parsed for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Database key; listings assembled outside the database may have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    pub flavor: Option<String>,
    pub description: Option<String>,
    /// `"<integer>mg"`, e.g. `"16mg"`.
    pub nicotine_strength: Option<String>,
    /// String-encoded decimal, e.g. `"15.00"`.
    #[serde(deserialize_with = "decimal::text_or_number")]
    pub price: String,
    #[serde(default)]
    pub is_featured: bool,
}

impl Product {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            flavor: None,
            description: None,
            nicotine_strength: None,
            price: price.into(),
            is_featured: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = Some(flavor.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_strength(mut self, strength: impl Into<String>) -> Self {
        self.nicotine_strength = Some(strength.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Nicotine strength in milligrams; absent or unparsable strength counts as `0`.
    pub fn strength_mg(&self) -> i64 {
        self.nicotine_strength
            .as_deref()
            .and_then(parse_strength_mg)
            .unwrap_or(0)
    }

    /// Price as a float; `NaN` when the price text has no numeric prefix.
    pub fn price_value(&self) -> f64 {
        decimal::parse_decimal(&self.price)
    }

    /// Case-insensitive substring match against name, flavor and description.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(needle);
        contains(self.name.as_str())
            || self.flavor.as_deref().is_some_and(contains)
            || self.description.as_deref().is_some_and(contains)
    }
}

/// Milligrams of a strength label (`"16mg"` -> `16`); `None` without leading digits.
pub fn parse_strength_mg(raw: &str) -> Option<i64> {
    decimal::parse_leading_int(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_parses_milligram_labels() {
        assert_eq!(parse_strength_mg("16mg"), Some(16));
        assert_eq!(parse_strength_mg("6mg"), Some(6));
        assert_eq!(parse_strength_mg("mg"), None);
    }

    #[test]
    fn missing_or_malformed_strength_counts_as_zero() {
        let plain = Product::new("Plain", "10.00");
        assert_eq!(plain.strength_mg(), 0);

        let odd = Product::new("Odd", "10.00").with_strength("strong");
        assert_eq!(odd.strength_mg(), 0);

        let strong = Product::new("Strong", "10.00").with_strength("50mg");
        assert_eq!(strong.strength_mg(), 50);
    }

    #[test]
    fn price_value_parses_or_degrades_to_nan() {
        assert_eq!(Product::new("Frost", "14.50").price_value(), 14.5);
        assert!(Product::new("Broken", "n/a").price_value().is_nan());
    }

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let product = Product::new("Arctic Blast", "15.00")
            .with_flavor("Cool Mint")
            .with_description("A crisp, ICY pouch");

        assert!(product.matches_search("arctic"));
        assert!(product.matches_search("mint"));
        assert!(product.matches_search("icy"));
        assert!(!product.matches_search("cherry"));
    }

    #[test]
    fn absent_fields_never_match_search() {
        let product = Product::new("Zebra", "15.00");
        assert!(!product.matches_search("mint"));
    }

    #[test]
    fn deserializes_wire_shape() {
        let json = r#"{"id":"p-1","name":"Cool Mint","flavor":"Cool Mint","nicotineStrength":"16mg","price":"15.00","isFeatured":true}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, Some("p-1".parse::<ProductId>().unwrap()));
        assert_eq!(product.nicotine_strength.as_deref(), Some("16mg"));
        assert_eq!(product.description, None);
        assert_eq!(product.price, "15.00");
        assert!(product.is_featured);
    }

    #[test]
    fn id_may_be_an_integer_or_absent() {
        let keyed: Product = serde_json::from_str(r#"{"id":17,"name":"Cola","price":12.5}"#).unwrap();
        assert_eq!(keyed.id, Some(ProductId::from(17_i64)));
        assert_eq!(keyed.price, "12.5");
        assert!(!keyed.is_featured);
        assert_eq!(keyed.price_value(), 12.5);

        let bare: Product =
            serde_json::from_str(r#"{"name":"Zebra Mint","nicotineStrength":"6mg","price":"15.00"}"#).unwrap();
        assert_eq!(bare.id, None);
        assert_eq!(bare.strength_mg(), 6);
    }
}
