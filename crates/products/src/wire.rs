//! Decode boundary for the products endpoint (`GET /api/products`).

use serde::{Deserialize, Serialize};

use pouchstore_core::DecodeError;

use crate::product::Product;

/// `{ success, products }` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub success: bool,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Parse and validate a products response body into typed products.
pub fn decode_products(body: &str) -> Result<Vec<Product>, DecodeError> {
    let response: ProductsResponse = serde_json::from_str(body)?;
    if !response.success {
        return Err(DecodeError::Unsuccessful {
            endpoint: "GET /api/products",
        });
    }
    tracing::debug!(count = response.products.len(), "decoded products response");
    Ok(response.products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FilterSelection, SortKey, query};
    use pouchstore_core::ProductId;

    #[test]
    fn decodes_successful_envelope() {
        let body = r#"{"success":true,"products":[{"id":"7c1e","name":"Frost","flavor":"Cool Mint","nicotineStrength":"16mg","price":"14.50","isFeatured":true}]}"#;

        let products = decode_products(body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, Some("7c1e".parse::<ProductId>().unwrap()));
        assert_eq!(products[0].strength_mg(), 16);
    }

    #[test]
    fn decodes_products_without_keys() {
        let body = r#"{"success":true,"products":[
            {"name":"Zebra Mint","nicotineStrength":"6mg","price":"15.00"},
            {"name":"Apple Mint","nicotineStrength":"22mg","price":"15.00"}
        ]}"#;

        let products = decode_products(body).unwrap();
        assert!(products.iter().all(|p| p.id.is_none()));

        let strongest_first = query(&products, "", &FilterSelection::none(), SortKey::StrengthDesc);
        let names: Vec<&str> = strongest_first.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Apple Mint", "Zebra Mint"]);
    }

    #[test]
    fn decodes_integer_primary_keys() {
        let body = r#"{"success":true,"products":[{"id":1,"name":"Cola","price":"11.00"}]}"#;
        let products = decode_products(body).unwrap();
        assert_eq!(products[0].id, Some(ProductId::from(1_i64)));
    }

    #[test]
    fn unsuccessful_envelope_is_an_error() {
        let err = decode_products(r#"{"success":false}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Unsuccessful { .. }));
    }

    #[test]
    fn malformed_products_are_rejected() {
        let err = decode_products(r#"{"success":true,"products":[{"name":"No price"}]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }
}
