//! Record keys assigned by the storefront database.
//!
//! Depending on the table, keys arrive as JSON strings (`"a1b2..."`) or integers
//! (`42`). Both are kept as text so lookups compare one way.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

macro_rules! record_key {
    ($(#[$meta:meta])* $t:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            /// Fresh key for a record created in-process (UUIDv7 text).
            pub fn generate() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value.to_string())
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = s.trim();
                if key.is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, ": empty key")));
                }
                Ok(Self(key.to_string()))
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                match RawKey::deserialize(deserializer)? {
                    RawKey::Int(n) => Ok(Self::from(n)),
                    RawKey::Text(s) => s.parse().map_err(serde::de::Error::custom),
                }
            }
        }
    };
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Int(i64),
    Text(String),
}

record_key!(
    /// Key of a catalog product.
    ProductId,
    "ProductId"
);
record_key!(
    /// Key of a customer order.
    OrderId,
    "OrderId"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_integer_and_text_keys() {
        let int: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(int, ProductId::from(42_i64));
        assert_eq!(int.as_str(), "42");

        let text: OrderId = serde_json::from_str(r#""ord_7f3a""#).unwrap();
        assert_eq!(text.to_string(), "ord_7f3a");
    }

    #[test]
    fn serializes_as_text() {
        assert_eq!(serde_json::to_string(&ProductId::from(7_i64)).unwrap(), r#""7""#);
    }

    #[test]
    fn generated_keys_are_distinct() {
        assert_ne!(OrderId::generate(), OrderId::generate());
    }

    #[test]
    fn rejects_empty_key() {
        let err = "  ".parse::<OrderId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("OrderId")),
            other => panic!("Expected InvalidId, got {other:?}"),
        }
        assert!(serde_json::from_str::<ProductId>(r#""""#).is_err());
        assert!(serde_json::from_str::<ProductId>("true").is_err());
    }
}
