//! Decode boundary for the order detail endpoint.

use serde::{Deserialize, Serialize};

use pouchstore_core::{DecodeError, DomainError};

use crate::order::Order;

/// `{ success, order }` envelope; the order carries nested `order_items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetailResponse {
    pub success: bool,
    #[serde(default)]
    pub order: Option<Order>,
}

/// Parse an order detail body.
///
/// The status string is not validated here; [`crate::derive_timeline`] and the
/// analytics report unknown statuses.
pub fn decode_order(body: &str) -> Result<Order, DecodeError> {
    let response: OrderDetailResponse = serde_json::from_str(body)?;
    if !response.success {
        return Err(DecodeError::Unsuccessful {
            endpoint: "GET /api/orders/:id",
        });
    }
    response.order.ok_or_else(|| DomainError::not_found().into())
}
