use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pouchstore_core::decimal;
use pouchstore_core::{DomainError, DomainResult, OrderId};

/// Order lifecycle status.
///
/// Transitions are driven by order management elsewhere; nothing here enforces
/// their legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Refunded,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        }
    }

    /// Position on the happy path (`pending` = 0 .. `delivered` = 3).
    ///
    /// `None` for the cancelled/refunded branches.
    pub fn happy_path_rank(self) -> Option<usize> {
        match self {
            OrderStatus::Pending => Some(0),
            OrderStatus::Processing => Some(1),
            OrderStatus::Shipped => Some(2),
            OrderStatus::Delivered => Some(3),
            OrderStatus::Cancelled | OrderStatus::Refunded => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Refunded
        )
    }

    /// Cancelled and refunded orders carry no revenue.
    pub fn counts_toward_revenue(self) -> bool {
        !matches!(self, OrderStatus::Cancelled | OrderStatus::Refunded)
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::invalid_status(s))
    }
}

/// Line of an order as returned with the order detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(alias = "product_name")]
    pub product_name: String,
    pub quantity: u32,
    /// Unit price, string-encoded decimal.
    #[serde(deserialize_with = "decimal::text_or_number")]
    pub price: String,
}

impl OrderItem {
    /// `price * quantity`; an unparsable price contributes nothing.
    pub fn line_total(&self) -> f64 {
        let unit = decimal::parse_decimal(&self.price);
        if unit.is_nan() { 0.0 } else { unit * f64::from(self.quantity) }
    }
}

/// Order record as read by the storefront.
///
/// `status` is kept exactly as received; [`Order::status`] validates it. Stage
/// timestamps are present only for stages the order management code recorded.
/// The id is optional and may be text or an integer primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub processing_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub shipped_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub refunded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "order_items", alias = "orderItems")]
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            id: None,
            status: status.into(),
            created_at: None,
            processing_at: None,
            shipped_at: None,
            delivered_at: None,
            cancelled_at: None,
            refunded_at: None,
            updated_at: None,
            items: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<OrderId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_item(mut self, product_name: impl Into<String>, quantity: u32, price: impl Into<String>) -> Self {
        self.items.push(OrderItem {
            product_name: product_name.into(),
            quantity,
            price: price.into(),
        });
        self
    }

    /// Parsed status; unknown values are `InvalidStatus`.
    pub fn status(&self) -> DomainResult<OrderStatus> {
        self.status.parse()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
