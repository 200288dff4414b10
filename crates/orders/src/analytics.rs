//! Dashboard figures: order counts, status shares and revenue.

use serde::{Deserialize, Serialize};

use pouchstore_core::DomainResult;

use crate::order::{Order, OrderStatus};

/// `part` as a percentage of `total`; `0.0` when `total` is zero.
pub fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Relative change from `previous` to `current`, in percent.
///
/// With no previous figure any growth reads as `100.0` and no growth as `0.0`.
pub fn percent_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    (current - previous) / previous.abs() * 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusShare {
    pub status: OrderStatus,
    pub count: usize,
    pub percent: f64,
}

/// Orders per status, every status listed in lifecycle order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub total: usize,
    pub shares: Vec<StatusShare>,
}

impl StatusBreakdown {
    pub fn from_orders(orders: &[Order]) -> DomainResult<Self> {
        let mut counts = [0usize; OrderStatus::ALL.len()];
        for order in orders {
            let status = order.status()?;
            if let Some(slot) = OrderStatus::ALL.iter().position(|s| *s == status) {
                counts[slot] += 1;
            }
        }

        let total = orders.len();
        let shares = OrderStatus::ALL
            .into_iter()
            .zip(counts)
            .map(|(status, count)| StatusShare {
                status,
                count,
                percent: percent_of(count as u64, total as u64),
            })
            .collect();

        Ok(Self { total, shares })
    }

    pub fn share(&self, status: OrderStatus) -> Option<&StatusShare> {
        self.shares.iter().find(|s| s.status == status)
    }
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_count: usize,
    /// Sum of line totals over orders that still count toward revenue.
    pub revenue: f64,
    /// `revenue` divided by the number of orders that count toward it.
    pub average_order_value: f64,
    pub breakdown: StatusBreakdown,
}

impl OrderSummary {
    pub fn from_orders(orders: &[Order]) -> DomainResult<Self> {
        let breakdown = StatusBreakdown::from_orders(orders)?;

        let mut revenue = 0.0;
        let mut counted = 0usize;
        for order in orders {
            if order.status()?.counts_toward_revenue() {
                revenue += order.total();
                counted += 1;
            }
        }

        let average_order_value = if counted == 0 {
            0.0
        } else {
            revenue / counted as f64
        };

        tracing::debug!(orders = orders.len(), counted, revenue, "computed order summary");

        Ok(Self {
            order_count: orders.len(),
            revenue,
            average_order_value,
            breakdown,
        })
    }
}
