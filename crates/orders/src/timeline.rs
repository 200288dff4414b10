//! Order timeline: the lifecycle steps shown on the order detail page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use pouchstore_core::DomainResult;

use crate::order::{Order, OrderStatus};

/// A step on the order timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineStage {
    Placed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl TimelineStage {
    /// Happy-path steps, in order. Index matches [`OrderStatus::happy_path_rank`].
    pub const HAPPY_PATH: [TimelineStage; 4] = [
        TimelineStage::Placed,
        TimelineStage::Processing,
        TimelineStage::Shipped,
        TimelineStage::Delivered,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimelineStage::Placed => "Order Placed",
            TimelineStage::Processing => "Processing",
            TimelineStage::Shipped => "Shipped",
            TimelineStage::Delivered => "Delivered",
            TimelineStage::Cancelled => "Cancelled",
            TimelineStage::Refunded => "Refunded",
        }
    }
}

/// One rendered timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub stage: TimelineStage,
    pub label: String,
    pub completed: bool,
    /// Set only for completed stages whose time was recorded.
    pub timestamp: Option<DateTime<Utc>>,
}

impl TimelineEvent {
    fn new(stage: TimelineStage, completed: bool, timestamp: Option<DateTime<Utc>>) -> Self {
        Self {
            stage,
            label: stage.label().to_string(),
            completed,
            timestamp: if completed { timestamp } else { None },
        }
    }
}

/// Project an order onto the timeline.
///
/// Always returns the four happy-path steps. For an order on the happy path a
/// step is completed when the status has reached it. A cancelled or refunded
/// order shows the progress its stage timestamps prove (the furthest stamped
/// step and everything before it), followed by a completed terminal step.
///
/// Fails with `InvalidStatus` when the status string is not one of the six
/// lifecycle states.
pub fn derive_timeline(order: &Order) -> DomainResult<Vec<TimelineEvent>> {
    let status = order.status()?;
    let stamps = [
        order.created_at,
        order.processing_at,
        order.shipped_at,
        order.delivered_at,
    ];

    let reached = match status.happy_path_rank() {
        Some(rank) => rank,
        None => {
            // "Order Placed" always counts.
            let furthest = stamps.iter().rposition(Option::is_some).unwrap_or(0);
            debug!(
                order_id = ?order.id,
                status = %status,
                reached = TimelineStage::HAPPY_PATH[furthest].label(),
                "inferred progress from stage timestamps"
            );
            furthest
        }
    };

    let mut events: Vec<TimelineEvent> = TimelineStage::HAPPY_PATH
        .into_iter()
        .zip(stamps)
        .enumerate()
        .map(|(i, (stage, stamp))| TimelineEvent::new(stage, i <= reached, stamp))
        .collect();

    match status {
        OrderStatus::Cancelled => events.push(TimelineEvent::new(
            TimelineStage::Cancelled,
            true,
            order.cancelled_at.or(order.updated_at),
        )),
        OrderStatus::Refunded => events.push(TimelineEvent::new(
            TimelineStage::Refunded,
            true,
            order.refunded_at.or(order.updated_at),
        )),
        _ => {}
    }

    Ok(events)
}
