//! Orders domain module (storefront order history and admin dashboard).
//!
//! This crate contains read-side order rules, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage): the lifecycle timeline shown on the
//! order detail page and the percentage arithmetic behind the dashboard cards.

pub mod analytics;
pub mod order;
pub mod timeline;
pub mod wire;

pub use analytics::{OrderSummary, StatusBreakdown, StatusShare, percent_change, percent_of};
pub use order::{Order, OrderItem, OrderStatus};
pub use timeline::{TimelineEvent, TimelineStage, derive_timeline};
pub use wire::{OrderDetailResponse, decode_order};
