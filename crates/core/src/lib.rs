//! `pouchstore-core` — shared storefront domain primitives.
//!
//! This crate contains **pure domain** building blocks (no infrastructure concerns).

pub mod decimal;
pub mod error;
pub mod id;

pub use error::{DecodeError, DomainError, DomainResult};
pub use id::{OrderId, ProductId};
