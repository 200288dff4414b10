//! Products domain module (storefront catalog).
//!
//! This crate contains the catalog rules for the storefront, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage): the product model, the
//! flavor category grouping, and the search/filter/sort pipeline behind the
//! product browse page.

pub mod category;
pub mod facets;
pub mod filter;
pub mod listing;
pub mod product;
pub mod query;
pub mod sort;
pub mod wire;

pub use category::{FlavorCategory, FlavorCategoryMap};
pub use filter::FilterSelection;
pub use product::Product;
pub use query::{CatalogQuery, query};
pub use sort::{NameCollator, SortKey};
pub use wire::{ProductsResponse, decode_products};
