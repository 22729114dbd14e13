//! Product catalog domain module.
//!
//! This crate contains the catalog data model (products, prices, the catalog
//! itself) as deterministic domain logic (no IO, no rendering). Prices are
//! parsed into [`Money`] exactly once, when a catalog is constructed.

pub mod catalog;
pub mod money;
pub mod product;

pub use catalog::Catalog;
pub use money::Money;
pub use product::{Product, ProductRecord};
