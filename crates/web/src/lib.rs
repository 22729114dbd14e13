//! `stockview-web`
//!
//! **Responsibility:** the product table as a user sees it.
//!
//! This crate provides:
//! - Table state driven by discrete user actions (search, stock toggle,
//!   sort field, sort direction)
//! - Server-free HTML rendering of the search bar and grouped table
//! - A Leptos browser frontend (`wasm32` only)
//!
//! All filtering and ordering is delegated to `stockview-query`.

pub mod html;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use state::{TableAction, TableState};
