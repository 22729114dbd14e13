//! Product query engine.
//!
//! Turns an immutable [`Catalog`](stockview_catalog::Catalog) plus a [`Query`]
//! into the ordered rows of the product table:
//!
//! 1. **filter** by stock flag and case-insensitive name substring,
//! 2. **group** by category in first-occurrence order,
//! 3. **sort** each group by name or price, ascending or descending (stable),
//! 4. **flatten** into category header rows followed by product rows.
//!
//! Every function here is pure: the same catalog and query always produce the
//! same rows.

pub mod collate;
pub mod engine;
pub mod query;
pub mod row;

pub use collate::compare_names;
pub use engine::{CategoryGroup, filter, flatten, group, matches, query, query_params, sort_group};
pub use query::{Query, QueryParams, SortField, SortOrder};
pub use row::Row;
