//! Table state and the actions that change it.

use stockview_catalog::Catalog;
use stockview_core::{DomainError, DomainResult};
use stockview_query::{Query, QueryParams, Row, SortField, SortOrder};

use crate::html;

/// A single user interaction.
///
/// Each action sets exactly one query field. In particular `SortBy` leaves the
/// direction alone and `SetSortOrder` leaves the field alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Typing in the search box.
    SetFilterText(String),
    /// Toggling "Only show products in stock".
    SetInStockOnly(bool),
    /// Clicking a column header.
    SortBy(SortField),
    /// Clicking ▲ or ▼.
    SetSortOrder(SortOrder),
}

impl TableAction {
    /// Build an action from a rendered control's `data-action` name and its
    /// value (the input text, `true`/`false` for the checkbox, or the
    /// control's `data-value`).
    pub fn from_control(action: &str, value: &str) -> DomainResult<Self> {
        match action {
            "set_filter_text" => Ok(TableAction::SetFilterText(value.to_string())),
            "set_in_stock_only" => value.parse().map(TableAction::SetInStockOnly).map_err(|_| {
                DomainError::invalid_query(format!(
                    "in-stock flag must be `true` or `false`, got `{value}`"
                ))
            }),
            "sort_by" => Ok(TableAction::SortBy(value.parse()?)),
            "set_sort_order" => Ok(TableAction::SetSortOrder(value.parse()?)),
            other => Err(DomainError::invalid_query(format!("unknown table action `{other}`"))),
        }
    }

    /// Apply to `query`. Returns whether anything changed.
    pub fn apply(self, query: &mut Query) -> bool {
        match self {
            TableAction::SetFilterText(text) => replace(&mut query.filter_text, text),
            TableAction::SetInStockOnly(flag) => replace(&mut query.in_stock_only, flag),
            TableAction::SortBy(field) => replace(&mut query.sort_field, field),
            TableAction::SetSortOrder(order) => replace(&mut query.sort_order, order),
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// The catalog being browsed plus the current query.
///
/// Rows are recomputed from scratch on every call to [`TableState::rows`];
/// nothing is cached between interactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    catalog: Catalog,
    query: Query,
}

impl TableState {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_query(catalog, Query::default())
    }

    pub fn with_query(catalog: Catalog, query: Query) -> Self {
        Self { catalog, query }
    }

    /// Start from untyped parameters (e.g. a URL query string already split
    /// into fields).
    pub fn from_params(catalog: Catalog, params: QueryParams) -> DomainResult<Self> {
        Ok(Self::with_query(catalog, params.into_query()?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn dispatch(&mut self, action: TableAction) -> bool {
        tracing::debug!(?action, "table action");
        action.apply(&mut self.query)
    }

    pub fn rows(&self) -> Vec<Row> {
        stockview_query::query(&self.catalog, &self.query)
    }

    pub fn render_html(&self) -> String {
        html::render_page(&self.query, &self.rows())
    }
}
