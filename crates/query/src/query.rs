//! Query value object and its untyped input form.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockview_core::{DomainError, DomainResult, ValueObject};

/// Column the product rows are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Price,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Price => "price",
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            other => Err(DomainError::invalid_query(format!(
                "unknown sort field `{other}` (expected `name` or `price`)"
            ))),
        }
    }
}

impl core::fmt::Display for SortField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction applied on top of the field comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Glyph used by the direction controls.
    pub fn glyph(&self) -> char {
        match self {
            SortOrder::Asc => '▲',
            SortOrder::Desc => '▼',
        }
    }

    /// Apply the direction to a natural (ascending) comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(DomainError::invalid_query(format!(
                "unknown sort order `{other}` (expected `asc` or `desc`)"
            ))),
        }
    }
}

impl core::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI-controlled view parameters.
///
/// `sort_field` and `sort_order` are independent: changing one never touches
/// the other.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Query {
    pub filter_text: String,
    pub in_stock_only: bool,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl ValueObject for Query {}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter_text(mut self, filter_text: impl Into<String>) -> Self {
        self.filter_text = filter_text.into();
        self
    }

    pub fn with_in_stock_only(mut self, in_stock_only: bool) -> Self {
        self.in_stock_only = in_stock_only;
        self
    }

    pub fn with_sort_field(mut self, sort_field: SortField) -> Self {
        self.sort_field = sort_field;
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }
}

/// Query parameters as they arrive from a caller that speaks strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    pub filter_text: String,
    pub in_stock_only: bool,
    pub sort_field: String,
    pub sort_order: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            in_stock_only: false,
            sort_field: SortField::default().as_str().to_string(),
            sort_order: SortOrder::default().as_str().to_string(),
        }
    }
}

impl QueryParams {
    pub fn into_query(self) -> DomainResult<Query> {
        Query::try_from(self)
    }
}

impl TryFrom<QueryParams> for Query {
    type Error = DomainError;

    fn try_from(params: QueryParams) -> Result<Self, Self::Error> {
        Ok(Query {
            sort_field: params.sort_field.parse()?,
            sort_order: params.sort_order.parse()?,
            filter_text: params.filter_text,
            in_stock_only: params.in_stock_only,
        })
    }
}

impl From<&Query> for QueryParams {
    fn from(query: &Query) -> Self {
        Self {
            filter_text: query.filter_text.clone(),
            in_stock_only: query.in_stock_only,
            sort_field: query.sort_field.as_str().to_string(),
            sort_order: query.sort_order.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_sorts_by_name_ascending() {
        let query = Query::default();
        assert_eq!(query.filter_text, "");
        assert!(!query.in_stock_only);
        assert_eq!(query.sort_field, SortField::Name);
        assert_eq!(query.sort_order, SortOrder::Asc);
    }

    #[test]
    fn params_convert_to_query() {
        let params = QueryParams {
            filter_text: "p".to_string(),
            in_stock_only: true,
            sort_field: "price".to_string(),
            sort_order: "desc".to_string(),
        };
        let query = params.into_query().unwrap();
        assert_eq!(
            query,
            Query::new()
                .with_filter_text("p")
                .with_in_stock_only(true)
                .with_sort_field(SortField::Price)
                .with_sort_order(SortOrder::Desc)
        );
    }

    #[test]
    fn unknown_sort_field_is_invalid_query() {
        let params = QueryParams {
            sort_field: "weight".to_string(),
            ..QueryParams::default()
        };
        match params.into_query().unwrap_err() {
            DomainError::InvalidQuery(msg) if msg.contains("weight") => {}
            other => panic!("Expected InvalidQuery, got {other:?}"),
        }
    }

    #[test]
    fn unknown_sort_order_is_invalid_query() {
        let params = QueryParams {
            sort_order: "ASC".to_string(),
            ..QueryParams::default()
        };
        match params.into_query().unwrap_err() {
            DomainError::InvalidQuery(msg) if msg.contains("ASC") => {}
            other => panic!("Expected InvalidQuery, got {other:?}"),
        }
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: QueryParams = serde_json::from_str(r#"{"filter_text": "ap"}"#).unwrap();
        let query = params.into_query().unwrap();
        assert_eq!(query, Query::new().with_filter_text("ap"));
    }

    #[test]
    fn builders_touch_only_their_field() {
        let query = Query::new().with_sort_order(SortOrder::Desc);
        let query = query.with_sort_field(SortField::Price);
        assert_eq!(query.sort_order, SortOrder::Desc);

        let query = query.with_sort_field(SortField::Name);
        assert_eq!(query.sort_order, SortOrder::Desc);
    }

    #[test]
    fn order_apply_inverts_for_desc() {
        assert_eq!(SortOrder::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortOrder::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn query_round_trips_through_params() {
        let query = Query::new()
            .with_filter_text("fruit")
            .with_sort_field(SortField::Price);
        let params = QueryParams::from(&query);
        assert_eq!(params.sort_field, "price");
        assert_eq!(params.into_query().unwrap(), query);
    }
}
