//! Filter, group, sort, flatten.

use core::cmp::Ordering;
use std::collections::HashMap;

use stockview_catalog::{Catalog, Product};
use stockview_core::DomainResult;

use crate::collate::compare_names;
use crate::query::{Query, QueryParams, SortField, SortOrder};
use crate::row::Row;

/// Products of one category, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub products: Vec<&'a Product>,
}

/// Whether a product passes the stock flag and the name filter.
pub fn matches(product: &Product, query: &Query) -> bool {
    passes(product, query.in_stock_only, &query.filter_text.to_lowercase())
}

/// Keep the products that match `query`, in their original order.
pub fn filter<'a>(products: impl IntoIterator<Item = &'a Product>, query: &Query) -> Vec<&'a Product> {
    let needle = query.filter_text.to_lowercase();
    products
        .into_iter()
        .filter(|product| passes(product, query.in_stock_only, &needle))
        .collect()
}

/// `needle` is already lowercased.
fn passes(product: &Product, in_stock_only: bool, needle: &str) -> bool {
    if in_stock_only && !product.stocked() {
        return false;
    }
    product.name().to_lowercase().contains(needle)
}

/// Partition by category. Categories appear in the order they are first seen.
pub fn group<'a>(products: &[&'a Product]) -> Vec<CategoryGroup<'a>> {
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for &product in products {
        let category = product.category();
        let slot = *index.entry(category).or_insert_with(|| {
            groups.push(CategoryGroup {
                category,
                products: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].products.push(product);
    }

    groups
}

fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_names(a.name(), b.name()),
        SortField::Price => a.price().cmp(&b.price()),
    }
}

/// Stable sort: products with equal keys keep their relative order in both
/// directions.
pub fn sort_group(products: &mut [&Product], field: SortField, order: SortOrder) {
    products.sort_by(|a, b| order.apply(compare(a, b, field)));
}

/// One header row per group followed by its products.
pub fn flatten(groups: &[CategoryGroup<'_>]) -> Vec<Row> {
    let mut rows = Vec::with_capacity(groups.iter().map(|g| g.products.len() + 1).sum());
    for group in groups {
        rows.push(Row::category(group.category));
        rows.extend(group.products.iter().map(|&p| Row::Product(p.clone())));
    }
    rows
}

/// Evaluate `query` against `catalog`.
pub fn query(catalog: &Catalog, query: &Query) -> Vec<Row> {
    let filtered = filter(catalog, query);
    let mut groups = group(&filtered);
    for group in &mut groups {
        sort_group(&mut group.products, query.sort_field, query.sort_order);
    }
    let rows = flatten(&groups);

    tracing::debug!(
        filter_text = %query.filter_text,
        in_stock_only = query.in_stock_only,
        sort_field = %query.sort_field,
        sort_order = %query.sort_order,
        matched = filtered.len(),
        categories = groups.len(),
        rows = rows.len(),
        "query evaluated"
    );
    rows
}

/// Validate untyped parameters, then evaluate them.
pub fn query_params(catalog: &Catalog, params: QueryParams) -> DomainResult<Vec<Row>> {
    let q = params.into_query()?;
    Ok(query(catalog, &q))
}
