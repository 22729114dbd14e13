use serde::Serialize;

use stockview_catalog::Product;

/// One line of the rendered table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Row {
    /// Header row opening a category's products.
    Category { name: String },
    /// A single product.
    Product(Product),
}

impl Row {
    pub fn category(name: impl Into<String>) -> Self {
        Row::Category { name: name.into() }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, Row::Category { .. })
    }

    pub fn as_product(&self) -> Option<&Product> {
        match self {
            Row::Product(product) => Some(product),
            Row::Category { .. } => None,
        }
    }

    /// Category name for header rows, product name for product rows.
    pub fn label(&self) -> &str {
        match self {
            Row::Category { name } => name,
            Row::Product(product) => product.name(),
        }
    }
}
