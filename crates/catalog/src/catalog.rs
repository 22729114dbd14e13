//! The immutable, ordered product catalog.

use std::collections::HashSet;

use stockview_core::{DomainError, DomainResult, Entity};

use crate::money::Money;
use crate::product::{Product, ProductRecord};

/// Built-in catalog: (category, price in cents, stocked, name).
const SAMPLE: [(&str, u64, bool, &str); 6] = [
    ("Fruits", 100, true, "Apple"),
    ("Fruits", 100, true, "Dragonfruit"),
    ("Fruits", 200, false, "Passionfruit"),
    ("Vegetables", 200, true, "Spinach"),
    ("Vegetables", 400, false, "Pumpkin"),
    ("Vegetables", 100, true, "Peas"),
];

/// Ordered sequence of products with unique names and a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validate and parse records, keeping their order.
    pub fn from_records(records: impl IntoIterator<Item = ProductRecord>) -> DomainResult<Self> {
        let products = records
            .into_iter()
            .map(|record| Product::from_record(&record))
            .collect::<DomainResult<Vec<_>>>()?;
        Self::from_products(products)
    }

    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut names = HashSet::with_capacity(products.len());
        let mut currency: Option<char> = None;

        for product in &products {
            if !names.insert(product.id().as_str()) {
                return Err(DomainError::conflict(format!(
                    "duplicate product name `{}`",
                    product.name()
                )));
            }

            let symbol = product.price().currency();
            match currency {
                None => currency = Some(symbol),
                Some(expected) if expected != symbol => {
                    return Err(DomainError::validation(format!(
                        "product `{}` is priced in `{symbol}`, catalog uses `{expected}`",
                        product.name()
                    )));
                }
                Some(_) => {}
            }
        }

        tracing::debug!(products = products.len(), "catalog constructed");
        Ok(Self { products })
    }

    /// Parse a JSON array of product records.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("catalog json: {e}")))?;
        Self::from_records(records)
    }

    /// The six products compiled into the application.
    pub fn sample() -> Self {
        let products = SAMPLE
            .iter()
            .map(|&(category, cents, stocked, name)| {
                Product::from_parts(name, category, Money::new('$', cents), stocked)
            })
            .collect();
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == name)
    }

    /// Currency shared by every product, if the catalog is non-empty.
    pub fn currency(&self) -> Option<char> {
        self.products.first().map(|p| p.price().currency())
    }

    pub fn to_records(&self) -> Vec<ProductRecord> {
        self.products.iter().map(Product::to_record).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
