use serde::{Deserialize, Serialize};

use stockview_core::{DomainError, DomainResult, Entity};

use crate::money::Money;

/// Wire shape of a product, with the price still in its prefixed string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub category: String,
    pub price: String,
    pub stocked: bool,
    pub name: String,
}

impl ProductRecord {
    pub fn new(
        category: impl Into<String>,
        price: impl Into<String>,
        stocked: bool,
        name: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            price: price.into(),
            stocked,
            name: name.into(),
        }
    }
}

/// Catalog entry. Immutable once constructed; identified by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    category: String,
    price: Money,
    stocked: bool,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        stocked: bool,
    ) -> DomainResult<Self> {
        let name = name.into();
        let category = category.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if category.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "category of `{name}` cannot be empty"
            )));
        }

        Ok(Self {
            name,
            category,
            price,
            stocked,
        })
    }

    /// Validate a record, parsing its price.
    pub fn from_record(record: &ProductRecord) -> DomainResult<Self> {
        let price = Money::parse(&record.price).map_err(|e| match e {
            DomainError::InvalidPriceFormat(msg) => {
                DomainError::invalid_price(format!("product `{}`: {msg}", record.name))
            }
            other => other,
        })?;
        Self::new(record.name.clone(), record.category.clone(), price, record.stocked)
    }

    /// Built-in data that is known to be valid.
    pub(crate) fn from_parts(name: &str, category: &str, price: Money, stocked: bool) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            price,
            stocked,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn stocked(&self) -> bool {
        self.stocked
    }

    pub fn to_record(&self) -> ProductRecord {
        ProductRecord::new(
            self.category.clone(),
            self.price.to_string(),
            self.stocked,
            self.name.clone(),
        )
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_record_parses_price() {
        let record = ProductRecord::new("Fruits", "$2", false, "Passionfruit");
        let product = Product::from_record(&record).unwrap();

        assert_eq!(product.name(), "Passionfruit");
        assert_eq!(product.category(), "Fruits");
        assert_eq!(product.price(), Money::new('$', 200));
        assert!(!product.stocked());
        assert_eq!(product.id(), "Passionfruit");
    }

    #[test]
    fn from_record_names_the_product_on_bad_price() {
        let record = ProductRecord::new("Fruits", "two dollars", true, "Apple");
        let err = Product::from_record(&record).unwrap_err();
        match err {
            DomainError::InvalidPriceFormat(msg) if msg.contains("Apple") => {}
            _ => panic!("Expected InvalidPriceFormat naming the product"),
        }
    }

    #[test]
    fn rejects_empty_name() {
        let err = Product::new("   ", "Fruits", Money::new('$', 100), true).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn rejects_empty_category() {
        let err = Product::new("Apple", "", Money::new('$', 100), true).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("Apple") => {}
            _ => panic!("Expected Validation error for empty category"),
        }
    }

    #[test]
    fn to_record_keeps_prefixed_price() {
        let product = Product::new("Pumpkin", "Vegetables", Money::new('$', 400), false).unwrap();
        assert_eq!(
            product.to_record(),
            ProductRecord::new("Vegetables", "$4", false, "Pumpkin")
        );
    }
}
