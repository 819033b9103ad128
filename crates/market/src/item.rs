use serde::{Deserialize, Serialize};

use fairground_core::{DomainError, DomainResult, ValueObject};

/// Value object: a good identified by its name and price.
///
/// Equality and hashing cover both fields, so an `Item` built separately by
/// two trucks aggregates as one key when name and price match. The price is an
/// already-formatted currency string and is never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    price: String,
}

impl Item {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    /// Validating constructor: rejects blank names and prices.
    pub fn try_new(name: impl Into<String>, price: impl Into<String>) -> DomainResult<Self> {
        let item = Self::new(name, price);
        if item.name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        if item.price.trim().is_empty() {
            return Err(DomainError::validation("item price cannot be empty"));
        }
        Ok(item)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }
}

impl ValueObject for Item {}
