use serde::{Deserialize, Serialize};
use tracing::debug;

use fairground_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::ordered::OrderedMap;

/// A truck's stock: item -> quantity, in the order items were first stocked.
pub type Inventory = OrderedMap<Item, u32>;

/// Vendor entity holding its own inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodTruck {
    name: String,
    #[serde(with = "stock_entries")]
    inventory: Inventory,
}

impl FoodTruck {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: Inventory::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Set the quantity held for `item`. Restocking replaces the previous
    /// quantity; it does not add to it.
    pub fn stock(&mut self, item: Item, quantity: u32) {
        debug!("{} stocked {} x{}", self.name, item.name(), quantity);
        self.inventory.insert(item, quantity);
    }

    /// Like [`FoodTruck::stock`], for quantities from untrusted signed input.
    pub fn try_stock(&mut self, item: Item, quantity: i64) -> DomainResult<()> {
        if quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| DomainError::validation(format!("quantity {quantity} is out of range")))?;
        self.stock(item, quantity);
        Ok(())
    }

    pub fn sells(&self, item: &Item) -> bool {
        self.inventory.contains_key(item)
    }

    /// Quantity stocked for `item`, zero if it was never stocked.
    pub fn check_stock(&self, item: &Item) -> u32 {
        self.inventory.get(item).copied().unwrap_or(0)
    }
}

/// Inventory wire shape: an ordered list of `{ item, quantity }` entries.
mod stock_entries {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Inventory;
    use crate::item::Item;

    #[derive(Serialize)]
    struct EntryRef<'a> {
        item: &'a Item,
        quantity: u32,
    }

    #[derive(Deserialize)]
    struct Entry {
        item: Item,
        quantity: u32,
    }

    pub fn serialize<S: Serializer>(inventory: &Inventory, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            inventory
                .iter()
                .map(|(item, quantity)| EntryRef { item, quantity: *quantity }),
        )
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Inventory, D::Error> {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(|e| (e.item, e.quantity)).collect())
    }
}
