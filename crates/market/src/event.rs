use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::food_truck::FoodTruck;
use crate::item::Item;
use crate::ordered::OrderedMap;
use crate::overstock::{OverstockRule, TieBreak};

/// Cross-truck totals for a single item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemTotal<'a> {
    /// Sum of the item's stocked quantity over every truck that sells it.
    pub quantity: u64,
    /// Trucks selling the item, in the order they were added to the event.
    pub food_trucks: Vec<&'a FoodTruck>,
}

/// Item -> totals, keyed in first-discovery order.
pub type TotalInventory<'a> = OrderedMap<&'a Item, ItemTotal<'a>>;

/// Aggregate root: a market gathering of food trucks.
///
/// Trucks are owned and kept in insertion order. There is no deduplication: a
/// truck added twice is counted twice by every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    name: String,
    food_trucks: Vec<FoodTruck>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            food_trucks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn food_trucks(&self) -> &[FoodTruck] {
        &self.food_trucks
    }

    pub fn add_food_truck(&mut self, truck: FoodTruck) {
        debug!("{} joined {}", truck.name(), self.name);
        self.food_trucks.push(truck);
    }

    pub fn food_truck_names(&self) -> Vec<&str> {
        self.food_trucks.iter().map(FoodTruck::name).collect()
    }

    pub fn food_trucks_that_sell(&self, item: &Item) -> Vec<&FoodTruck> {
        self.food_trucks
            .iter()
            .filter(|truck| truck.sells(item))
            .collect()
    }

    /// Per distinct item: summed quantity and the trucks that sell it.
    ///
    /// Keys are ordered by first discovery: trucks in insertion order, then
    /// each truck's own stocking order. The key stored is the first truck's
    /// instance of the item.
    pub fn total_inventory(&self) -> TotalInventory<'_> {
        let mut totals = TotalInventory::new();
        for truck in &self.food_trucks {
            for (item, quantity) in truck.inventory().iter() {
                let total = totals.get_or_insert_with(item, ItemTotal::default);
                total.quantity += u64::from(*quantity);
                total.food_trucks.push(truck);
            }
        }
        debug!(
            "{}: {} distinct item(s) across {} truck(s)",
            self.name,
            totals.len(),
            self.food_trucks.len()
        );
        totals
    }

    /// Item names, ascending. Equal names keep discovery order.
    pub fn sorted_item_list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .total_inventory()
            .keys()
            .copied()
            .map(Item::name)
            .collect();
        names.sort();
        names
    }

    /// The highest-quantity item among those sold by more than one truck.
    ///
    /// Ties go to the item discovered first. `None` when no item is sold by
    /// more than one truck.
    pub fn overstocked_items(&self) -> Option<&Item> {
        self.overstocked_items_with(&OverstockRule::default())
            .into_iter()
            .next()
    }

    pub fn overstocked_items_with(&self, rule: &OverstockRule) -> Vec<&Item> {
        let totals = self.total_inventory();
        let candidates: Vec<(&Item, u64)> = totals
            .iter()
            .filter(|(_, total)| rule.admits(total.food_trucks.len()))
            .map(|(item, total)| (*item, total.quantity))
            .collect();

        let Some(max) = candidates.iter().map(|(_, quantity)| *quantity).max() else {
            debug!("{}: no overstock candidates", self.name);
            return Vec::new();
        };

        let mut tied = candidates
            .into_iter()
            .filter(|(_, quantity)| *quantity == max)
            .map(|(item, _)| item);

        match rule.tie_break {
            TieBreak::FirstEncountered => tied.next().into_iter().collect(),
            TieBreak::AllTied => tied.collect(),
        }
    }
}
