//! Overstock detection rule.
//!
//! An item is a candidate when at least `min_food_trucks` trucks sell it. Among
//! candidates, the one(s) with the highest total quantity are overstocked.

use serde::{Deserialize, Serialize};

/// What to report when several candidates share the maximum quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Only the first tied item in discovery order.
    #[default]
    FirstEncountered,
    /// Every tied item, in discovery order.
    AllTied,
}

/// Config for [`crate::Event::overstocked_items_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverstockRule {
    /// Minimum number of selling trucks for an item to be considered.
    pub min_food_trucks: usize,
    pub tie_break: TieBreak,
}

impl Default for OverstockRule {
    fn default() -> Self {
        Self {
            min_food_trucks: 2,
            tie_break: TieBreak::FirstEncountered,
        }
    }
}

impl OverstockRule {
    pub fn with_min_food_trucks(mut self, min: usize) -> Self {
        self.min_food_trucks = min;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Whether an item sold by `food_truck_count` trucks is a candidate.
    pub fn admits(&self, food_truck_count: usize) -> bool {
        food_truck_count >= self.min_food_trucks
    }
}
