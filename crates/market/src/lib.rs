//! Market domain module.
//!
//! A market [`Event`] hosts [`FoodTruck`]s, each stocking [`Item`]s in given
//! quantities. The event answers cross-truck questions (total inventory,
//! sellers of an item, sorted catalog, overstock detection) as pure reads
//! over the trucks it holds. No IO, no storage.

pub mod event;
pub mod food_truck;
pub mod item;
pub mod ordered;
pub mod overstock;

pub use event::{Event, ItemTotal, TotalInventory};
pub use food_truck::{FoodTruck, Inventory};
pub use item::Item;
pub use ordered::OrderedMap;
pub use overstock::{OverstockRule, TieBreak};
