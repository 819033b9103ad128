//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two independently constructed instances with the same
//! values are interchangeable, including as map keys.

/// Marker trait for value objects.
///
/// Implementors are **immutable** and **compared by value**. The `Eq + Hash`
/// bound is what lets a value object act as a lookup key in aggregations that
/// merge records built by different owners.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Item {
///     name: String,
///     price: String,
/// }
///
/// impl ValueObject for Item {}
///
/// let a = Item { name: "Peach Pie".into(), price: "$3.75".into() };
/// let b = Item { name: "Peach Pie".into(), price: "$3.75".into() };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
