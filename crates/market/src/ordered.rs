//! Insertion-ordered map.
//!
//! Every aggregate in this crate is iterated in the order its keys were first
//! seen, and lookups are by value. `OrderedMap` keeps entries in a `Vec` and a
//! `HashMap` from key to slot for O(1) lookup.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Map that iterates in first-insertion order.
///
/// Re-inserting an existing key replaces its value in place; the key keeps the
/// position it was first inserted at.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or overwrite. Returns the previous value, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&slot) => Some(core::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Mutable access to the value for `key`, inserting `default()` at the end
    /// of the order if the key is new.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.clone(), slot);
                self.entries.push((key, default()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }
}

impl<K, V> OrderedMap<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K, V> Default for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

// Order is part of equality: two maps with the same entries in a different
// order are not equal.
impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: core::fmt::Debug, V: core::fmt::Debug> core::fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_first_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("peach", 1);
        map.insert("apple", 2);
        map.insert("banana", 3);

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["peach", "apple", "banana"]);
    }

    #[test]
    fn overwrite_keeps_original_position() {
        let mut map = OrderedMap::new();
        map.insert("peach", 1);
        map.insert("apple", 2);

        let previous = map.insert("peach", 10);

        assert_eq!(previous, Some(1));
        assert_eq!(map.len(), 2);
        let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(entries, vec![("peach", 10), ("apple", 2)]);
    }

    #[test]
    fn get_or_insert_with_appends_only_new_keys() {
        let mut map: OrderedMap<&str, u64> = OrderedMap::new();
        *map.get_or_insert_with("peach", || 0) += 35;
        *map.get_or_insert_with("apple", || 0) += 7;
        *map.get_or_insert_with("peach", || 0) += 65;

        assert_eq!(map.get("peach"), Some(&100));
        assert_eq!(map.get("apple"), Some(&7));
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["peach", "apple"]);
    }

    #[test]
    fn lookup_of_missing_key_is_none() {
        let map: OrderedMap<String, u32> = OrderedMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get("nothing"), None);
        assert!(!map.contains_key("nothing"));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a: OrderedMap<_, _> = [("x", 1), ("y", 2)].into_iter().collect();
        let b: OrderedMap<_, _> = [("y", 2), ("x", 1)].into_iter().collect();
        let c: OrderedMap<_, _> = [("x", 1), ("y", 2)].into_iter().collect();

        assert_ne!(a, b);
        assert_eq!(a, c);
    }
}
