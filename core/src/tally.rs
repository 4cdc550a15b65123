//! Order-preserving accumulator used by the ranking reductions.

use std::collections::HashMap;
use std::hash::Hash;

/// A keyed accumulator that remembers the order in which keys were first seen.
///
/// Entries live in a `Vec` in first-seen order; a `HashMap` maps each key to its
/// slot. Iteration order is therefore identical across runs on the same input,
/// which makes ranking ties reproducible.
#[derive(Debug, Clone)]
pub struct Tally<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Tally<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K, V> Tally<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, inserting `init()` first if the key is new.
    ///
    /// `init` is only called on the first encounter, so whatever it captures
    /// is never overwritten by later encounters.
    pub fn entry_or_insert_with<F>(&mut self, key: K, init: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.clone(), slot);
                self.entries.push((key, init()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    /// Consumes the tally, yielding entries in first-seen order.
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K> Tally<K, usize>
where
    K: Eq + Hash + Clone,
{
    pub fn increment(&mut self, key: K) {
        *self.entry_or_insert_with(key, || 0) += 1;
    }
}
