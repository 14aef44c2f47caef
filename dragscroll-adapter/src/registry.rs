#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::RegistryKey;

#[cfg(feature = "std")]
type Map<K, T> = HashMap<K, T>;
#[cfg(not(feature = "std"))]
type Map<K, T> = BTreeMap<K, T>;

/// An explicit mapping from an opaque element handle to its controller.
///
/// Controllers are created on first configuration and reused afterwards, so attaching twice to
/// the same element is a no-op.
#[derive(Clone, Debug)]
pub struct Registry<K, T> {
    entries: Map<K, T>,
}

impl<K: RegistryKey, T> Registry<K, T> {
    pub fn new() -> Self {
        Self {
            entries: Map::new(),
        }
    }

    /// Returns the controller for `key`, creating it with `attach` if there is none yet.
    pub fn get_or_insert_with(&mut self, key: K, attach: impl FnOnce() -> T) -> &mut T {
        self.entries.entry(key).or_insert_with(attach)
    }

    pub fn get(&self, key: &K) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut T> {
        self.entries.get_mut(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Detaches and returns the controller for `key`.
    pub fn remove(&mut self, key: &K) -> Option<T> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn for_each_mut(&mut self, mut f: impl FnMut(&K, &mut T)) {
        for (k, v) in self.entries.iter_mut() {
            f(k, v);
        }
    }
}

impl<K: RegistryKey, T> Default for Registry<K, T> {
    fn default() -> Self {
        Self::new()
    }
}
