// libpn532-rs/libpn532/src/device/cache.rs
//! Write-elision caches owned by one driver session.

use std::collections::HashMap;
use std::hash::Hash;

use crate::protocol::{Register, RfConfigItem};

/// Last value known to be in the chip, per key. Trusted only by callers that
/// opt into caching; anything that changes chip state behind its back must
/// call [`StateCache::clear`].
#[derive(Debug, Clone)]
pub struct StateCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Default for StateCache<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Copy, V: Clone + PartialEq> StateCache<K, V> {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Cached values for every key, in order, or `None` if any is missing.
    pub fn lookup_all(&self, keys: &[K]) -> Option<Vec<V>> {
        keys.iter().map(|k| self.entries.get(k).cloned()).collect()
    }

    /// Pairs whose value differs from (or is absent in) the cache.
    pub fn changed(&self, pairs: &[(K, V)]) -> Vec<(K, V)> {
        pairs
            .iter()
            .filter(|(k, v)| self.entries.get(k) != Some(v))
            .cloned()
            .collect()
    }

    /// Record `value` as the chip's current value for `key`.
    pub fn store(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Record every pair.
    pub fn store_all(&mut self, pairs: &[(K, V)]) {
        for (k, v) in pairs {
            self.entries.insert(*k, v.clone());
        }
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// CIU register values by register.
pub type RegisterCache = StateCache<Register, u8>;
/// RFConfiguration data by item.
pub type RfConfigCache = StateCache<RfConfigItem, Vec<u8>>;
