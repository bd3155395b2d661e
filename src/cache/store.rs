//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with the arena recency list.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use crate::cache::entry::SlotId;
use crate::cache::lru::RecencyList;
use crate::error::{CacheError, Result};

// == LRU Cache ==
/// Fixed-capacity cache evicting the least recently used entry when full.
///
/// `get` and `put` run in O(1) expected time. Both take `&mut self` because a
/// hit reorders recency; callers sharing a cache across threads must wrap it
/// in a lock.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key to arena slot
    index: HashMap<K, SlotId>,
    /// Recency order over the same entries
    order: RecencyList<K, V>,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Total evictions since construction
    evictions: u64,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidConfiguration` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidConfiguration(
                "capacity must be a positive integer".to_string(),
            ));
        }

        Ok(Self {
            index: HashMap::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            capacity,
            evictions: 0,
        })
    }

    // == Get ==
    /// Looks up `key`, marking it most recently used on a hit.
    ///
    /// A miss returns `None` and leaves the cache untouched.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.order.move_to_front(id);
        self.order.get(id).map(|entry| &entry.value)
    }

    // == Put ==
    /// Stores a key-value pair as the most recently used entry.
    ///
    /// If the key already exists its value is replaced and no eviction occurs.
    /// If the key is new and the cache is full, the least recently used entry
    /// is evicted first.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(id) {
                entry.value = value;
            }
            self.order.move_to_front(id);
            return;
        }

        if self.order.len() >= self.capacity {
            self.evict();
        }

        let id = self.order.push_front(key.clone(), value);
        self.index.insert(key, id);
    }

    fn evict(&mut self) {
        if let Some(entry) = self.order.pop_back() {
            self.index.remove(&entry.key);
            self.evictions += 1;
            trace!(
                capacity = self.capacity,
                evictions = self.evictions,
                "evicted least recently used entry"
            );
        }
    }

    // == Eviction Count ==
    /// Returns the number of evictions since construction.
    pub fn eviction_count(&self) -> u64 {
        self.evictions
    }

    // == Read-only Accessors ==
    /// Returns the value for `key` without touching its recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.order.get(id).map(|entry| &entry.value)
    }

    /// Checks if a key is cached, without touching its recency.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the next eviction candidate.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.order.back().map(|entry| (&entry.key, &entry.value))
    }

    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.order.iter().map(|entry| (&entry.key, &entry.value))
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[cfg(test)]
    pub(crate) fn index_len(&self) -> usize {
        self.index.len()
    }
}
