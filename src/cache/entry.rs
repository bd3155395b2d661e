//! Cache Entry Module
//!
//! Defines the arena slot holding one key/value pair and its recency links.

// == Slot Id ==
/// Stable handle to an arena slot in the recency list.
///
/// The index maps keys to `SlotId`s instead of references, so moving an entry
/// within the recency order never invalidates a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotId(pub(crate) usize);

// == Cache Entry ==
/// A single cached key/value pair linked into the recency order.
///
/// `prev` points towards the most recently used end, `next` towards the
/// least recently used end.
#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    /// The cached key (also held by the index)
    pub key: K,
    /// The cached value
    pub value: V,
    pub(crate) prev: Option<SlotId>,
    pub(crate) next: Option<SlotId>,
}

impl<K, V> Entry<K, V> {
    // == Constructor ==
    /// Creates an unlinked entry.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = Entry::new("key", 7);

        assert_eq!(entry.key, "key");
        assert_eq!(entry.value, 7);
        assert!(entry.prev.is_none());
        assert!(entry.next.is_none());
    }
}
