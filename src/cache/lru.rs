//! Recency List Module
//!
//! Arena-backed doubly-linked list giving O(1) move-to-front and pop-back.

use crate::cache::entry::{Entry, SlotId};

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// Entries live in a `Vec` of slots addressed by [`SlotId`]:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// Freed slots are recycled through `free`, so the arena never grows past the
/// peak number of live entries.
#[derive(Debug)]
pub(crate) struct RecencyList<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    free: Vec<SlotId>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a new entry as most recently used and returns its handle.
    pub fn push_front(&mut self, key: K, value: V) -> SlotId {
        let id = self.alloc(Entry::new(key, value));
        self.link_front(id);
        self.len += 1;
        id
    }

    // == Move To Front ==
    /// Marks an entry as most recently used.
    ///
    /// A handle to a freed or out-of-range slot is ignored.
    pub fn move_to_front(&mut self, id: SlotId) {
        if self.head == Some(id) || self.get(id).is_none() {
            return;
        }
        self.unlink(id);
        self.link_front(id);
    }

    // == Pop Back ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<Entry<K, V>> {
        let id = self.tail?;
        self.unlink(id);
        self.len -= 1;
        let entry = self.slots[id.0].take();
        self.free.push(id);
        entry
    }

    // == Accessors ==
    pub fn get(&self, id: SlotId) -> Option<&Entry<K, V>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut Entry<K, V>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Returns the least recently used entry without removing it.
    pub fn back(&self) -> Option<&Entry<K, V>> {
        self.tail.and_then(|id| self.get(id))
    }

    // == Length ==
    /// Returns the number of linked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn alloc(&mut self, entry: Entry<K, V>) -> SlotId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(entry);
                id
            }
            None => {
                self.slots.push(Some(entry));
                SlotId(self.slots.len() - 1)
            }
        }
    }

    fn link_front(&mut self, id: SlotId) {
        let old_head = self.head;
        if let Some(entry) = self.slots[id.0].as_mut() {
            entry.prev = None;
            entry.next = old_head;
        }
        match old_head {
            Some(head) => {
                if let Some(head_entry) = self.slots[head.0].as_mut() {
                    head_entry.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    fn unlink(&mut self, id: SlotId) {
        let (prev, next) = match self.slots[id.0].as_mut() {
            Some(entry) => (entry.prev.take(), entry.next.take()),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(prev_entry) = self.slots[p.0].as_mut() {
                    prev_entry.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(n) => {
                if let Some(next_entry) = self.slots[n.0].as_mut() {
                    next_entry.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }
}

// == Iterator ==
/// Iterator over a [`RecencyList`], most recently used first.
pub(crate) struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: Option<SlotId>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let entry = self.list.get(id)?;
        self.cursor = entry.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
