//! Payload-indexed binary heap
//!
//! [`UniqueHeap`] stores `(value, payload)` pairs and keeps a reverse index
//! from each payload to the slot it currently occupies. That index is what
//! makes `update` and `remove` by payload O(log n): no scan is needed to
//! find the element.
//!
//! Payloads must be unique among live entries. This is a caller contract
//! and is not checked: inserting a payload that is already live overwrites
//! its reverse-index entry, so later lookups find the new slot while the
//! old slot stays in the heap and can only leave it through `pop`. Callers
//! who cannot guarantee uniqueness should test [`UniqueHeap::contains`]
//! first and call [`UniqueHeap::update`] instead.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `insert`           | O(log n)   |
//! | `peek`             | O(1)       |
//! | `pop`              | O(log n)   |
//! | `remove`           | O(log n)   |
//! | `update`           | O(log n)   |
//! | `value_by_payload` | O(1)       |
//!
//! Each swap performed by the sift engine also rewrites two reverse-index
//! entries, so the constants are higher than for [`PlainHeap`](crate::plain::PlainHeap).
//!
//! # Example
//!
//! ```rust
//! use rust_sift_heaps::unique::UniqueHeap;
//!
//! let mut heap = UniqueHeap::new();
//! heap.insert(30, "c");
//! heap.insert(10, "a");
//! heap.insert(20, "b");
//!
//! heap.update(&"c", 5).unwrap();
//! assert_eq!(heap.peek(), Some((&5, &"c")));
//! assert_eq!(heap.value_by_payload(&"b"), Some(&20));
//!
//! assert_eq!(heap.remove(&"a"), Ok((10, "a")));
//! assert_eq!(heap.pop(), Some((5, "c")));
//! assert_eq!(heap.pop(), Some((20, "b")));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::sift::{self, SiftTarget};
use crate::traits::{Compare, HeapError, MinOrder};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// One live element of the heap
#[derive(Debug, Clone)]
struct Entry<T, P> {
    value: T,
    payload: P,
}

/// Entry array, reverse index and ordering, kept in lockstep
#[derive(Debug, Clone)]
struct IndexedSlots<T, P, C> {
    entries: Vec<Entry<T, P>>,
    reverse: FxHashMap<P, usize>,
    order: C,
}

impl<T, P, C> IndexedSlots<T, P, C>
where
    P: Eq + Hash,
{
    #[inline]
    fn reindex(&mut self, pos: usize) {
        if let Some(slot) = self.reverse.get_mut(&self.entries[pos].payload) {
            *slot = pos;
        }
    }
}

impl<T, P, C> SiftTarget for IndexedSlots<T, P, C>
where
    P: Eq + Hash,
    C: Compare<T>,
{
    type Item = (T, P);

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.order.less(&self.entries[a].value, &self.entries[b].value)
    }

    fn swap_at(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.reindex(a);
        self.reindex(b);
    }

    fn erase_last(&mut self) -> Option<(T, P)> {
        let Entry { value, payload } = self.entries.pop()?;
        // A duplicate insert may have pointed the payload at a newer slot.
        if self.reverse.get(&payload) == Some(&self.entries.len()) {
            self.reverse.remove(&payload);
        }
        Some((value, payload))
    }
}

/// A binary heap addressed by payload
///
/// `C` decides the ordering of values; the default [`MinOrder`] puts the
/// smallest value on top. See [`factory`](crate::factory) for the min/max
/// constructors.
#[derive(Debug, Clone)]
pub struct UniqueHeap<T, P, C = MinOrder> {
    slots: IndexedSlots<T, P, C>,
}

impl<T: PartialOrd, P: Eq + Hash + Clone> UniqueHeap<T, P> {
    /// Creates an empty min-heap
    pub fn new() -> Self {
        Self::with_order(MinOrder)
    }

    /// Creates an empty min-heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, MinOrder)
    }
}

impl<T, P, C> UniqueHeap<T, P, C>
where
    P: Eq + Hash + Clone,
    C: Compare<T>,
{
    /// Creates an empty heap sorted by `order`
    pub fn with_order(order: C) -> Self {
        Self::with_capacity_and_order(0, order)
    }

    /// Creates an empty heap sorted by `order` with room for `capacity` entries
    pub fn with_capacity_and_order(capacity: usize, order: C) -> Self {
        Self {
            slots: IndexedSlots {
                entries: Vec::with_capacity(capacity),
                reverse: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
                order,
            },
        }
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.slots.entries.len()
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.slots.entries.is_empty()
    }

    /// Inserts `value` under `payload`
    ///
    /// `payload` must not already be live; see the [module docs](self) for
    /// what happens when it is.
    pub fn insert(&mut self, value: T, payload: P) {
        let pos = self.slots.entries.len();
        self.slots.reverse.insert(payload.clone(), pos);
        self.slots.entries.push(Entry { value, payload });
        sift::bubble_up(&mut self.slots, pos);
    }

    /// Returns the top entry without removing it
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.slots
            .entries
            .first()
            .map(|entry| (&entry.value, &entry.payload))
    }

    /// Removes and returns the top entry
    pub fn pop(&mut self) -> Option<(T, P)> {
        sift::remove_at(&mut self.slots, 0)
    }

    /// Removes the entry stored under `payload`
    ///
    /// # Errors
    /// Returns [`HeapError::UnknownPayload`] if `payload` is not live; the
    /// heap is left untouched.
    pub fn remove(&mut self, payload: &P) -> Result<(T, P), HeapError> {
        let pos = self.position(payload).ok_or(HeapError::UnknownPayload)?;
        sift::remove_at(&mut self.slots, pos).ok_or(HeapError::UnknownPayload)
    }

    /// Replaces the value stored under `payload` and moves the entry to its
    /// ordered slot
    ///
    /// # Errors
    /// Returns [`HeapError::UnknownPayload`] if `payload` is not live; the
    /// heap is left untouched.
    pub fn update(&mut self, payload: &P, value: T) -> Result<(), HeapError> {
        let pos = self.position(payload).ok_or(HeapError::UnknownPayload)?;
        let entry = self
            .slots
            .entries
            .get_mut(pos)
            .ok_or(HeapError::UnknownPayload)?;
        entry.value = value;
        sift::restore(&mut self.slots, pos);
        Ok(())
    }

    /// Looks up the value stored under `payload`
    pub fn value_by_payload(&self, payload: &P) -> Option<&T> {
        let pos = self.position(payload)?;
        self.slots.entries.get(pos).map(|entry| &entry.value)
    }

    /// Returns true if `payload` is live
    pub fn contains(&self, payload: &P) -> bool {
        self.slots.reverse.contains_key(payload)
    }

    /// The slot `payload` currently occupies
    pub fn position(&self, payload: &P) -> Option<usize> {
        self.slots.reverse.get(payload).copied()
    }

    /// Iterates over entries in slot order
    pub fn iter(&self) -> impl Iterator<Item = (&T, &P)> + '_ {
        self.slots
            .entries
            .iter()
            .map(|entry| (&entry.value, &entry.payload))
    }

    /// The ordering this heap sorts by
    pub fn order(&self) -> &C {
        &self.slots.order
    }

    /// Removes every entry, keeping the allocations
    pub fn clear(&mut self) {
        self.slots.entries.clear();
        self.slots.reverse.clear();
    }

    /// Drains the heap in pop order
    pub fn into_sorted_vec(mut self) -> Vec<(T, P)> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }
}

impl<T, P, C> Default for UniqueHeap<T, P, C>
where
    P: Eq + Hash + Clone,
    C: Compare<T> + Default,
{
    fn default() -> Self {
        Self::with_order(C::default())
    }
}

impl<T, P, C> Extend<(T, P)> for UniqueHeap<T, P, C>
where
    P: Eq + Hash + Clone,
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, payload) in iter {
            self.insert(value, payload);
        }
    }
}

impl<T, P, C> FromIterator<(T, P)> for UniqueHeap<T, P, C>
where
    P: Eq + Hash + Clone,
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}
