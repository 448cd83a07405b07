//! Positional binary heap
//!
//! [`PlainHeap`] stores bare values and addresses them by slot position.
//! Positions are the 0-based indices of [`PlainHeap::as_slice`]; the top
//! element always sits at position 0.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert`  | O(log n)   |
//! | `peek`    | O(1)       |
//! | `pop`     | O(log n)   |
//! | `remove`  | O(log n)   |
//! | `update`  | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use rust_sift_heaps::plain::PlainHeap;
//!
//! let mut heap = PlainHeap::new();
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::sift::{self, SiftTarget};
use crate::traits::{Compare, HeapError, MinOrder};

/// Slot array plus the ordering it is sorted by
#[derive(Debug, Clone)]
struct Slots<T, C> {
    data: Vec<T>,
    order: C,
}

impl<T, C: Compare<T>> SiftTarget for Slots<T, C> {
    type Item = T;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.order.less(&self.data[a], &self.data[b])
    }

    fn swap_at(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    fn erase_last(&mut self) -> Option<T> {
        self.data.pop()
    }
}

/// A binary heap addressed by slot position
///
/// `C` decides the ordering; the default [`MinOrder`] puts the smallest
/// value on top. See [`factory`](crate::factory) for the min/max
/// constructors.
#[derive(Debug, Clone)]
pub struct PlainHeap<T, C = MinOrder> {
    slots: Slots<T, C>,
}

impl<T: PartialOrd> PlainHeap<T> {
    /// Creates an empty min-heap
    pub fn new() -> Self {
        Self::with_order(MinOrder)
    }

    /// Creates an empty min-heap with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, MinOrder)
    }
}

impl<T, C: Compare<T>> PlainHeap<T, C> {
    /// Creates an empty heap sorted by `order`
    pub fn with_order(order: C) -> Self {
        Self::with_capacity_and_order(0, order)
    }

    /// Creates an empty heap sorted by `order` with room for `capacity` values
    pub fn with_capacity_and_order(capacity: usize, order: C) -> Self {
        Self {
            slots: Slots {
                data: Vec::with_capacity(capacity),
                order,
            },
        }
    }

    /// Returns the number of values in the heap
    pub fn len(&self) -> usize {
        self.slots.data.len()
    }

    /// Returns true if the heap holds no values
    pub fn is_empty(&self) -> bool {
        self.slots.data.is_empty()
    }

    /// Inserts a value
    pub fn insert(&mut self, value: T) {
        self.slots.data.push(value);
        let last = self.slots.data.len() - 1;
        sift::bubble_up(&mut self.slots, last);
    }

    /// Returns the top value without removing it
    pub fn peek(&self) -> Option<&T> {
        self.slots.data.first()
    }

    /// Removes and returns the top value
    pub fn pop(&mut self) -> Option<T> {
        sift::remove_at(&mut self.slots, 0)
    }

    /// Removes the value at `position`
    ///
    /// # Errors
    /// Returns [`HeapError::PositionOutOfRange`] if `position >= len()`; the
    /// heap is left untouched.
    pub fn remove(&mut self, position: usize) -> Result<T, HeapError> {
        let len = self.len();
        sift::remove_at(&mut self.slots, position)
            .ok_or(HeapError::PositionOutOfRange { position, len })
    }

    /// Replaces the value at `position` and moves it to its ordered slot
    ///
    /// # Errors
    /// Returns [`HeapError::PositionOutOfRange`] if `position >= len()`; the
    /// heap is left untouched.
    pub fn update(&mut self, position: usize, value: T) -> Result<(), HeapError> {
        let len = self.len();
        let slot = self
            .slots
            .data
            .get_mut(position)
            .ok_or(HeapError::PositionOutOfRange { position, len })?;
        *slot = value;
        sift::restore(&mut self.slots, position);
        Ok(())
    }

    /// The heap array in slot order
    pub fn as_slice(&self) -> &[T] {
        &self.slots.data
    }

    /// The ordering this heap sorts by
    pub fn order(&self) -> &C {
        &self.slots.order
    }

    /// Removes every value, keeping the allocation
    pub fn clear(&mut self) {
        self.slots.data.clear();
    }

    /// Drains the heap in pop order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }
}

impl<T, C: Compare<T> + Default> Default for PlainHeap<T, C> {
    fn default() -> Self {
        Self::with_order(C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for PlainHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PlainHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}
