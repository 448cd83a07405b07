//! Constructors for the four heap flavors
//!
//! Every heap in this crate is a min-heap over its ordering predicate, so a
//! max heap is a heap whose predicate is "greater than". The `_by` variants
//! take the predicate as a closure: `lt(a, b)` for min heaps, `gt(a, b)` for
//! max heaps. Both mean "`a` belongs above `b`".
//!
//! # Example
//!
//! ```rust
//! use rust_sift_heaps::factory::{max_heap, min_unique_by};
//!
//! let mut heap = max_heap();
//! heap.insert(2);
//! heap.insert(7);
//! assert_eq!(heap.pop(), Some(7));
//!
//! let mut by_abs = min_unique_by(|a: &i32, b: &i32| a.abs() < b.abs());
//! by_abs.insert(-4, 'x');
//! by_abs.insert(2, 'y');
//! assert_eq!(by_abs.peek(), Some((&2, &'y')));
//! ```

use crate::plain::PlainHeap;
use crate::traits::{MaxOrder, MinOrder};
use crate::unique::UniqueHeap;
use std::hash::Hash;

/// Positional heap with the smallest value on top
pub fn min_heap<T: PartialOrd>() -> PlainHeap<T, MinOrder> {
    PlainHeap::with_order(MinOrder)
}

/// Positional heap with the largest value on top
pub fn max_heap<T: PartialOrd>() -> PlainHeap<T, MaxOrder> {
    PlainHeap::with_order(MaxOrder)
}

/// Positional heap ordered by `lt`
pub fn min_heap_by<T, F>(lt: F) -> PlainHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    PlainHeap::with_order(lt)
}

/// Positional heap ordered by `gt`, greatest on top
pub fn max_heap_by<T, F>(gt: F) -> PlainHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    PlainHeap::with_order(gt)
}

/// Payload-indexed heap with the smallest value on top
pub fn min_unique<T: PartialOrd, P: Eq + Hash + Clone>() -> UniqueHeap<T, P, MinOrder> {
    UniqueHeap::with_order(MinOrder)
}

/// Payload-indexed heap with the largest value on top
pub fn max_unique<T: PartialOrd, P: Eq + Hash + Clone>() -> UniqueHeap<T, P, MaxOrder> {
    UniqueHeap::with_order(MaxOrder)
}

/// Payload-indexed heap ordered by `lt`
pub fn min_unique_by<T, P, F>(lt: F) -> UniqueHeap<T, P, F>
where
    P: Eq + Hash + Clone,
    F: Fn(&T, &T) -> bool,
{
    UniqueHeap::with_order(lt)
}

/// Payload-indexed heap ordered by `gt`, greatest on top
pub fn max_unique_by<T, P, F>(gt: F) -> UniqueHeap<T, P, F>
where
    P: Eq + Hash + Clone,
    F: Fn(&T, &T) -> bool,
{
    UniqueHeap::with_order(gt)
}
