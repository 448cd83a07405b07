//! Binary heaps built on one shared sift engine
//!
//! This crate provides two binary-heap priority queues that share a single
//! bubble-up / sink-down implementation:
//!
//! - **Plain Heap**: values addressed by slot position; O(log n) insert, pop,
//!   remove and update
//! - **Unique Heap**: `(value, payload)` pairs with a payload -> slot reverse
//!   index; O(log n) update and remove by payload, O(1) lookup by payload
//!
//! Both are min-heaps over an ordering predicate. The four constructors in
//! [`factory`] select `<`, `>` or a caller-supplied predicate.
//!
//! The heaps are single-threaded data structures with no internal locking.
//!
//! # Example
//!
//! ```rust
//! use rust_sift_heaps::{min_unique, HeapError};
//!
//! let mut heap = min_unique();
//! heap.insert(f64::INFINITY, "far");
//! heap.insert(4.0, "near");
//! heap.update(&"far", 1.5).unwrap();
//!
//! assert_eq!(heap.peek(), Some((&1.5, &"far")));
//! assert_eq!(heap.update(&"missing", 0.0), Err(HeapError::UnknownPayload));
//! ```

pub mod factory;
pub mod pathfinding;
pub mod plain;
pub mod sift;
pub mod traits;
pub mod unique;

// Re-export the main types for convenience
pub use factory::{
    max_heap, max_heap_by, max_unique, max_unique_by, min_heap, min_heap_by, min_unique,
    min_unique_by,
};
pub use plain::PlainHeap;
pub use traits::{Compare, HeapError, MaxOrder, MinOrder};
pub use unique::UniqueHeap;
