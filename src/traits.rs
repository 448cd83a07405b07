//! Orderings and the error type shared by every heap in this crate
//!
//! All heaps here are min-heaps over a strict predicate `less(a, b)`. A max
//! heap is just a min-heap whose predicate is "greater than":
//!
//! - [`MinOrder`]: `a < b`, the default for [`PlainHeap`](crate::plain::PlainHeap)
//!   and [`UniqueHeap`](crate::unique::UniqueHeap)
//! - [`MaxOrder`]: `a > b`
//! - any `Fn(&T, &T) -> bool` closure
//!
//! # Example
//!
//! ```rust
//! use rust_sift_heaps::traits::{Compare, MaxOrder, MinOrder};
//!
//! assert!(MinOrder.less(&1, &2));
//! assert!(MaxOrder.less(&2, &1));
//!
//! let by_abs = |a: &i32, b: &i32| a.abs() < b.abs();
//! assert!(by_abs.less(&-1, &2));
//! ```

use thiserror::Error;

/// Error type for heap operations
///
/// Empty heaps are not an error: `peek` and `pop` return `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The position does not name a live slot
    #[error("position {position} is out of range for a heap of length {len}")]
    PositionOutOfRange {
        /// The requested position
        position: usize,
        /// The heap length at the time of the call
        len: usize,
    },
    /// The payload is not present in the heap
    #[error("payload is not present in the heap")]
    UnknownPayload,
}

/// A strict ordering predicate over `T`
///
/// `less(a, b)` returns true when `a` belongs above `b` in the heap. The
/// predicate must be a strict weak order: irreflexive and transitive.
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` must sit closer to the top than `b`
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Numeric `<`: smallest value on top
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinOrder;

/// Numeric `>`: largest value on top
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxOrder;

impl<T: PartialOrd + ?Sized> Compare<T> for MinOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: PartialOrd + ?Sized> Compare<T> for MaxOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
