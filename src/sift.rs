//! The sift engine shared by every binary heap in this crate
//!
//! The engine restores heap order after a single slot has been perturbed.
//! It never touches the heap's storage directly: a concrete heap describes
//! its slots through [`SiftTarget`], and the engine only compares, swaps and
//! erases through that trait. This lets the plain heap (one array) and the
//! unique heap (entries plus a reverse index) share the same algorithm.
//!
//! Positions are 0-based: the parent of `p` is `(p - 1) / 2` and its
//! children are `2p + 1` and `2p + 2`.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `bubble_up` | O(log n)   |
//! | `sink_down` | O(log n)   |
//! | `restore`   | O(log n)   |
//! | `remove_at` | O(log n)   |

/// Storage seen by the sift engine
///
/// Implementors keep any number of parallel structures in lockstep inside
/// `swap_at` and `erase_last`.
pub trait SiftTarget {
    /// The element handed back when the last slot is erased
    type Item;

    /// Number of live slots
    fn len(&self) -> usize;

    /// Returns true if there are no live slots
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the slot at `a` must sit above the slot at `b`
    fn less(&self, a: usize, b: usize) -> bool;

    /// Exchanges the contents of two live slots
    fn swap_at(&mut self, a: usize, b: usize);

    /// Drops the last slot and returns its contents
    fn erase_last(&mut self) -> Option<Self::Item>;
}

#[inline]
fn parent(pos: usize) -> usize {
    (pos - 1) / 2
}

#[inline]
fn left_child(pos: usize) -> usize {
    2 * pos + 1
}

/// Moves the element at `pos` toward the root while it is less than its
/// parent, returning where it came to rest
pub fn bubble_up<S: SiftTarget + ?Sized>(target: &mut S, mut pos: usize) -> usize {
    debug_assert!(pos < target.len());
    while pos > 0 {
        let up = parent(pos);
        if !target.less(pos, up) {
            break;
        }
        target.swap_at(pos, up);
        pos = up;
    }
    pos
}

/// Moves the element at `pos` toward the leaves while a child is less than
/// it, returning where it came to rest
///
/// The left child wins ties: the right child is chosen only when it is
/// strictly less than the left one.
pub fn sink_down<S: SiftTarget + ?Sized>(target: &mut S, mut pos: usize) -> usize {
    let len = target.len();
    debug_assert!(pos < len);
    loop {
        let left = left_child(pos);
        if left >= len {
            break;
        }
        let right = left + 1;

        let mut best = left;
        if right < len && target.less(right, left) {
            best = right;
        }

        if !target.less(best, pos) {
            break;
        }
        target.swap_at(pos, best);
        pos = best;
    }
    pos
}

/// Restores order around a slot whose element was replaced
///
/// Only one direction can be violated by a single change, so `sink_down`
/// runs only when the element did not move up.
pub fn restore<S: SiftTarget + ?Sized>(target: &mut S, pos: usize) -> usize {
    let settled = bubble_up(target, pos);
    if settled == pos {
        sink_down(target, pos)
    } else {
        settled
    }
}

/// Removes the slot at `pos`, filling the hole with the last element
///
/// Returns `None` without touching the target when `pos` is out of range.
/// Removing the last slot performs no sift.
pub fn remove_at<S: SiftTarget + ?Sized>(target: &mut S, pos: usize) -> Option<S::Item> {
    let len = target.len();
    if pos >= len {
        return None;
    }

    let last = len - 1;
    if pos != last {
        target.swap_at(pos, last);
    }
    let removed = target.erase_last();

    if pos < target.len() {
        restore(target, pos);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain vector target that records every swap
    struct Recorder {
        data: Vec<i32>,
        swaps: Vec<(usize, usize)>,
    }

    impl Recorder {
        fn new(data: Vec<i32>) -> Self {
            Self {
                data,
                swaps: Vec::new(),
            }
        }
    }

    impl SiftTarget for Recorder {
        type Item = i32;

        fn len(&self) -> usize {
            self.data.len()
        }

        fn less(&self, a: usize, b: usize) -> bool {
            self.data[a] < self.data[b]
        }

        fn swap_at(&mut self, a: usize, b: usize) {
            self.swaps.push((a, b));
            self.data.swap(a, b);
        }

        fn erase_last(&mut self) -> Option<i32> {
            self.data.pop()
        }
    }

    fn is_heap(data: &[i32]) -> bool {
        (1..data.len()).all(|p| data[p] >= data[(p - 1) / 2])
    }

    #[test]
    fn test_bubble_up_to_root() {
        let mut t = Recorder::new(vec![2, 4, 3, 8, 1]);
        assert_eq!(bubble_up(&mut t, 4), 0);
        assert_eq!(t.data, vec![1, 2, 3, 8, 4]);
        assert_eq!(t.swaps, vec![(4, 1), (1, 0)]);
    }

    #[test]
    fn test_bubble_up_stops_on_equal() {
        let mut t = Recorder::new(vec![1, 5, 3, 5]);
        assert_eq!(bubble_up(&mut t, 3), 3);
        assert!(t.swaps.is_empty());
    }

    #[test]
    fn test_sink_down_picks_smaller_child() {
        let mut t = Recorder::new(vec![9, 4, 2, 5, 6, 7, 3]);
        assert_eq!(sink_down(&mut t, 0), 6);
        assert_eq!(t.data, vec![2, 4, 3, 5, 6, 7, 9]);
        assert!(is_heap(&t.data));
    }

    #[test]
    fn test_sink_down_left_wins_ties() {
        let mut t = Recorder::new(vec![9, 4, 4]);
        assert_eq!(sink_down(&mut t, 0), 1);
        assert_eq!(t.swaps, vec![(0, 1)]);
    }

    #[test]
    fn test_sink_down_single_child() {
        let mut t = Recorder::new(vec![5, 1]);
        assert_eq!(sink_down(&mut t, 0), 1);
        assert_eq!(t.data, vec![1, 5]);
    }

    #[test]
    fn test_restore_moves_one_way() {
        let mut t = Recorder::new(vec![1, 3, 2, 4, 5]);
        t.data[4] = 0;
        assert_eq!(restore(&mut t, 4), 0);
        assert!(is_heap(&t.data));

        let mut t = Recorder::new(vec![1, 3, 2, 4, 5]);
        t.data[0] = 10;
        restore(&mut t, 0);
        assert!(is_heap(&t.data));
        assert_eq!(t.data[0], 2);
    }

    #[test]
    fn test_remove_last_does_not_sift() {
        let mut t = Recorder::new(vec![1, 3, 2, 4, 5]);
        assert_eq!(remove_at(&mut t, 4), Some(5));
        assert!(t.swaps.is_empty());
        assert_eq!(t.data, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_remove_interior() {
        let mut t = Recorder::new(vec![1, 5, 2, 6, 7, 3, 4]);
        assert_eq!(remove_at(&mut t, 1), Some(5));
        assert_eq!(t.data.len(), 6);
        assert!(is_heap(&t.data));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut t = Recorder::new(vec![1, 2]);
        assert_eq!(remove_at(&mut t, 2), None);
        assert_eq!(t.data, vec![1, 2]);

        let mut empty = Recorder::new(Vec::new());
        assert_eq!(remove_at(&mut empty, 0), None);
    }
}
