//! Dijkstra search on top of [`UniqueHeap`]
//!
//! The open set is a min unique heap keyed by node: discovering a cheaper
//! route to a node that is still open is a single `update` on its payload,
//! so no stale duplicates ever enter the heap.
//!
//! The node type carries its own goal context and implements `is_goal()` to
//! decide when [`dijkstra`] stops.
//!
//! # Example
//!
//! ```rust
//! use rust_sift_heaps::pathfinding::{dijkstra, SearchNode};
//!
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct GridPos { x: i32, y: i32, goal_x: i32, goal_y: i32 }
//!
//! impl SearchNode for GridPos {
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<(Self, Self::Cost)> {
//!         [(1, 0), (-1, 0), (0, 1), (0, -1)]
//!             .into_iter()
//!             .map(|(dx, dy)| (GridPos { x: self.x + dx, y: self.y + dy, ..self.clone() }, 1))
//!             .collect()
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.x == self.goal_x && self.y == self.goal_y
//!     }
//! }
//!
//! let start = GridPos { x: 0, y: 0, goal_x: 2, goal_y: 2 };
//! let (path, cost) = dijkstra(&start).unwrap();
//! assert_eq!(cost, 4);
//! assert_eq!(path.len(), 5);
//! ```

use crate::unique::UniqueHeap;
use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;
use std::ops::Add;

/// Trait for types that can be used as path costs.
///
/// `Default` must be the zero cost.
pub trait Cost: PartialOrd + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: PartialOrd + Copy + Add<Output = Self> + Default {}

/// Trait for nodes in a search graph.
pub trait SearchNode: Clone + Eq + Hash {
    /// Edge weight type
    type Cost: Cost;

    /// Returns every neighbor of this node with the cost to reach it.
    fn successors(&self) -> Vec<(Self, Self::Cost)>;

    /// Returns true if this node is a goal state.
    fn is_goal(&self) -> bool;
}

/// Open and closed sets of one search
struct Search<N: SearchNode> {
    open: UniqueHeap<N::Cost, N>,
    /// Best known cost of every discovered node
    best: FxHashMap<N, N::Cost>,
    came_from: FxHashMap<N, N>,
    closed: FxHashSet<N>,
}

impl<N: SearchNode> Search<N> {
    fn new(start: &N) -> Self {
        let zero = N::Cost::default();
        let mut search = Search {
            open: UniqueHeap::new(),
            best: FxHashMap::default(),
            came_from: FxHashMap::default(),
            closed: FxHashSet::default(),
        };
        search.best.insert(start.clone(), zero);
        search.open.insert(zero, start.clone());
        search
    }

    /// Settles the cheapest open node and relaxes its successors
    fn settle_next(&mut self) -> Option<(N, N::Cost)> {
        let (cost, node) = self.open.pop()?;
        self.closed.insert(node.clone());

        for (next, edge) in node.successors() {
            if self.closed.contains(&next) {
                continue;
            }
            let candidate = cost + edge;
            let improved = self
                .best
                .get(&next)
                .map_or(true, |known| candidate < *known);
            if !improved {
                continue;
            }

            self.best.insert(next.clone(), candidate);
            self.came_from.insert(next.clone(), node.clone());
            if self.open.update(&next, candidate).is_err() {
                self.open.insert(candidate, next);
            }
        }

        Some((node, cost))
    }

    /// Peeks at the cost of the next node to settle
    fn frontier(&self) -> Option<N::Cost> {
        self.open.peek().map(|(cost, _)| *cost)
    }

    fn path_to(&self, goal: N) -> Vec<N> {
        let mut path = vec![goal];
        while let Some(prev) = path.last().and_then(|node| self.came_from.get(node)) {
            path.push(prev.clone());
        }
        path.reverse();
        path
    }
}

/// Finds the cheapest path from `start` to the first goal node.
///
/// Returns the path, start and goal included, and its total cost, or `None`
/// if no goal is reachable.
pub fn dijkstra<N: SearchNode>(start: &N) -> Option<(Vec<N>, N::Cost)> {
    let mut search = Search::new(start);
    while let Some((node, cost)) = search.settle_next() {
        if node.is_goal() {
            return Some((search.path_to(node), cost));
        }
    }
    None
}

/// Settles every node reachable from `start` and returns its distance.
///
/// The graph must be finite.
pub fn shortest_distances<N: SearchNode>(start: &N) -> FxHashMap<N, N::Cost> {
    let mut search = Search::new(start);
    let mut settled = FxHashMap::default();
    while let Some((node, cost)) = search.settle_next() {
        settled.insert(node, cost);
    }
    settled
}

/// Returns every node whose distance from `start` is at most `budget`.
pub fn reachable_within<N: SearchNode>(start: &N, budget: N::Cost) -> Vec<(N, N::Cost)> {
    let mut search = Search::new(start);
    let mut reachable = Vec::new();
    while search.frontier().is_some_and(|cost| cost <= budget) {
        match search.settle_next() {
            Some(settled) => reachable.push(settled),
            None => break,
        }
    }
    reachable
}
