//! This is priority queue with values that supports lookup, update and removal by key.
//!
//! It uses IndexMap and own implementation of binary heap to achieve this.
//!
//! Each entry has associated *key*, *value* and *priority*.
//! Keys must be unique and hashable; priorities are ordered by comparator
//! which may be any closure `Fn(&P, &P) -> bool` or one of [`MinFirst`] and [`MaxFirst`].
//!
//! Popping returns entry with the top priority.
//! Setting adds entry to queue or updates value and priority of existing key.
//! Also it is possible to remove entry by key.
//!
//! Pop, set, change priority, remove by key have ***O(log n)*** time complexity;
//! peek, lookup by key are ***O(1)***.
//!
//! # Examples
//!
//! This is implementation of [Dijkstra algorithm][dijkstra] for directed graph.
//! Nodes which are reachable but not finished yet are kept in queue
//! with distance as priority and previous node on the path as value.
//! When shorter path to a node in queue is found, its entry is updated in place.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//! [`MinFirst`]: struct.MinFirst.html
//! [`MaxFirst`]: struct.MaxFirst.html
//!
//! ```
//! use heapmap::HeapMap;
//! use std::collections::HashMap;
//!
//! // For every reachable node returns distance and previous node on the path
//! fn shortest_paths(
//!     graph: &[Vec<(usize, u32)>],
//!     start: usize,
//! ) -> HashMap<usize, (u32, Option<usize>)> {
//!     let mut done = HashMap::new();
//!     let mut frontier = HeapMap::new();
//!     frontier.set(start, None, 0u32);
//!     while let Some((node, previous, distance)) = frontier.pop() {
//!         done.insert(node, (distance, previous));
//!         for &(next, cost) in &graph[node] {
//!             if done.contains_key(&next) {
//!                 continue;
//!             }
//!             let candidate = distance + cost;
//!             match frontier.get_priority(&next) {
//!                 Some(&known) if known <= candidate => { /* Have found worse path. */ }
//!                 _ => {
//!                     frontier.set(next, Some(node), candidate);
//!                 }
//!             }
//!         }
//!     }
//!     done
//! }
//!
//! let graph = vec![
//!     vec![(1, 4), (2, 1)], // 0
//!     vec![(3, 1)],         // 1
//!     vec![(1, 2), (3, 5)], // 2
//!     vec![],               // 3
//! ];
//! let paths = shortest_paths(&graph, 0);
//! assert_eq!(paths[&0], (0, None));
//! assert_eq!(paths[&1], (3, Some(2)));
//! assert_eq!(paths[&3], (4, Some(1)));
//! ```
//!

mod compare;
mod editable_binary_heap;
mod heap_map;
mod mediator;

pub use crate::compare::{Compare, MaxFirst, MinFirst};
pub use crate::heap_map::{
    HeapMap, IntoIter, Iter, Keys, SetPriorityNotFoundError, Values, ValuesMut,
};

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
