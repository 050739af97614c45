use std::vec::Vec;

use crate::compare::Compare;
use crate::mediator::MediatorIndex;

/// Position of entry inside heap array
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct HeapIndex(usize);

impl HeapIndex {
    /// Position of entry which is not placed into heap yet.
    /// It will be rewritten during heap construction.
    pub(crate) const PENDING: HeapIndex = HeapIndex(usize::MAX);

    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn new(v: usize) -> Self {
        Self(v)
    }
}

#[derive(Clone)]
pub(crate) struct HeapEntry<TPriority> {
    outer_pos: MediatorIndex,
    priority: TPriority,
}

/// Binary heap ordered by user comparator.
/// Stores back references to outer storage instead of keys
/// and reports every move of entry to `change_handler`.
#[derive(Clone)]
pub(crate) struct BinaryHeap<TPriority, TCompare> {
    data: Vec<HeapEntry<TPriority>>,
    compare: TCompare,
}

impl<TPriority, TCompare> BinaryHeap<TPriority, TCompare> {
    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    #[inline(always)]
    pub(crate) fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    #[inline(always)]
    pub(crate) fn most_prioritized_idx(&self) -> Option<(MediatorIndex, HeapIndex)> {
        self.data.first().map(|x| (x.outer_pos, HeapIndex(0)))
    }

    #[inline(always)]
    pub(crate) fn look_into(&self, position: HeapIndex) -> Option<(MediatorIndex, &TPriority)> {
        let entry = self.data.get(position.0)?;
        Some((entry.outer_pos, &entry.priority))
    }

    /// Changes outer position of element and returns old one
    pub(crate) fn change_outer_pos(
        &mut self,
        outer_pos: MediatorIndex,
        position: HeapIndex,
    ) -> MediatorIndex {
        assert!(position < self.len(), "Out of index during changing key");

        std::mem::replace(&mut self.data[position.0].outer_pos, outer_pos)
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> HeapIndex {
        HeapIndex(self.data.len())
    }

    #[inline(always)]
    pub(crate) fn usize_len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.data.clear()
    }
}

impl<TPriority, TCompare: Compare<TPriority>> BinaryHeap<TPriority, TCompare> {
    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize, compare: TCompare) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Puts outer position and priority in heap.
    /// Calls change_handler for every move of old values and for final position of new one.
    #[inline(always)]
    pub(crate) fn push<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        outer_pos: MediatorIndex,
        priority: TPriority,
        change_handler: TChangeHandler,
    ) {
        self.data.push(HeapEntry {
            outer_pos,
            priority,
        });
        self.heapify_up(HeapIndex(self.data.len() - 1), change_handler);
    }

    /// Removes item with the most priority
    /// Time complexity - O(log n) swaps and change_handler calls
    #[inline(always)]
    pub(crate) fn pop<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        change_handler: TChangeHandler,
    ) -> Option<(MediatorIndex, TPriority)> {
        self.remove(HeapIndex(0), change_handler)
    }

    /// Removes item at position and returns it
    /// Time complexity - O(log n) swaps and change_handler calls
    pub(crate) fn remove<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        change_handler: TChangeHandler,
    ) -> Option<(MediatorIndex, TPriority)> {
        if self.len() <= position {
            return None;
        }
        let last = self.data.len() - 1;
        if position.0 == last {
            return self.data.pop().map(|x| (x.outer_pos, x.priority));
        }
        self.swap_items(position.0, last);
        let result = self.data.pop()?;
        self.fix(position, change_handler);
        Some((result.outer_pos, result.priority))
    }

    /// Replaces priority of queue item and restores heap order.
    /// Returns old priority.
    pub(crate) fn change_priority<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        updated: TPriority,
        change_handler: TChangeHandler,
    ) -> TPriority {
        assert!(
            position < self.len(),
            "Out of index during changing priority"
        );

        let old = std::mem::replace(&mut self.data[position.0].priority, updated);
        self.fix(position, change_handler);
        old
    }

    /// Builds heap from unordered entries in O(n).
    /// Calls change_handler once for every entry with its final position.
    pub(crate) fn from_unordered<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        entries: Vec<(MediatorIndex, TPriority)>,
        compare: TCompare,
        mut change_handler: TChangeHandler,
    ) -> Self {
        let data = entries
            .into_iter()
            .map(|(outer_pos, priority)| HeapEntry {
                outer_pos,
                priority,
            })
            .collect();
        let mut res = Self { data, compare };
        for pos in (0..res.data.len() / 2).rev().map(HeapIndex) {
            res.heapify_down(pos, |_, _| {});
        }
        for (i, entry) in res.data.iter().enumerate() {
            change_handler(entry.outer_pos, HeapIndex(i));
        }
        res
    }

    /// Restores heap order around entry at position.
    /// Entry moves only in one direction.
    fn fix<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) {
        let settled = self.heapify_up(position, &mut change_handler);
        if settled == position {
            self.heapify_down(position, change_handler);
        }
    }

    #[inline(always)]
    fn precedes(&self, a: usize, b: usize) -> bool {
        self.compare
            .precedes(&self.data[a].priority, &self.data[b].priority)
    }

    // Returns final position of moved entry
    fn heapify_up<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) -> HeapIndex {
        debug_assert!(position.0 < self.data.len(), "Out of index in heapify_up");
        let mut position = position.0;
        while position > 0 {
            let parent_pos = (position - 1) / 2;
            if self.precedes(position, parent_pos) {
                self.swap_items(parent_pos, position);
                change_handler(self.data[position].outer_pos, HeapIndex(position));
                position = parent_pos;
            } else {
                break;
            }
        }
        change_handler(self.data[position].outer_pos, HeapIndex(position));
        HeapIndex(position)
    }

    fn heapify_down<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) {
        debug_assert!(position.0 < self.data.len(), "Out of index in heapify_down");
        let mut position = position.0;
        loop {
            let best_child_idx = {
                let child1 = position * 2 + 1;
                let child2 = child1 + 1;
                if child1 >= self.data.len() {
                    break;
                }
                if child2 < self.data.len() && self.precedes(child2, child1) {
                    child2
                } else {
                    child1
                }
            };

            if self.precedes(best_child_idx, position) {
                self.swap_items(position, best_child_idx);
                change_handler(self.data[position].outer_pos, HeapIndex(position));
                position = best_child_idx;
            } else {
                break;
            }
        }
        change_handler(self.data[position].outer_pos, HeapIndex(position));
    }

    #[inline(always)]
    fn swap_items(&mut self, pos1: usize, pos2: usize) {
        debug_assert!(pos1 < self.data.len(), "Out of index in first pos in swap");
        debug_assert!(pos2 < self.data.len(), "Out of index in second pos in swap");
        self.data.swap(pos1, pos2);
    }

    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| !self.precedes(i, (i - 1) / 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{MaxFirst, MinFirst};
    use std::collections::{HashMap, HashSet};

    fn min_heap() -> BinaryHeap<i32, MinFirst> {
        BinaryHeap::with_capacity(0, MinFirst)
    }

    // Checks that every recorded position points to the entry with that outer position
    fn assert_positions<TC: Compare<i32>>(
        heap: &BinaryHeap<i32, TC>,
        positions: &HashMap<MediatorIndex, HeapIndex>,
    ) {
        assert_eq!(positions.len(), heap.usize_len());
        for (&outer, &heap_idx) in positions.iter() {
            let (found, _) = heap.look_into(heap_idx).unwrap();
            assert_eq!(found, outer, "Stale position {:?}", heap_idx);
        }
    }

    #[test]
    fn test_heap_fill() {
        let items = [
            70, 50, 0, 1, 2, 4, 6, 7, 9, 72, 4, 4, 87, 78, 72, 6, 7, 9, 2, -50, -72, -50, -42, -1,
            -3, -13,
        ];
        let mut minimum = i32::MAX;
        let mut heap = min_heap();
        assert!(heap.most_prioritized_idx().is_none());
        assert!(heap.is_valid(), "Heap state is invalid");
        for (i, &x) in items.iter().enumerate() {
            minimum = minimum.min(x);
            heap.push(MediatorIndex(i), x, |_, _| {});
            assert!(heap.is_valid(), "Heap state is invalid after pushing {}", x);
            let (_, top) = heap.most_prioritized_idx().unwrap();
            assert_eq!(heap.look_into(top).unwrap().1, &minimum);
        }
    }

    #[test]
    fn test_change_handler_tracks_moves() {
        let items = [
            2, 3, 21, 22, 25, 29, 36, 90, 89, 88, 87, 83, 48, 50, 52, 69, 65, 55, 73, 75, 76, -53,
            78, 81, -45, -41, 91, -34, -33, -31, -27, -22, -19, -8, -5, -3,
        ];
        let mut positions = HashMap::<MediatorIndex, HeapIndex>::new();
        let mut heap = BinaryHeap::with_capacity(items.len(), MaxFirst);
        for (i, &x) in items.iter().enumerate() {
            heap.push(MediatorIndex(i), x, |outer, pos| {
                positions.insert(outer, pos);
            });
            assert_positions(&heap, &positions);
        }

        let mut removed = HashSet::new();
        while let Some((outer, priority)) = heap.pop(|outer, pos| {
            positions.insert(outer, pos);
        }) {
            assert_eq!(items[outer.0], priority);
            positions.remove(&outer);
            assert!(removed.insert(outer), "Popped {:?} twice", outer);
            assert_positions(&heap, &positions);
        }
        assert_eq!(removed.len(), items.len());
    }

    #[test]
    fn test_pop_order() {
        let items = [
            -16, 5, 11, -1, -34, -42, -5, -6, 25, -35, 11, 35, -2, 40, 42, 40, -45, -48, 48, -38,
            -28, -33, -31, 34, -18, 25, 16, -33, -11, -6, -35, -38, 35, -41, -38, 31, -38, -23, 26,
            44, 38, 11, -49, 30, 7, 13, 12, -4, -11, -24, -49, 26, 42, 46, -25, -22, -6, -42, 28,
            45, -47, 8, 8, 21, 49, -12, -5, -33, -37, 24, -3, -26, 6, -13, 16, -40, -14, -39, -26,
        ];

        let mut heap = min_heap();
        for (i, &x) in items.iter().enumerate() {
            heap.push(MediatorIndex(i), x, |_, _| {});
        }
        assert!(heap.is_valid(), "Heap is invalid before pops");

        let mut sorted_items = items;
        sorted_items.sort_unstable();
        for &x in sorted_items.iter() {
            let (outer, val) = heap.pop(|_, _| {}).unwrap();
            assert_eq!(val, x);
            assert_eq!(items[outer.0], val);
            assert!(heap.is_valid(), "Heap is invalid after {}", x);
        }

        assert!(heap.pop(|_, _| {}).is_none());
    }

    #[test]
    fn test_change_priority() {
        let mut heap = min_heap();
        for x in 0..5 {
            heap.push(MediatorIndex(x), x as i32, |_, _| {});
        }
        assert!(heap.is_valid(), "Invalid before change");
        assert_eq!(heap.change_priority(HeapIndex(3), -10, |_, _| {}), 3);
        assert!(heap.is_valid(), "Invalid after moving up");
        assert_eq!(heap.most_prioritized_idx().unwrap().0, MediatorIndex(3));
        assert_eq!(heap.change_priority(HeapIndex(0), 10, |_, _| {}), -10);
        assert!(heap.is_valid(), "Invalid after moving down");
        assert_eq!(heap.most_prioritized_idx().unwrap().0, MediatorIndex(0));
    }

    #[test]
    fn test_remove_needs_sift_up() {
        // Removing 12 moves 3 under 10, so it has to go up
        let mut heap = min_heap();
        for (i, &x) in [0, 10, 1, 11, 12, 2, 3].iter().enumerate() {
            heap.push(MediatorIndex(i), x, |_, _| {});
        }
        assert_eq!(heap.look_into(HeapIndex(4)), Some((MediatorIndex(4), &12)));
        let mut positions = HashMap::new();
        assert_eq!(
            heap.remove(HeapIndex(4), |outer, pos| {
                positions.insert(outer, pos);
            }),
            Some((MediatorIndex(4), 12))
        );
        assert!(heap.is_valid(), "Invalid after removal");
        assert_eq!(heap.look_into(HeapIndex(1)), Some((MediatorIndex(6), &3)));
        assert_eq!(positions.get(&MediatorIndex(6)), Some(&HeapIndex(1)));
        assert!(heap.remove(HeapIndex(100), |_, _| {}).is_none());
    }

    #[test]
    fn test_from_unordered() {
        let priorities = [
            16i32, 16, 5, 20, 10, 12, 10, 8, 12, 2, 20, -1, -18, 5, -16, 1, 7, 3, 17, -20, -4, 3,
            -7, -5, -8, 19, -19, -16, 3, 4, 17, 13, 3, 11, -9, 0, -10, -2, 16, 19, -12, -4, 19, 7,
        ];
        let entries = priorities
            .iter()
            .enumerate()
            .map(|(i, &p)| (MediatorIndex(i), p))
            .collect();
        let mut positions = HashMap::new();
        let heap = BinaryHeap::from_unordered(entries, MinFirst, |outer, pos| {
            positions.insert(outer, pos);
        });
        assert!(heap.is_valid(), "Must be valid heap");
        assert_positions(&heap, &positions);
        for v in heap.data.iter() {
            assert_eq!(priorities[v.outer_pos.0], v.priority);
        }
    }

    #[test]
    fn test_clear() {
        let mut heap = min_heap();
        for x in 0..5 {
            heap.push(MediatorIndex(x), x as i32, |_, _| {});
        }
        assert!(!heap.is_empty(), "Heap must be non empty");
        heap.clear();
        assert!(heap.is_empty(), "Heap must be empty");
        assert!(heap.pop(|_, _| {}).is_none());
    }

    #[test]
    fn test_change_outer_pos() {
        let mut heap = min_heap();
        for x in 0..5 {
            heap.push(MediatorIndex(x), x as i32, |_, _| {});
        }
        assert_eq!(heap.look_into(HeapIndex(0)), Some((MediatorIndex(0), &0)));
        assert_eq!(
            heap.change_outer_pos(MediatorIndex(10), HeapIndex(0)),
            MediatorIndex(0)
        );
        assert_eq!(heap.look_into(HeapIndex(0)), Some((MediatorIndex(10), &0)));
    }
}
