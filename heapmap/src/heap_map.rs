use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::{Debug, Display};
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};

use crate::compare::{Compare, MaxFirst, MinFirst};
use crate::editable_binary_heap::{BinaryHeap, HeapIndex};
use crate::mediator::{Mediator, MediatorEntry, MediatorIndex, Slot};

/// A priority queue with values which supports lookup, update and removal by key.
///
/// Each entry has unique *key*, a *value* and a *priority*.
/// Order of priorities is decided by comparator `TCompare`:
/// by default smallest priority is popped first ([`MinFirst`]),
/// [`MaxFirst`] or any closure `Fn(&TPriority, &TPriority) -> bool` can be used instead.
///
/// It is logic error if priority or key changes other way than by methods of this map.
/// This changes normally possible only through `Cell`, `RefCell`, global state, IO, or unsafe code.
///
/// Order of equal priorities is unspecified and can change between operations.
///
/// [`MinFirst`]: struct.MinFirst.html
/// [`MaxFirst`]: struct.MaxFirst.html
///
/// # Examples
///
/// ```
/// use heapmap::HeapMap;
///
/// let mut map = HeapMap::new();
///
/// // Currently map is empty
/// assert_eq!(map.peek(), None);
///
/// map.set("john", "123 Main St", 42);
/// map.set("jane", "456 Main St", 43);
/// map.set("joe", "789 Main St", 44);
///
/// // Peek returns references to the entry with the smallest priority.
/// assert_eq!(map.peek(), Some((&"john", &"123 Main St", &42)));
///
/// // Lookup by key
/// assert_eq!(map.get("jane"), Some((&"456 Main St", &43)));
///
/// // Update value and priority of existing key
/// assert_eq!(map.set("joe", "1 Other St", 40), Some(("789 Main St", 44)));
/// assert_eq!(map.pop(), Some(("joe", "1 Other St", 40)));
///
/// // Remove by key
/// assert_eq!(map.remove("john"), Some(("123 Main St", 42)));
/// assert_eq!(map.len(), 1);
/// assert!(!map.contains_key("john"));
///
/// map.clear();
/// assert!(map.is_empty());
/// ```
#[derive(Clone)]
pub struct HeapMap<TKey, TValue, TPriority, TCompare = MinFirst, S = RandomState>
where
    TKey: Hash + Eq,
    TCompare: Compare<TPriority>,
    S: BuildHasher,
{
    heap: BinaryHeap<TPriority, TCompare>,
    key_to_pos: Mediator<TKey, TValue, S>,
}

impl<TKey: Hash + Eq, TValue, TPriority: Ord> HeapMap<TKey, TValue, TPriority> {
    /// Creates an empty map which pops the smallest priority first.
    ///
    /// ### Examples
    ///
    /// ```
    /// use heapmap::HeapMap;
    /// let mut map = HeapMap::new();
    /// map.set("Key", "Value", 4);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty map which pops the smallest priority first
    /// with allocated memory enough to keep `capacity` elements without reallocation.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_comparator_and_hasher(capacity, MinFirst, RandomState::new())
    }
}

impl<TKey: Hash + Eq, TValue, TPriority: Ord> HeapMap<TKey, TValue, TPriority, MaxFirst> {
    /// Creates an empty map which pops the biggest priority first.
    ///
    /// ### Examples
    ///
    /// ```
    /// use heapmap::HeapMap;
    /// let mut map = HeapMap::new_max();
    /// map.set(1, "low", 1);
    /// map.set(2, "high", 10);
    /// assert_eq!(map.peek(), Some((&2, &"high", &10)));
    /// ```
    #[inline]
    pub fn new_max() -> Self {
        Self::with_capacity_max(0)
    }

    /// Creates an empty map which pops the biggest priority first
    /// with allocated memory enough to keep `capacity` elements without reallocation.
    #[inline]
    pub fn with_capacity_max(capacity: usize) -> Self {
        Self::with_capacity_comparator_and_hasher(capacity, MaxFirst, RandomState::new())
    }
}

impl<TKey, TValue, TPriority, TCompare> HeapMap<TKey, TValue, TPriority, TCompare>
where
    TKey: Hash + Eq,
    TCompare: Compare<TPriority>,
{
    /// Creates an empty map ordered by `compare`.
    ///
    /// ### Examples
    ///
    /// ```
    /// use heapmap::HeapMap;
    /// let mut map =
    ///     HeapMap::with_comparator(|a: &(u32, u32), b: &(u32, u32)| a.0 + a.1 < b.0 + b.1);
    /// map.set("far", (), (10, 3));
    /// map.set("near", (), (1, 2));
    /// assert_eq!(map.pop(), Some(("near", (), (1, 2))));
    /// ```
    #[inline]
    pub fn with_comparator(compare: TCompare) -> Self {
        Self::with_capacity_and_comparator(0, compare)
    }

    /// Creates an empty map ordered by `compare`
    /// with allocated memory enough to keep `capacity` elements without reallocation.
    #[inline]
    pub fn with_capacity_and_comparator(capacity: usize, compare: TCompare) -> Self {
        Self::with_capacity_comparator_and_hasher(capacity, compare, RandomState::new())
    }
}

impl<TKey, TValue, TPriority, TCompare, S> HeapMap<TKey, TValue, TPriority, TCompare, S>
where
    TKey: Hash + Eq,
    TCompare: Compare<TPriority>,
    S: BuildHasher,
{
    /// Creates an empty map with specific comparator and Hasher
    /// with allocated memory enough to keep `capacity` elements without reallocation.
    ///
    /// ### Examples
    ///
    /// ```
    /// use heapmap::{HeapMap, MaxFirst};
    /// use std::collections::hash_map::RandomState;
    /// let mut map =
    ///     HeapMap::with_capacity_comparator_and_hasher(10, MaxFirst, RandomState::new());
    /// map.set("Key", (), 4);
    /// ```
    #[inline]
    pub fn with_capacity_comparator_and_hasher(
        capacity: usize,
        compare: TCompare,
        hasher: S,
    ) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity, compare),
            key_to_pos: Mediator::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Reserves space for at least `additional` new elements.
    ///
    /// ### Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        self.key_to_pos.reserve(additional);
    }

    /// Shrinks allocated memory as much as possible.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.heap.shrink_to_fit();
        self.key_to_pos.shrink_to_fit();
    }

    /// Adds new entry if key is missing,
    /// otherwise replaces value and priority of existing entry and returns old ones.
    /// In second case doesn't replace key.
    ///
    /// ### Examples
    ///
    /// ```
    /// use heapmap::HeapMap;
    /// let mut map = HeapMap::new();
    /// assert_eq!(map.set(3, "Joe", 44), None);
    /// assert_eq!(map.set(3, "Joey", 45), Some(("Joe", 44)));
    /// assert_eq!(map.get(&3), Some((&"Joey", &45)));
    /// assert_eq!(map.len(), 1);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Average complexity is ***O(log n)***.
    ///
    /// The worst case is when reallocation appears.
    /// In this case complexity of single call is ***O(n)***.
    pub fn set(
        &mut self,
        key: TKey,
        value: TValue,
        priority: TPriority,
    ) -> Option<(TValue, TPriority)> {
        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;

        match key_to_pos.entry(key) {
            MediatorEntry::Vacant(entry) => {
                let outer_pos = entry.index();
                entry.insert(value, heap.len());
                heap.push(outer_pos, priority, |index, heap_idx| {
                    key_to_pos.set_heap_idx(index, heap_idx)
                });
                None
            }
            MediatorEntry::Occupied(entry) => {
                let heap_idx = entry.heap_idx();
                let old_value = entry.replace_value(value);
                let old_priority = heap.change_priority(heap_idx, priority, |index, heap_idx| {
                    key_to_pos.set_heap_idx(index, heap_idx)
                });
                Some((old_value, old_priority))
            }
        }
    }

    /// Set new priority for existing key and reorder the map.
    /// Returns old priority if succeeds or [`SetPriorityNotFoundError`].
    ///
    /// ### Examples
    ///
    /// ```
    /// use heapmap::{HeapMap, SetPriorityNotFoundError};
    /// let mut map: HeapMap<&str, (), i32> =
    ///     [("first", (), 0), ("second", (), 1), ("third", (), 2)]
    ///         .iter().cloned().collect();
    /// assert_eq!(map.set_priority("second", -5), Ok(1));
    /// assert_eq!(map.get_priority("second"), Some(&-5));
    /// assert_eq!(map.pop(), Some(("second", (), -5)));
    /// assert_eq!(map.set_priority("Missing", 5), Err(SetPriorityNotFoundError));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// In best case ***O(1)***, in average costs ***O(log n)***.
    ///
    /// [`SetPriorityNotFoundError`]: struct.SetPriorityNotFoundError.html
    pub fn set_priority<Q>(
        &mut self,
        key: &Q,
        priority: TPriority,
    ) -> Result<TPriority, SetPriorityNotFoundError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let heap_idx = match self.key_to_pos.get(key) {
            None => return Err(SetPriorityNotFoundError),
            Some(slot) => slot.heap_idx,
        };

        let key_to_pos = &mut self.key_to_pos;
        Ok(self
            .heap
            .change_priority(heap_idx, priority, |index, heap_idx| {
                key_to_pos.set_heap_idx(index, heap_idx)
            }))
    }

    /// Remove and return the entry with the top priority.
    ///
    /// ### Examples
    ///
    /// ```
    /// use heapmap::HeapMap;
    /// let mut map: HeapMap<i32, (), i32> = (0..3).map(|x| (x, (), x)).collect();
    /// assert_eq!(map.pop(), Some((0, (), 0)));
    /// assert_eq!(map.pop(), Some((1, (), 1)));
    /// assert_eq!(map.pop(), Some((2, (), 2)));
    /// assert_eq!(map.pop(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Cost of pop is always ***O(log n)***
    pub fn pop(&mut self) -> Option<(TKey, TValue, TPriority)> {
        let key_to_pos = &mut self.key_to_pos;
        let (removed_idx, priority) = self.heap.pop(|index, heap_idx| {
            key_to_pos.set_heap_idx(index, heap_idx)
        })?;
        Some(self.release_slot(removed_idx, priority))
    }

    /// Get references to the entry with the top priority.
    ///
    /// ### Examples
    ///
    /// ```
    /// use heapmap::HeapMap;
    /// let map: HeapMap<i32, &str, i32> = (0..5).map(|x| (x, "v", x)).collect();
    /// assert_eq!(map.peek(), Some((&0, &"v", &0)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    pub fn peek(&self) -> Option<(&TKey, &TValue, &TPriority)> {
        let (first_idx, heap_idx) = self.heap.most_prioritized_idx()?;
        let (key, slot) = self.key_to_pos.get_index(first_idx);
        debug_assert_eq!(slot.heap_idx, heap_idx);
        Some((key, &slot.value, self.priority_at(heap_idx)))
    }

    /// Get references to value and priority by key.
    ///
    /// ### Examples
    ///
    /// ```
    /// use heapmap::HeapMap;
    /// let mut map = HeapMap::new();
    /// map.set("first".to_string(), 'a', 0);
    /// assert_eq!(map.get("first"), Some((&'a', &0)));
    /// assert_eq!(map.get("second"), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(1)*** in average (limited by hash map key lookup).
    pub fn get<Q>(&self, key: &Q) -> Option<(&TValue, &TPriority)>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.key_to_pos.get(key)?;
        Some((&slot.value, self.priority_at(slot.heap_idx)))
    }

    /// Get references to stored key, value and priority by key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&TKey, &TValue, &TPriority)>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (_, key, slot) = self.key_to_pos.get_full(key)?;
        Some((key, &slot.value, self.priority_at(slot.heap_idx)))
    }

    /// Get reference to the value by key.
    #[inline]
    pub fn get_value<Q>(&self, key: &Q) -> Option<&TValue>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_to_pos.get(key).map(|slot| &slot.value)
    }

    /// Get mutable reference to the value by key.
    /// Values don't affect order so they can be changed in place.
    ///
    /// ### Examples
    ///
    /// ```
    /// use heapmap::HeapMap;
    /// let mut map = HeapMap::new();
    /// map.set("counter", 0, 5);
    /// *map.get_value_mut("counter").unwrap() += 1;
    /// assert_eq!(map.get_value("counter"), Some(&1));
    /// ```
    #[inline]
    pub fn get_value_mut<Q>(&mut self, key: &Q) -> Option<&mut TValue>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_to_pos.get_mut(key).map(|slot| &mut slot.value)
    }

    /// Get reference to the priority by key.
    #[inline]
    pub fn get_priority<Q>(&self, key: &Q) -> Option<&TPriority>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.key_to_pos.get(key)?;
        Some(self.priority_at(slot.heap_idx))
    }

    /// Returns true if map contains the key.
    ///
    /// ### Time complexity
    ///
    /// ***O(1)*** in average (limited by hash map key lookup).
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_to_pos.contains_key(key)
    }

    /// Removes entry by key.
    /// Returns value and priority if key was in map, otherwise does nothing.
    ///
    /// ### Examples
    ///
    /// ```
    /// use heapmap::HeapMap;
    /// let mut map: HeapMap<i32, i32, i32> = (0..5).map(|x| (x, x * 10, x)).collect();
    /// assert_eq!(map.remove(&2), Some((20, 2)));
    /// assert_eq!(map.remove(&2), None);
    /// assert_eq!(map.pop(), Some((0, 0, 0)));
    /// assert_eq!(map.pop(), Some((1, 10, 1)));
    /// // There is no 2
    /// assert_eq!(map.pop(), Some((3, 30, 3)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// On average the function will require ***O(log n)*** operations.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(TValue, TPriority)>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (_, value, priority) = self.remove_entry(key)?;
        Some((value, priority))
    }

    /// Removes entry by key.
    /// Returns stored key, value and priority if key was in map.
    #[inline]
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(TKey, TValue, TPriority)>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (index, _, _) = self.key_to_pos.get_full(key)?;
        Some(self.remove_internal(index))
    }

    /// Get the number of entries in map.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.key_to_pos.len(), self.heap.usize_len());
        self.key_to_pos.len()
    }

    /// Returns true if map is empty.
    ///
    /// ```
    /// let mut map = heapmap::HeapMap::new();
    /// assert!(map.is_empty());
    /// map.set(0, (), 5);
    /// assert!(!map.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.heap.is_empty(), self.key_to_pos.is_empty());
        self.key_to_pos.is_empty()
    }

    /// Make the map empty. Keeps allocated memory.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(n)***
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
        self.key_to_pos.clear();
    }

    /// Iterator over keys in unspecified order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, TKey, TValue> {
        Keys {
            inner: self.key_to_pos.keys(),
        }
    }

    /// Iterator over values in unspecified order.
    #[inline]
    pub fn values(&self) -> Values<'_, TKey, TValue> {
        Values {
            inner: self.key_to_pos.values(),
        }
    }

    /// Mutable iterator over values in unspecified order.
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, TKey, TValue> {
        ValuesMut {
            inner: self.key_to_pos.values_mut(),
        }
    }

    /// Create readonly borrowing iterator over entries in unspecified order.
    ///
    /// ```
    /// use heapmap::HeapMap;
    /// use std::collections::HashMap;
    /// let map: HeapMap<i32, i32, i32> = (0..5).map(|x| (x, -x, x)).collect();
    /// let mut entries = HashMap::new();
    /// for (&key, &value, &priority) in map.iter() {
    ///     entries.insert(key, (value, priority));
    /// }
    /// let second_map: HashMap<i32, (i32, i32)> = (0..5).map(|x| (x, (-x, x))).collect();
    /// assert_eq!(entries, second_map);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Iterating over whole map is ***O(n)***
    #[inline]
    pub fn iter(&self) -> Iter<'_, TKey, TValue, TPriority, TCompare> {
        Iter {
            inner: self.key_to_pos.iter(),
            heap: &self.heap,
        }
    }

    #[inline(always)]
    fn priority_at(&self, heap_idx: HeapIndex) -> &TPriority {
        self.heap
            .look_into(heap_idx)
            .expect("Must contain if key_to_pos contain")
            .1
    }

    // Removes entry by index of map
    fn remove_internal(&mut self, position: MediatorIndex) -> (TKey, TValue, TPriority) {
        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;

        let heap_to_rem = key_to_pos.heap_idx_at(position);

        let (removed_idx, priority) = heap
            .remove(heap_to_rem, |index, heap_idx| {
                key_to_pos.set_heap_idx(index, heap_idx)
            })
            .expect("Checked by key_to_pos");
        debug_assert_eq!(position, removed_idx);

        self.release_slot(removed_idx, priority)
    }

    // Drops key of entry which is already removed from heap
    fn release_slot(
        &mut self,
        position: MediatorIndex,
        priority: TPriority,
    ) -> (TKey, TValue, TPriority) {
        // Last map entry takes place of removed one, so its heap entry must point there now
        let (removed_key, Slot { value, .. }) = self.key_to_pos.swap_remove_index(position);
        if MediatorIndex(self.key_to_pos.len()) != position {
            let heap_idx_of_moved = self.key_to_pos.heap_idx_at(position);
            let old_outer_pos = self.heap.change_outer_pos(position, heap_idx_of_moved);
            debug_assert_eq!(old_outer_pos, MediatorIndex(self.key_to_pos.len()));
        }

        (removed_key, value, priority)
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert!(self.heap.is_valid(), "Heap order is broken");
        assert_eq!(self.key_to_pos.len(), self.heap.usize_len());
        for (i, (_, slot)) in self.key_to_pos.iter().enumerate() {
            let (outer_pos, _) = self
                .heap
                .look_into(slot.heap_idx)
                .expect("Key points outside of heap");
            assert_eq!(outer_pos, MediatorIndex(i), "Stale heap position");
        }
    }
}

impl<TKey, TValue, TPriority, TCompare, S> Debug for HeapMap<TKey, TValue, TPriority, TCompare, S>
where
    TKey: Hash + Eq + Debug,
    TValue: Debug,
    TPriority: Debug,
    TCompare: Compare<TPriority>,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<TKey, TValue, TPriority, TCompare, S> Default
    for HeapMap<TKey, TValue, TPriority, TCompare, S>
where
    TKey: Hash + Eq,
    TCompare: Compare<TPriority> + Default,
    S: BuildHasher + Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity_comparator_and_hasher(0, TCompare::default(), S::default())
    }
}

impl<TKey, TValue, TPriority, TCompare, S> FromIterator<(TKey, TValue, TPriority)>
    for HeapMap<TKey, TValue, TPriority, TCompare, S>
where
    TKey: Hash + Eq,
    TCompare: Compare<TPriority> + Default,
    S: BuildHasher + Default,
{
    /// Allows building map from iterator using `collect()`.
    /// If key repeats, the last value and priority are kept.
    ///
    /// ### Examples
    ///
    /// ```
    /// use heapmap::HeapMap;
    /// let mut map: HeapMap<&str, (), i32> =
    /// [("first", (), 0), ("second", (), 1), ("third", (), 2), ("first", (), 3)]
    ///                             .iter().cloned().collect();
    /// assert_eq!(map.pop(), Some(("second", (), 1)));
    /// assert_eq!(map.pop(), Some(("third", (), 2)));
    /// assert_eq!(map.pop(), Some(("first", (), 3)));
    /// assert_eq!(map.pop(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n)*** in average.
    fn from_iter<T: IntoIterator<Item = (TKey, TValue, TPriority)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let (min_size, _) = iter.size_hint();
        let mut key_to_pos = Mediator::with_capacity_and_hasher(min_size, S::default());
        let mut priorities: Vec<(MediatorIndex, TPriority)> = Vec::with_capacity(min_size);

        for (key, value, priority) in iter {
            match key_to_pos.entry(key) {
                MediatorEntry::Vacant(entry) => {
                    priorities.push((entry.index(), priority));
                    entry.insert(value, HeapIndex::PENDING);
                }
                MediatorEntry::Occupied(entry) => {
                    // Nothing removed yet, so map indexes match vector positions
                    let MediatorIndex(index) = entry.index();
                    priorities[index].1 = priority;
                    entry.replace_value(value);
                }
            }
        }

        let heap = BinaryHeap::from_unordered(priorities, TCompare::default(), |index, heap_idx| {
            key_to_pos.set_heap_idx(index, heap_idx)
        });
        Self { heap, key_to_pos }
    }
}

impl<TKey, TValue, TPriority, TCompare, S> Extend<(TKey, TValue, TPriority)>
    for HeapMap<TKey, TValue, TPriority, TCompare, S>
where
    TKey: Hash + Eq,
    TCompare: Compare<TPriority>,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (TKey, TValue, TPriority)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, value, priority) in iter {
            self.set(key, value, priority);
        }
    }
}

impl<TKey, TValue, TPriority, TCompare, S> IntoIterator
    for HeapMap<TKey, TValue, TPriority, TCompare, S>
where
    TKey: Hash + Eq,
    TCompare: Compare<TPriority>,
    S: BuildHasher,
{
    type Item = (TKey, TValue, TPriority);
    type IntoIter = IntoIter<TKey, TValue, TPriority, TCompare, S>;

    /// Make iterator that return entries in priority order.
    ///
    /// ### Examples
    ///
    /// ```
    /// use heapmap::HeapMap;
    /// let map: HeapMap<&str, (), i32> =
    ///     [("first", (), 0), ("second", (), 1), ("third", (), 2)]
    ///                             .iter().cloned().collect();
    /// let mut iterator = map.into_iter();
    /// assert_eq!(iterator.next(), Some(("first", (), 0)));
    /// assert_eq!(iterator.next(), Some(("second", (), 1)));
    /// assert_eq!(iterator.next(), Some(("third", (), 2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** for iteration.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { map: self }
    }
}

impl<'a, TKey, TValue, TPriority, TCompare, S> IntoIterator
    for &'a HeapMap<TKey, TValue, TPriority, TCompare, S>
where
    TKey: Hash + Eq,
    TCompare: Compare<TPriority>,
    S: BuildHasher,
{
    type Item = (&'a TKey, &'a TValue, &'a TPriority);
    type IntoIter = Iter<'a, TKey, TValue, TPriority, TCompare>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// This is consuming iterator that returns entries in priority order
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
pub struct IntoIter<TKey, TValue, TPriority, TCompare = MinFirst, S = RandomState>
where
    TKey: Hash + Eq,
    TCompare: Compare<TPriority>,
    S: BuildHasher,
{
    map: HeapMap<TKey, TValue, TPriority, TCompare, S>,
}

impl<TKey, TValue, TPriority, TCompare, S> Iterator
    for IntoIter<TKey, TValue, TPriority, TCompare, S>
where
    TKey: Hash + Eq,
    TCompare: Compare<TPriority>,
    S: BuildHasher,
{
    type Item = (TKey, TValue, TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.map.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.map.len(), Some(self.map.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.map.len()
    }
}

impl<TKey, TValue, TPriority, TCompare, S> ExactSizeIterator
    for IntoIter<TKey, TValue, TPriority, TCompare, S>
where
    TKey: Hash + Eq,
    TCompare: Compare<TPriority>,
    S: BuildHasher,
{
}

/// This is unordered borrowing iterator over entries.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n)***
pub struct Iter<'a, TKey, TValue, TPriority, TCompare = MinFirst> {
    inner: indexmap::map::Iter<'a, TKey, Slot<TValue>>,
    heap: &'a BinaryHeap<TPriority, TCompare>,
}

impl<'a, TKey, TValue, TPriority, TCompare> Iterator
    for Iter<'a, TKey, TValue, TPriority, TCompare>
{
    type Item = (&'a TKey, &'a TValue, &'a TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let heap = self.heap;
        self.inner.next().map(|(key, slot)| {
            let (_, priority) = heap
                .look_into(slot.heap_idx)
                .expect("Must contain if key_to_pos contain");
            (key, &slot.value, priority)
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, TKey, TValue, TPriority, TCompare> ExactSizeIterator
    for Iter<'a, TKey, TValue, TPriority, TCompare>
{
}

impl<'a, TKey, TValue, TPriority, TCompare> FusedIterator
    for Iter<'a, TKey, TValue, TPriority, TCompare>
{
}

/// Unordered iterator over keys.
pub struct Keys<'a, TKey, TValue> {
    inner: indexmap::map::Keys<'a, TKey, Slot<TValue>>,
}

impl<'a, TKey, TValue> Iterator for Keys<'a, TKey, TValue> {
    type Item = &'a TKey;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, TKey, TValue> ExactSizeIterator for Keys<'a, TKey, TValue> {}

/// Unordered iterator over values.
pub struct Values<'a, TKey, TValue> {
    inner: indexmap::map::Values<'a, TKey, Slot<TValue>>,
}

impl<'a, TKey, TValue> Iterator for Values<'a, TKey, TValue> {
    type Item = &'a TValue;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| &slot.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, TKey, TValue> ExactSizeIterator for Values<'a, TKey, TValue> {}

/// Unordered iterator over mutable references to values.
pub struct ValuesMut<'a, TKey, TValue> {
    inner: indexmap::map::ValuesMut<'a, TKey, Slot<TValue>>,
}

impl<'a, TKey, TValue> Iterator for ValuesMut<'a, TKey, TValue> {
    type Item = &'a mut TValue;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| &mut slot.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, TKey, TValue> ExactSizeIterator for ValuesMut<'a, TKey, TValue> {}

/// This is error type for [`set_priority`] method of [`HeapMap`].
/// It means that map doesn't contain such key.
///
/// [`HeapMap`]: struct.HeapMap.html
/// [`set_priority`]: struct.HeapMap.html#method.set_priority
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Default)]
pub struct SetPriorityNotFoundError;

impl Display for SetPriorityNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "Key not found in HeapMap during set_priority")
    }
}

impl std::error::Error for SetPriorityNotFoundError {}
