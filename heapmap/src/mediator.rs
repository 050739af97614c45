use crate::editable_binary_heap::HeapIndex;
use indexmap::map::{IndexMap, OccupiedEntry as IMOccupiedEntry, VacantEntry as IMVacantEntry};
use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

/// Wrapper around possible outer vec index
/// Used to avoid mux up with heap index
/// And to make sure that `Mediator` indexed only with MediatorIndex
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct MediatorIndex(pub(crate) usize);

/// Value stored near the key: user value and current heap position of priority.
#[derive(Clone)]
pub(crate) struct Slot<TValue> {
    pub(crate) value: TValue,
    pub(crate) heap_idx: HeapIndex,
}

/// This is wrapper over indexmap that uses `MediatorIndex` as index.
/// Also it centralized checking for panics
#[derive(Clone)]
pub(crate) struct Mediator<TKey, TValue, S> {
    map: IndexMap<TKey, Slot<TValue>, S>,
}

pub(crate) struct VacantEntry<'a, TKey, TValue>(IMVacantEntry<'a, TKey, Slot<TValue>>);
pub(crate) struct OccupiedEntry<'a, TKey, TValue>(IMOccupiedEntry<'a, TKey, Slot<TValue>>);
pub(crate) enum MediatorEntry<'a, TKey, TValue> {
    Vacant(VacantEntry<'a, TKey, TValue>),
    Occupied(OccupiedEntry<'a, TKey, TValue>),
}

impl<TKey, TValue, S> Mediator<TKey, TValue, S>
where
    TKey: Hash + Eq,
    S: BuildHasher,
{
    #[inline(always)]
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            map: IndexMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional)
    }

    #[inline(always)]
    pub(crate) fn shrink_to_fit(&mut self) {
        self.map.shrink_to_fit()
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.map.clear()
    }

    #[inline(always)]
    pub(crate) fn get_index(
        &self,
        MediatorIndex(position): MediatorIndex,
    ) -> (&TKey, &Slot<TValue>) {
        self.map
            .get_index(position)
            .expect("All mediator indexes must be valid")
    }

    #[inline(always)]
    pub(crate) fn heap_idx_at(&self, position: MediatorIndex) -> HeapIndex {
        self.get_index(position).1.heap_idx
    }

    /// The only way heap positions are written back after heap moves.
    #[inline(always)]
    pub(crate) fn set_heap_idx(
        &mut self,
        MediatorIndex(position): MediatorIndex,
        heap_idx: HeapIndex,
    ) {
        self.map
            .get_index_mut(position)
            .expect("All mediator indexes must be valid")
            .1
            .heap_idx = heap_idx;
    }

    #[inline(always)]
    pub(crate) fn entry(&mut self, key: TKey) -> MediatorEntry<TKey, TValue> {
        match self.map.entry(key) {
            indexmap::map::Entry::Occupied(v) => MediatorEntry::Occupied(OccupiedEntry(v)),
            indexmap::map::Entry::Vacant(v) => MediatorEntry::Vacant(VacantEntry(v)),
        }
    }

    #[inline(always)]
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&Slot<TValue>>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    #[inline(always)]
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut Slot<TValue>>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get_mut(key)
    }

    #[inline(always)]
    pub(crate) fn get_full<'a, Q>(
        &'a self,
        key: &Q,
    ) -> Option<(MediatorIndex, &'a TKey, &'a Slot<TValue>)>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map
            .get_full(key)
            .map(|(idx, key, slot)| (MediatorIndex(idx), key, slot))
    }

    #[inline(always)]
    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Removes entry by moving last one into its place.
    /// Caller must repoint heap entry of moved key if any.
    #[inline(always)]
    pub(crate) fn swap_remove_index(
        &mut self,
        MediatorIndex(index): MediatorIndex,
    ) -> (TKey, Slot<TValue>) {
        self.map
            .swap_remove_index(index)
            .expect("All mediator indexes must be valid")
    }

    #[inline(always)]
    pub(crate) fn iter(&self) -> indexmap::map::Iter<'_, TKey, Slot<TValue>> {
        self.map.iter()
    }

    #[inline(always)]
    pub(crate) fn keys(&self) -> indexmap::map::Keys<'_, TKey, Slot<TValue>> {
        self.map.keys()
    }

    #[inline(always)]
    pub(crate) fn values(&self) -> indexmap::map::Values<'_, TKey, Slot<TValue>> {
        self.map.values()
    }

    #[inline(always)]
    pub(crate) fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, TKey, Slot<TValue>> {
        self.map.values_mut()
    }
}

impl<'a, TKey: 'a, TValue: 'a> VacantEntry<'a, TKey, TValue> {
    #[inline(always)]
    pub(crate) fn insert(self, value: TValue, heap_idx: HeapIndex) {
        self.0.insert(Slot { value, heap_idx });
    }

    #[inline(always)]
    pub(crate) fn index(&self) -> MediatorIndex {
        MediatorIndex(self.0.index())
    }
}

impl<'a, TKey: 'a, TValue: 'a> OccupiedEntry<'a, TKey, TValue> {
    #[inline(always)]
    pub(crate) fn index(&self) -> MediatorIndex {
        MediatorIndex(self.0.index())
    }

    #[inline(always)]
    pub(crate) fn heap_idx(&self) -> HeapIndex {
        self.0.get().heap_idx
    }

    /// Replaces stored value, keeps key and heap position
    #[inline(always)]
    pub(crate) fn replace_value(mut self, value: TValue) -> TValue {
        std::mem::replace(&mut self.0.get_mut().value, value)
    }
}
