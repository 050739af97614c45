/// Ordering used by [`HeapMap`] to decide which priority sits closer to the top.
///
/// `precedes(a, b)` must return `true` only if an entry with priority `a`
/// has to be popped before an entry with priority `b`.
/// It should behave like a strict "less than": never true for both `(a, b)` and `(b, a)`.
/// Entries for which neither precedes the other are popped in unspecified order.
///
/// It is implemented for closures `Fn(&P, &P) -> bool`,
/// and for [`MinFirst`] and [`MaxFirst`] for priorities which implement `Ord`.
///
/// ### Examples
///
/// ```
/// use heapmap::HeapMap;
///
/// // Shortest strings first
/// let mut map = HeapMap::with_comparator(|a: &&str, b: &&str| a.len() < b.len());
/// map.set(1, (), "long one");
/// map.set(2, (), "tiny");
/// assert_eq!(map.peek(), Some((&2, &(), &"tiny")));
/// ```
///
/// [`HeapMap`]: struct.HeapMap.html
/// [`MinFirst`]: struct.MinFirst.html
/// [`MaxFirst`]: struct.MaxFirst.html
pub trait Compare<TPriority: ?Sized> {
    /// Returns true if `a` must be popped before `b`.
    fn precedes(&self, a: &TPriority, b: &TPriority) -> bool;
}

impl<TPriority: ?Sized, F> Compare<TPriority> for F
where
    F: Fn(&TPriority, &TPriority) -> bool,
{
    #[inline(always)]
    fn precedes(&self, a: &TPriority, b: &TPriority) -> bool {
        self(a, b)
    }
}

/// Pops the smallest priority first.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MinFirst;

/// Pops the biggest priority first.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MaxFirst;

impl<TPriority: Ord + ?Sized> Compare<TPriority> for MinFirst {
    #[inline(always)]
    fn precedes(&self, a: &TPriority, b: &TPriority) -> bool {
        a < b
    }
}

impl<TPriority: Ord + ?Sized> Compare<TPriority> for MaxFirst {
    #[inline(always)]
    fn precedes(&self, a: &TPriority, b: &TPriority) -> bool {
        a > b
    }
}
