//! The interval-backed sparse set.

use crate::interval::IntervalIter;
use crate::{Enumerable, Enumerator, Inspect, IntervalSet, Range, RangeError, Set, Value};
use std::fmt;
use std::ops::{BitAnd, BitOr};

/// A sparse set of values stored as coalesced ranges, with the population
/// cached so that [`Inspect::len`] never walks the ranges. The cached count
/// saturates at `usize::MAX` for sets too large to count.
///
/// This suits members that cluster into runs: a million consecutive values
/// cost the same as one.
///
/// # Examples
/// ```
/// use uintset::{Inspect, Range, RangeSet, Set};
///
/// let mut set = RangeSet::new();
/// set.insert_all(&[2u64, 3, 4]);
/// set.remove_id(3);
///
/// assert_eq!(set.ranges(), &[Range::new(2, 2), Range::new(4, 4)]);
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RangeSet<V: Value> {
    set: IntervalSet<V>,
    pop: usize,
}

impl<V: Value> fmt::Debug for RangeSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RangeSet (pop {}) {:?}", self.pop, self.set.ranges())
    }
}

impl<V: Value> RangeSet<V> {
    /// Construct a new, empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from canonical `(start, end)` pairs. See
    /// [`IntervalSet::try_from_ranges`].
    pub fn try_from_ranges<I>(pairs: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        IntervalSet::try_from_ranges(pairs).map(Self::from)
    }

    /// The stored ranges in ascending order.
    pub fn ranges(&self) -> &[Range<V>] {
        self.set.ranges()
    }

    /// Iterate over a snapshot of the members in ascending order.
    pub fn iter(&self) -> IntervalIter<V> {
        self.set.iter()
    }

    #[inline(always)]
    fn insert_one(&mut self, value: V) {
        if self.set.insert(value) {
            self.pop = self.pop.saturating_add(1);
        }
    }
}

impl<V: Value> From<IntervalSet<V>> for RangeSet<V> {
    fn from(set: IntervalSet<V>) -> Self {
        let pop = set.population();
        RangeSet { set, pop }
    }
}

impl<V: Value> Set<V> for RangeSet<V> {
    fn contains(&self, value: V) -> bool {
        self.set.contains(value)
    }

    fn insert_all(&mut self, values: &[V]) {
        for v in values {
            self.insert_one(*v);
        }
    }

    fn remove_all(&mut self, values: &[V]) {
        for v in values {
            if self.set.remove(*v) {
                self.pop = match self.pop {
                    // Saturated, the true count may still exceed usize.
                    usize::MAX => self.set.population(),
                    pop => pop - 1,
                };
            }
        }
    }

    fn clear(&mut self) {
        self.set = IntervalSet::new();
        self.pop = 0;
    }
}

impl<V: Value> Inspect for RangeSet<V> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.pop
    }

    fn capacity(&self) -> usize {
        self.pop
    }
}

impl<V: Value> Enumerable<V> for RangeSet<V> {
    fn enumerate(&self) -> (Enumerator<V>, usize) {
        (Box::new(self.set.iter()), self.pop)
    }
}

impl<V: Value> FromIterator<V> for RangeSet<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut new = RangeSet::new();
        iter.into_iter().for_each(|v| new.insert_one(v));
        new
    }
}

impl<'a, V: Value> IntoIterator for &'a RangeSet<V> {
    type Item = V;
    type IntoIter = IntervalIter<V>;

    fn into_iter(self) -> IntervalIter<V> {
        self.set.iter()
    }
}

impl<V: Value> BitAnd for &RangeSet<V> {
    type Output = RangeSet<V>;

    /// Perform an And (intersection) operation between two sets, range by
    /// range. This returns a new set containing the results.
    ///
    /// # Examples
    /// ```
    /// # use uintset::RangeSet;
    /// let a: RangeSet<u32> = [1, 3, 6, 8].into_iter().collect();
    /// let b: RangeSet<u32> = [2, 4, 6, 7, 8].into_iter().collect();
    ///
    /// let expect: RangeSet<u32> = [6, 8].into_iter().collect();
    /// assert_eq!(&a & &b, expect);
    /// ```
    fn bitand(self, rhs: &RangeSet<V>) -> RangeSet<V> {
        RangeSet::from(self.set.intersection(&rhs.set))
    }
}

impl<V: Value> BitOr for &RangeSet<V> {
    type Output = RangeSet<V>;

    /// Perform an Or (union) operation between two sets, range by range.
    /// This returns a new set containing the results.
    ///
    /// # Examples
    /// ```
    /// # use uintset::{Range, RangeSet};
    /// let a: RangeSet<u32> = [1, 3, 6, 8].into_iter().collect();
    /// let b: RangeSet<u32> = [2, 4, 6, 7, 8].into_iter().collect();
    ///
    /// let c = &a | &b;
    /// assert_eq!(c.ranges(), &[Range::new(1, 4), Range::new(6, 8)]);
    /// ```
    fn bitor(self, rhs: &RangeSet<V>) -> RangeSet<V> {
        RangeSet::from(self.set.union(&rhs.set))
    }
}

impl<V: Value> BitAnd for RangeSet<V> {
    type Output = RangeSet<V>;

    fn bitand(self, rhs: RangeSet<V>) -> RangeSet<V> {
        &self & &rhs
    }
}

impl<V: Value> BitOr for RangeSet<V> {
    type Output = RangeSet<V>;

    fn bitor(self, rhs: RangeSet<V>) -> RangeSet<V> {
        &self | &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::RangeSet;
    use crate::{and, or, Enumerable, Inspect, Range, Set};

    #[test]
    fn test_range_set_insert_remove() {
        let mut s = RangeSet::new();
        s.insert_all(&[4u32, 5]);
        s.remove_all(&[6]);
        assert_eq!(s.ranges(), &[Range::new(4, 5)]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_range_set_split() {
        let mut s = RangeSet::new();
        s.insert_all(&[2u32, 3, 4]);
        assert_eq!(s.ranges(), &[Range::new(2, 4)]);

        s.remove_id(3);
        assert_eq!(s.ranges(), &[Range::new(2, 2), Range::new(4, 4)]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_range_set_pop_tracks_duplicates() {
        let mut s = RangeSet::new();
        s.insert_all(&[1u16, 1, 2, 2, 3]);
        assert_eq!(s.len(), 3);
        s.remove_all(&[2, 2, 9]);
        assert_eq!(s.len(), 2);
        s.clear();
        assert!(s.is_empty());
        assert!(s.ranges().is_empty());
        assert!(!s.contains(1));
    }

    #[test]
    fn test_range_set_pop_saturates_on_insert() {
        let mut s = RangeSet::<u64>::try_from_ranges([(0, u64::MAX - 1)]).unwrap();
        assert_eq!(s.len(), usize::MAX);

        s.insert_id(u64::MAX);
        assert_eq!(s.len(), usize::MAX);
        assert!(!s.is_empty());
        assert_eq!(s.ranges(), &[Range::new(0, u64::MAX)]);

        let mut t: RangeSet<u128> = RangeSet::try_from_ranges([(0, 1 << 70)]).unwrap();
        t.insert_all(&[(1 << 70) + 1, 1 << 90]);
        assert_eq!(t.len(), usize::MAX);
    }

    #[test]
    fn test_range_set_pop_saturates_on_remove() {
        let mut s = RangeSet::<u128>::try_from_ranges([(0, 1 << 70)]).unwrap();
        s.remove_id(7);
        s.remove_id(1 << 69);
        assert_eq!(s.len(), usize::MAX);
        assert!(!s.contains(7));

        // Back under the limit, counting resumes exactly.
        let mut r = RangeSet::<u128>::try_from_ranges([(0, 3)]).unwrap();
        r.insert_id(10);
        r.remove_all(&[0, 10]);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn test_range_set_pop_leaves_saturation() {
        let top = usize::MAX as u128;
        // Exactly usize::MAX members.
        let mut s = RangeSet::<u128>::try_from_ranges([(1, top)]).unwrap();
        assert_eq!(s.len(), usize::MAX);

        s.remove_id(5);
        assert_eq!(s.len(), usize::MAX - 1);
        s.insert_id(5);
        assert_eq!(s.len(), usize::MAX);
    }

    #[test]
    fn test_range_set_enumerate() {
        let mut s = RangeSet::new();
        s.insert_all(&[1u32, 2, 4, 5, 6, 7, 8]);
        assert_eq!(s.ranges(), &[Range::new(1, 2), Range::new(4, 8)]);

        let (it, size) = s.enumerate();
        assert_eq!(size, 7);
        assert_eq!(it.collect::<Vec<_>>(), vec![1, 2, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_range_set_logical() {
        let a: RangeSet<u32> = [1, 3, 6, 8].into_iter().collect();
        let b: RangeSet<u32> = [2, 4, 6, 7, 8].into_iter().collect();

        let a_and_b = &a & &b;
        let a_or_b = &a | &b;

        assert_eq!(a_and_b.ranges(), &[Range::new(6, 6), Range::new(8, 8)]);
        assert_eq!(a_or_b.ranges(), &[Range::new(1, 4), Range::new(6, 8)]);
        assert_eq!(a_and_b.len(), 2);
        assert_eq!(a_or_b.len(), 7);

        // Fast paths agree with the generic merge.
        assert_eq!(a_and_b.values(), and(&a, &b).values());
        assert_eq!(a_or_b.values(), or(&a, &b).values());
    }

    #[test]
    fn test_range_set_mixin() {
        let s: RangeSet<u32> = [10, 11, 12, 40].into_iter().collect();
        assert!(s.any(&[1, 2, 40]));
        assert!(!s.any(&[13, 39]));
        assert!(s.all(&[10, 12, 40]));
        assert!(!s.all(&[10, 13]));
        assert!(s.contains_any(&[99, 11]));
        assert!(s.contains_all(&[40, 11]));
    }

    #[test]
    fn test_range_set_try_from_ranges() {
        let s = RangeSet::try_from_ranges([(1u32, 2), (4, 8), (11, 15)]).unwrap();
        assert_eq!(s.len(), 12);
        assert!(RangeSet::try_from_ranges([(4u32, 8), (1, 2)]).is_err());
    }
}
