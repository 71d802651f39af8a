//! The coalescing interval set: a sparse set stored as a sorted list of
//! disjoint, maximal closed ranges. Runs of consecutive members cost one
//! range regardless of their length, so inserts, removals and lookups are
//! linear in the number of runs rather than the number of members.

use crate::range::RangeIter;
use crate::{Range, RangeError, Value};
use smallvec::SmallVec;
use std::cmp::{max, min};
use std::fmt;

/// Number of ranges kept inline before spilling into the heap. Sets that are
/// one or two runs (a contiguous block, or a block plus a tail) never allocate.
const DEFAULT_INLINE_RANGES: usize = 2;

type RangeList<V> = SmallVec<[Range<V>; DEFAULT_INLINE_RANGES]>;

/// An ordered sequence of disjoint, maximal [`Range`]s.
///
/// After every mutation the ranges are sorted ascending by start, no two
/// ranges overlap, and no range ends directly before the next one begins.
/// This makes the representation of any membership unique, so two interval
/// sets are equal exactly when their ranges are.
///
/// # Examples
/// ```
/// use uintset::{IntervalSet, Range};
///
/// let mut set = IntervalSet::new();
/// for v in [4u32, 7, 2, 3] {
///     set.insert(v);
/// }
/// assert_eq!(set.ranges(), &[Range::new(2, 4), Range::new(7, 7)]);
///
/// set.remove(3);
/// assert_eq!(set.ranges(), &[Range::new(2, 2), Range::new(4, 4), Range::new(7, 7)]);
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub struct IntervalSet<V: Value> {
    ranges: RangeList<V>,
}

impl<V: Value> fmt::Debug for IntervalSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntervalSet {:?}", self.ranges.as_slice())
    }
}

impl<V: Value> IntervalSet<V> {
    /// Construct a new, empty set.
    pub fn new() -> Self {
        IntervalSet {
            ranges: SmallVec::new(),
        }
    }

    /// Build a set from `(start, end)` pairs that are already in canonical
    /// form: each pair has `start <= end`, pairs are ascending and disjoint,
    /// and no pair begins directly after the previous one ends.
    ///
    /// ```
    /// use uintset::{IntervalSet, RangeError};
    ///
    /// let set = IntervalSet::try_from_ranges([(1u8, 2), (4, 8), (11, 15)]).unwrap();
    /// assert_eq!(set.population(), 12);
    ///
    /// let err = IntervalSet::try_from_ranges([(1u8, 2), (3, 8)]).unwrap_err();
    /// assert_eq!(err, RangeError::Touching { index: 1 });
    /// ```
    pub fn try_from_ranges<I>(pairs: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut ranges = RangeList::new();
        for (index, (start, end)) in pairs.into_iter().enumerate() {
            let r = Range::try_new(start, end).ok_or(RangeError::Inverted { index })?;
            if let Some(last) = ranges.last() {
                let err = if last.end >= r.start {
                    Some(RangeError::Unordered { index })
                } else if last.touches(&r) {
                    Some(RangeError::Touching { index })
                } else {
                    None
                };
                if let Some(err) = err {
                    debug!("rejecting interval set input: {}", err);
                    return Err(err);
                }
            }
            ranges.push(r);
        }
        Ok(IntervalSet { ranges })
    }

    /// The stored ranges in ascending order.
    pub fn ranges(&self) -> &[Range<V>] {
        self.ranges.as_slice()
    }

    /// The number of stored ranges.
    pub fn len_ranges(&self) -> usize {
        self.ranges.len()
    }

    /// Show if this set contains no members.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the number of members by summing each range's length. This
    /// walks every range; [`RangeSet`](crate::RangeSet) caches this count.
    pub fn population(&self) -> usize {
        self.ranges
            .iter()
            .fold(0usize, |acc, r| acc.saturating_add(r.len()))
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.ranges = RangeList::new();
    }

    /// Returns `true` if `value` is a member.
    pub fn contains(&self, value: V) -> bool {
        for r in self.ranges.iter() {
            if r.start > value {
                // Sorted, so no later range can hold it either.
                return false;
            }
            if r.contains(value) {
                return true;
            }
        }
        false
    }

    /// Add `value`, coalescing it into a neighbouring range where it touches
    /// one. Returns `true` if it was not already a member.
    pub fn insert(&mut self, value: V) -> bool {
        for idx in 0..self.ranges.len() {
            let r = self.ranges[idx];

            if r.contains(value) {
                return false;
            }

            if r.start.predecessor() == Some(value) {
                // The range before this one ends below value - 1, otherwise
                // value would have extended it, so there is nothing to merge.
                self.ranges[idx].start = value;
                return true;
            }

            if r.start > value {
                // Past every earlier range without touching it.
                self.ranges.insert(idx, Range::singleton(value));
                return true;
            }

            if r.end.successor() == Some(value) {
                self.ranges[idx].end = value;
                if let Some(next) = self.ranges.get(idx + 1).copied() {
                    if value.successor() == Some(next.start) {
                        // value bridged the gap, absorb the next range.
                        self.ranges[idx].end = next.end;
                        self.ranges.remove(idx + 1);
                    }
                }
                return true;
            }
        }

        // Greater than every range, or the set is empty.
        self.ranges.push(Range::singleton(value));
        true
    }

    /// Remove `value`, shrinking or splitting the range that holds it.
    /// Returns `true` if it was a member.
    pub fn remove(&mut self, value: V) -> bool {
        for idx in 0..self.ranges.len() {
            let r = self.ranges[idx];

            if r.start > value {
                return false;
            }

            if r.start == value {
                if r.start == r.end {
                    self.ranges.remove(idx);
                } else {
                    self.ranges[idx].start = value + V::one();
                }
                return true;
            }

            if r.end == value {
                // start < end here, the single member case matched above.
                self.ranges[idx].end = value - V::one();
                return true;
            }

            if r.contains(value) {
                self.ranges[idx].end = value - V::one();
                self.ranges.insert(
                    idx + 1,
                    Range {
                        start: value + V::one(),
                        end: r.end,
                    },
                );
                return true;
            }
        }
        false
    }

    /// Iterate over a snapshot of the members in ascending order. The
    /// iterator owns a copy of the ranges, so the set may be changed while
    /// it is in use.
    pub fn iter(&self) -> IntervalIter<V> {
        IntervalIter {
            ranges: self.ranges.clone().into_iter(),
            current: RangeIter::empty(),
        }
    }

    /// The members present in both sets, computed range by range.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut nlist = RangeList::new();

        let mut liter = self.ranges.iter();
        let mut riter = other.ranges.iter();

        let mut lnext = liter.next();
        let mut rnext = riter.next();

        while let (Some(l), Some(r)) = (lnext, rnext) {
            let start = max(l.start, r.start);
            let end = min(l.end, r.end);
            if start <= end {
                // Pieces of two canonical sets can never touch, so each
                // overlap is already maximal.
                nlist.push(Range { start, end });
            }

            if l.end <= r.end {
                lnext = liter.next();
            }
            if r.end <= l.end {
                rnext = riter.next();
            }
        }

        IntervalSet { ranges: nlist }
    }

    /// The members present in either set, coalescing ranges that overlap or
    /// touch across the two inputs.
    pub fn union(&self, other: &Self) -> Self {
        let mut nlist = RangeList::with_capacity(self.ranges.len() + other.ranges.len());

        let mut liter = self.ranges.iter();
        let mut riter = other.ranges.iter();

        let mut lnext = liter.next();
        let mut rnext = riter.next();

        loop {
            let candidate = match (lnext, rnext) {
                (Some(l), Some(r)) if l.start <= r.start => {
                    lnext = liter.next();
                    *l
                }
                (Some(_), Some(r)) => {
                    rnext = riter.next();
                    *r
                }
                (Some(l), None) => {
                    lnext = liter.next();
                    *l
                }
                (None, Some(r)) => {
                    rnext = riter.next();
                    *r
                }
                (None, None) => break,
            };
            push_coalesced(&mut nlist, candidate);
        }

        nlist.shrink_to_fit();
        IntervalSet { ranges: nlist }
    }
}

/// Append `candidate` to a list sorted by start, merging it into the last
/// range if they overlap or touch.
fn push_coalesced<V: Value>(list: &mut RangeList<V>, candidate: Range<V>) {
    if let Some(last) = list.last_mut() {
        if candidate.start <= last.end || last.touches(&candidate) {
            if candidate.end > last.end {
                last.end = candidate.end;
            }
            return;
        }
    }
    list.push(candidate);
}

impl<V: Value> FromIterator<V> for IntervalSet<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut new = IntervalSet::new();
        iter.into_iter().for_each(|v| {
            new.insert(v);
        });
        new
    }
}

impl<'a, V: Value> IntoIterator for &'a IntervalSet<V> {
    type Item = V;
    type IntoIter = IntervalIter<V>;

    fn into_iter(self) -> IntervalIter<V> {
        self.iter()
    }
}

/// An ascending iterator over a snapshot of an [`IntervalSet`].
#[derive(Debug)]
pub struct IntervalIter<V: Value> {
    ranges: smallvec::IntoIter<[Range<V>; DEFAULT_INLINE_RANGES]>,
    current: RangeIter<V>,
}

impl<V: Value> Iterator for IntervalIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        loop {
            if let Some(v) = self.current.next() {
                return Some(v);
            }
            self.current = self.ranges.next()?.iter();
        }
    }
}

impl<V: Value> std::iter::FusedIterator for IntervalIter<V> {}
