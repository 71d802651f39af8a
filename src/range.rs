//! A closed interval of set members.

use crate::Value;
use std::fmt;

/// A closed interval `[start, end]` of values, holding every value between
/// both bounds inclusive.
///
/// # Invariants
/// `start <= end`. Ranges are only ever built through [`Range::new`] or
/// [`Range::try_new`], so an inverted range cannot be observed.
///
/// # Examples
/// ```
/// use uintset::Range;
///
/// let r = Range::new(4u32, 8);
/// assert!(r.contains(4));
/// assert!(r.contains(8));
/// assert!(!r.contains(9));
/// assert_eq!(r.len(), 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<V: Value> {
    pub(crate) start: V,
    pub(crate) end: V,
}

impl<V: Value> fmt::Debug for Range<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.start, self.end)
    }
}

impl<V: Value> Range<V> {
    /// Create the range `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[inline]
    pub fn new(start: V, end: V) -> Self {
        assert!(
            start <= end,
            "Invalid range: start must be less than or equal to end"
        );
        Range { start, end }
    }

    /// Create the range `[start, end]`, or `None` if `start > end`.
    #[inline]
    pub fn try_new(start: V, end: V) -> Option<Self> {
        if start <= end {
            Some(Range { start, end })
        } else {
            None
        }
    }

    /// A range holding only `value`.
    #[inline]
    pub fn singleton(value: V) -> Self {
        Range {
            start: value,
            end: value,
        }
    }

    /// The lowest member.
    #[inline]
    pub fn start(&self) -> V {
        self.start
    }

    /// The highest member.
    #[inline]
    pub fn end(&self) -> V {
        self.end
    }

    /// Returns `true` if `value` lies within `[start, end]`.
    #[inline]
    pub fn contains(&self, value: V) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if `start <= end`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// The number of members. Saturates at `usize::MAX` for ranges wider
    /// than the address space.
    #[inline]
    pub fn len(&self) -> usize {
        (self.end - self.start)
            .to_usize()
            .and_then(|d| d.checked_add(1))
            .unwrap_or(usize::MAX)
    }

    /// Always `false`: a range holds at least one member.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `next` begins directly after this range ends, so the
    /// two would coalesce into one.
    #[inline]
    pub(crate) fn touches(&self, next: &Self) -> bool {
        self.end.successor() == Some(next.start)
    }

    /// Iterate over every member in ascending order.
    pub fn iter(&self) -> RangeIter<V> {
        RangeIter {
            next: Some(*self),
        }
    }
}

impl<V: Value> RangeIter<V> {
    pub(crate) fn empty() -> Self {
        RangeIter { next: None }
    }
}

impl<V: Value> IntoIterator for Range<V> {
    type Item = V;
    type IntoIter = RangeIter<V>;

    fn into_iter(self) -> RangeIter<V> {
        self.iter()
    }
}

/// An iterator over the members of a [`Range`].
#[derive(Debug, Clone)]
pub struct RangeIter<V: Value> {
    // The members not yet yielded, or `None` once the last one is out.
    next: Option<Range<V>>,
}

impl<V: Value> Iterator for RangeIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        let rem = self.next.as_mut()?;
        let value = rem.start;
        if rem.start == rem.end {
            self.next = None;
        } else {
            rem.start = rem.start + V::one();
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.next {
            Some(r) => (r.len(), Some(r.len())),
            None => (0, Some(0)),
        }
    }
}
