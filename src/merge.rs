//! Intersection and union over any mix of [`Enumerable`] sources.
//!
//! These never look at how a source stores its members: each source is read
//! only through its enumerator, one ascending value at a time, as a k-way
//! sorted merge. Every source snapshots itself when enumerated, so a merge
//! never holds more than one source's lock at once.

use crate::{Enumerable, Enumerator, Value};
use smallvec::SmallVec;
use std::fmt;

/// Number of merge inputs tracked inline before spilling into the heap.
const DEFAULT_INLINE_SOURCES: usize = 4;

type Sources<'a, V> = SmallVec<[&'a dyn Enumerable<V>; DEFAULT_INLINE_SOURCES]>;
type Peeks<V> = SmallVec<[Peek<V>; DEFAULT_INLINE_SOURCES]>;

/// An enumerator that remembers the last value it produced.
struct Peek<V: Value> {
    iter: Enumerator<V>,
    curr: V,
}

impl<V: Value> Peek<V> {
    /// Pull the first value, or `None` if the enumerator is already empty.
    fn start(mut iter: Enumerator<V>) -> Option<Self> {
        let curr = iter.next()?;
        Some(Peek { iter, curr })
    }

    /// Move to the next value. Returns `false` once exhausted, leaving
    /// `curr` at the last value.
    #[inline(always)]
    fn advance(&mut self) -> bool {
        match self.iter.next() {
            Some(v) => {
                self.curr = v;
                true
            }
            None => false,
        }
    }
}

/// The intersection of a group of sources, itself [`Enumerable`].
///
/// The reported size is the smallest size any source reports.
///
/// # Examples
/// ```
/// use uintset::{And, BitSet, BoolSet, Enumerable, RangeSet};
///
/// let a: BitSet<u32> = [1, 2, 4, 8, 16, 22].into_iter().collect();
/// let b: BoolSet<u32> = [2, 4, 6, 8, 10, 22].into_iter().collect();
/// let c: RangeSet<u32> = [1, 2, 3, 5, 8, 11, 13, 22].into_iter().collect();
///
/// let and = And::new(&[&a, &b, &c]);
/// assert_eq!(and.values(), vec![2, 8, 22]);
/// ```
pub struct And<'a, V: Value> {
    sources: Sources<'a, V>,
}

/// The union of a group of sources, itself [`Enumerable`].
///
/// The reported size is the sum of every source's size.
///
/// # Examples
/// ```
/// use uintset::{BitSet, Enumerable, HashedSet, Or};
///
/// let a: BitSet<u32> = [1, 4, 9].into_iter().collect();
/// let b: HashedSet<u32> = [4, 5].into_iter().collect();
///
/// let or = Or::new(&[&a, &b]);
/// assert_eq!(or.values(), vec![1, 4, 5, 9]);
/// assert_eq!(or.enumerate().1, 5);
/// ```
pub struct Or<'a, V: Value> {
    sources: Sources<'a, V>,
}

/// Intersect two sources. Use [`And::new`] for more.
pub fn and<'a, V: Value>(a: &'a dyn Enumerable<V>, b: &'a dyn Enumerable<V>) -> And<'a, V> {
    And::new(&[a, b])
}

/// Unite two sources. Use [`Or::new`] for more.
pub fn or<'a, V: Value>(a: &'a dyn Enumerable<V>, b: &'a dyn Enumerable<V>) -> Or<'a, V> {
    Or::new(&[a, b])
}

impl<'a, V: Value> And<'a, V> {
    /// Intersect every source in `sources`. With no sources the result is
    /// empty.
    pub fn new(sources: &[&'a dyn Enumerable<V>]) -> Self {
        And {
            sources: sources.iter().copied().collect(),
        }
    }

    /// Add another source to the group.
    pub fn with(mut self, source: &'a dyn Enumerable<V>) -> Self {
        self.sources.push(source);
        self
    }

    /// Create the merging iterator directly, with the size bound.
    pub fn iter(&self) -> (AndIter<V>, usize) {
        let mut peeks = Peeks::with_capacity(self.sources.len());
        if self.sources.is_empty() {
            return (AndIter { peeks }, 0);
        }

        let mut min = usize::MAX;
        for source in self.sources.iter() {
            let (it, size) = source.enumerate();
            if size == 0 {
                trace!("and: source reports no members, intersection is empty");
                return (AndIter { peeks: Peeks::new() }, 0);
            }
            min = min.min(size);
            match Peek::start(it) {
                Some(peek) => peeks.push(peek),
                None => {
                    trace!("and: source yields no members, intersection is empty");
                    return (AndIter { peeks: Peeks::new() }, 0);
                }
            }
        }

        trace!("and: {} sources, size bound {}", self.sources.len(), min);
        (AndIter { peeks }, min)
    }
}

impl<'a, V: Value> Or<'a, V> {
    /// Unite every source in `sources`. With no sources the result is empty.
    pub fn new(sources: &[&'a dyn Enumerable<V>]) -> Self {
        Or {
            sources: sources.iter().copied().collect(),
        }
    }

    /// Add another source to the group.
    pub fn with(mut self, source: &'a dyn Enumerable<V>) -> Self {
        self.sources.push(source);
        self
    }

    /// Create the merging iterator directly, with the size bound.
    pub fn iter(&self) -> (OrIter<V>, usize) {
        let mut peeks = Peeks::with_capacity(self.sources.len());
        let mut max = 0usize;

        for source in self.sources.iter() {
            let (it, size) = source.enumerate();
            max = max.saturating_add(size);
            // Empty sources contribute nothing.
            if let Some(peek) = Peek::start(it) {
                peeks.push(peek);
            }
        }

        trace!("or: {} sources, size bound {}", self.sources.len(), max);
        (OrIter { peeks }, max)
    }
}

impl<'a, V: Value> Enumerable<V> for And<'a, V> {
    fn enumerate(&self) -> (Enumerator<V>, usize) {
        let (it, size) = self.iter();
        (Box::new(it), size)
    }
}

impl<'a, V: Value> Enumerable<V> for Or<'a, V> {
    fn enumerate(&self) -> (Enumerator<V>, usize) {
        let (it, size) = self.iter();
        (Box::new(it), size)
    }
}

impl<'a, V: Value> fmt::Debug for And<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "And ({} sources)", self.sources.len())
    }
}

impl<'a, V: Value> fmt::Debug for Or<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Or ({} sources)", self.sources.len())
    }
}

/// Yields the ascending intersection of its inputs. Once any input runs
/// out, no further common value is possible and the iterator is done.
pub struct AndIter<V: Value> {
    // Empty once exhausted.
    peeks: Peeks<V>,
}

impl<V: Value> Iterator for AndIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        loop {
            let first = self.peeks.first()?.curr;
            let (lo, hi) = self
                .peeks
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(p.curr), hi.max(p.curr)));

            if lo == hi {
                // Every input agrees on this value.
                if self.peeks.iter_mut().any(|p| !p.advance()) {
                    self.peeks.clear();
                }
                return Some(lo);
            }

            // Move every input sitting on the lowest value up.
            if self
                .peeks
                .iter_mut()
                .filter(|p| p.curr == lo)
                .any(|p| !p.advance())
            {
                self.peeks.clear();
                return None;
            }
        }
    }
}

impl<V: Value> fmt::Debug for AndIter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AndIter ({} live)", self.peeks.len())
    }
}

/// Yields the ascending union of its inputs, each value once.
pub struct OrIter<V: Value> {
    // Inputs that still have values.
    peeks: Peeks<V>,
}

impl<V: Value> Iterator for OrIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        let lo = self.peeks.iter().map(|p| p.curr).min()?;
        // Advance every input holding lo so it is only emitted once, and
        // drop the inputs that run out.
        self.peeks.retain(|p| p.curr != lo || p.advance());
        Some(lo)
    }
}

impl<V: Value> fmt::Debug for OrIter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrIter ({} live)", self.peeks.len())
    }
}
