//! The hashed sparse set.

use crate::{Enumerable, Enumerator, Inspect, Set, Value};
use rustc_hash::FxHashSet;
use std::fmt;
use std::ops::{BitAnd, BitOr};

/// A sparse set over a hash table. Membership checks are constant time
/// regardless of how values are spread, at the cost of sorting a snapshot
/// whenever the set is enumerated.
///
/// # Examples
/// ```
/// use uintset::{Enumerable, HashedSet, Set};
///
/// let mut set = HashedSet::new();
/// set.insert_all(&[900u64, 3, 1 << 40]);
/// assert!(set.contains(1 << 40));
/// assert_eq!(set.values(), vec![3, 900, 1 << 40]);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HashedSet<V: Value> {
    values: FxHashSet<V>,
}

impl<V: Value> HashedSet<V> {
    /// Construct a new, empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new, empty set with room for `size` members.
    pub fn with_capacity(size: usize) -> Self {
        HashedSet {
            values: FxHashSet::with_capacity_and_hasher(size, Default::default()),
        }
    }

    /// The members in ascending order.
    fn sorted(&self) -> Vec<V> {
        // Hash order is arbitrary, every other representation is ascending.
        let mut keys: Vec<V> = self.values.iter().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Order the two sets by size, smallest first.
    fn by_size<'a>(&'a self, other: &'a Self) -> (&'a Self, &'a Self) {
        if self.values.len() > other.values.len() {
            (other, self)
        } else {
            (self, other)
        }
    }
}

impl<V: Value> Set<V> for HashedSet<V> {
    fn contains(&self, value: V) -> bool {
        self.values.contains(&value)
    }

    fn insert_all(&mut self, values: &[V]) {
        self.values.extend(values.iter().copied());
    }

    fn remove_all(&mut self, values: &[V]) {
        for v in values {
            self.values.remove(v);
        }
    }

    fn clear(&mut self) {
        self.values = FxHashSet::default();
    }
}

impl<V: Value> Inspect for HashedSet<V> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.values.len()
    }

    fn capacity(&self) -> usize {
        self.values.capacity()
    }
}

impl<V: Value> Enumerable<V> for HashedSet<V> {
    fn enumerate(&self) -> (Enumerator<V>, usize) {
        (Box::new(self.sorted().into_iter()), self.values.len())
    }
}

impl<V: Value> fmt::Debug for HashedSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashedSet {:?}", self.sorted())
    }
}

impl<V: Value> FromIterator<V> for HashedSet<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        HashedSet {
            values: iter.into_iter().collect(),
        }
    }
}

impl<V: Value> BitAnd for &HashedSet<V> {
    type Output = HashedSet<V>;

    /// Perform an And (intersection) operation by probing the larger set with
    /// each member of the smaller.
    fn bitand(self, rhs: &HashedSet<V>) -> HashedSet<V> {
        let (short, long) = self.by_size(rhs);
        HashedSet {
            values: short
                .values
                .iter()
                .filter(|v| long.values.contains(*v))
                .copied()
                .collect(),
        }
    }
}

impl<V: Value> BitOr for &HashedSet<V> {
    type Output = HashedSet<V>;

    /// Perform an Or (union) operation by cloning the larger set and adding
    /// the members of the smaller.
    fn bitor(self, rhs: &HashedSet<V>) -> HashedSet<V> {
        let (short, long) = self.by_size(rhs);
        let mut values = long.values.clone();
        values.extend(short.values.iter().copied());
        HashedSet { values }
    }
}
