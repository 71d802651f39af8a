//! A reader/writer locked set for sharing between threads.

use crate::{Enumerable, Enumerator, Inspect, Set, Value};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Wraps any set behind a reader/writer lock so it can be used through a
/// shared reference.
///
/// Membership tests, size queries and enumeration take the read lock;
/// insertion, removal and clearing take the write lock. Each lock is held
/// only for the one call. Enumeration snapshots the set under the read lock
/// and releases it before any value is pulled, so a long running enumeration
/// never blocks writers, and a merge over several locked sets never holds two
/// locks at once.
///
/// Sets that are not shared across threads need none of this, use them
/// directly.
///
/// # Examples
/// ```
/// use uintset::{Enumerable, Locked, RangeSet};
///
/// let shared = Locked::new(RangeSet::<u32>::new());
/// std::thread::scope(|s| {
///     for t in 0..4u32 {
///         let shared = &shared;
///         s.spawn(move || shared.insert_all(&[t * 10, t * 10 + 1]));
///     }
/// });
/// assert_eq!(shared.len(), 8);
/// assert_eq!(shared.values(), vec![0, 1, 10, 11, 20, 21, 30, 31]);
/// ```
#[derive(Debug, Default)]
pub struct Locked<S> {
    inner: RwLock<S>,
}

impl<S> Locked<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Locked {
            inner: RwLock::new(inner),
        }
    }

    /// Unwrap the inner set.
    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }

    /// Hold the read lock across several operations.
    pub fn read(&self) -> RwLockReadGuard<'_, S> {
        self.inner.read()
    }

    /// Hold the write lock across several operations.
    pub fn write(&self) -> RwLockWriteGuard<'_, S> {
        self.inner.write()
    }

    /// Returns `true` if `value` is a member.
    pub fn contains<V: Value>(&self, value: V) -> bool
    where
        S: Set<V>,
    {
        self.inner.read().contains(value)
    }

    /// Add every value in `values`.
    pub fn insert_all<V: Value>(&self, values: &[V])
    where
        S: Set<V>,
    {
        if values.is_empty() {
            return;
        }
        self.inner.write().insert_all(values)
    }

    /// Remove every value in `values`.
    pub fn remove_all<V: Value>(&self, values: &[V])
    where
        S: Set<V>,
    {
        if values.is_empty() {
            return;
        }
        self.inner.write().remove_all(values)
    }

    /// The number of members.
    pub fn len(&self) -> usize
    where
        S: Inspect,
    {
        self.inner.read().len()
    }

    /// Show if this set contains no members.
    pub fn is_empty(&self) -> bool
    where
        S: Inspect,
    {
        self.inner.read().is_empty()
    }
}

impl<S: Set<V>, V: Value> Set<V> for Locked<S> {
    fn contains(&self, value: V) -> bool {
        self.inner.read().contains(value)
    }

    // Exclusive access already rules out other users, no lock needed.
    fn insert_all(&mut self, values: &[V]) {
        self.inner.get_mut().insert_all(values)
    }

    fn remove_all(&mut self, values: &[V]) {
        self.inner.get_mut().remove_all(values)
    }

    fn clear(&mut self) {
        self.inner.get_mut().clear()
    }
}

impl<S: Inspect> Inspect for Locked<S> {
    fn len(&self) -> usize {
        self.inner.read().len()
    }

    fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }
}

impl<S: Enumerable<V>, V: Value> Enumerable<V> for Locked<S> {
    fn enumerate(&self) -> (Enumerator<V>, usize) {
        let guard = self.inner.read();
        guard.enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::Locked;
    use crate::{and, copy, BitSet, Enumerable, HashedSet, Inspect, RangeSet, Set};

    #[test]
    fn test_locked_shared_writes() {
        let shared = Locked::new(BitSet::<u32>::new());
        std::thread::scope(|s| {
            for t in 0..8u32 {
                let shared = &shared;
                s.spawn(move || {
                    for i in 0..100 {
                        shared.insert_all(&[t * 100 + i]);
                    }
                });
            }
        });
        assert_eq!(shared.len(), 800);
        assert!(shared.contains(799u32));
        shared.remove_all(&[0u32, 1, 2]);
        assert_eq!(shared.len(), 797);
    }

    #[test]
    fn test_locked_enumeration_is_snapshot() {
        let shared = Locked::new(RangeSet::<u32>::new());
        shared.insert_all(&[1, 2, 3]);

        let (it, size) = shared.enumerate();
        shared.write().clear();
        shared.insert_all(&[50]);

        assert_eq!(size, 3);
        assert_eq!(it.collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(shared.values(), vec![50]);
    }

    #[test]
    fn test_locked_merge_and_copy() {
        let a = Locked::new(RangeSet::<u32>::new());
        let b = Locked::new(HashedSet::<u32>::new());
        a.insert_all(&[1, 2, 3, 4]);
        b.insert_all(&[3, 4, 5]);

        assert_eq!(and(&a, &b).values(), vec![3, 4]);

        let mut dst = Locked::new(BitSet::<u32>::new());
        copy(&mut dst, &a);
        assert_eq!(dst.into_inner().len(), 4);
    }
}
