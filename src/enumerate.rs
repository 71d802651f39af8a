//! The shared set contracts, and the enumeration protocol that lets sets of
//! different representations be read through one interface.

use crate::Value;
use std::cmp::Ordering;

/// Largest allocation [`Enumerable::values`] makes before any value is seen.
const MAX_PRESIZE: usize = 1024;

/// An owned, forward-only cursor yielding members in ascending order.
///
/// Enumerators run over a private snapshot taken when they were created, so
/// they are never invalidated by later changes to their source, and can be
/// dropped at any point without further cleanup.
pub type Enumerator<V> = Box<dyn Iterator<Item = V> + Send>;

/// The mutation and membership contract every set representation provides.
///
/// The provided `any` and `all` are built on `contains` alone.
pub trait Set<V: Value> {
    /// Returns `true` if `value` is a member. Values beyond the current
    /// storage are simply absent.
    fn contains(&self, value: V) -> bool;

    /// Add every value in `values`, growing storage as required.
    fn insert_all(&mut self, values: &[V]);

    /// Remove every value in `values`. Absent values are ignored.
    fn remove_all(&mut self, values: &[V]);

    /// Remove every member.
    fn clear(&mut self);

    /// Add a single value.
    fn insert_id(&mut self, value: V) {
        self.insert_all(&[value])
    }

    /// Remove a single value.
    fn remove_id(&mut self, value: V) {
        self.remove_all(&[value])
    }

    /// Returns `true` if at least one of `values` is a member.
    fn any(&self, values: &[V]) -> bool {
        values.iter().any(|v| self.contains(*v))
    }

    /// Returns `true` if every one of `values` is a member. Vacuously `true`
    /// when `values` is empty.
    fn all(&self, values: &[V]) -> bool {
        values.iter().all(|v| self.contains(*v))
    }
}

/// Size reporting for a stored set.
pub trait Inspect {
    /// The number of members. This is maintained as the set changes, so it
    /// never rescans storage.
    fn len(&self) -> usize;

    /// The number of members the current storage can hold without growing.
    fn capacity(&self) -> usize;

    /// Show if this set contains no members.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A source of ascending members.
///
/// Any mix of types implementing this can be combined with
/// [`And`](crate::And) and [`Or`](crate::Or), or copied into any [`Set`]
/// with [`copy`].
pub trait Enumerable<V: Value> {
    /// Create a fresh enumerator over a snapshot of the members, and report
    /// an upper bound on how many it will yield. For stored sets this is the
    /// exact population.
    fn enumerate(&self) -> (Enumerator<V>, usize);

    /// Collect every member into a vector. The reported bound presizes the
    /// vector, capped so an overstated bound never allocates ahead of the
    /// values actually yielded.
    fn values(&self) -> Vec<V> {
        let (it, size) = self.enumerate();
        let presize = size.min(it.size_hint().0.max(MAX_PRESIZE));
        let mut vals = Vec::with_capacity(presize);
        vals.extend(it);
        vals
    }

    /// Returns `true` if at least one of `values` is a member, in a single
    /// pass over the enumeration.
    fn contains_any(&self, values: &[V]) -> bool {
        let wanted = sorted(values);
        let (mut it, _) = self.enumerate();

        let mut witer = wanted.iter();
        let mut wnext = witer.next();
        let mut current = it.next();

        while let (Some(v), Some(w)) = (current, wnext) {
            match v.cmp(w) {
                Ordering::Equal => return true,
                Ordering::Less => current = it.next(),
                Ordering::Greater => wnext = witer.next(),
            }
        }
        false
    }

    /// Returns `true` if every one of `values` is a member, in a single pass
    /// over the enumeration. Vacuously `true` when `values` is empty.
    fn contains_all(&self, values: &[V]) -> bool {
        let wanted = sorted(values);
        let (mut it, _) = self.enumerate();

        for w in wanted {
            loop {
                match it.next() {
                    Some(v) if v == w => break,
                    Some(v) if v < w => continue,
                    // Passed w, or ran out.
                    _ => return false,
                }
            }
        }
        true
    }
}

fn sorted<V: Value>(values: &[V]) -> Vec<V> {
    let mut wanted = values.to_vec();
    wanted.sort_unstable();
    wanted.dedup();
    wanted
}

/// Replace the content of `dst` with the members of `src`.
///
/// The two only need to agree on the member type; they may be entirely
/// different representations.
///
/// ```
/// use uintset::{copy, BitSet, BoolSet, Inspect, Set};
///
/// let mut src = BoolSet::<u32>::with_capacity(30);
/// src.insert_all(&[1, 2, 3, 4, 10, 11, 13, 15]);
///
/// let mut dst = BitSet::<u32>::new();
/// dst.insert_id(99);
/// copy(&mut dst, &src);
///
/// assert_eq!(dst.len(), 8);
/// assert!(!dst.contains(99));
/// ```
pub fn copy<V, D, S>(dst: &mut D, src: &S)
where
    V: Value,
    D: Set<V> + ?Sized,
    S: Enumerable<V> + ?Sized,
{
    dst.clear();
    let vals = src.values();
    debug!("copying {} values between sets", vals.len());
    dst.insert_all(&vals);
}

#[cfg(test)]
mod tests {
    use super::{Enumerable, Enumerator};

    struct Fixed(Vec<u32>);

    impl Enumerable<u32> for Fixed {
        fn enumerate(&self) -> (Enumerator<u32>, usize) {
            (Box::new(self.0.clone().into_iter()), self.0.len())
        }
    }

    #[test]
    fn test_enumerable_values() {
        assert_eq!(Fixed(vec![1, 5, 9]).values(), vec![1, 5, 9]);
        assert!(Fixed(vec![]).values().is_empty());
    }

    #[test]
    fn test_enumerable_values_overstated_size() {
        struct Boastful(Vec<u32>);

        impl Enumerable<u32> for Boastful {
            fn enumerate(&self) -> (Enumerator<u32>, usize) {
                (Box::new(self.0.clone().into_iter()), usize::MAX)
            }
        }

        assert_eq!(Boastful(vec![4, 8]).values(), vec![4, 8]);
        assert!(Boastful(vec![]).values().is_empty());

        let many: Vec<u32> = (0..5000).collect();
        assert_eq!(Boastful(many.clone()).values(), many);
    }

    #[test]
    fn test_enumerable_contains_any() {
        let f = Fixed(vec![2, 4, 6, 8]);
        assert!(f.contains_any(&[9, 7, 6]));
        assert!(f.contains_any(&[2]));
        assert!(!f.contains_any(&[1, 3, 5, 9]));
        assert!(!f.contains_any(&[]));
        assert!(!Fixed(vec![]).contains_any(&[1]));
    }

    #[test]
    fn test_enumerable_contains_all() {
        let f = Fixed(vec![2, 4, 6, 8]);
        assert!(f.contains_all(&[8, 2, 2, 6]));
        assert!(f.contains_all(&[]));
        assert!(!f.contains_all(&[2, 3]));
        assert!(!f.contains_all(&[8, 10]));
        assert!(!Fixed(vec![]).contains_all(&[0]));
    }
}
