//! The dense boolean-array set. It favours speed over size.

use crate::{Enumerable, Enumerator, Inspect, Set, Value};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr};

/// A dense set storing one `bool` per possible value.
///
/// # Examples
/// ```
/// use uintset::{BoolSet, Inspect, Set};
///
/// let mut set = BoolSet::<u16>::with_capacity(2);
/// set.insert_all(&[1, 2, 3, 1]);
/// set.remove_id(2);
///
/// assert_eq!(set.slot_len(), 4);
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone)]
pub struct BoolSet<V: Value> {
    bits: Vec<bool>,
    pop: usize,
    _value: PhantomData<V>,
}

impl<V: Value> Default for BoolSet<V> {
    fn default() -> Self {
        BoolSet {
            bits: Vec::new(),
            pop: 0,
            _value: PhantomData,
        }
    }
}

impl<V: Value> BoolSet<V> {
    /// Construct a new, empty set with no storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new, empty set with storage for the values `0..size`.
    pub fn with_capacity(size: usize) -> Self {
        BoolSet {
            bits: vec![false; size],
            pop: 0,
            _value: PhantomData,
        }
    }

    /// The number of slots currently in storage.
    pub fn slot_len(&self) -> usize {
        self.bits.len()
    }

    /// Iterate over a snapshot of the members in ascending order.
    pub fn iter(&self) -> BoolIter<V> {
        BoolIter {
            bits: self.bits.clone(),
            index: 0,
            _value: PhantomData,
        }
    }

    fn from_slots(bits: Vec<bool>) -> Self {
        let pop = bits.iter().filter(|b| **b).count();
        BoolSet {
            bits,
            pop,
            _value: PhantomData,
        }
    }
}

impl<V: Value> Set<V> for BoolSet<V> {
    fn contains(&self, value: V) -> bool {
        value
            .to_index()
            .and_then(|index| self.bits.get(index).copied())
            .unwrap_or(false)
    }

    fn insert_all(&mut self, values: &[V]) {
        match values.iter().filter_map(|v| v.to_index()).max() {
            Some(m) if m >= self.bits.len() => self.bits.resize(m + 1, false),
            _ => {}
        }

        for v in values {
            let index = match v.to_index() {
                Some(index) => index,
                None => {
                    debug!("boolset: skipping {:?}, beyond the addressable range", v);
                    continue;
                }
            };
            let slot = &mut self.bits[index];
            if !*slot {
                *slot = true;
                self.pop += 1;
            }
        }
    }

    fn remove_all(&mut self, values: &[V]) {
        for index in values.iter().filter_map(|v| v.to_index()) {
            if let Some(slot) = self.bits.get_mut(index) {
                if *slot {
                    *slot = false;
                    self.pop -= 1;
                }
            }
        }
    }

    fn clear(&mut self) {
        self.bits = Vec::new();
        self.pop = 0;
    }
}

impl<V: Value> Inspect for BoolSet<V> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.pop
    }

    fn capacity(&self) -> usize {
        self.bits.capacity()
    }
}

impl<V: Value> Enumerable<V> for BoolSet<V> {
    fn enumerate(&self) -> (Enumerator<V>, usize) {
        (Box::new(self.iter()), self.pop)
    }
}

impl<V: Value> PartialEq for BoolSet<V> {
    fn eq(&self, other: &Self) -> bool {
        self.pop == other.pop && self.iter().eq(other.iter())
    }
}

impl<V: Value> Eq for BoolSet<V> {}

impl<V: Value> fmt::Debug for BoolSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoolSet (pop {}, slots {}) [ ", self.pop, self.bits.len())?;
        for v in self.iter() {
            write!(f, "{:?}, ", v)?;
        }
        write!(f, "]")
    }
}

impl<V: Value> FromIterator<V> for BoolSet<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let vals: Vec<V> = iter.into_iter().collect();
        let mut new = BoolSet::new();
        new.insert_all(&vals);
        new
    }
}

impl<V: Value> BitAnd for &BoolSet<V> {
    type Output = BoolSet<V>;

    /// Perform an And (intersection) operation slot by slot. The result is
    /// as long as the shorter input.
    fn bitand(self, rhs: &BoolSet<V>) -> BoolSet<V> {
        let bits = self
            .bits
            .iter()
            .zip(rhs.bits.iter())
            .map(|(l, r)| *l && *r)
            .collect();
        BoolSet::from_slots(bits)
    }
}

impl<V: Value> BitOr for &BoolSet<V> {
    type Output = BoolSet<V>;

    /// Perform an Or (union) operation slot by slot. The result is as long
    /// as the longer input.
    fn bitor(self, rhs: &BoolSet<V>) -> BoolSet<V> {
        let (short, long) = if self.bits.len() <= rhs.bits.len() {
            (&self.bits, &rhs.bits)
        } else {
            (&rhs.bits, &self.bits)
        };
        let mut bits = long.clone();
        bits.iter_mut().zip(short.iter()).for_each(|(l, s)| *l |= *s);
        BoolSet::from_slots(bits)
    }
}

/// An ascending iterator over a snapshot of a [`BoolSet`].
#[derive(Debug)]
pub struct BoolIter<V: Value> {
    bits: Vec<bool>,
    index: usize,
    _value: PhantomData<V>,
}

impl<V: Value> Iterator for BoolIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        while self.index < self.bits.len() {
            let idx = self.index;
            self.index += 1;
            if self.bits[idx] {
                return Some(V::from_index(idx));
            }
        }
        None
    }
}
