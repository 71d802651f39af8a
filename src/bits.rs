//! The dense bit-packed set.

use crate::{Enumerable, Enumerator, Inspect, Set, Value};
use num_traits::{PrimInt, Unsigned};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr};

/// A storage word for [`BitSet`]. Implemented for every unsigned primitive.
pub trait Word: PrimInt + Unsigned + fmt::Debug + Send + Sync + 'static {}

impl<T> Word for T where T: PrimInt + Unsigned + fmt::Debug + Send + Sync + 'static {}

#[inline(always)]
fn word_bits<W: Word>() -> usize {
    W::zero().count_zeros() as usize
}

/// The number of words needed to hold the values `0..size`.
#[inline(always)]
fn words_for<W: Word>(size: usize) -> usize {
    size.div_ceil(word_bits::<W>())
}

/// The word holding `index`, and the mask of its bit within that word.
#[inline(always)]
fn index_to_tuple<W: Word>(index: usize) -> (usize, W) {
    let wbits = word_bits::<W>();
    (index / wbits, W::one() << (index % wbits))
}

/// A dense set storing one bit per possible value in words of type `W`.
///
/// Storage grows to cover the largest value inserted and never shrinks until
/// [`Set::clear`]. The word width only changes allocation granularity; the
/// default `u64` is right for most uses.
///
/// # Examples
/// ```
/// use uintset::{BitSet, Inspect, Set};
///
/// let mut set = BitSet::<u32, u8>::with_capacity(8);
/// set.insert_all(&[0, 3, 7, 24]);
/// assert!(set.contains(24));
/// assert!(!set.contains(1000));
/// assert_eq!(set.len(), 4);
/// assert_eq!(set.bit_len(), 32);
/// ```
#[derive(Clone)]
pub struct BitSet<V: Value, W: Word = u64> {
    bits: Vec<W>,
    pop: usize,
    _value: PhantomData<V>,
}

impl<V: Value, W: Word> Default for BitSet<V, W> {
    fn default() -> Self {
        BitSet {
            bits: Vec::new(),
            pop: 0,
            _value: PhantomData,
        }
    }
}

impl<V: Value, W: Word> BitSet<V, W> {
    /// Construct a new, empty set with no storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new, empty set with storage for the values `0..size`.
    pub fn with_capacity(size: usize) -> Self {
        BitSet {
            bits: vec![W::zero(); words_for::<W>(size)],
            pop: 0,
            _value: PhantomData,
        }
    }

    /// The number of bits currently in storage, rounded up to whole words.
    pub fn bit_len(&self) -> usize {
        self.bits.len() * word_bits::<W>()
    }

    /// Expand storage to cover `index`, if necessary.
    fn grow(&mut self, index: usize) {
        let (elem, _) = index_to_tuple::<W>(index);
        if elem >= self.bits.len() {
            self.bits.resize(elem + 1, W::zero());
        }
    }

    /// Iterate over a snapshot of the members in ascending order.
    pub fn iter(&self) -> BitIter<V, W> {
        BitIter {
            words: self.bits.clone().into_iter(),
            next_word: 0,
            base: 0,
            window: W::zero(),
            _value: PhantomData,
        }
    }

    fn from_words(bits: Vec<W>) -> Self {
        let pop = bits.iter().map(|w| w.count_ones() as usize).sum();
        BitSet {
            bits,
            pop,
            _value: PhantomData,
        }
    }
}

impl<V: Value, W: Word> Set<V> for BitSet<V, W> {
    fn contains(&self, value: V) -> bool {
        let (elem, bit) = match value.to_index() {
            Some(index) => index_to_tuple::<W>(index),
            None => return false,
        };
        match self.bits.get(elem) {
            Some(w) => (*w & bit) != W::zero(),
            None => false,
        }
    }

    fn insert_all(&mut self, values: &[V]) {
        if let Some(max_index) = values.iter().filter_map(|v| v.to_index()).max() {
            self.grow(max_index);
        }

        for v in values {
            let (elem, bit) = match v.to_index() {
                Some(index) => index_to_tuple::<W>(index),
                None => {
                    debug!("bitset: skipping {:?}, beyond the addressable range", v);
                    continue;
                }
            };
            let w = &mut self.bits[elem];
            if (*w & bit) == W::zero() {
                *w = *w | bit;
                self.pop += 1;
            }
        }
    }

    fn remove_all(&mut self, values: &[V]) {
        for (elem, bit) in values
            .iter()
            .filter_map(|v| v.to_index())
            .map(index_to_tuple::<W>)
        {
            if let Some(w) = self.bits.get_mut(elem) {
                if (*w & bit) != W::zero() {
                    *w = *w & !bit;
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

impl<V: Value, W: Word> Inspect for BitSet<V, W> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.pop
    }

    fn capacity(&self) -> usize {
        self.bits.capacity() * word_bits::<W>()
    }
}

impl<V: Value, W: Word> Enumerable<V> for BitSet<V, W> {
    fn enumerate(&self) -> (Enumerator<V>, usize) {
        (Box::new(self.iter()), self.pop)
    }
}

impl<V: Value, W: Word> PartialEq for BitSet<V, W> {
    fn eq(&self, other: &Self) -> bool {
        // Trailing zero words are storage, not membership.
        let (short, long) = if self.bits.len() <= other.bits.len() {
            (&self.bits, &other.bits)
        } else {
            (&other.bits, &self.bits)
        };
        self.pop == other.pop
            && short.iter().zip(long.iter()).all(|(a, b)| a == b)
            && long[short.len()..].iter().all(|w| *w == W::zero())
    }
}

impl<V: Value, W: Word> Eq for BitSet<V, W> {}

impl<V: Value, W: Word> fmt::Debug for BitSet<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSet (pop {}, words {}) [ ", self.pop, self.bits.len())?;
        for v in self.iter() {
            write!(f, "{:?}, ", v)?;
        }
        write!(f, "]")
    }
}

impl<V: Value, W: Word> FromIterator<V> for BitSet<V, W> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let vals: Vec<V> = iter.into_iter().collect();
        let mut new = BitSet::new();
        new.insert_all(&vals);
        new
    }
}

impl<'a, V: Value, W: Word> IntoIterator for &'a BitSet<V, W> {
    type Item = V;
    type IntoIter = BitIter<V, W>;

    fn into_iter(self) -> BitIter<V, W> {
        self.iter()
    }
}

impl<V: Value, W: Word> BitAnd for &BitSet<V, W> {
    type Output = BitSet<V, W>;

    /// Perform an And (intersection) operation word by word. The result is
    /// as long as the shorter input.
    fn bitand(self, rhs: &BitSet<V, W>) -> BitSet<V, W> {
        let bits = self
            .bits
            .iter()
            .zip(rhs.bits.iter())
            .map(|(l, r)| *l & *r)
            .collect();
        BitSet::from_words(bits)
    }
}

impl<V: Value, W: Word> BitOr for &BitSet<V, W> {
    type Output = BitSet<V, W>;

    /// Perform an Or (union) operation word by word. The result is as long
    /// as the longer input.
    fn bitor(self, rhs: &BitSet<V, W>) -> BitSet<V, W> {
        let (short, long) = if self.bits.len() <= rhs.bits.len() {
            (&self.bits, &rhs.bits)
        } else {
            (&rhs.bits, &self.bits)
        };
        let mut bits = long.clone();
        bits.iter_mut().zip(short.iter()).for_each(|(l, s)| *l = *l | *s);
        BitSet::from_words(bits)
    }
}

/// An ascending iterator over a snapshot of a [`BitSet`].
#[derive(Debug)]
pub struct BitIter<V: Value, W: Word> {
    words: std::vec::IntoIter<W>,
    next_word: usize,
    // Value of bit zero in `window`.
    base: usize,
    // Bits of the current word not yet yielded.
    window: W,
    _value: PhantomData<V>,
}

impl<V: Value, W: Word> Iterator for BitIter<V, W> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        while self.window == W::zero() {
            self.window = self.words.next()?;
            self.base = self.next_word * word_bits::<W>();
            self.next_word += 1;
        }
        let bit = self.window.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.window = self.window & (self.window - W::one());
        Some(V::from_index(self.base + bit))
    }
}

impl<V: Value, W: Word> std::iter::FusedIterator for BitIter<V, W> {}
