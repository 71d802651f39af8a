//! Sets of unsigned integers with interchangeable storage.
//!
//! Each representation trades memory against access pattern differently:
//!
//! * [`BitSet`] - one bit per possible value, packed into words.
//! * [`BoolSet`] - one `bool` per possible value.
//! * [`HashedSet`] - a hash table of members.
//! * [`RangeSet`] - sorted, coalesced runs of consecutive members.
//!
//! All of them implement [`Set`] for mutation and membership, [`Inspect`]
//! for their population, and [`Enumerable`] to be read back in ascending
//! order. Any mix of representations can be intersected with [`And`],
//! united with [`Or`], or moved between with [`copy`]. Two sets of the same
//! representation can also be combined with `&` and `|`, which use the
//! storage directly and agree with the generic merge.
//!
//! ```
//! use uintset::{And, BitSet, Enumerable, HashedSet, Or, RangeSet, Set};
//!
//! let mut a = BitSet::<u32>::new();
//! a.insert_all(&[1, 2, 4, 8, 16, 22]);
//! let b: HashedSet<u32> = [2, 4, 6, 8, 10, 22].into_iter().collect();
//! let c: RangeSet<u32> = [1, 2, 3, 5, 8, 11, 13, 22].into_iter().collect();
//!
//! assert_eq!(And::new(&[&a, &b, &c]).values(), vec![2, 8, 22]);
//! assert_eq!(
//!     Or::new(&[&a, &b, &c]).values(),
//!     vec![1, 2, 3, 4, 5, 6, 8, 10, 11, 13, 16, 22]
//! );
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

mod bits;
mod bools;
mod enumerate;
mod error;
mod hashed;
mod interval;
mod inverse;
#[cfg(feature = "sync")]
mod locked;
mod merge;
mod range;
mod range_set;
mod value;

pub use crate::bits::{BitIter, BitSet, Word};
pub use crate::bools::{BoolIter, BoolSet};
pub use crate::enumerate::{copy, Enumerable, Enumerator, Inspect, Set};
pub use crate::error::RangeError;
pub use crate::hashed::HashedSet;
pub use crate::interval::{IntervalIter, IntervalSet};
pub use crate::inverse::Not;
#[cfg(feature = "sync")]
pub use crate::locked::Locked;
pub use crate::merge::{and, or, And, AndIter, Or, OrIter};
pub use crate::range::{Range, RangeIter};
pub use crate::range_set::RangeSet;
pub use crate::value::Value;
