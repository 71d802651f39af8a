//! The member type shared by every set representation.

use num_traits::{AsPrimitive, PrimInt, ToPrimitive, Unsigned};
use std::fmt::Debug;
use std::hash::Hash;

/// An unsigned integer that can be a member of a set.
///
/// This is implemented for every unsigned primitive (`u8` through `u128` and
/// `usize`). Dense representations address their storage by index, so a
/// value must also convert to and from `usize`. Values that do not fit in
/// `usize` on the target have no index, and dense backends never hold them.
pub trait Value: PrimInt + Unsigned + Default + Hash + Debug + Send + Sync + 'static {
    /// The storage index of this value, or `None` if it does not fit in
    /// `usize`.
    fn to_index(self) -> Option<usize>;

    /// The value stored at `index`. Only called with indices that came from
    /// [`Value::to_index`].
    fn from_index(index: usize) -> Self;

    /// The value directly after this one, or `None` at the top of the domain.
    #[inline(always)]
    fn successor(self) -> Option<Self> {
        self.checked_add(&Self::one())
    }

    /// The value directly before this one, or `None` at zero.
    #[inline(always)]
    fn predecessor(self) -> Option<Self> {
        self.checked_sub(&Self::one())
    }
}

impl<T> Value for T
where
    T: PrimInt + Unsigned + Default + Hash + Debug + Send + Sync + 'static,
    usize: AsPrimitive<T>,
{
    #[inline(always)]
    fn to_index(self) -> Option<usize> {
        ToPrimitive::to_usize(&self)
    }

    #[inline(always)]
    fn from_index(index: usize) -> Self {
        index.as_()
    }
}
