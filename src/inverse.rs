//! The complement of a set.

use crate::{Set, Value};

/// The complement of an inner set: every value the inner set lacks is a
/// member. Inserting a value removes it from the inner set, and removing a
/// value adds it.
///
/// Clearing empties the inner set, which makes the complement full.
///
/// # Examples
/// ```
/// use uintset::{BoolSet, Not, Set};
///
/// let mut toppings = Not::new(BoolSet::<u8>::new());
/// assert!(toppings.contains(3));
///
/// toppings.remove_id(3);
/// assert!(!toppings.contains(3));
/// assert!(toppings.into_inner().contains(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Not<S> {
    inner: S,
}

impl<S> Not<S> {
    /// Wrap `inner`. The complement of a complement is the original set, so
    /// undo a wrap with [`Not::into_inner`] rather than wrapping again.
    pub fn new(inner: S) -> Self {
        Not { inner }
    }

    /// Unwrap the inner set.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// The inner set.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Set<V>, V: Value> Set<V> for Not<S> {
    fn contains(&self, value: V) -> bool {
        !self.inner.contains(value)
    }

    fn insert_all(&mut self, values: &[V]) {
        self.inner.remove_all(values)
    }

    fn remove_all(&mut self, values: &[V]) {
        self.inner.insert_all(values)
    }

    fn clear(&mut self) {
        self.inner.clear()
    }
}
