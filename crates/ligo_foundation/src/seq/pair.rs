//! Singly-linked immutable cons cells.

use std::fmt;
use std::sync::Arc;

use super::{Seq, Sequence};

/// A cons cell holding one element and the rest of its chain.
///
/// Cloning is O(1). Prepending with [`Pair::cons`] shares the entire existing
/// tail, so two chains built on a common tail physically share its nodes.
/// A chain always ends in `None`; there is no cell with an empty payload.
pub struct Pair<T>(Arc<Node<T>>);

struct Node<T> {
    car: T,
    cdr: Option<Pair<T>>,
}

impl<T> Pair<T> {
    /// Allocates a new cell `{value, rest}`.
    #[must_use]
    pub fn new(value: T, rest: Option<Pair<T>>) -> Self {
        Self(Arc::new(Node {
            car: value,
            cdr: rest,
        }))
    }

    /// Returns a new cell whose tail is this chain.
    #[must_use]
    pub fn cons(&self, value: T) -> Self {
        Self::new(value, Some(self.clone()))
    }

    /// Builds a chain from `items`, right to left, so the last item becomes
    /// the innermost cell.
    ///
    /// Returns `None` for empty input.
    pub fn from_items<I>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(None, |rest, value| Some(Self::new(value, rest)))
    }

    /// Builds a chain of `items` in order, ending in `tail`.
    pub fn prepend_all<I>(items: I, tail: Option<Pair<T>>) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(tail, |rest, value| Some(Self::new(value, rest)))
    }

    /// The element held by this cell.
    #[must_use]
    pub fn car(&self) -> &T {
        &self.0.car
    }

    /// The next cell, if any.
    #[must_use]
    pub fn cdr(&self) -> Option<&Pair<T>> {
        self.0.cdr.as_ref()
    }

    /// Returns true if both handles point at the same cell.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Pair<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Sequence for Pair<T> {
    type Item = T;

    fn first(&self) -> Option<&T> {
        Some(self.car())
    }

    fn rest(&self) -> Seq<T> {
        self.cdr().map_or(Seq::Empty, |next| Seq::Pair(next.clone()))
    }
}

// Unlinks uniquely owned cells one at a time so dropping a long chain does
// not recurse once per cell.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = self.cdr.take();
        while let Some(Pair(node)) = next {
            next = match Arc::try_unwrap(node) {
                Ok(mut node) => node.cdr.take(),
                Err(_) => None,
            };
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Pair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Seq::Pair(self.clone()), f)
    }
}
