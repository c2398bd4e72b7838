//! Borrowing iteration over a sequence.

use std::iter::FusedIterator;
use std::slice;

use super::Pair;

/// Iterator over the elements of a [`Seq`](super::Seq), front to back.
///
/// Walks pair chains cell by cell and vectors as a slice.
pub struct Iter<'a, T> {
    inner: Inner<'a, T>,
}

enum Inner<'a, T> {
    Pair(Option<&'a Pair<T>>),
    Slice(slice::Iter<'a, T>),
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn pair(pair: &'a Pair<T>) -> Self {
        Self {
            inner: Inner::Pair(Some(pair)),
        }
    }

    pub(super) fn slice(slice: &'a [T]) -> Self {
        Self {
            inner: Inner::Slice(slice.iter()),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Pair(cursor) => {
                let pair = cursor.take()?;
                *cursor = pair.cdr();
                Some(pair.car())
            }
            Inner::Slice(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Pair(None) => (0, Some(0)),
            Inner::Pair(Some(_)) => (1, None),
            Inner::Slice(iter) => iter.size_hint(),
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            Inner::Pair(cursor) => Inner::Pair(*cursor),
            Inner::Slice(iter) => Inner::Slice(iter.clone()),
        };
        Self { inner }
    }
}
