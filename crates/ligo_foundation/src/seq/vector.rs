//! Contiguous immutable sequences.

use std::fmt;
use std::sync::Arc;

use log::trace;

use super::{Seq, Sequence};

/// A non-empty view over a shared, immutable buffer.
///
/// Shrinking (`rest`, [`Vector::skip`], [`Vector::take`]) is O(1) and aliases
/// the buffer. Growing with [`Vector::cons`] copies into a fresh buffer.
/// The buffer is an `Arc<[T]>`, which has no write path, so aliased views can
/// never observe a change.
pub struct Vector<T> {
    buffer: Arc<[T]>,
    start: usize,
    end: usize,
}

impl<T> Vector<T> {
    /// Takes ownership of `items` as a fresh buffer.
    ///
    /// Returns `None` for empty input.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let end = items.len();
        Some(Self {
            buffer: Arc::from(items),
            start: 0,
            end,
        })
    }

    /// Creates a single-element vector.
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self {
            buffer: Arc::from(vec![value]),
            start: 0,
            end: 1,
        }
    }

    /// Returns the viewed elements without copying.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer[self.start..self.end]
    }

    /// Returns the number of viewed elements. Never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns a view without the first `n` elements, or `None` if nothing
    /// would remain.
    #[must_use]
    pub fn skip(&self, n: usize) -> Option<Self> {
        let start = self.start.saturating_add(n);
        (start < self.end).then(|| Self {
            buffer: Arc::clone(&self.buffer),
            start,
            end: self.end,
        })
    }

    /// Returns a view of at most the first `n` elements, or `None` when `n`
    /// is zero.
    #[must_use]
    pub fn take(&self, n: usize) -> Option<Self> {
        let end = self.start.saturating_add(n).min(self.end);
        (self.start < end).then(|| Self {
            buffer: Arc::clone(&self.buffer),
            start: self.start,
            end,
        })
    }

    /// Returns true if both views read from the same buffer.
    #[must_use]
    pub fn shares_buffer(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.buffer, &other.buffer)
    }
}

impl<T: Clone> Vector<T> {
    /// Returns a vector over a new buffer holding `value` followed by this
    /// view's elements. O(n).
    #[must_use]
    pub fn cons(&self, value: T) -> Self {
        let slice = self.as_slice();
        trace!("vector cons copies {} elements", slice.len());
        let mut items = Vec::with_capacity(slice.len() + 1);
        items.push(value);
        items.extend_from_slice(slice);
        let end = items.len();
        Self {
            buffer: Arc::from(items),
            start: 0,
            end,
        }
    }
}

impl<T> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: Arc::clone(&self.buffer),
            start: self.start,
            end: self.end,
        }
    }
}

impl<T> Sequence for Vector<T> {
    type Item = T;

    fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    fn rest(&self) -> Seq<T> {
        self.skip(1).map_or(Seq::Empty, Seq::Vector)
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Seq::Vector(self.clone()), f)
    }
}
