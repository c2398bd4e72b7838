//! The sequence protocol and its two representations.
//!
//! Every sequence is reached through two operations, [`Sequence::first`] and
//! [`Sequence::rest`]. A [`Seq`] is closed over exactly three shapes: the
//! canonical empty sequence, a [`Pair`] chain, and a [`Vector`] view. The
//! non-empty variants never hold an empty node, so "is this empty" is always
//! a check for [`Seq::Empty`].

mod iter;
mod pair;
mod vector;

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use log::trace;

pub use iter::Iter;
pub use pair::Pair;
pub use vector::Vector;

/// The two-operation protocol every representation implements.
///
/// Both operations are total: asking the empty sequence for its `first`
/// yields `None`, and its `rest` is again empty.
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns the leading element, or `None` if the sequence is empty.
    fn first(&self) -> Option<&Self::Item>;

    /// Returns the sequence following the leading element.
    fn rest(&self) -> Seq<Self::Item>;
}

/// Which concrete representation a non-empty sequence uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Repr {
    /// Singly-linked cons cells.
    Pair,
    /// Contiguous shared buffer.
    Vector,
}

/// An immutable, possibly empty, ordered sequence.
///
/// Cloning is O(1) for every variant. Equality and hashing compare elements
/// only, so a pair chain and a vector holding the same elements are equal.
pub enum Seq<T> {
    /// The canonical empty sequence.
    Empty,
    /// A non-empty chain of cons cells.
    Pair(Pair<T>),
    /// A non-empty contiguous view.
    Vector(Vector<T>),
}

impl<T> Seq<T> {
    /// Returns the empty sequence.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Builds a pair chain holding `items` in order.
    pub fn list<I: IntoIterator<Item = T>>(items: I) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        Pair::from_items(items).map_or(Self::Empty, Self::Pair)
    }

    /// Builds a vector holding `items` in order, copying them once into a
    /// fresh buffer.
    pub fn vector<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::make_seq(items.into_iter().collect())
    }

    /// Wraps an already materialised collection as a vector.
    #[must_use]
    pub fn make_seq(items: Vec<T>) -> Self {
        Vector::from_vec(items).map_or(Self::Empty, Self::Vector)
    }

    /// Builds a sequence of the given representation holding `items`.
    #[must_use]
    pub fn collect_as(repr: Repr, items: Vec<T>) -> Self {
        match repr {
            Repr::Pair => Self::list(items),
            Repr::Vector => Self::make_seq(items),
        }
    }

    /// Returns true if this is the empty sequence.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the representation tag, or `None` for the empty sequence.
    #[must_use]
    pub const fn repr(&self) -> Option<Repr> {
        match self {
            Self::Empty => None,
            Self::Pair(_) => Some(Repr::Pair),
            Self::Vector(_) => Some(Repr::Vector),
        }
    }

    /// Returns the pair chain, if this is one.
    #[must_use]
    pub const fn as_pair(&self) -> Option<&Pair<T>> {
        match self {
            Self::Pair(pair) => Some(pair),
            _ => None,
        }
    }

    /// Returns the vector view, if this is one.
    #[must_use]
    pub const fn as_vector(&self) -> Option<&Vector<T>> {
        match self {
            Self::Vector(vector) => Some(vector),
            _ => None,
        }
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Self::Empty => Iter::slice(&[]),
            Self::Pair(pair) => Iter::pair(pair),
            Self::Vector(vector) => Iter::slice(vector.as_slice()),
        }
    }

    /// Returns the number of elements. O(1) for vectors, O(n) for pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Pair(_) => self.iter().count(),
            Self::Vector(vector) => vector.len(),
        }
    }

    /// Returns the sequence after the first `n` elements.
    ///
    /// Shares structure with `self`: pairs return an existing cell, vectors
    /// return an aliasing view in O(1). Walking past the end gives the empty
    /// sequence.
    #[must_use]
    pub fn nth_rest(&self, n: usize) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Vector(vector) => vector.skip(n).map_or(Self::Empty, Self::Vector),
            Self::Pair(pair) => {
                let mut cursor = Some(pair);
                for _ in 0..n {
                    match cursor {
                        Some(cell) => cursor = cell.cdr(),
                        None => break,
                    }
                }
                cursor.map_or(Self::Empty, |cell| Self::Pair(cell.clone()))
            }
        }
    }
}

impl<T: Clone> Seq<T> {
    /// Prepends `value`, preserving the representation of `rest`.
    ///
    /// Starting from the empty sequence always yields a single-element
    /// vector; only consing onto an existing pair chain produces a pair.
    #[must_use]
    pub fn cons(value: T, rest: &Self) -> Self {
        match rest {
            Self::Empty => Self::Vector(Vector::singleton(value)),
            Self::Pair(pair) => Self::Pair(pair.cons(value)),
            Self::Vector(vector) => Self::Vector(vector.cons(value)),
        }
    }

    /// Exposes the sequence as a flat ordered slice.
    ///
    /// Vectors hand out their view without copying; pair chains are walked
    /// once into a new buffer.
    #[must_use]
    pub fn materialize(&self) -> Cow<'_, [T]> {
        match self {
            Self::Empty => Cow::Borrowed(&[]),
            Self::Vector(vector) => Cow::Borrowed(vector.as_slice()),
            Self::Pair(_) => {
                let items: Vec<T> = self.iter().cloned().collect();
                trace!("materialized pair chain of {} elements", items.len());
                Cow::Owned(items)
            }
        }
    }
}

/// Prepends `value` onto `rest`, preserving its representation.
///
/// See [`Seq::cons`].
#[must_use]
pub fn cons<T: Clone>(value: T, rest: &Seq<T>) -> Seq<T> {
    Seq::cons(value, rest)
}

impl<T> Sequence for Seq<T> {
    type Item = T;

    fn first(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Pair(pair) => pair.first(),
            Self::Vector(vector) => vector.first(),
        }
    }

    fn rest(&self) -> Seq<T> {
        match self {
            Self::Empty => Self::Empty,
            Self::Pair(pair) => pair.rest(),
            Self::Vector(vector) => vector.rest(),
        }
    }
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Pair(pair) => Self::Pair(pair.clone()),
            Self::Vector(vector) => Self::Vector(vector.clone()),
        }
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T: Hash> Hash for Seq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count = 0usize;
        for item in self {
            item.hash(state);
            count += 1;
        }
        count.hash(state);
    }
}

impl<T> Seq<T> {
    fn write_items(
        &self,
        f: &mut fmt::Formatter<'_>,
        mut item: impl FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        let (open, close) = match self {
            Self::Vector(_) => ('[', ']'),
            Self::Empty | Self::Pair(_) => ('(', ')'),
        };
        write!(f, "{open}")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            item(value, f)?;
        }
        write!(f, "{close}")
    }
}

impl<T: fmt::Display> fmt::Display for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_items(f, |value, f| write!(f, "{value}"))
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_items(f, |value, f| write!(f, "{value:?}"))
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::vector(iter)
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Self::make_seq(items)
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Seq;

    impl<T: Serialize> Serialize for Seq<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Seq<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Vec::<T>::deserialize(deserializer).map(Seq::make_seq)
        }
    }

}
