//! Sequence construction and slicing.
//!
//! Results that copy elements keep the representation of the sequence they
//! are built onto, the same shape repeated `cons` would give. Inputs are
//! never modified.

use log::trace;

use ligo_foundation::{Pair, Repr, Seq};

/// Returns a structural copy of `seq`: new cells or buffer, same elements,
/// same representation.
#[must_use]
pub fn copy_seq<T: Clone>(seq: &Seq<T>) -> Seq<T> {
    match seq.repr() {
        None => Seq::Empty,
        Some(repr) => Seq::collect_as(repr, seq.iter().cloned().collect()),
    }
}

/// Concatenates copies of `seqs`. Empty inputs are skipped.
///
/// The result takes the representation of the last non-empty input, as if
/// the earlier elements were consed onto it: a vector followed by a list
/// gives a pair chain, a list followed by a vector gives a vector.
#[must_use]
pub fn append<T: Clone>(seqs: &[&Seq<T>]) -> Seq<T> {
    let Some(repr) = seqs.iter().rev().find_map(|seq| seq.repr()) else {
        return Seq::Empty;
    };
    let items: Vec<T> = seqs.iter().flat_map(|seq| seq.iter().cloned()).collect();
    trace!("append of {} inputs copies {} elements", seqs.len(), items.len());
    Seq::collect_as(repr, items)
}

/// Conses each element of `seq`, front to back, onto `tail`: the reverse of
/// `seq` followed by `tail`.
///
/// A pair tail is shared, not copied. A vector tail is copied into the new
/// buffer. With an empty tail the result keeps the representation of `seq`.
#[must_use]
pub fn rev_append<T: Clone>(seq: &Seq<T>, tail: &Seq<T>) -> Seq<T> {
    if seq.is_empty() {
        return tail.clone();
    }
    let mut items: Vec<T> = seq.iter().cloned().collect();
    items.reverse();
    match tail {
        Seq::Empty => match seq.repr() {
            Some(repr) => Seq::collect_as(repr, items),
            None => Seq::Empty,
        },
        Seq::Pair(pair) => {
            Pair::prepend_all(items, Some(pair.clone())).map_or(Seq::Empty, Seq::Pair)
        }
        Seq::Vector(vector) => {
            items.extend_from_slice(vector.as_slice());
            Seq::make_seq(items)
        }
    }
}

/// Returns a copy of `seq` with its elements in reverse order.
#[must_use]
pub fn reverse<T: Clone>(seq: &Seq<T>) -> Seq<T> {
    rev_append(seq, &Seq::Empty)
}

/// Returns the elements of `seq` in `[start, end)`.
///
/// `start >= end` gives the empty sequence; bounds past the end of `seq` are
/// truncated. Vectors return an aliasing view, pairs a fresh chain.
#[must_use]
pub fn sub_seq<T: Clone>(seq: &Seq<T>, start: usize, end: usize) -> Seq<T> {
    if start >= end {
        return Seq::Empty;
    }
    let count = end - start;
    match seq.nth_rest(start) {
        Seq::Empty => Seq::Empty,
        Seq::Vector(vector) => vector.take(count).map_or(Seq::Empty, Seq::Vector),
        dropped @ Seq::Pair(_) => Seq::collect_as(
            Repr::Pair,
            dropped.iter().take(count).cloned().collect(),
        ),
    }
}

/// Returns the first `n` elements of `seq`.
#[must_use]
pub fn take<T: Clone>(seq: &Seq<T>, n: usize) -> Seq<T> {
    sub_seq(seq, 0, n)
}

/// Returns `seq` without its first `n` elements, sharing its structure.
#[must_use]
pub fn drop<T>(seq: &Seq<T>, n: usize) -> Seq<T> {
    seq.nth_rest(n)
}

/// Returns the number of elements in `seq`.
#[must_use]
pub fn length<T>(seq: &Seq<T>) -> usize {
    seq.len()
}
