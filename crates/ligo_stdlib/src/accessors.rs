//! Positional accessors.
//!
//! Indexing is an O(n) walk for pair chains. Out of range positions give
//! `None` (or the empty sequence), except in [`nth_checked`].

use ligo_foundation::{Error, Result, Seq, Sequence};

/// Returns the sequence starting at position `n`. `n == 0` returns `seq`.
#[must_use]
pub fn nth_rest<T>(seq: &Seq<T>, n: usize) -> Seq<T> {
    crate::sequences::drop(seq, n)
}

/// Returns the element at position `n`. `n == 0` is [`first`].
#[must_use]
pub fn nth<T>(seq: &Seq<T>, n: usize) -> Option<&T> {
    match seq {
        Seq::Vector(vector) => vector.as_slice().get(n),
        _ => seq.iter().nth(n),
    }
}

/// Returns the element at position `n`, or an error naming the length.
pub fn nth_checked<T>(seq: &Seq<T>, n: usize) -> Result<&T> {
    nth(seq, n).ok_or_else(|| Error::index_out_of_bounds(n, seq.len()))
}

/// Returns the first element.
#[must_use]
pub fn first<T>(seq: &Seq<T>) -> Option<&T> {
    seq.first()
}

/// Returns the second element.
#[must_use]
pub fn second<T>(seq: &Seq<T>) -> Option<&T> {
    nth(seq, 1)
}

/// Returns the third element.
#[must_use]
pub fn third<T>(seq: &Seq<T>) -> Option<&T> {
    nth(seq, 2)
}

/// Returns the fourth element.
#[must_use]
pub fn fourth<T>(seq: &Seq<T>) -> Option<&T> {
    nth(seq, 3)
}

/// Returns the fifth element.
#[must_use]
pub fn fifth<T>(seq: &Seq<T>) -> Option<&T> {
    nth(seq, 4)
}

/// Returns the final element.
#[must_use]
pub fn last<T>(seq: &Seq<T>) -> Option<&T> {
    match seq {
        Seq::Vector(vector) => vector.as_slice().last(),
        _ => seq.iter().last(),
    }
}
