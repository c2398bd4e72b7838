//! Higher-order functions over sequences.
//!
//! Functions that read several sequences at once receive one borrowed element
//! from each, in argument order, as a slice. Iteration stops at the shortest
//! sequence.

use std::slice;

use ligo_foundation::Seq;

use crate::lockstep::{Lockstep, Step};

/// Combines the elements of `seq` with `f`, folding from the right.
///
/// - empty ⇒ `None`
/// - one element ⇒ `f(&[x])`
/// - otherwise ⇒ `f(&[first, reduce(f, rest)])`
///
/// ```
/// use ligo_foundation::list;
/// use ligo_stdlib::reduce;
///
/// let sum = |xs: &[i64]| xs.iter().sum();
/// assert_eq!(reduce(sum, &list![3, 4, 5]), Some(12));
/// ```
pub fn reduce<T, F>(mut f: F, seq: &Seq<T>) -> Option<T>
where
    T: Clone,
    F: FnMut(&[T]) -> T,
{
    let items = seq.materialize();
    let (last, init) = items.split_last()?;
    let mut acc = f(slice::from_ref(last));
    for item in init.iter().rev() {
        acc = f(&[item.clone(), acc]);
    }
    Some(acc)
}

/// Applies `f` positionally across `seqs`, stopping at the shortest.
///
/// Results come back as a vector: building a result by consing onto the empty
/// sequence always yields the vector representation.
pub fn map_car<'a, T, U, F>(mut f: F, seqs: &[&'a Seq<T>]) -> Seq<U>
where
    F: FnMut(&[&'a T]) -> U,
{
    let mut walk = Lockstep::new(seqs);
    let mut results = Vec::new();
    while let Step::Full(heads) = walk.step() {
        results.push(f(heads));
    }
    Seq::make_seq(results)
}

/// Returns false as soon as one positional application of `pred` fails.
///
/// True once any sequence runs out, including when one starts out empty.
pub fn every<'a, T, F>(mut pred: F, seqs: &[&'a Seq<T>]) -> bool
where
    F: FnMut(&[&'a T]) -> bool,
{
    let mut walk = Lockstep::new(seqs);
    while let Step::Full(heads) = walk.step() {
        if !pred(heads) {
            return false;
        }
    }
    true
}

/// Returns true as soon as one positional application of `pred` succeeds.
///
/// False once any sequence runs out without a success.
pub fn some<'a, T, F>(mut pred: F, seqs: &[&'a Seq<T>]) -> bool
where
    F: FnMut(&[&'a T]) -> bool,
{
    let mut walk = Lockstep::new(seqs);
    while let Step::Full(heads) = walk.step() {
        if pred(heads) {
            return true;
        }
    }
    false
}

/// Returns a vector of the elements of `seq` that do not satisfy `pred`.
pub fn remove_if<T, F>(mut pred: F, seq: &Seq<T>) -> Seq<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    keep(seq, |item| !pred(item))
}

/// Returns a vector of the elements of `seq` that satisfy `pred`.
pub fn remove_if_not<T, F>(pred: F, seq: &Seq<T>) -> Seq<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    keep(seq, pred)
}

/// Returns a vector of the elements of `seq` that satisfy `pred`.
///
/// Same as [`remove_if_not`].
pub fn filter<T, F>(pred: F, seq: &Seq<T>) -> Seq<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    remove_if_not(pred, seq)
}

fn keep<T, F>(seq: &Seq<T>, mut pred: F) -> Seq<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    Seq::make_seq(seq.iter().filter(|item| pred(item)).cloned().collect())
}
