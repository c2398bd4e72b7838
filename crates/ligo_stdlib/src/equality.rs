//! Structural equality across sequences and representations.

use ligo_foundation::Seq;

use crate::lockstep::{Lockstep, Step};

/// Returns true if all `vals` are structurally equal.
///
/// Zero or one value is trivially equal.
#[must_use]
pub fn val_equality<T: PartialEq>(vals: &[T]) -> bool {
    vals.windows(2).all(|pair| pair[0] == pair[1])
}

/// Walks `seqs` in lockstep and returns true if every step's elements satisfy
/// `pred` and all sequences run out at the same time.
///
/// `pred` receives borrowed heads, one per sequence, in argument order. A
/// sequence ending before the others makes the result false.
pub fn equal_test<'a, T, F>(mut pred: F, seqs: &[&'a Seq<T>]) -> bool
where
    F: FnMut(&[&'a T]) -> bool,
{
    let mut walk = Lockstep::new(seqs);
    loop {
        match walk.step() {
            Step::Exhausted => return true,
            Step::Ragged => return false,
            Step::Full(heads) => {
                if !pred(heads) {
                    return false;
                }
            }
        }
    }
}

/// Returns true if all `seqs` hold equal elements in the same order.
///
/// Representation is ignored: `(1 2 3)` equals `[1 2 3]`.
pub fn equal<T: PartialEq>(seqs: &[&Seq<T>]) -> bool {
    equal_test(val_equality, seqs)
}
