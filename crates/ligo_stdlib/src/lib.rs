//! Generic sequence algorithms for Ligo.
//!
//! Everything here is written against the [`Sequence`] protocol and the
//! [`Seq`] constructors, and never depends on which representation it is
//! handed:
//! - Higher-order functions (reduce, map, every, some, filter)
//! - Structural equality across representations
//! - Sequence functions (append, reverse, sub-ranges, length, copy)
//! - Positional accessors (first through fifth, nth, last)
//!
//! [`Sequence`]: ligo_foundation::Sequence
//! [`Seq`]: ligo_foundation::Seq

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod accessors;
pub mod equality;
pub mod higher_order;
mod lockstep;
pub mod sequences;

pub use accessors::{fifth, first, fourth, last, nth, nth_checked, nth_rest, second, third};
pub use equality::{equal, equal_test, val_equality};
pub use higher_order::{every, filter, map_car, reduce, remove_if, remove_if_not, some};
pub use sequences::{append, copy_seq, drop, length, rev_append, reverse, sub_seq, take};
