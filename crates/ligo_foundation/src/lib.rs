//! Sequence protocol, representations, and core values for Ligo.
//!
//! This crate provides:
//! - [`Sequence`] - The two-operation protocol (`first`/`rest`)
//! - [`Seq`] - A sequence that is empty, a [`Pair`] chain, or a [`Vector`] view
//! - [`cons`] - Representation-preserving prepend
//! - [`Value`] - Dynamic element payload for heterogeneous sequences
//! - [`Error`] - Error types for the few fallible conversions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod macros;
pub mod seq;
mod types;
mod value;

pub use error::{Error, ErrorKind, Result};
pub use seq::{Iter, Pair, Repr, Seq, Sequence, Vector, cons};
pub use types::Type;
pub use value::Value;
