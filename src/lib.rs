//! Ligo - Lisp-style persistent sequences
//!
//! This crate re-exports all layers of the Ligo library for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: ligo_stdlib     — Higher-order and sequence algorithms, accessors
//! Layer 0: ligo_foundation — Sequence protocol, Pair/Vector, cons, Value, Error
//! ```

pub use ligo_foundation as foundation;
pub use ligo_stdlib as stdlib;

pub use ligo_foundation::{list, vector};
