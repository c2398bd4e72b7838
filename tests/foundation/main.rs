//! Integration tests for Layer 0: Foundation
//!
//! Tests for the sequence protocol, both representations, cons dispatch,
//! Value, and Error.

mod errors;
#[cfg(feature = "serde")]
mod serialization;
mod values;
