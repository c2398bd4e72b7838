//! Integration tests for ligo_stdlib
//!
//! Exercises the generic sequence algorithms against both representations.

mod properties;
