//! Integration tests for Value types
//!
//! Tests Value variants, equality, hashing, display, and conversions.

use ligo_foundation::{Seq, Type, Value, list, vector};
use std::collections::HashSet;
use std::sync::Arc;

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_nil() {
    let v = Value::Nil;
    assert!(v.is_nil());
    assert!(!v.is_truthy());
}

#[test]
fn value_bool_false() {
    let v = Value::Bool(false);
    assert!(!v.is_truthy());
    assert_eq!(v.as_bool(), Some(false));
}

#[test]
fn value_int() {
    let v = Value::Int(42);
    assert!(v.is_truthy());
    assert_eq!(v.as_int(), Some(42));
    assert_eq!(v.as_float(), None);
}

#[test]
fn value_string() {
    let v = Value::String(Arc::from("hello"));
    assert!(v.is_truthy());
    assert_eq!(v.as_str(), Some("hello"));
}

#[test]
fn empty_seq_is_truthy() {
    // Only nil and false are falsy; the empty sequence is a value like any other.
    assert!(Value::Seq(Seq::Empty).is_truthy());
}

// =============================================================================
// Nested sequences
// =============================================================================

#[test]
fn nested_equality_ignores_representation() {
    let a = Value::Seq(list![Value::from(1), Value::Seq(list![Value::from(2)])]);
    let b = Value::Seq(vector![Value::from(1), Value::Seq(vector![Value::from(2)])]);
    assert_eq!(a, b);
}

#[test]
fn nested_values_hash_consistently() {
    let mut set = HashSet::new();
    set.insert(Value::Seq(list![Value::from("x"), Value::Nil]));
    assert!(set.contains(&Value::Seq(vector![Value::from("x"), Value::Nil])));
}

#[test]
fn nested_display() {
    let v = Value::Seq(vector![
        Value::from(1),
        Value::Seq(list![Value::from("a"), Value::from(true)]),
        Value::Nil,
    ]);
    assert_eq!(v.to_string(), "[1 (a true) nil]");
    assert_eq!(format!("{v:?}"), "[1 (\"a\" true) nil]");
}

#[test]
fn value_type_of_sequences() {
    assert_eq!(Value::Seq(list![Value::Nil]).value_type(), Type::List);
    assert_eq!(Value::Seq(vector![Value::Nil]).value_type(), Type::Vector);
    assert_eq!(Value::Seq(Seq::Empty).value_type(), Type::Seq);
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn from_conversions() {
    assert_eq!(Value::from(3i32), Value::Int(3));
    assert_eq!(Value::from(2.5), Value::Float(2.5));
    assert_eq!(Value::from("s"), Value::String(Arc::from("s")));
    assert_eq!(Value::from(list![Value::Nil]), Value::Seq(list![Value::Nil]));
}

#[test]
fn try_from_scalars() {
    assert_eq!(i64::try_from(&Value::Int(7)).unwrap(), 7);
    assert!(bool::try_from(&Value::Bool(true)).unwrap());
    assert!(bool::try_from(&Value::Nil).is_err());
    assert!(i64::try_from(&Value::Float(1.0)).is_err());
}

#[test]
fn float_equality_is_bitwise() {
    let nan = Value::Float(f64::NAN);
    assert_eq!(nan, nan.clone());
    assert_ne!(Value::Float(0.0), Value::Float(-0.0));

    let mut set = HashSet::new();
    set.insert(Value::Float(0.0));
    set.insert(nan.clone());
    assert!(set.contains(&nan));
    assert!(!set.contains(&Value::Float(-0.0)));
}

#[test]
fn nested_floats_compare_through_sequences() {
    let a = Value::Seq(list![Value::Float(f64::NAN), Value::Float(0.0)]);
    let b = Value::Seq(vector![Value::Float(f64::NAN), Value::Float(0.0)]);
    let c = Value::Seq(vector![Value::Float(f64::NAN), Value::Float(-0.0)]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}
