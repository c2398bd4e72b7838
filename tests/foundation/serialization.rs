//! Integration tests for the `serde` feature
//!
//! Sequences serialize as plain sequences and come back as vectors.

use ligo_foundation::{Repr, Seq, Value, list, vector};

#[test]
fn list_comes_back_as_vector() {
    let seq = list![1i64, 2, 3];
    let bytes = rmp_serde::to_vec(&seq).unwrap();
    let back: Seq<i64> = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(back, seq);
    assert_eq!(back.repr(), Some(Repr::Vector));
}

#[test]
fn list_and_vector_serialize_identically() {
    let a = rmp_serde::to_vec(&list![1i64, 2, 3]).unwrap();
    let b = rmp_serde::to_vec(&vector![1i64, 2, 3]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn nested_values() {
    let value = Value::Seq(list![
        Value::from(1),
        Value::from("two"),
        Value::Seq(vector![Value::Nil, Value::from(false)]),
    ]);
    let bytes = rmp_serde::to_vec(&value).unwrap();
    let back: Value = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(back, value);
}

#[test]
fn empty_round_trip() {
    let bytes = rmp_serde::to_vec(&Seq::<i64>::Empty).unwrap();
    let back: Seq<i64> = rmp_serde::from_slice(&bytes).unwrap();
    assert!(back.is_empty());
}
