//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use ligo_foundation::{Error, ErrorKind, Seq, Type, Value};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch(Type::Int, Type::String);
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("int"));
    assert!(msg.contains("string"));
}

#[test]
fn error_index_out_of_bounds() {
    let err = Error::index_out_of_bounds(4, 2);
    assert!(matches!(
        err.kind,
        ErrorKind::IndexOutOfBounds {
            index: 4,
            length: 2
        }
    ));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_type_mismatch() {
    let err = Error::type_mismatch(Type::Bool, Type::Vector);
    assert_eq!(format!("{err}"), "type mismatch: expected bool, got vector");
}

#[test]
fn error_display_index_out_of_bounds() {
    let err = Error::index_out_of_bounds(10, 3);
    assert_eq!(format!("{err}"), "index out of bounds: 10 (length 3)");
}

// =============================================================================
// Errors from Value conversions
// =============================================================================

#[test]
fn conversion_reports_actual_type() {
    let err = i64::try_from(&Value::Seq(Seq::list([Value::Nil]))).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::Int,
            actual: Type::List
        }
    );
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::index_out_of_bounds(0, 0));
}
