//! Type descriptors for values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::seq::Repr;

/// Type descriptor for a [`Value`](crate::Value).
///
/// Used to report what a value actually was when a conversion fails.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The nil type (only value: nil).
    Nil,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String type.
    String,
    /// Any sequence, or the empty sequence when describing a value.
    Seq,
    /// A non-empty pair chain.
    List,
    /// A non-empty vector.
    Vector,
}

impl Type {
    /// Returns the type describing a sequence of the given representation.
    #[must_use]
    pub const fn of_repr(repr: Option<Repr>) -> Self {
        match repr {
            None => Self::Seq,
            Some(Repr::Pair) => Self::List,
            Some(Repr::Vector) => Self::Vector,
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Seq => write!(f, "seq"),
            Self::List => write!(f, "list"),
            Self::Vector => write!(f, "vector"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
