//! Literal syntax for building sequences.

/// Builds a pair chain from its arguments, like `(list a b c)`.
///
/// ```
/// use ligo_foundation::{Repr, list};
///
/// let seq = list![1, 2, 3];
/// assert_eq!(seq.repr(), Some(Repr::Pair));
/// assert_eq!(seq.to_string(), "(1 2 3)");
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::Seq::Empty
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Seq::list([$($item),+])
    };
}

/// Builds a vector from its arguments, like `[a b c]`.
///
/// ```
/// use ligo_foundation::{Repr, vector};
///
/// let seq = vector![1, 2, 3];
/// assert_eq!(seq.repr(), Some(Repr::Vector));
/// assert_eq!(seq.to_string(), "[1 2 3]");
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Seq::Empty
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Seq::vector([$($item),+])
    };
}
