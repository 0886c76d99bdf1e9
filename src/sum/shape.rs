//! The shape of a slice as a total tagged union.

use typedomain_derive::TaggedUnion;

/// A borrowed slice classified by length.
///
/// Unlike the shape patterns of [`matcher`](super::matcher), `ListShape`
/// covers every length, so it can be consumed with an exhaustive `match` or
/// with the derived `fold`:
///
/// ```
/// use typedomain::sum::ListShape;
///
/// fn describe(values: &[i32]) -> String {
///     ListShape::of(values).fold(
///         || "empty".to_string(),
///         |value| format!("one element: {value}"),
///         |first, second| format!("two elements: {first} and {second}"),
///         |head, rest| format!("{head} and {} more", rest.len()),
///     )
/// }
///
/// assert_eq!(describe(&[1, 2, 3]), "1 and 2 more");
/// ```
#[derive(Debug, PartialEq, Eq, TaggedUnion)]
pub enum ListShape<'a, T> {
    /// No elements.
    Empty,
    /// Exactly one element.
    Single(&'a T),
    /// Exactly two elements.
    Pair(&'a T, &'a T),
    /// Three or more elements.
    Many {
        /// The first element.
        head: &'a T,
        /// The remaining elements, at least two.
        rest: &'a [T],
    },
}

impl<'a, T> ListShape<'a, T> {
    /// Classifies `values`.
    pub const fn of(values: &'a [T]) -> Self {
        match values {
            [] => Self::Empty,
            [only] => Self::Single(only),
            [first, second] => Self::Pair(first, second),
            [head, rest @ ..] => Self::Many { head, rest },
        }
    }
}

impl<T> Clone for ListShape<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListShape<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sum::TaggedUnion;
    use rstest::rstest;

    #[rstest]
    #[case(&[], "Empty")]
    #[case(&[1], "Single")]
    #[case(&[1, 2], "Pair")]
    #[case(&[1, 2, 3], "Many")]
    fn of_classifies_by_length(#[case] values: &[i32], #[case] tag: &str) {
        assert_eq!(ListShape::of(values).tag(), tag);
    }

    #[rstest]
    fn many_keeps_rest_in_order() {
        let values = [1, 2, 3, 4];
        assert_eq!(
            ListShape::of(&values),
            ListShape::Many {
                head: &1,
                rest: &[2, 3, 4],
            }
        );
    }
}
