//! Partial, ordered pattern matching with an explicit fallback.
//!
//! [`match_on`] starts a [`Matcher`]; each [`with`](Matcher::with) arm pairs
//! a [`Pattern`] with a handler that receives the pattern's named captures.
//! The first arm whose pattern captures wins; later arms are not evaluated.
//! The only way to get the result out is [`otherwise`](Matcher::otherwise),
//! so every partial match declares its fallback where it is written.
//!
//! Shape patterns dispatch on slices: [`Empty`], [`Single`], [`Pair`] and
//! [`HeadTail`]. [`Equals`] and [`Guard`] match on value, and
//! [`Matcher::with_if`] adds a condition to any pattern.
//!
//! # Examples
//!
//! ```
//! use typedomain::sum::{Empty, Pair, Single, match_on};
//!
//! fn describe(values: &[i32]) -> String {
//!     match_on(values)
//!         .with(Empty, |()| "empty".to_string())
//!         .with(Single, |value| format!("one element: {value}"))
//!         .with(Pair, |pair| format!("two elements: {} and {}", pair.first, pair.second))
//!         .otherwise(|_| "many elements".to_string())
//! }
//!
//! assert_eq!(describe(&[]), "empty");
//! assert_eq!(describe(&[5]), "one element: 5");
//! assert_eq!(describe(&[1, 2]), "two elements: 1 and 2");
//! assert_eq!(describe(&[1, 2, 3]), "many elements");
//! ```

use crate::optics::Prism;

/// Something that can match a `T` and extract named captures from it.
pub trait Pattern<'a, T: ?Sized + 'a> {
    /// What a successful match hands to the arm's handler.
    type Captures;

    /// Returns the captures if `value` matches.
    fn capture(&self, value: &'a T) -> Option<Self::Captures>;
}

/// An ordered chain of match arms over a borrowed value.
#[must_use = "a matcher only produces its result through `otherwise`"]
pub struct Matcher<'a, T: ?Sized, R> {
    value: &'a T,
    result: Option<R>,
}

/// Starts matching on `value`.
pub const fn match_on<T: ?Sized, R>(value: &T) -> Matcher<'_, T, R> {
    Matcher {
        value,
        result: None,
    }
}

impl<'a, T: ?Sized, R> Matcher<'a, T, R> {
    /// Adds an arm; `handler` runs only if no earlier arm matched.
    pub fn with<P, F>(mut self, pattern: P, handler: F) -> Self
    where
        P: Pattern<'a, T>,
        F: FnOnce(P::Captures) -> R,
    {
        if self.result.is_none()
            && let Some(captures) = pattern.capture(self.value)
        {
            self.result = Some(handler(captures));
        }
        self
    }

    /// Adds an arm that matches only when `guard` accepts the captures.
    ///
    /// ```
    /// use typedomain::sum::{Single, match_on};
    ///
    /// let verdict = match_on(&[7][..])
    ///     .with_if(Single, |value| **value > 5, |_| "large")
    ///     .with(Single, |_| "small")
    ///     .otherwise(|_| "not a single value");
    /// assert_eq!(verdict, "large");
    /// ```
    pub fn with_if<P, G, F>(mut self, pattern: P, guard: G, handler: F) -> Self
    where
        P: Pattern<'a, T>,
        G: FnOnce(&P::Captures) -> bool,
        F: FnOnce(P::Captures) -> R,
    {
        if self.result.is_none()
            && let Some(captures) = pattern.capture(self.value)
            && guard(&captures)
        {
            self.result = Some(handler(captures));
        }
        self
    }

    /// Adds an arm for one variant of a tagged union, given its prism.
    pub fn with_variant<A, P, F>(mut self, prism: P, handler: F) -> Self
    where
        T: Sized,
        P: Prism<T, A>,
        F: FnOnce(&'a A) -> R,
        A: 'a,
    {
        if self.result.is_none()
            && let Some(payload) = prism.preview(self.value)
        {
            self.result = Some(handler(payload));
        }
        self
    }

    /// Finishes the match, running `fallback` if no arm matched.
    pub fn otherwise<F>(self, fallback: F) -> R
    where
        F: FnOnce(&'a T) -> R,
    {
        match self.result {
            Some(result) => result,
            None => fallback(self.value),
        }
    }
}

// =============================================================================
// Shape patterns
// =============================================================================

/// Matches an empty slice. Captures `()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Empty;

/// Matches a slice with exactly one element. Captures that element.
#[derive(Clone, Copy, Debug, Default)]
pub struct Single;

/// Matches a slice with exactly two elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pair;

/// Matches a slice with at least one element.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadTail;

/// Captures of [`Pair`].
#[derive(Debug, PartialEq, Eq)]
pub struct PairCaptures<'a, T> {
    /// The first element.
    pub first: &'a T,
    /// The second element.
    pub second: &'a T,
}

/// Captures of [`HeadTail`].
#[derive(Debug, PartialEq, Eq)]
pub struct HeadTailCaptures<'a, T> {
    /// The first element.
    pub head: &'a T,
    /// Everything after it, possibly empty.
    pub tail: &'a [T],
}

impl<'a, T: 'a> Pattern<'a, [T]> for Empty {
    type Captures = ();

    fn capture(&self, value: &'a [T]) -> Option<()> {
        value.is_empty().then_some(())
    }
}

impl<'a, T: 'a> Pattern<'a, [T]> for Single {
    type Captures = &'a T;

    fn capture(&self, value: &'a [T]) -> Option<&'a T> {
        match value {
            [only] => Some(only),
            _ => None,
        }
    }
}

impl<'a, T: 'a> Pattern<'a, [T]> for Pair {
    type Captures = PairCaptures<'a, T>;

    fn capture(&self, value: &'a [T]) -> Option<Self::Captures> {
        match value {
            [first, second] => Some(PairCaptures { first, second }),
            _ => None,
        }
    }
}

impl<'a, T: 'a> Pattern<'a, [T]> for HeadTail {
    type Captures = HeadTailCaptures<'a, T>;

    fn capture(&self, value: &'a [T]) -> Option<Self::Captures> {
        match value {
            [head, tail @ ..] => Some(HeadTailCaptures { head, tail }),
            [] => None,
        }
    }
}

// =============================================================================
// Value patterns
// =============================================================================

/// Matches a value equal to the wrapped one. Captures the matched value.
#[derive(Clone, Copy, Debug)]
pub struct Equals<V>(pub V);

impl<'a, T, V> Pattern<'a, T> for Equals<V>
where
    T: ?Sized + PartialEq<V> + 'a,
{
    type Captures = &'a T;

    fn capture(&self, value: &'a T) -> Option<&'a T> {
        (*value == self.0).then_some(value)
    }
}

/// Matches any value the predicate accepts. Captures the matched value.
#[derive(Clone, Copy, Debug)]
pub struct Guard<F>(pub F);

impl<'a, T, F> Pattern<'a, T> for Guard<F>
where
    T: ?Sized + 'a,
    F: Fn(&T) -> bool,
{
    type Captures = &'a T;

    fn capture(&self, value: &'a T) -> Option<&'a T> {
        (self.0)(value).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prism;
    use rstest::rstest;
    use std::cell::Cell;

    fn describe(values: &[i32]) -> String {
        match_on(values)
            .with(Empty, |()| "empty".to_string())
            .with(Single, |value| format!("one element: {value}"))
            .with(Pair, |pair| {
                format!("two elements: {} and {}", pair.first, pair.second)
            })
            .otherwise(|_| "otherwise".to_string())
    }

    #[rstest]
    #[case(&[], "empty")]
    #[case(&[5], "one element: 5")]
    #[case(&[1, 2], "two elements: 1 and 2")]
    #[case(&[1, 2, 3], "otherwise")]
    fn shape_dispatch(#[case] values: &[i32], #[case] expected: &str) {
        assert_eq!(describe(values), expected);
    }

    #[rstest]
    fn head_tail_binds_rest() {
        let sum = match_on(&[1, 2, 3][..])
            .with(HeadTail, |captures| {
                captures.head + captures.tail.iter().sum::<i32>()
            })
            .otherwise(|_| 0);

        assert_eq!(sum, 6);
    }

    #[rstest]
    fn head_tail_does_not_match_empty() {
        let matched = match_on(&[] as &[i32])
            .with(HeadTail, |_| true)
            .otherwise(|_| false);
        assert!(!matched);
    }

    #[rstest]
    fn first_matching_arm_wins_and_later_handlers_do_not_run() {
        let later_calls = Cell::new(0);

        let result = match_on(&[4][..])
            .with(Single, |value| *value)
            .with(HeadTail, |captures| {
                later_calls.set(later_calls.get() + 1);
                *captures.head
            })
            .otherwise(|_| -1);

        assert_eq!(result, 4);
        assert_eq!(later_calls.get(), 0);
    }

    #[rstest]
    fn equals_and_guard_match_on_value() {
        let classify = |value: &i32| {
            match_on(value)
                .with(Equals(0), |_| "zero")
                .with(Guard(|value: &i32| *value < 0), |_| "negative")
                .otherwise(|_| "positive")
        };

        assert_eq!(classify(&0), "zero");
        assert_eq!(classify(&-3), "negative");
        assert_eq!(classify(&3), "positive");
    }

    #[rstest]
    fn equals_compares_slices_with_arrays() {
        let matched = match_on(&[1, 2][..])
            .with(Equals([1, 2]), |_| true)
            .otherwise(|_| false);
        assert!(matched);
    }

    #[rstest]
    fn with_if_restricts_pattern() {
        let values = [1, 9];
        let verdict = match_on(&values[..])
            .with_if(Pair, |pair| pair.first > pair.second, |_| "descending")
            .with(Pair, |_| "ascending")
            .otherwise(|_| "not a pair");

        assert_eq!(verdict, "ascending");
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Quantity {
        Unit(u32),
        Kilogram(f64),
    }

    #[rstest]
    #[case(Quantity::Unit(3), "3 units")]
    #[case(Quantity::Kilogram(2.5), "by weight")]
    fn with_variant_uses_prism(#[case] quantity: Quantity, #[case] expected: &str) {
        let described = match_on(&quantity)
            .with_variant(prism!(Quantity, Unit), |count| format!("{count} units"))
            .otherwise(|_| "by weight".to_string());

        assert_eq!(described, expected);
    }
}
