//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends [`Functor`] with `pure` and with `map2`/`map3`,
//! which combine values that do not depend on each other. The failure
//! policy is decided by the implementing type:
//!
//! - `Option` and `Result` short-circuit: the first absence/failure wins.
//! - [`Validated`] accumulates: every failure contributes its errors.
//!
//! # Laws
//!
//! ```text
//! fa.map2(pure(()), |a, _| a) == fa                (right identity)
//! pure(a).map2(pure(b), f) == pure(f(a, b))        (homomorphism)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use typedomain::typeclass::Applicative;
//!
//! let total = Some(1).map2(Some(2), |a, b| a + b);
//! assert_eq!(total, Some(3));
//!
//! let failed: Result<i32, &str> = Err("first").map2(Err("second"), |a: i32, b: i32| a + b);
//! assert_eq!(failed, Err("first"));
//! ```

use super::functor::Functor;
use super::semigroup::Semigroup;
use crate::validation::Validated;

/// A functor whose independent values can be combined.
pub trait Applicative: Functor {
    /// Lifts a plain value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values with `function`.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three values with `function`.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }
}

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        Ok(function(self?, other?))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Result<B, E>, third: Result<C, E>, function: F) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        Ok(function(self?, second?, third?))
    }
}

impl<A> Applicative for Validated<A> {
    #[inline]
    fn pure<B>(value: B) -> Validated<B> {
        Validated::Valid(value)
    }

    fn map2<B, C, F>(self, other: Validated<B>, function: F) -> Validated<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Valid(a), Validated::Valid(b)) => Validated::Valid(function(a, b)),
            (Self::Invalid(first), Validated::Invalid(second)) => {
                Validated::Invalid(first.combine(second))
            }
            (Self::Invalid(errors), Validated::Valid(_))
            | (Self::Valid(_), Validated::Invalid(errors)) => Validated::Invalid(errors),
        }
    }

    fn map3<B, C, D, F>(
        self,
        second: Validated<B>,
        third: Validated<C>,
        function: F,
    ) -> Validated<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.zip(second)
            .map2(third, |(a, b), c| function(a, b, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ValidationError, Violation};
    use rstest::rstest;

    fn invalid<T>(field: &str) -> Validated<T> {
        Validated::invalid(ValidationError::new(field, Violation::Empty))
    }

    #[rstest]
    fn option_map3_none_in_middle() {
        assert_eq!(Some(1).map3(None::<i32>, Some(3), |a, b, c| a + b + c), None);
    }

    #[rstest]
    fn result_map2_returns_first_error() {
        let first: Result<i32, &str> = Err("first");
        assert_eq!(first.map2(Err::<i32, _>("second"), |a, b| a + b), Err("first"));
    }

    #[rstest]
    fn result_map2_valid_combines() {
        let price: Result<u32, &str> = Ok(4);
        assert_eq!(price.map2(Ok(10), |price, quantity| price * quantity), Ok(40));
    }

    #[rstest]
    fn validated_map2_accumulates_both_errors() {
        let result = invalid::<i32>("first").map2(invalid::<i32>("second"), |a, b| a + b);

        assert_eq!(
            result.into_result().unwrap_err().fields(),
            vec!["first", "second"]
        );
    }

    #[rstest]
    fn validated_map3_accumulates_in_argument_order() {
        let result = invalid::<i32>("a").map3(
            Validated::Valid(2),
            invalid::<i32>("c"),
            |a, b, c| a + b + c,
        );

        assert_eq!(result.into_result().unwrap_err().fields(), vec!["a", "c"]);
    }

    #[rstest]
    fn validated_map3_all_valid() {
        let result = Validated::Valid(1).map3(Validated::Valid(2), Validated::Valid(3), |a, b, c| {
            a + b + c
        });

        assert_eq!(result, Validated::Valid(6));
    }
}
