//! Functor type class - mapping over the success/present payload.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! For the failure side, `fmap` is transparent: a `None`, an `Err` or an
//! `Invalid` passes through unchanged and the function is never called.
//!
//! # Examples
//!
//! ```rust
//! use typedomain::typeclass::Functor;
//!
//! let present = Some(21);
//! assert_eq!(present.fmap(|x| x * 2), Some(42));
//!
//! let failed: Result<i32, &str> = Err("boom");
//! assert_eq!(failed.fmap(|x| x * 2), Err("boom"));
//! ```

use super::higher::TypeConstructor;
use crate::validation::Validated;

/// A type constructor whose payload can be transformed.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the payload, if there is one.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the payload.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

impl<A> Functor for Validated<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validated<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Validated<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Valid(value) => Validated::Valid(function(value)),
            Self::Invalid(errors) => Validated::Invalid(errors.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ValidationError, Violation};
    use rstest::rstest;

    #[rstest]
    fn option_fmap_none_never_calls_function() {
        let mut called = false;
        let result = None::<i32>.fmap(|x| {
            called = true;
            x + 1
        });

        assert_eq!(result, None);
        assert!(!called);
    }

    #[rstest]
    fn result_fmap_ref_err_is_cloned() {
        let value: Result<i32, String> = Err("error".to_string());
        assert_eq!(value.fmap_ref(|x| x + 1), Err("error".to_string()));
    }

    #[rstest]
    fn validated_fmap_invalid_passes_errors_through() {
        let invalid: Validated<i32> =
            Validated::invalid(ValidationError::new("Quantity", Violation::Empty));

        let mapped = invalid.clone().fmap(|x| x * 2);

        assert_eq!(mapped.into_result().unwrap_err().fields(), vec!["Quantity"]);
        assert!(invalid.fmap_ref(|x| x * 2).is_invalid());
    }

    #[rstest]
    fn validated_fmap_valid() {
        assert_eq!(Validated::Valid(2).fmap(|x| x + 1), Validated::Valid(3));
    }
}
