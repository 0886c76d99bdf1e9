//! Prisms: focus on one variant of a tagged union.
//!
//! A prism may miss (`preview` returns `None` for any other variant) and can
//! always rebuild the union from a payload (`review`). Prisms double as
//! partial matcher arms, see
//! [`Matcher::with_variant`](crate::sum::matcher::Matcher::with_variant).
//!
//! # Laws
//!
//! ```text
//! prism.preview(&prism.review(value)) == Some(&value)
//! prism.preview_owned(source).map(|a| prism.review(a)) == Some(source)  when it matches
//! ```
//!
//! # Examples
//!
//! ```
//! use typedomain::optics::Prism;
//! use typedomain::prism;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum PaymentMethod {
//!     Cash,
//!     Check(u32),
//! }
//!
//! let check = prism!(PaymentMethod, Check);
//! assert_eq!(check.preview(&PaymentMethod::Check(42)), Some(&42));
//! assert_eq!(check.preview(&PaymentMethod::Cash), None);
//! assert_eq!(check.review(7), PaymentMethod::Check(7));
//! ```

use std::marker::PhantomData;

/// Focus on the payload `A` of one variant of `S`.
pub trait Prism<S, A> {
    /// Borrows the payload if `source` is the focused variant.
    fn preview<'a>(&self, source: &'a S) -> Option<&'a A>;

    /// Builds the focused variant from its payload.
    fn review(&self, value: A) -> S;

    /// Takes the payload out if `source` is the focused variant.
    fn preview_owned(&self, source: S) -> Option<A>;

    /// Rebuilds the focused variant with `function` applied to its payload;
    /// any other variant is returned as is.
    fn modify_or_identity<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        S: Clone,
    {
        match self.preview_owned(source.clone()) {
            Some(value) => self.review(function(value)),
            None => source,
        }
    }
}

/// A prism built from its three functions.
pub struct FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    preview_function: Pr,
    review_function: Re,
    preview_owned_function: PrOwned,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, Pr, Re, PrOwned> FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    /// Creates a prism from `preview`, `review` and `preview_owned`.
    #[must_use]
    pub const fn new(preview_function: Pr, review_function: Re, preview_owned_function: PrOwned) -> Self {
        Self {
            preview_function,
            review_function,
            preview_owned_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re, PrOwned> Prism<S, A> for FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    fn preview<'a>(&self, source: &'a S) -> Option<&'a A> {
        (self.preview_function)(source)
    }

    fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }

    fn preview_owned(&self, source: S) -> Option<A> {
        (self.preview_owned_function)(source)
    }
}

impl<S, A, Pr, Re, PrOwned> Clone for FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A> + Clone,
    Re: Fn(A) -> S + Clone,
    PrOwned: Fn(S) -> Option<A> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview_function: self.preview_function.clone(),
            review_function: self.review_function.clone(),
            preview_owned_function: self.preview_owned_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re, PrOwned> std::fmt::Debug for FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionPrism").finish_non_exhaustive()
    }
}

/// Creates a prism on a single-payload variant: `prism!(Type, Variant)`.
#[macro_export]
macro_rules! prism {
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => ::std::option::Option::Some(value),
                #[allow(unreachable_patterns)]
                _ => ::std::option::Option::None,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => ::std::option::Option::Some(value),
                #[allow(unreachable_patterns)]
                _ => ::std::option::Option::None,
            },
        )
    };
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => ::std::option::Option::Some(value),
                #[allow(unreachable_patterns)]
                _ => ::std::option::Option::None,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type| match source {
                $enum_type::$variant(value) => ::std::option::Option::Some(value),
                #[allow(unreachable_patterns)]
                _ => ::std::option::Option::None,
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, Debug, PartialEq)]
    enum Quantity {
        Unit(u32),
        Kilogram(f64),
    }

    #[rstest]
    fn preview_misses_other_variant() {
        let unit = prism!(Quantity, Unit);
        assert_eq!(unit.preview(&Quantity::Kilogram(2.5)), None);
        assert_eq!(unit.preview_owned(Quantity::Unit(3)), Some(3));
    }

    #[rstest]
    fn modify_or_identity_only_touches_focused_variant() {
        let unit = prism!(Quantity, Unit);

        assert_eq!(
            unit.modify_or_identity(Quantity::Unit(3), |count| count + 1),
            Quantity::Unit(4)
        );
        assert_eq!(
            unit.modify_or_identity(Quantity::Kilogram(2.5), |count| count + 1),
            Quantity::Kilogram(2.5)
        );
    }
}
