//! Monad type class - sequencing dependent fallible steps.
//!
//! `flat_map` feeds the payload of one step into the next step and stops at
//! the first absence or failure: once a step fails, no later step runs. A
//! chain of N `flat_map`s evaluates at most N steps.
//!
//! `Validated` deliberately has no `Monad` instance. A step that needs the
//! result of a previous one cannot also accumulate that previous step's
//! errors, so sequential validation goes through `Result` (see
//! [`Validated::into_result`](crate::validation::Validated::into_result)).
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                   (left identity)
//! m.flat_map(pure) == m                                         (right identity)
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) (associativity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use typedomain::typeclass::Monad;
//!
//! let parse = |raw: &str| raw.parse::<i32>().map_err(|_| "not a number");
//! let positive = |n: i32| if n > 0 { Ok(n) } else { Err("not positive") };
//!
//! assert_eq!(parse("7").flat_map(positive), Ok(7));
//! assert_eq!(parse("x").flat_map(positive), Err("not a number"));
//! ```

use super::applicative::Applicative;

/// An applicative whose steps may depend on earlier results.
pub trait Monad: Applicative {
    /// Feeds the payload into `function`, short-circuiting on failure.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn result_flat_map_stops_at_first_failure() {
        let calls = Cell::new(0);
        let fails = |_: i32| -> Result<i32, &'static str> {
            calls.set(calls.get() + 1);
            Err("step one failed")
        };
        let succeeds = |x: i32| -> Result<i32, &'static str> {
            calls.set(calls.get() + 1);
            Ok(x + 1)
        };

        let result = Ok(1).flat_map(fails).flat_map(succeeds);

        assert_eq!(result, Err("step one failed"));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn option_flat_map_none_skips_step() {
        assert_eq!(None::<i32>.flat_map(|x| Some(x + 1)), None);
        assert_eq!(Some(1).flat_map(|x| Some(x + 1)), Some(2));
    }
}
