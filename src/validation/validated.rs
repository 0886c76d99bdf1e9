//! Validated type for parallel error accumulation.
//!
//! `Result` short-circuits: the first failure ends the computation. That is
//! the right policy for dependent steps. Independent fields of one record
//! want the opposite policy: validate every field and report every failure.
//! `Validated` implements that second policy through `Applicative`
//! (`map2`, `map3`), [`Validated::zip`], [`Validated::sequence`] and the
//! [`validate!`](crate::validate) macro.
//!
//! # Examples
//!
//! ```rust
//! use typedomain::error::{ValidationError, Violation};
//! use typedomain::typeclass::Applicative;
//! use typedomain::validation::Validated;
//!
//! let name: Validated<&str> = Validated::invalid(ValidationError::new("name", Violation::Empty));
//! let age: Validated<u8> = Validated::invalid(ValidationError::new("age", Violation::custom("Must be a number")));
//!
//! let person = name.map2(age, |name, age| (name, age));
//! assert_eq!(person.into_result().unwrap_err().fields(), vec!["name", "age"]);
//! ```

use crate::error::{ValidationError, ValidationErrors};
use crate::typeclass::Semigroup;

/// A validation outcome that accumulates errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validated<A> {
    /// Every check passed.
    Valid(A),
    /// At least one check failed; all failures are kept.
    Invalid(ValidationErrors),
}

impl<A> Validated<A> {
    /// Creates a valid outcome.
    #[must_use]
    pub const fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid outcome holding one error.
    #[must_use]
    pub fn invalid(error: ValidationError) -> Self {
        Self::Invalid(ValidationErrors::single(error))
    }

    /// Creates an invalid outcome from an existing collection.
    #[must_use]
    pub const fn invalid_many(errors: ValidationErrors) -> Self {
        Self::Invalid(errors)
    }

    /// Returns `true` for [`Validated::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for [`Validated::Invalid`].
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The accumulated errors, if any.
    #[must_use]
    pub const fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Transforms the valid payload.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Validated<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validated::Valid(function(value)),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Transforms the accumulated errors.
    #[must_use]
    pub fn map_errors<F>(self, function: F) -> Self
    where
        F: FnOnce(ValidationErrors) -> ValidationErrors,
    {
        match self {
            Self::Valid(value) => Self::Valid(value),
            Self::Invalid(errors) => Self::Invalid(function(errors)),
        }
    }

    /// Pairs two independent outcomes, keeping the errors of both.
    #[must_use]
    pub fn zip<B>(self, other: Validated<B>) -> Validated<(A, B)> {
        match (self, other) {
            (Self::Valid(a), Validated::Valid(b)) => Validated::Valid((a, b)),
            (Self::Invalid(first), Validated::Invalid(second)) => {
                Validated::Invalid(first.combine(second))
            }
            (Self::Invalid(errors), Validated::Valid(_))
            | (Self::Valid(_), Validated::Invalid(errors)) => Validated::Invalid(errors),
        }
    }

    /// Validates every item, collecting every failure.
    ///
    /// ```rust
    /// use typedomain::error::{ValidationError, Violation};
    /// use typedomain::validation::Validated;
    ///
    /// let lines = vec![
    ///     Validated::Valid(1),
    ///     Validated::invalid(ValidationError::new("line[1]", Violation::Empty)),
    ///     Validated::invalid(ValidationError::new("line[2]", Violation::Empty)),
    /// ];
    ///
    /// let all = Validated::sequence(lines);
    /// assert_eq!(all.errors().map(|errors| errors.len()), Some(2));
    /// ```
    #[must_use]
    pub fn sequence<I>(items: I) -> Validated<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut errors = Vec::new();
        let mut values = Vec::new();
        for item in items {
            if let Some(value) = item.collect_into(&mut errors) {
                values.push(value);
            }
        }
        match ValidationErrors::from_vec(errors) {
            Some(errors) => Validated::Invalid(errors),
            None => Validated::Valid(values),
        }
    }

    /// Switches to the short-circuiting policy.
    ///
    /// # Errors
    ///
    /// Returns every accumulated error if the outcome is invalid.
    pub fn into_result(self) -> Result<A, ValidationErrors> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Converts to an `Option`, discarding errors.
    #[must_use]
    pub fn ok(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    fn collect_into(self, sink: &mut Vec<ValidationError>) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(errors) => {
                sink.extend(errors);
                None
            }
        }
    }
}

impl<A> From<Result<A, ValidationError>> for Validated<A> {
    fn from(result: Result<A, ValidationError>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }
}

impl<A> From<Result<A, ValidationErrors>> for Validated<A> {
    fn from(result: Result<A, ValidationErrors>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(errors) => Self::Invalid(errors),
        }
    }
}

impl<A> From<Validated<A>> for Result<A, ValidationErrors> {
    fn from(validated: Validated<A>) -> Self {
        validated.into_result()
    }
}

/// Validates independent fields and builds a value only if all of them pass.
///
/// Each `name = expression` binds `name` to the valid payload of
/// `expression`, which may be a `Validated<T>`, a
/// `Result<T, ValidationError>` or a `Result<T, ValidationErrors>`. Every
/// expression is evaluated; the build expression runs only when all of them
/// succeeded. The result is a `Validated` carrying one entry per failed
/// field, in the order the fields are listed.
///
/// # Examples
///
/// ```rust
/// use typedomain::error::{ValidationError, Violation};
/// use typedomain::validate;
///
/// fn positive(field: &str, value: i32) -> Result<i32, ValidationError> {
///     if value > 0 {
///         Ok(value)
///     } else {
///         Err(ValidationError::new(field, Violation::custom("Must be positive")))
///     }
/// }
///
/// let point = validate! {
///     x = positive("x", -1),
///     y = positive("y", 0),
///     => (x, y)
/// };
/// assert_eq!(point.into_result().unwrap_err().fields(), vec!["x", "y"]);
/// ```
#[macro_export]
macro_rules! validate {
    ($($name:ident = $validation:expr),+ $(,)? => $build:expr) => {
        $crate::__validate_fields!(
            [$crate::validation::Validated::valid(())]
            [()]
            $($name = $validation,)+
            => $build
        )
    };
}

/// Zips the fields of [`validate!`] left to right, so every field is
/// evaluated and the errors stay in field order.
#[doc(hidden)]
#[macro_export]
macro_rules! __validate_fields {
    ([$validated:expr] [$pattern:pat] $name:ident = $validation:expr, $($rest:tt)*) => {
        $crate::__validate_fields!(
            [$validated.zip($crate::validation::Validated::from($validation))]
            [($pattern, $name)]
            $($rest)*
        )
    };
    ([$validated:expr] [$pattern:pat] => $build:expr) => {
        $validated.map(|$pattern| $build)
    };
}
