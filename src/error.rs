//! Error values shared by every primitive in the crate.
//!
//! Runtime failures are always data: smart constructors return
//! [`ValidationError`], multi-field validation accumulates into
//! [`ValidationErrors`], and the aggregate update protocol reports
//! [`UpdateError`]. Exhaustiveness problems are never represented here; they
//! are compile errors.

use std::fmt;

use thiserror::Error;

use crate::typeclass::Semigroup;

/// The reason a raw value was rejected by a smart constructor.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Violation {
    /// The input was empty.
    #[error("Must not be empty")]
    Empty,
    /// The input had more characters than allowed.
    #[error("Must not be more than {max} chars")]
    TooLong {
        /// Maximum character count.
        max: usize,
    },
    /// The input was below the inclusive lower bound.
    #[error("Must not be less than {min}")]
    BelowMinimum {
        /// Rendered lower bound.
        min: String,
    },
    /// The input was above the inclusive upper bound.
    #[error("Must not be greater than {max}")]
    AboveMaximum {
        /// Rendered upper bound.
        max: String,
    },
    /// The input did not match the required pattern.
    #[error("'{value}' must match the pattern '{pattern}'")]
    PatternMismatch {
        /// The rejected input.
        value: String,
        /// The pattern source.
        pattern: String,
    },
    /// The input was not a member of the allowed set.
    #[error("'{value}' must be one of {allowed:?}")]
    NotAllowed {
        /// The rejected input.
        value: String,
        /// Every accepted value.
        allowed: Vec<String>,
    },
    /// Any other domain rule.
    #[error("{0}")]
    Custom(String),
}

impl Violation {
    /// Creates a free-form violation.
    #[must_use]
    pub fn custom(reason: impl Into<String>) -> Self {
        Self::Custom(reason.into())
    }
}

/// A single rejected field.
///
/// # Examples
///
/// ```
/// use typedomain::error::{ValidationError, Violation};
///
/// let error = ValidationError::new("OrderId", Violation::Empty);
/// assert_eq!(error.field, "OrderId");
/// assert_eq!(error.to_string(), "OrderId: Must not be empty");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{field}: {reason}")]
pub struct ValidationError {
    /// Name of the field the raw value was supplied for.
    pub field: String,
    /// Why it was rejected.
    pub reason: Violation,
}

impl ValidationError {
    /// Creates a new `ValidationError`.
    #[must_use]
    pub fn new(field: impl Into<String>, reason: Violation) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }

    /// Returns the same error reported against another field name.
    #[must_use]
    pub fn relabel(self, field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: self.reason,
        }
    }
}

/// A non-empty, ordered collection of field errors.
///
/// Produced by accumulating validation: every independent field that failed
/// contributes exactly one entry, in the order the fields were combined.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Creates a collection holding one error.
    #[must_use]
    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    /// Builds a collection from a vector, or `None` if it is empty.
    #[must_use]
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// Number of collected errors. Never zero.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the collected errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Field names of the collected errors, in order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|error| error.field.as_str()).collect()
    }

    /// Consumes the collection into a plain vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl Semigroup for ValidationErrors {
    fn combine(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::single(error)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(formatter, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Failure of the aggregate update protocol.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UpdateError<Id: fmt::Debug> {
    /// No child of the root carries the requested identity.
    #[error("no sub-entity with id {id:?}")]
    NotFound {
        /// The identity that was looked up.
        id: Id,
    },
    /// The updater returned a sub-entity with a different identity.
    #[error("updater changed sub-entity identity from {expected:?} to {found:?}")]
    IdentityChanged {
        /// Identity of the sub-entity that was replaced.
        expected: Id,
        /// Identity of the replacement.
        found: Id,
    },
}
