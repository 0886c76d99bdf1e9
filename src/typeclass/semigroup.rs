//! Semigroup type class - associative combination.
//!
//! Error accumulation is a semigroup: combining the errors of two failed
//! validations yields every error of the first followed by every error of
//! the second.
//!
//! # Laws
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))   (associativity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use typedomain::typeclass::Semigroup;
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! assert_eq!(String::from("ab").combine(String::from("c")), "abc");
//! ```

/// A type with an associative binary operation.
pub trait Semigroup {
    /// Combines two values.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
