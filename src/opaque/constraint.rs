//! Predicate checks for smart constructors.
//!
//! Each helper inspects a raw value and returns the [`Violation`] describing
//! why it is unacceptable. They are meant to be chained with `?` inside
//! [`Brand::validate`](super::Brand::validate):
//!
//! ```
//! use typedomain::error::Violation;
//! use typedomain::opaque::constraint;
//!
//! fn validate_name(raw: &String) -> Result<(), Violation> {
//!     constraint::non_empty(raw)?;
//!     constraint::max_length(raw, 50)
//! }
//!
//! assert!(validate_name(&"John".to_string()).is_ok());
//! assert_eq!(validate_name(&String::new()), Err(Violation::Empty));
//! ```

use std::fmt::Display;

use regex::Regex;

use crate::error::Violation;

/// Rejects an empty string.
///
/// # Errors
///
/// [`Violation::Empty`] when `value` is empty.
pub fn non_empty(value: &str) -> Result<(), Violation> {
    if value.is_empty() {
        Err(Violation::Empty)
    } else {
        Ok(())
    }
}

/// Rejects a string with more than `max` characters.
///
/// # Errors
///
/// [`Violation::TooLong`] when `value` has more than `max` characters.
pub fn max_length(value: &str, max: usize) -> Result<(), Violation> {
    if value.chars().count() > max {
        Err(Violation::TooLong { max })
    } else {
        Ok(())
    }
}

/// A non-empty string of at most `max` characters.
///
/// # Errors
///
/// [`Violation::Empty`] or [`Violation::TooLong`].
pub fn bounded_string(value: &str, max: usize) -> Result<(), Violation> {
    non_empty(value)?;
    max_length(value, max)
}

/// Requires a non-empty string matching `pattern`.
///
/// Without anchors (`^...$`) the pattern matches anywhere in the input.
///
/// # Errors
///
/// [`Violation::Empty`] for an empty string, otherwise
/// [`Violation::PatternMismatch`] if the pattern does not match.
pub fn matches_pattern(value: &str, pattern: &Regex) -> Result<(), Violation> {
    non_empty(value)?;
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(Violation::PatternMismatch {
            value: value.to_string(),
            pattern: pattern.as_str().to_string(),
        })
    }
}

/// Requires `minimum <= value <= maximum`.
///
/// # Errors
///
/// [`Violation::BelowMinimum`] or [`Violation::AboveMaximum`].
pub fn within<T>(value: &T, minimum: &T, maximum: &T) -> Result<(), Violation>
where
    T: PartialOrd + Display,
{
    at_least(value, minimum)?;
    if value > maximum {
        Err(Violation::AboveMaximum {
            max: maximum.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Requires `minimum <= value`.
///
/// # Errors
///
/// [`Violation::BelowMinimum`].
pub fn at_least<T>(value: &T, minimum: &T) -> Result<(), Violation>
where
    T: PartialOrd + Display,
{
    if value < minimum {
        Err(Violation::BelowMinimum {
            min: minimum.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Requires `value` to be one of `allowed`.
///
/// # Errors
///
/// [`Violation::NotAllowed`] listing the accepted values.
pub fn one_of(value: &str, allowed: &[&str]) -> Result<(), Violation> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(Violation::NotAllowed {
            value: value.to_string(),
            allowed: allowed.iter().map(ToString::to_string).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("John", Ok(()))]
    #[case("", Err(Violation::Empty))]
    fn non_empty_cases(#[case] value: &str, #[case] expected: Result<(), Violation>) {
        assert_eq!(non_empty(value), expected);
    }

    #[rstest]
    fn max_length_boundary() {
        assert!(max_length(&"a".repeat(50), 50).is_ok());
        assert_eq!(
            max_length(&"a".repeat(51), 50),
            Err(Violation::TooLong { max: 50 })
        );
    }

    #[rstest]
    fn max_length_counts_characters_not_bytes() {
        assert!(max_length("ééé", 3).is_ok());
    }

    #[rstest]
    fn bounded_string_rejects_empty_first() {
        assert_eq!(bounded_string("", 10), Err(Violation::Empty));
    }

    #[rstest]
    #[case("W1234", true)]
    #[case("W123", false)]
    #[case("G1234", false)]
    #[case("w1234", false)]
    fn matches_pattern_anchored(#[case] value: &str, #[case] accepted: bool) {
        let pattern = Regex::new(r"^W\d{4}$").unwrap();
        assert_eq!(matches_pattern(value, &pattern).is_ok(), accepted);
    }

    #[rstest]
    fn matches_pattern_reports_value_and_pattern() {
        let pattern = Regex::new(r"^W\d{4}$").unwrap();
        let violation = matches_pattern("G123", &pattern).unwrap_err();

        assert_eq!(
            violation.to_string(),
            r"'G123' must match the pattern '^W\d{4}$'"
        );
    }

    #[rstest]
    fn matches_pattern_unanchored_is_partial() {
        let pattern = Regex::new(r"\d{4}").unwrap();
        assert!(matches_pattern("prefix1234suffix", &pattern).is_ok());
    }

    #[rstest]
    #[case(1, Ok(()))]
    #[case(1000, Ok(()))]
    #[case(0, Err(Violation::BelowMinimum { min: "1".to_string() }))]
    #[case(1001, Err(Violation::AboveMaximum { max: "1000".to_string() }))]
    fn within_inclusive_range(#[case] value: u32, #[case] expected: Result<(), Violation>) {
        assert_eq!(within(&value, &1, &1000), expected);
    }

    #[rstest]
    fn within_works_for_floats() {
        assert!(within(&0.5_f64, &0.05, &100.0).is_ok());
        assert!(within(&0.01_f64, &0.05, &100.0).is_err());
    }

    #[rstest]
    fn one_of_lists_allowed_values() {
        let violation = one_of("JPY", &["EUR", "USD"]).unwrap_err();

        assert_eq!(
            violation,
            Violation::NotAllowed {
                value: "JPY".to_string(),
                allowed: vec!["EUR".to_string(), "USD".to_string()],
            }
        );
        assert!(one_of("USD", &["EUR", "USD"]).is_ok());
    }
}
