//! Branded scalar values.
//!
//! [`Opaque<R, B>`] wraps a raw representation `R` (a number, a string,
//! a decimal) together with a zero-sized brand `B`. Two opaque types over
//! the same representation are distinct types: a `CustomerId` can never be
//! passed where an `OrderId` is expected, compared with one, or assigned to
//! one.
//!
//! Crossing the boundary is always explicit and always greppable:
//!
//! - in: [`Opaque::make`] (or [`Opaque::make_as`], [`Opaque::make_optional`])
//!   runs the brand's checks and returns a [`ValidationError`] instead of an
//!   invalid value;
//! - out: [`Opaque::into_raw`] and [`Opaque::as_raw`], which are associated
//!   functions and must be spelled `Opaque::into_raw(value)`.
//!
//! There is no `From`, `Into`, `Deref` or `Display` in either direction.
//!
//! # Examples
//!
//! ```
//! use typedomain::opaque;
//! use typedomain::opaque::{Opaque, constraint};
//!
//! opaque! {
//!     /// Identifies a customer.
//!     pub CustomerId(u64);
//!     /// Quantity of units ordered.
//!     pub UnitQuantity(u32) validate |raw| constraint::within(raw, &1, &1000);
//! }
//!
//! let customer = CustomerId::make(42).unwrap();
//! assert_eq!(Opaque::into_raw(customer), 42);
//!
//! let rejected = UnitQuantity::make(0).unwrap_err();
//! assert_eq!(rejected.to_string(), "UnitQuantity: Must not be less than 1");
//! ```
//!
//! Brands over the same representation do not mix:
//!
//! ```compile_fail
//! use typedomain::opaque;
//!
//! opaque! {
//!     pub CustomerId(u64);
//!     pub OrderId(u64);
//! }
//!
//! let customer = CustomerId::make(1).unwrap();
//! let order: OrderId = customer;
//! ```
//!
//! ```compile_fail
//! use typedomain::opaque;
//!
//! opaque! {
//!     pub CustomerId(u64);
//!     pub OrderId(u64);
//! }
//!
//! let same = CustomerId::make(1).unwrap() == OrderId::make(1).unwrap();
//! ```

pub mod constraint;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::equality::{Equality, Structural, ValueObject};
use crate::error::{ValidationError, Violation};

/// The compile-time marker of an opaque type, and its smart-constructor rule.
///
/// Brands are usually uninhabited enums generated by [`opaque!`](crate::opaque!).
pub trait Brand<R> {
    /// Name used for the field in errors and for `Debug` output.
    const NAME: &'static str;

    /// Checks a raw value. Accepts everything unless overridden.
    ///
    /// # Errors
    ///
    /// The [`Violation`] explaining why `raw` is not acceptable.
    #[inline]
    fn validate(raw: &R) -> Result<(), Violation> {
        let _ = raw;
        Ok(())
    }
}

/// A raw value of type `R` branded with `B`.
///
/// `Opaque` has the same layout as `R`; the brand exists only for the type
/// checker. Once constructed the value is valid for its lifetime: there is
/// no way to change the raw value in place.
#[repr(transparent)]
pub struct Opaque<R, B> {
    raw: R,
    brand: PhantomData<fn() -> B>,
}

impl<R, B: Brand<R>> Opaque<R, B> {
    /// Validates `raw` and brands it.
    ///
    /// # Errors
    ///
    /// A [`ValidationError`] whose `field` is the brand name.
    pub fn make(raw: R) -> Result<Self, ValidationError> {
        Self::make_as(B::NAME, raw)
    }

    /// Like [`make`](Self::make), reporting failures against `field`.
    ///
    /// Used when one branded type fills several input fields, such as a
    /// product code read from an order line.
    ///
    /// # Errors
    ///
    /// A [`ValidationError`] whose `field` is `field`.
    pub fn make_as(field: &str, raw: R) -> Result<Self, ValidationError> {
        match B::validate(&raw) {
            Ok(()) => Ok(Self {
                raw,
                brand: PhantomData,
            }),
            Err(reason) => {
                tracing::debug!(brand = B::NAME, field, %reason, "rejected raw value");
                Err(ValidationError::new(field, reason))
            }
        }
    }

    /// Validates an optional input; absence is not an error.
    ///
    /// # Errors
    ///
    /// A [`ValidationError`] if a value is present and rejected.
    pub fn make_optional(raw: Option<R>) -> Result<Option<Self>, ValidationError> {
        raw.map(Self::make).transpose()
    }
}

impl<R, B> Opaque<R, B> {
    /// Removes the brand, returning the raw value.
    ///
    /// An associated function, so call sites read `Opaque::into_raw(value)`.
    #[inline]
    pub fn into_raw(value: Self) -> R {
        value.raw
    }

    /// Borrows the raw value.
    #[inline]
    pub const fn as_raw(value: &Self) -> &R {
        &value.raw
    }
}

// =============================================================================
// Trait implementations
// =============================================================================
//
// No bound on the brand. Each impl relates values of one brand only.

impl<R: Clone, B> Clone for Opaque<R, B> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            brand: PhantomData,
        }
    }
}

impl<R: Copy, B> Copy for Opaque<R, B> {}

impl<R: PartialEq, B> PartialEq for Opaque<R, B> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<R: Eq, B> Eq for Opaque<R, B> {}

impl<R: PartialOrd, B> PartialOrd for Opaque<R, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.raw.partial_cmp(&other.raw)
    }
}

impl<R: Ord, B> Ord for Opaque<R, B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<R: Hash, B> Hash for Opaque<R, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<R: fmt::Debug, B: Brand<R>> fmt::Debug for Opaque<R, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple(B::NAME).field(&self.raw).finish()
    }
}

impl<R: Eq + Clone, B> Equality for Opaque<R, B> {
    type Strategy = Structural;
}

impl<R: Eq + Clone, B> ValueObject for Opaque<R, B> {}

#[cfg(feature = "serde")]
impl<R: serde::Serialize, B> serde::Serialize for Opaque<R, B> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// Deserialization goes through [`Opaque::make`], so untyped input cannot
/// produce an invalid value.
#[cfg(feature = "serde")]
impl<'de, R, B> serde::Deserialize<'de> for Opaque<R, B>
where
    R: serde::Deserialize<'de>,
    B: Brand<R>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = R::deserialize(deserializer)?;
        Self::make(raw).map_err(serde::de::Error::custom)
    }
}

/// Declares opaque types.
///
/// Each entry expands to an uninhabited brand enum named `<Name>Brand`, its
/// [`Brand`] impl and a type alias `Name = Opaque<Repr, NameBrand>`. An
/// optional `validate |raw| expr` clause becomes the smart-constructor rule;
/// `raw` is a `&Repr` and `expr` a `Result<(), Violation>`.
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// use typedomain::opaque;
/// use typedomain::opaque::constraint;
///
/// static WIDGET_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^W\d{4}$").unwrap());
///
/// opaque! {
///     /// A widget code, `W` followed by four digits.
///     pub WidgetCode(String) validate |raw| constraint::matches_pattern(raw, &WIDGET_CODE);
/// }
///
/// assert!(WidgetCode::make("W1234".to_string()).is_ok());
/// assert!(WidgetCode::make("G1234".to_string()).is_err());
/// ```
#[macro_export]
macro_rules! opaque {
    ($(
        $(#[$meta:meta])*
        $vis:vis $name:ident($repr:ty) $(validate |$raw:ident| $check:expr)?;
    )+) => {$(
        $crate::__private::paste! {
            /// Brand marker generated by `opaque!`.
            #[derive(Debug)]
            $vis enum [<$name Brand>] {}

            impl $crate::opaque::Brand<$repr> for [<$name Brand>] {
                const NAME: &'static str = stringify!($name);

                $(
                    fn validate($raw: &$repr) -> ::std::result::Result<(), $crate::error::Violation> {
                        $check
                    }
                )?
            }

            $(#[$meta])*
            $vis type $name = $crate::opaque::Opaque<$repr, [<$name Brand>]>;
        }
    )+};
}

mod layout {
    use std::fmt;

    use super::{Brand, Opaque};

    enum Probe {}

    impl Brand<u64> for Probe {
        const NAME: &'static str = "Probe";
    }

    static_assertions::assert_eq_size!(Opaque<u64, Probe>, u64);
    static_assertions::assert_eq_size!(Opaque<String, Probe>, String);
    static_assertions::assert_impl_all!(Opaque<u64, Probe>: Send, Sync, Copy);
    static_assertions::assert_not_impl_any!(Opaque<u64, Probe>: From<u64>, Into<u64>, std::ops::Deref, fmt::Display);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    crate::opaque! {
        CustomerId(u64);
        OrderId(u64);
        Percent(u8) validate |raw| constraint::within(raw, &0, &100);
    }

    #[rstest]
    fn make_without_rule_accepts_everything() {
        let id = CustomerId::make(0).unwrap();
        assert_eq!(*Opaque::as_raw(&id), 0);
    }

    #[rstest]
    #[case(0, true)]
    #[case(100, true)]
    #[case(101, false)]
    fn make_runs_the_brand_rule(#[case] raw: u8, #[case] accepted: bool) {
        assert_eq!(Percent::make(raw).is_ok(), accepted);
    }

    #[rstest]
    fn make_reports_brand_name_as_field() {
        let error = Percent::make(200).unwrap_err();

        assert_eq!(error.field, "Percent");
        assert_eq!(
            error.reason,
            Violation::AboveMaximum {
                max: "100".to_string()
            }
        );
    }

    #[rstest]
    fn make_as_relabels_field() {
        let error = Percent::make_as("Discount", 200).unwrap_err();
        assert_eq!(error.field, "Discount");
    }

    #[rstest]
    #[case(None, Ok(None))]
    #[case(Some(5), Ok(Some(5)))]
    fn make_optional_treats_absence_as_success(
        #[case] raw: Option<u8>,
        #[case] expected: Result<Option<u8>, ()>,
    ) {
        let made = Percent::make_optional(raw)
            .map(|value| value.map(Opaque::into_raw))
            .map_err(|_| ());
        assert_eq!(made, expected);
    }

    #[rstest]
    fn make_optional_rejects_present_invalid_value() {
        assert!(Percent::make_optional(Some(101)).is_err());
    }

    #[rstest]
    fn debug_shows_brand_name() {
        let id = OrderId::make(9).unwrap();
        assert_eq!(format!("{id:?}"), "OrderId(9)");
    }

    #[rstest]
    fn ordering_follows_raw_value() {
        let mut ids = vec![
            CustomerId::make(3).unwrap(),
            CustomerId::make(1).unwrap(),
            CustomerId::make(2).unwrap(),
        ];
        ids.sort();

        let raw: Vec<u64> = ids.into_iter().map(Opaque::into_raw).collect();
        assert_eq!(raw, vec![1, 2, 3]);
    }
}
