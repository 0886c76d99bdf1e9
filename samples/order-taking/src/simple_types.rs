//! Constrained scalars of the order-taking domain.
//!
//! Every type here is an opaque value: the raw representation is only
//! reachable through `Opaque::as_raw`/`Opaque::into_raw`, and the only way
//! in is the validating `make` (or `make_as` to report against a form field).

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use typedomain::opaque;
use typedomain::opaque::constraint;

static WIDGET_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^W\d{4}$").expect("Invalid widget code regex pattern"));

static GIZMO_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^G\d{3}$").expect("Invalid gizmo code regex pattern"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+@.+$").expect("Invalid email regex pattern"));

static CARD_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{12,19}$").expect("Invalid card number regex pattern"));

/// Smallest weight that can be ordered, in kilograms.
pub const MIN_KILOGRAMS: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Largest weight that can be ordered, in kilograms.
pub const MAX_KILOGRAMS: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

opaque! {
    /// Identifies a customer.
    pub CustomerId(u64);
    /// Identifies an order.
    pub OrderId(String) validate |raw| constraint::bounded_string(raw, 50);
    /// Identifies a line within an order.
    pub OrderLineId(u32) validate |raw| constraint::at_least(raw, &1);
    /// Identifies a contact.
    pub ContactId(u32);
    /// Identifies an invoice.
    pub InvoiceId(String) validate |raw| constraint::bounded_string(raw, 20);

    /// `W` followed by four digits.
    pub WidgetCode(String) validate |raw| constraint::matches_pattern(raw, &WIDGET_CODE_PATTERN);
    /// `G` followed by three digits.
    pub GizmoCode(String) validate |raw| constraint::matches_pattern(raw, &GIZMO_CODE_PATTERN);

    /// Between 1 and 1000 units.
    pub UnitQuantity(u32) validate |raw| constraint::within(raw, &1, &1000);
    /// Between 0.05 and 100 kilograms.
    pub KilogramQuantity(Decimal) validate |raw| constraint::within(raw, &MIN_KILOGRAMS, &MAX_KILOGRAMS);

    /// A non-empty string of at most 50 characters.
    pub String50(String) validate |raw| constraint::bounded_string(raw, 50);
    /// An email address, loosely checked.
    pub EmailAddress(String) validate |raw| constraint::matches_pattern(raw, &EMAIL_PATTERN);

    /// Number printed on a paper check.
    pub CheckNumber(u32) validate |raw| constraint::at_least(raw, &1);
    /// Card number, 12 to 19 digits.
    pub CardNumber(String) validate |raw| constraint::matches_pattern(raw, &CARD_NUMBER_PATTERN);

    /// Price of one order line, 0 to 1000.
    pub Price(Decimal) validate |raw| constraint::within(raw, &Decimal::ZERO, &Decimal::ONE_THOUSAND);
    /// Amount paid against an invoice, 0 to 1000.
    pub PaymentAmount(Decimal) validate |raw| constraint::within(raw, &Decimal::ZERO, &Decimal::ONE_THOUSAND);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use typedomain::error::Violation;
    use typedomain::opaque::Opaque;

    fn dec(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    #[rstest]
    #[case("W1234", true)]
    #[case("W123", false)]
    #[case("G123", false)]
    fn widget_code_pattern(#[case] raw: &str, #[case] accepted: bool) {
        assert_eq!(WidgetCode::make(raw.to_string()).is_ok(), accepted);
    }

    #[rstest]
    #[case("G123", true)]
    #[case("G1234", false)]
    fn gizmo_code_pattern(#[case] raw: &str, #[case] accepted: bool) {
        assert_eq!(GizmoCode::make(raw.to_string()).is_ok(), accepted);
    }

    #[rstest]
    fn kilogram_bounds() {
        assert!(KilogramQuantity::make(dec("0.05")).is_ok());
        assert!(KilogramQuantity::make(dec("100")).is_ok());
        assert_eq!(
            KilogramQuantity::make(dec("0.01")).unwrap_err().reason,
            Violation::BelowMinimum { min: "0.05".to_string() }
        );
    }

    #[rstest]
    fn price_keeps_raw_decimal() {
        let price = Price::make(dec("12.50")).unwrap();
        assert_eq!(*Opaque::as_raw(&price), dec("12.50"));
    }
}
