//! Tagged unions and records composed from the simple types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use typedomain::opaque::Opaque;
use typedomain::{Prisms, TaggedUnion, ValueObject};

use crate::simple_types::{
    CardNumber, CheckNumber, GizmoCode, KilogramQuantity, PaymentAmount, UnitQuantity, WidgetCode,
};
use crate::workflow::PaymentError;

// =============================================================================
// Products and quantities
// =============================================================================

/// A product code: one of two code families with different formats.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, TaggedUnion, ValueObject)]
#[serde(tag = "type", content = "code")]
pub enum ProductCode {
    /// `W` followed by four digits.
    Widget(WidgetCode),
    /// `G` followed by three digits.
    Gizmo(GizmoCode),
}

impl ProductCode {
    /// The code as entered.
    #[must_use]
    pub fn code(&self) -> &str {
        self.fold_ref(
            |code| Opaque::as_raw(code).as_str(),
            |code| Opaque::as_raw(code).as_str(),
        )
    }
}

/// How much of a product was ordered. Widgets are counted, gizmos weighed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, TaggedUnion, ValueObject)]
#[serde(tag = "type", content = "quantity")]
pub enum OrderQuantity {
    /// A whole number of units.
    Unit(UnitQuantity),
    /// A weight in kilograms.
    Kilogram(KilogramQuantity),
}

/// Renders a quantity with its unit, such as `"1 units"` or `"2.5 kg"`.
#[must_use]
pub fn describe_quantity(quantity: &OrderQuantity) -> String {
    quantity.fold_ref(
        |units| format!("{} units", Opaque::as_raw(units)),
        |kilograms| format!("{} kg", Opaque::as_raw(kilograms)),
    )
}

// =============================================================================
// Payments
// =============================================================================

/// Accepted card networks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, TaggedUnion, ValueObject)]
pub enum CardType {
    /// Visa.
    Visa,
    /// Mastercard.
    MasterCard,
}

impl FromStr for CardType {
    type Err = PaymentError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "Visa" => Ok(Self::Visa),
            "MasterCard" => Ok(Self::MasterCard),
            other => Err(PaymentError::CardTypeNotRecognized(other.to_string())),
        }
    }
}

/// Card details needed to take a payment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ValueObject)]
pub struct CreditCardInfo {
    /// The card network.
    pub card_type: CardType,
    /// The card number.
    pub card_number: CardNumber,
}

/// How a payment is made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, TaggedUnion, Prisms, ValueObject)]
#[serde(tag = "type")]
pub enum PaymentMethod {
    /// Cash at the counter.
    Cash,
    /// A paper check.
    Check(CheckNumberPayload),
    /// A credit card.
    Card(CreditCardInfo),
}

/// Payload of [`PaymentMethod::Check`].
///
/// Internally tagged serde enums cannot carry a bare number, so the check
/// number travels in a one-field record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckNumberPayload {
    /// The number printed on the check.
    pub check_number: CheckNumber,
}

/// Supported currencies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, TaggedUnion, ValueObject)]
pub enum Currency {
    /// Euro.
    Eur,
    /// US dollar.
    Usd,
}

impl fmt::Display for Currency {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
        })
    }
}

/// A payment offered against an invoice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ValueObject)]
pub struct Payment {
    /// Amount offered.
    pub amount: PaymentAmount,
    /// Currency of `amount`.
    pub currency: Currency,
    /// How it is paid.
    pub method: PaymentMethod,
}

// =============================================================================
// People
// =============================================================================

/// A person's name. The middle initial is optional.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueObject)]
pub struct PersonalName {
    /// First name.
    pub first_name: crate::simple_types::String50,
    /// Middle initial, if the person has one.
    pub middle_initial: Option<crate::simple_types::String50>,
    /// Last name.
    pub last_name: crate::simple_types::String50,
}

impl PersonalName {
    /// `"First M. Last"`, or `"First Last"` without a middle initial.
    #[must_use]
    pub fn full_name(&self) -> String {
        let first = Opaque::as_raw(&self.first_name);
        let last = Opaque::as_raw(&self.last_name);
        match &self.middle_initial {
            Some(initial) => format!("{first} {}. {last}", Opaque::as_raw(initial)),
            None => format!("{first} {last}"),
        }
    }
}
