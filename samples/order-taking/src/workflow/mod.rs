//! Order placement and invoice payment.
//!
//! - [`validation`]: untyped order input to a validated [`Order`](crate::entities::Order),
//!   reporting every invalid field at once;
//! - [`payment`]: settling an unpaid invoice.

pub mod payment;
pub mod validation;

use thiserror::Error;
use typedomain::error::ValidationErrors;

pub use payment::{CardNetworkGateway, PaymentGateway, pay_invoice};
pub use validation::{UnvalidatedOrder, UnvalidatedOrderLine, validate_order};

/// Why an order could not be placed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlaceOrderError {
    /// One or more fields of the input were invalid.
    #[error("order is invalid: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Why a payment was not accepted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The card network is not one we take.
    #[error("card type not recognized: {0}")]
    CardTypeNotRecognized(String),
    /// The payment does not settle the invoice.
    #[error("payment rejected: {0}")]
    PaymentRejected(String),
    /// Card payments cannot be authorized right now.
    #[error("payment providers are offline")]
    PaymentProvidersOffline,
}
