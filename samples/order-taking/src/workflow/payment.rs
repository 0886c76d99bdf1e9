//! Settling invoices.
//!
//! Only an [`UnpaidInvoice`] can be paid, so paying twice does not type-check.
//! Card payments go through a [`PaymentGateway`]; cash and checks need no
//! authorization.

use typedomain::opaque::Opaque;
use typedomain::sum::match_on;

use super::PaymentError;
use crate::compound_types::{CardType, CreditCardInfo, Payment, PaymentMethod};
use crate::entities::{PaidInvoice, UnpaidInvoice};
use crate::simple_types::PaymentAmount;

/// Authorizes card payments.
pub trait PaymentGateway {
    /// Authorizes charging `amount` to `card`.
    ///
    /// # Errors
    ///
    /// A [`PaymentError`] if the charge is refused or cannot be attempted.
    fn authorize(&self, card: &CreditCardInfo, amount: &PaymentAmount) -> Result<(), PaymentError>;
}

/// A gateway accepting a fixed set of card networks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardNetworkGateway {
    accepted: Vec<CardType>,
    online: bool,
}

impl CardNetworkGateway {
    /// An online gateway accepting `accepted`.
    #[must_use]
    pub fn new(accepted: Vec<CardType>) -> Self {
        Self {
            accepted,
            online: true,
        }
    }

    /// The same gateway, unreachable.
    #[must_use]
    pub fn offline(self) -> Self {
        Self {
            online: false,
            ..self
        }
    }
}

impl PaymentGateway for CardNetworkGateway {
    fn authorize(&self, card: &CreditCardInfo, amount: &PaymentAmount) -> Result<(), PaymentError> {
        if !self.online {
            return Err(PaymentError::PaymentProvidersOffline);
        }
        if !self.accepted.contains(&card.card_type) {
            return Err(PaymentError::CardTypeNotRecognized(format!("{:?}", card.card_type)));
        }
        tracing::debug!(
            card_type = ?card.card_type,
            amount = %Opaque::as_raw(amount),
            "card payment authorized"
        );
        Ok(())
    }
}

/// Pays `invoice` with `payment`.
///
/// The payment must be in the invoice currency and for exactly the amount
/// due. The returned invoice keeps the identity of `invoice`.
///
/// # Errors
///
/// - [`PaymentError::PaymentRejected`] on a currency or amount mismatch;
/// - whatever `gateway` reports for a card payment.
pub fn pay_invoice<G: PaymentGateway>(
    invoice: &UnpaidInvoice,
    payment: Payment,
    gateway: &G,
) -> Result<PaidInvoice, PaymentError> {
    if payment.currency != invoice.currency {
        return Err(PaymentError::PaymentRejected(format!(
            "currency {} does not match invoice currency {}",
            payment.currency, invoice.currency
        )));
    }
    if payment.amount != invoice.amount_due {
        return Err(PaymentError::PaymentRejected(format!(
            "amount {} does not settle amount due {}",
            Opaque::as_raw(&payment.amount),
            Opaque::as_raw(&invoice.amount_due)
        )));
    }

    match_on(&payment.method)
        .with_variant(PaymentMethod::card_prism(), |card| gateway.authorize(card, &payment.amount))
        .otherwise(|_| Ok(()))?;

    tracing::info!(
        invoice = Opaque::as_raw(&invoice.id).as_str(),
        method = typedomain::TaggedUnion::tag(&payment.method),
        "invoice paid"
    );

    Ok(PaidInvoice {
        id: invoice.id.clone(),
        payment,
    })
}
