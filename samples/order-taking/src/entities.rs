//! Entities and the order aggregate.
//!
//! Entities compare by identity only. The invoice lifecycle is a tagged
//! union whose every state carries the invoice id, and the order is an
//! aggregate root whose lines change only through the root.

use serde::{Deserialize, Serialize};
use typedomain::aggregate::{AggregateRoot, Children, update_sub_entity};
use typedomain::error::UpdateError;
use typedomain::optics::Lens;
use typedomain::{Entity, Lenses, TaggedUnion};

use crate::compound_types::{Currency, OrderQuantity, Payment, PersonalName, ProductCode};
use crate::simple_types::{
    ContactId, CustomerId, EmailAddress, InvoiceId, OrderId, OrderLineId, PaymentAmount, Price,
};

/// Someone the business can reach. Two contacts are the same contact when
/// their ids match, whatever their other details.
#[derive(Clone, Debug, Serialize, Deserialize, Entity)]
pub struct Contact {
    /// Identity.
    pub id: ContactId,
    /// Name.
    pub name: PersonalName,
    /// Email address.
    pub email: EmailAddress,
}

// =============================================================================
// Invoice lifecycle
// =============================================================================

/// An invoice awaiting payment.
#[derive(Clone, Debug, Serialize, Deserialize, Entity)]
pub struct UnpaidInvoice {
    /// Identity.
    pub id: InvoiceId,
    /// Amount to be paid.
    pub amount_due: PaymentAmount,
    /// Currency of `amount_due`.
    pub currency: Currency,
}

/// An invoice that has been settled.
#[derive(Clone, Debug, Serialize, Deserialize, Entity)]
pub struct PaidInvoice {
    /// Identity, the same as the unpaid invoice it came from.
    pub id: InvoiceId,
    /// The payment that settled it.
    pub payment: Payment,
}

/// The states of an invoice.
#[derive(Clone, Debug, Serialize, Deserialize, Entity, TaggedUnion)]
#[entity(id = InvoiceId)]
#[serde(tag = "state")]
pub enum Invoice {
    /// Awaiting payment.
    Unpaid(UnpaidInvoice),
    /// Settled.
    Paid(PaidInvoice),
}

// =============================================================================
// Order aggregate
// =============================================================================

/// One product line of an order.
#[derive(Clone, Debug, Serialize, Deserialize, Entity)]
pub struct OrderLine {
    /// Identity within the order.
    pub id: OrderLineId,
    /// What is ordered.
    pub product_code: ProductCode,
    /// How much of it.
    pub quantity: OrderQuantity,
    /// Price of the line.
    pub price: Price,
}

/// An order. Its lines are only reachable and changeable through it.
#[derive(Clone, Debug, Serialize, Deserialize, Entity, Lenses)]
pub struct Order {
    /// Identity.
    pub id: OrderId,
    /// The ordering customer, by reference.
    pub customer_id: CustomerId,
    /// The order lines.
    pub lines: Children<OrderLine>,
}

impl AggregateRoot for Order {
    type Child = OrderLine;

    fn children_lens() -> impl Lens<Self, Children<OrderLine>> {
        Self::lines_lens()
    }
}

/// Returns a copy of `order` in which line `line_id` costs `new_price`.
///
/// `order` itself is unchanged, and every other line is shared between the
/// two orders.
///
/// # Errors
///
/// [`UpdateError::NotFound`] if the order has no such line.
pub fn change_order_line_price(
    order: &Order,
    line_id: &OrderLineId,
    new_price: Price,
) -> Result<Order, UpdateError<OrderLineId>> {
    update_sub_entity(order, line_id, |line| OrderLine {
        price: new_price,
        ..line.clone()
    })
}
