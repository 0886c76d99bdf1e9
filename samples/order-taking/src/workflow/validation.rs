//! Validation of untyped order input.
//!
//! Independent fields accumulate their errors; a line's quantity depends on
//! its product code, so that pair short-circuits.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use typedomain::aggregate::Children;
use typedomain::error::{ValidationError, ValidationErrors, Violation};
use typedomain::opaque::Opaque;
use typedomain::typeclass::Monad;
use typedomain::validate;
use typedomain::validation::Validated;

use super::PlaceOrderError;
use crate::compound_types::{OrderQuantity, ProductCode};
use crate::entities::{Order, OrderLine};
use crate::simple_types::{
    CustomerId, GizmoCode, KilogramQuantity, OrderId, OrderLineId, Price, UnitQuantity, WidgetCode,
};

/// An order line as it arrives from outside.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UnvalidatedOrderLine {
    /// Line id.
    pub id: u32,
    /// Product code as typed.
    pub product_code: String,
    /// Quantity, units or kilograms depending on the product.
    pub quantity: Decimal,
    /// Line price.
    pub price: Decimal,
}

/// An order as it arrives from outside.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UnvalidatedOrder {
    /// Order id.
    pub order_id: String,
    /// Customer reference.
    pub customer_id: u64,
    /// Order lines.
    pub lines: Vec<UnvalidatedOrderLine>,
}

/// Parses a product code, choosing the family from its first letter.
///
/// # Errors
///
/// A [`ValidationError`] against `field` if the code belongs to no family
/// or does not match its family's format.
pub fn to_product_code(field: &str, raw: &str) -> Result<ProductCode, ValidationError> {
    if raw.starts_with('W') {
        WidgetCode::make_as(field, raw.to_string()).map(ProductCode::Widget)
    } else if raw.starts_with('G') {
        GizmoCode::make_as(field, raw.to_string()).map(ProductCode::Gizmo)
    } else {
        Err(ValidationError::new(
            field,
            Violation::custom(format!("Format not recognized '{raw}'")),
        ))
    }
}

/// Interprets `quantity` in the unit of `product_code`.
///
/// # Errors
///
/// A [`ValidationError`] against `field` if the amount is out of range or,
/// for widgets, not a whole number.
pub fn to_order_quantity(
    field: &str,
    product_code: &ProductCode,
    quantity: Decimal,
) -> Result<OrderQuantity, ValidationError> {
    product_code.fold_ref(
        |_| to_unit_quantity(field, quantity).map(OrderQuantity::Unit),
        |_| KilogramQuantity::make_as(field, quantity).map(OrderQuantity::Kilogram),
    )
}

fn to_unit_quantity(field: &str, quantity: Decimal) -> Result<UnitQuantity, ValidationError> {
    if !quantity.fract().is_zero() {
        return Err(ValidationError::new(
            field,
            Violation::custom("Must be a whole number of units"),
        ));
    }
    match quantity.to_u32() {
        Some(units) => UnitQuantity::make_as(field, units),
        None if quantity.is_sign_negative() => Err(ValidationError::new(
            field,
            Violation::BelowMinimum { min: "1".to_string() },
        )),
        None => Err(ValidationError::new(
            field,
            Violation::AboveMaximum { max: "1000".to_string() },
        )),
    }
}

/// Validates one line; errors name the line by position.
pub fn validate_order_line(index: usize, line: &UnvalidatedOrderLine) -> Validated<OrderLine> {
    let field = |name: &str| format!("lines[{index}].{name}");

    let product_and_quantity = to_product_code(&field("product_code"), &line.product_code)
        .flat_map(|code| {
            to_order_quantity(&field("quantity"), &code, line.quantity).map(|quantity| (code, quantity))
        });

    validate! {
        id = OrderLineId::make_as(&field("id"), line.id),
        product = product_and_quantity,
        price = Price::make_as(&field("price"), line.price),
        => OrderLine {
            id,
            product_code: product.0,
            quantity: product.1,
            price,
        }
    }
}

/// Validates a whole order, reporting every invalid field.
///
/// # Errors
///
/// [`PlaceOrderError::Validation`] carrying one entry per invalid field, in
/// input order, plus one per repeated line id.
pub fn validate_order(input: &UnvalidatedOrder) -> Result<Order, PlaceOrderError> {
    let lines = Validated::sequence(
        input
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| validate_order_line(index, line)),
    );

    let validated = validate! {
        id = OrderId::make_as("order_id", input.order_id.clone()),
        customer_id = CustomerId::make_as("customer_id", input.customer_id),
        lines = lines.into_result().and_then(unique_line_ids),
        => Order {
            id,
            customer_id,
            lines: Children::from_vec(lines),
        }
    };

    match validated.into_result() {
        Ok(order) => {
            tracing::info!(
                order = Opaque::as_raw(&order.id).as_str(),
                lines = order.lines.len(),
                "order validated"
            );
            Ok(order)
        }
        Err(errors) => {
            tracing::debug!(
                order = input.order_id.as_str(),
                errors = errors.len(),
                fields = ?errors.fields(),
                "order rejected"
            );
            Err(PlaceOrderError::Validation(errors))
        }
    }
}

fn unique_line_ids(lines: Vec<OrderLine>) -> Result<Vec<OrderLine>, ValidationErrors> {
    let mut seen = HashSet::with_capacity(lines.len());
    let duplicates: Vec<ValidationError> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !seen.insert(*Opaque::as_raw(&line.id)))
        .map(|(index, line)| {
            ValidationError::new(
                format!("lines[{index}].id"),
                Violation::custom(format!("Duplicate order line id {}", Opaque::as_raw(&line.id))),
            )
        })
        .collect();

    ValidationErrors::from_vec(duplicates).map_or(Ok(lines), Err)
}
