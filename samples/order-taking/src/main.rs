//! Runs the order-taking scenarios and logs what happens.
//!
//! Set `RUST_LOG` to change verbosity, for example
//! `RUST_LOG=order_taking=debug,typedomain=trace`.

use order_taking::compound_types::{
    CardType, CreditCardInfo, Currency, Payment, PaymentMethod, describe_quantity,
};
use order_taking::entities::{Order, UnpaidInvoice, change_order_line_price};
use order_taking::printers::{describe_first, describe_list};
use order_taking::simple_types::{CardNumber, InvoiceId, OrderLineId, PaymentAmount, Price};
use order_taking::workflow::{CardNetworkGateway, UnvalidatedOrder, pay_invoice, validate_order};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use typedomain::opaque::Opaque;

const VALID_ORDER: &str = r#"{
    "order_id": "ORD-2024-001",
    "customer_id": 42,
    "lines": [
        { "id": 1, "product_code": "W1234", "quantity": "3", "price": "19.99" },
        { "id": 2, "product_code": "G123", "quantity": "2.5", "price": "7.50" }
    ]
}"#;

const INVALID_ORDER: &str = r#"{
    "order_id": "",
    "customer_id": 42,
    "lines": [
        { "id": 0, "product_code": "X999", "quantity": "1", "price": "5" },
        { "id": 2, "product_code": "W1234", "quantity": "1.5", "price": "5000" }
    ]
}"#;

fn line_prices(order: &Order) -> Vec<String> {
    order
        .lines
        .iter()
        .map(|line| Opaque::as_raw(&line.price).to_string())
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_taking=info,typedomain=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let order = validate_order(&serde_json::from_str::<UnvalidatedOrder>(VALID_ORDER)?)?;
    for line in &order.lines {
        tracing::info!(
            line = Opaque::as_raw(&line.id),
            product = line.product_code.code(),
            quantity = describe_quantity(&line.quantity).as_str(),
            "order line"
        );
    }

    match validate_order(&serde_json::from_str::<UnvalidatedOrder>(INVALID_ORDER)?) {
        Ok(_) => tracing::warn!("invalid order was accepted"),
        Err(error) => tracing::info!(%error, "invalid order rejected"),
    }

    let repriced = change_order_line_price(
        &order,
        &OrderLineId::make(2)?,
        Price::make(Decimal::new(650, 2))?,
    )?;
    tracing::info!(
        before = ?line_prices(&order),
        after = ?line_prices(&repriced),
        shared_first_line = repriced.lines.shares_child_with(&order.lines, 0),
        "line repriced"
    );

    let invoice = UnpaidInvoice {
        id: InvoiceId::make("INV-2024-001".to_string())?,
        amount_due: PaymentAmount::make(Decimal::new(6247, 2))?,
        currency: Currency::Eur,
    };
    let card = PaymentMethod::Card(CreditCardInfo {
        card_type: "Visa".parse::<CardType>()?,
        card_number: CardNumber::make("4111111111111111".to_string())?,
    });
    let payment = Payment {
        amount: invoice.amount_due,
        currency: Currency::Eur,
        method: card,
    };

    let gateway = CardNetworkGateway::new(vec![CardType::Visa, CardType::MasterCard]);
    match pay_invoice(&invoice, payment.clone(), &gateway.clone().offline()) {
        Ok(_) => tracing::warn!("payment succeeded while providers were offline"),
        Err(error) => tracing::info!(%error, "payment failed"),
    }
    let paid = pay_invoice(&invoice, payment, &gateway)?;
    tracing::info!(invoice = Opaque::as_raw(&paid.id).as_str(), "payment recorded");

    for values in [&[][..], &[5][..], &[1, 2][..], &[1, 2, 3][..]] {
        tracing::info!(
            shape = describe_list(values).as_str(),
            first = describe_first(values).as_str(),
            "list"
        );
    }

    Ok(())
}
