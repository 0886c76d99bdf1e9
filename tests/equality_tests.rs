//! Tests for value-object and entity equality, including derived entities
//! whose lifecycle states are enum variants.

use std::collections::HashSet;

use rstest::rstest;
use typedomain::equality::{entity_equals, value_equals};
use typedomain::opaque;
use typedomain::{Entity, ValueObject};

opaque! {
    pub ContactId(u32);
    pub InvoiceId(String);
}

#[derive(Clone, Debug, PartialEq, Eq, ValueObject)]
struct PersonalName {
    first_name: String,
    middle_initial: Option<String>,
    last_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, ValueObject)]
struct Team {
    members: Vec<PersonalName>,
}

#[derive(Clone, Debug, Entity)]
struct Contact {
    #[entity(id)]
    contact_id: ContactId,
    email: String,
}

#[derive(Clone, Debug, Entity)]
struct Tagged(#[entity(id)] u64, &'static str);

#[derive(Clone, Debug, Entity)]
struct PaidInvoice {
    id: InvoiceId,
    amount: u32,
    paid_on: &'static str,
}

#[derive(Clone, Debug, Entity)]
#[entity(id = InvoiceId)]
enum Invoice {
    Unpaid { id: InvoiceId, amount: u32 },
    Paid(PaidInvoice),
}

fn name(first: &str, last: &str) -> PersonalName {
    PersonalName {
        first_name: first.to_string(),
        middle_initial: None,
        last_name: last.to_string(),
    }
}

fn contact(id: u32, email: &str) -> Contact {
    Contact {
        contact_id: ContactId::make(id).unwrap(),
        email: email.to_string(),
    }
}

fn invoice_id(raw: &str) -> InvoiceId {
    InvoiceId::make(raw.to_string()).unwrap()
}

// =============================================================================
// Value objects
// =============================================================================

#[rstest]
fn value_objects_compare_every_field() {
    assert!(value_equals(&name("Alex", "Adams"), &name("Alex", "Adams")));
    assert!(!value_equals(&name("Alex", "Adams"), &name("Alex", "Smith")));

    let with_initial = PersonalName {
        middle_initial: Some("J".to_string()),
        ..name("Alex", "Adams")
    };
    assert!(!value_equals(&with_initial, &name("Alex", "Adams")));
}

#[rstest]
fn nested_sequences_compare_in_order() {
    let ordered = Team {
        members: vec![name("A", "B"), name("C", "D")],
    };
    let reversed = Team {
        members: vec![name("C", "D"), name("A", "B")],
    };
    assert!(value_equals(&ordered, &ordered.clone()));
    assert!(!value_equals(&ordered, &reversed));
}

#[rstest]
fn opaque_values_are_value_objects() {
    assert!(value_equals(&ContactId::make(1).unwrap(), &ContactId::make(1).unwrap()));
}

// =============================================================================
// Entities
// =============================================================================

#[rstest]
fn entities_compare_by_identity_only() {
    let before = contact(1, "old@example.com");
    let after = contact(1, "new@example.com");
    let other = contact(2, "old@example.com");

    assert!(entity_equals(&before, &after));
    assert_eq!(before, after);
    assert!(!entity_equals(&before, &other));
    assert_ne!(before, other);
}

#[rstest]
fn entity_hash_follows_identity() {
    let contacts: HashSet<Contact> = [contact(1, "a@example.com"), contact(1, "b@example.com"), contact(2, "c@example.com")]
        .into_iter()
        .collect();
    assert_eq!(contacts.len(), 2);
}

#[rstest]
fn tuple_struct_entity_uses_marked_field() {
    assert_eq!(Tagged(7, "first"), Tagged(7, "second"));
    assert_eq!(*Tagged(9, "x").id(), 9);
}

#[rstest]
fn lifecycle_states_share_identity() {
    let unpaid = Invoice::Unpaid {
        id: invoice_id("INV-1"),
        amount: 100,
    };
    let paid = Invoice::Paid(PaidInvoice {
        id: invoice_id("INV-1"),
        amount: 100,
        paid_on: "2024-05-01",
    });
    let other = Invoice::Unpaid {
        id: invoice_id("INV-2"),
        amount: 100,
    };

    assert_eq!(unpaid.id(), paid.id());
    assert!(entity_equals(&unpaid, &paid));
    assert_ne!(unpaid, other);
}

#[rstest]
fn paying_keeps_the_invoice_identity() {
    let unpaid = Invoice::Unpaid {
        id: invoice_id("INV-7"),
        amount: 40,
    };

    let paid = match unpaid.clone() {
        Invoice::Unpaid { id, amount } => Invoice::Paid(PaidInvoice {
            id,
            amount,
            paid_on: "2024-06-30",
        }),
        already_paid @ Invoice::Paid(_) => already_paid,
    };

    assert!(matches!(paid, Invoice::Paid(_)));
    assert_eq!(paid, unpaid);
}
