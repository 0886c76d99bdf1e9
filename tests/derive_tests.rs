//! Tests for the derive macros on shapes not covered elsewhere: generic
//! types, marked identity fields inside variants, and mixed variant kinds.

use rstest::rstest;
use typedomain::equality::Equality;
use typedomain::optics::{Lens, Prism};
use typedomain::{Entity, Lenses, Prisms, TaggedUnion, ValueObject};

#[derive(Clone, Debug, PartialEq, Lenses)]
struct Envelope<T> {
    label: String,
    payload: T,
}

#[derive(Clone, Debug, PartialEq, Prisms, TaggedUnion)]
enum Reply<T> {
    Empty,
    Value(T),
    Pair(T, T),
}

#[derive(Clone, Debug, Entity)]
#[entity(id = u64)]
enum Shipment {
    Pending {
        #[entity(id)]
        shipment_number: u64,
        address: String,
    },
    Dispatched(#[entity(id)] u64, String),
}

#[derive(Clone, Debug, PartialEq, Eq, ValueObject)]
enum Currency {
    Eur,
    Usd,
}

fn strategy_of<T: Equality>(_: &T) -> &'static str {
    std::any::type_name::<T::Strategy>().rsplit("::").next().unwrap_or_default()
}

#[rstest]
fn generic_lens_focuses_payload() {
    let envelope = Envelope {
        label: "order".to_string(),
        payload: 3u8,
    };
    let payload = Envelope::<u8>::payload_lens();
    assert_eq!(*payload.get(&envelope), 3);
    assert_eq!(payload.set(envelope, 4).payload, 4);
}

#[rstest]
fn generic_prism_covers_unit_and_newtype_variants() {
    let value = Reply::<i32>::value_prism();
    assert_eq!(value.preview(&Reply::Value(5)), Some(&5));
    assert_eq!(value.preview(&Reply::Pair(1, 2)), None);
    assert_eq!(Reply::<i32>::empty_prism().review(()), Reply::Empty);
}

#[rstest]
fn multi_field_variant_is_still_foldable() {
    let reply = Reply::Pair(2, 3);
    let total = reply.fold(|| 0, |value| value, |first, second| first + second);
    assert_eq!(total, 5);
    assert_eq!(Reply::<u8>::TAGS, &["Empty", "Value", "Pair"]);
}

#[rstest]
fn marked_fields_carry_identity_in_each_variant() {
    let pending = Shipment::Pending {
        shipment_number: 12,
        address: "1 Main St".to_string(),
    };
    let dispatched = Shipment::Dispatched(12, "tracking-1".to_string());

    assert_eq!(*pending.id(), 12);
    assert_eq!(pending, dispatched);
    assert_ne!(pending, Shipment::Dispatched(13, "tracking-2".to_string()));
}

#[rstest]
fn derives_select_the_strategy() {
    assert_eq!(strategy_of(&Currency::Eur), "Structural");
    assert_eq!(strategy_of(&Shipment::Dispatched(1, String::new())), "Identity");
    assert_ne!(Currency::Eur, Currency::Usd);
}
