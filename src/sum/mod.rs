//! Tagged unions and dispatch.
//!
//! A tagged union is a Rust `enum`: the set of variants is closed and every
//! variant carries its own payload. There are two ways to consume one.
//!
//! **Total dispatch.** A native `match`, or the `fold` generated by
//! `#[derive(TaggedUnion)]`, which takes one handler per variant in
//! declaration order. Leaving a handler out is a compile error:
//!
//! ```
//! use typedomain::TaggedUnion;
//!
//! #[derive(Debug, TaggedUnion)]
//! enum ProductCode {
//!     Widget { code: String },
//!     Gizmo { code: String },
//! }
//!
//! let code = ProductCode::Widget { code: "W1234".to_string() };
//! let description = code.fold_ref(
//!     |code| format!("widget {code} ({} chars)", code.len()),
//!     |code| format!("gizmo {code} ({} chars)", code.len()),
//! );
//! assert_eq!(description, "widget W1234 (5 chars)");
//! ```
//!
//! ```compile_fail
//! use typedomain::TaggedUnion;
//!
//! #[derive(Debug, TaggedUnion)]
//! enum ProductCode {
//!     Widget { code: String },
//!     Gizmo { code: String },
//! }
//!
//! let code = ProductCode::Gizmo { code: "G999".to_string() };
//! let description = code.fold(|code| format!("widget {code}"));
//! ```
//!
//! **Partial dispatch.** [`match_on`] tries patterns in order and can only
//! produce a result through an explicit
//! [`otherwise`](matcher::Matcher::otherwise), so a partial match is
//! recognizable at the call site.

pub mod matcher;
pub mod shape;

pub use matcher::{
    Empty, Equals, Guard, HeadTail, HeadTailCaptures, Matcher, Pair, PairCaptures, Pattern,
    Single, match_on,
};
pub use shape::ListShape;

/// A closed set of labeled variants.
///
/// Derived with `#[derive(TaggedUnion)]`, which also generates the
/// `fold`/`fold_ref` methods.
pub trait TaggedUnion {
    /// Every variant name, in declaration order.
    const TAGS: &'static [&'static str];

    /// The variant name of this value.
    fn tag(&self) -> &'static str;
}

impl<T> TaggedUnion for Option<T> {
    const TAGS: &'static [&'static str] = &["None", "Some"];

    fn tag(&self) -> &'static str {
        match self {
            None => "None",
            Some(_) => "Some",
        }
    }
}

impl<T, E> TaggedUnion for Result<T, E> {
    const TAGS: &'static [&'static str] = &["Ok", "Err"];

    fn tag(&self) -> &'static str {
        match self {
            Ok(_) => "Ok",
            Err(_) => "Err",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use typedomain_derive::TaggedUnion;

    #[derive(TaggedUnion)]
    enum CardType {
        Visa,
        Mastercard,
    }

    #[derive(TaggedUnion)]
    enum Payment {
        Cash,
        Check(u32),
        Card { card_type: CardType, number: String },
    }

    #[rstest]
    fn tags_are_listed_in_declaration_order() {
        assert_eq!(Payment::TAGS, &["Cash", "Check", "Card"]);
        assert_eq!(CardType::TAGS, &["Visa", "Mastercard"]);
    }

    #[rstest]
    #[case(Payment::Cash, "Cash")]
    #[case(Payment::Check(12), "Check")]
    #[case(Payment::Card { card_type: CardType::Visa, number: "4111".to_string() }, "Card")]
    fn tag_names_the_variant(#[case] payment: Payment, #[case] expected: &str) {
        assert_eq!(payment.tag(), expected);
    }

    #[rstest]
    fn fold_passes_full_payload() {
        let payment = Payment::Card {
            card_type: CardType::Mastercard,
            number: "5500".to_string(),
        };

        let rendered = payment.fold(
            || "cash".to_string(),
            |number| format!("check {number}"),
            |card_type, number| {
                let brand = card_type.fold_ref(|| "Visa", || "Mastercard");
                format!("{brand} {}", number.trim_start_matches('5'))
            },
        );

        assert_eq!(rendered, "Mastercard 00");
    }

    #[rstest]
    fn option_and_result_are_tagged_unions() {
        assert_eq!(Some(1).tag(), "Some");
        assert_eq!(None::<i32>.tag(), "None");
        assert_eq!(Err::<i32, &str>("boom").tag(), "Err");
        assert_eq!(Result::<i32, &str>::TAGS, &["Ok", "Err"]);
    }
}
