//! Derive macros for typedomain.
//!
//! # Available Derive Macros
//!
//! - [`TaggedUnion`]: closed tag list plus exhaustive `fold` / `fold_ref`
//! - [`Entity`]: identity-based equality
//! - [`ValueObject`]: structural equality
//! - [`Lenses`]: one lens per struct field
//! - [`Prisms`]: one prism per unit or single-field variant
//!
//! Generated code names items through `::typedomain`, so use these macros
//! through the `typedomain` re-exports.
//!
//! # Example: Tagged Unions
//!
//! ```rust,ignore
//! use typedomain::TaggedUnion;
//!
//! #[derive(TaggedUnion)]
//! enum PaymentMethod {
//!     Cash,
//!     Check(u32),
//!     Card { number: String },
//! }
//!
//! // Generated:
//! // - impl TaggedUnion for PaymentMethod (TAGS = ["Cash", "Check", "Card"])
//! // - PaymentMethod::fold / PaymentMethod::fold_ref, one handler per variant
//!
//! let label = PaymentMethod::Check(42).fold(
//!     || "cash".to_string(),
//!     |number| format!("check #{number}"),
//!     |number| format!("card {}", number.len()),
//! );
//! assert_eq!(label, "check #42");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod entity;
mod lenses;
mod naming;
mod prisms;
mod tagged_union;
mod value_object;

use proc_macro::TokenStream;

/// Derive macro for closed tagged unions.
///
/// For an enum `Name` the macro generates:
///
/// - `impl TaggedUnion for Name`: `TAGS` lists the variant names in
///   declaration order and `tag()` returns the current one;
/// - `Name::fold(self, ..)` and `Name::fold_ref(&self, ..)`, taking one
///   handler per variant in declaration order. The handler parameters are
///   named after the variants in `snake_case`.
///
/// Handlers receive the payload of their variant: nothing for unit
/// variants, the fields positionally for tuple variants, and the fields in
/// declaration order for struct variants. `fold_ref` passes references that
/// live as long as the borrow of the value, so a handler may return them.
///
/// Leaving out a handler is a compile error, which makes every fold
/// exhaustive.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(TaggedUnion)]
/// enum ProductCode {
///     Widget { code: String },
///     Gizmo { code: String },
/// }
///
/// let code = ProductCode::Gizmo { code: "G123".into() };
/// let prefix = code.fold_ref(|_| 'W', |code| code.chars().next().unwrap_or('G'));
/// assert_eq!(prefix, 'G');
/// ```
#[proc_macro_derive(TaggedUnion)]
pub fn derive_tagged_union(input: TokenStream) -> TokenStream {
    tagged_union::derive_tagged_union_impl(input)
}

/// Derive macro for entities compared by identity.
///
/// Generates `Equality` (identity strategy), `Entity`, and `PartialEq`,
/// `Eq` and `Hash` that look at the identity only. Do not also derive
/// `PartialEq` or `Hash`.
///
/// # Structs
///
/// The identity is the field marked `#[entity(id)]`, or else the field
/// named `id`.
///
/// ```rust,ignore
/// #[derive(Clone, Debug, Entity)]
/// struct Contact {
///     #[entity(id)]
///     contact_id: ContactId,
///     email: EmailAddress,
/// }
/// ```
///
/// # Enums
///
/// An enum models the lifecycle states of one entity. The identity type is
/// declared on the enum and every variant carries it:
///
/// ```rust,ignore
/// #[derive(Clone, Debug, Entity)]
/// #[entity(id = InvoiceId)]
/// enum Invoice {
///     Unpaid { id: InvoiceId, amount: u32 },
///     Paid(PaidInvoice), // PaidInvoice: Entity<Id = InvoiceId>
/// }
/// ```
///
/// A unit variant is rejected with "variant must carry the identity".
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive_entity_impl(input)
}

/// Derive macro for value objects compared by all fields.
///
/// Generates `Equality` (structural strategy) and `ValueObject`. The type
/// must also be `Clone`, `PartialEq` and `Eq`, normally through derives.
#[proc_macro_derive(ValueObject)]
pub fn derive_value_object(input: TokenStream) -> TokenStream {
    value_object::derive_value_object_impl(input)
}

/// Derive macro generating a lens per named struct field.
///
/// For each field `foo: T` the macro generates
/// `pub fn foo_lens() -> impl Lens<Self, T> + Clone`.
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Order {
///     id: OrderId,
///     lines: Children<OrderLine>,
/// }
///
/// let lines = Order::lines_lens();
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro generating a prism per enum variant.
///
/// - unit variants get `{variant}_prism() -> impl Prism<Self, ()>`;
/// - single-field tuple variants get `{variant}_prism() -> impl Prism<Self, T>`;
/// - other variants get no prism. Use the `fold` from [`TaggedUnion`].
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
