//! Equality strategies: structural (value objects) and identity (entities).
//!
//! Every domain type picks exactly one strategy, once, when it is modeled:
//!
//! - a **value object** compares all of its fields. Its derived `PartialEq`
//!   is the single source of truth for [`value_equals`]: nested value objects
//!   compare through their own derived `PartialEq`, sequences compare
//!   element by element in order.
//! - an **entity** carries a designated identity field and compares by that
//!   field alone ([`entity_equals`]). `#[derive(Entity)]` generates
//!   `PartialEq`, `Eq` and `Hash` from the identity so that `==` agrees with
//!   `entity_equals`.
//!
//! The strategy is the associated type of [`Equality`], so a type can carry
//! only one of them:
//!
//! ```compile_fail
//! use typedomain::{Entity, ValueObject};
//!
//! #[derive(Clone, Entity, ValueObject)]
//! struct Contact {
//!     id: u32,
//!     email: String,
//! }
//! ```
//!
//! Every lifecycle state of an entity carries its identity:
//!
//! ```compile_fail
//! use typedomain::Entity;
//!
//! #[derive(Clone, Entity)]
//! #[entity(id = u32)]
//! enum Invoice {
//!     Unpaid { id: u32, amount: u32 },
//!     Cancelled,
//! }
//! ```

use std::fmt::Debug;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Structural {}
    impl Sealed for super::Identity {}
}

/// Marker for the two equality strategies. Sealed.
pub trait Strategy: sealed::Sealed {}

/// Equality by every field.
#[derive(Debug)]
pub enum Structural {}

/// Equality by the identity field only.
#[derive(Debug)]
pub enum Identity {}

impl Strategy for Structural {}
impl Strategy for Identity {}

/// Declares which equality strategy a type uses.
///
/// Implemented by `#[derive(ValueObject)]` and `#[derive(Entity)]`; writing
/// it by hand is only needed for types the derives cannot describe.
pub trait Equality {
    /// [`Structural`] or [`Identity`].
    type Strategy: Strategy;
}

/// A type compared by structural field equality.
///
/// # Examples
///
/// ```
/// use typedomain::ValueObject;
/// use typedomain::equality::value_equals;
///
/// #[derive(Clone, Debug, PartialEq, Eq, ValueObject)]
/// struct Address {
///     street: String,
///     city: String,
/// }
///
/// let first = Address { street: "Main St".into(), city: "Springfield".into() };
/// let second = Address { street: "Main St".into(), city: "Springfield".into() };
/// assert!(value_equals(&first, &second));
/// ```
pub trait ValueObject: Equality<Strategy = Structural> + Eq + Clone {}

/// A type compared by its identity field.
///
/// # Examples
///
/// ```
/// use typedomain::Entity;
/// use typedomain::equality::entity_equals;
///
/// #[derive(Clone, Debug, Entity)]
/// struct Contact {
///     id: u32,
///     email: String,
/// }
///
/// let before = Contact { id: 1, email: "old@example.com".into() };
/// let after = Contact { id: 1, email: "new@example.com".into() };
/// assert!(entity_equals(&before, &after));
/// assert_eq!(before, after);
/// ```
pub trait Entity: Equality<Strategy = Identity> {
    /// The identity type.
    type Id: Clone + Eq + Hash + Debug;

    /// The identity of this entity.
    fn id(&self) -> &Self::Id;
}

/// Structural comparison of two value objects.
#[inline]
pub fn value_equals<T: ValueObject>(first: &T, second: &T) -> bool {
    first == second
}

/// Identity comparison of two entities; every other field is ignored.
#[inline]
pub fn entity_equals<T: Entity>(first: &T, second: &T) -> bool {
    first.id() == second.id()
}
