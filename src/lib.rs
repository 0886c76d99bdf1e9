//! # typedomain
//!
//! Primitives for type-driven domain modeling: business invariants live in
//! types rather than in scattered runtime checks.
//!
//! ## Overview
//!
//! - **Opaque values** ([`opaque`]): branded scalars such as `CustomerId` or
//!   `WidgetCode`. Brands over the same representation never mix, and the
//!   only way in is a validating smart constructor.
//! - **Tagged unions** ([`sum`]): closed variant sets consumed by exhaustive
//!   `fold`s or by visibly partial [`match_on`](sum::match_on) chains,
//!   including dispatch on the shape of a slice.
//! - **Result/Option algebra** ([`typeclass`], [`validation`]): `Functor`,
//!   `Applicative` and `Monad` over `Option` and `Result`, plus
//!   [`Validated`](validation::Validated) for accumulating independent field
//!   errors.
//! - **Equality strategies** ([`equality`]): value objects compare by every
//!   field, entities by identity only.
//! - **Aggregates** ([`aggregate`]): copy-on-write updates of sub-entities
//!   reached through their root.
//!
//! ## Feature Flags
//!
//! - `derive` (default): re-exports `TaggedUnion`, `Entity`, `ValueObject`,
//!   `Lenses` and `Prisms` derive macros
//! - `serde`: `Serialize`/`Deserialize` for the primitive types; opaque
//!   values deserialize through their smart constructor
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use typedomain::prelude::*;
//!
//! opaque! {
//!     pub UnitQuantity(u32) validate |raw| constraint::within(raw, &1, &1000);
//! }
//!
//! #[derive(Debug, TaggedUnion)]
//! enum OrderQuantity {
//!     Unit { quantity: UnitQuantity },
//!     Kilogram { quantity: f64 },
//! }
//!
//! let quantity = OrderQuantity::Unit { quantity: UnitQuantity::make(5).unwrap() };
//! let amount = quantity.fold_ref(
//!     |quantity| f64::from(*Opaque::as_raw(quantity)),
//!     |quantity| *quantity,
//! );
//! assert!((amount - 5.0).abs() < f64::EPSILON);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

// Derive output names `::typedomain::...`, including inside this crate.
extern crate self as typedomain;

/// Prelude module for convenient imports.
///
/// ```rust
/// use typedomain::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregate::{AggregateRoot, Children, try_update_sub_entity, update_sub_entity};
    pub use crate::equality::{Entity, ValueObject, entity_equals, value_equals};
    pub use crate::error::{UpdateError, ValidationError, ValidationErrors, Violation};
    pub use crate::opaque::{Brand, Opaque, constraint};
    pub use crate::optics::{Lens, Prism};
    pub use crate::sum::{
        Empty, Equals, Guard, HeadTail, ListShape, Pair, Single, TaggedUnion, match_on,
    };
    pub use crate::typeclass::{Applicative, Functor, Monad, Semigroup};
    pub use crate::validation::Validated;
    pub use crate::{opaque, validate};

    #[cfg(feature = "derive")]
    pub use typedomain_derive::{Entity, Lenses, Prisms, TaggedUnion, ValueObject};
}

pub mod aggregate;
pub mod equality;
pub mod error;
pub mod opaque;
pub mod optics;
pub mod sum;
pub mod typeclass;
pub mod validation;

pub use equality::{Entity, ValueObject};
pub use sum::TaggedUnion;

#[cfg(feature = "derive")]
pub use typedomain_derive::{Entity, Lenses, Prisms, TaggedUnion, ValueObject};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}
