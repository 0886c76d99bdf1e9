//! Type class traits for the Result/Option algebra.
//!
//! - [`Functor`]: mapping over a present/successful payload
//! - [`Applicative`]: combining independent computations (`map2`, `map3`)
//! - [`Monad`]: sequencing dependent computations (`flat_map`)
//! - [`Semigroup`]: associative combination, used for error accumulation
//!
//! Instances exist for `Option`, `Result` and
//! [`Validated`](crate::validation::Validated). `Option` and `Result` are the
//! standard library types: constructing them is `Some`/`None` and
//! `Ok`/`Err`, and their inherent `map`, `map_err`, `and_then` and
//! `unwrap_or` remain the everyday API. The traits add the shared vocabulary
//! that lets `Validated` sit next to them with a different failure policy.
//!
//! ## Higher-Kinded Types Emulation
//!
//! [`TypeConstructor`] uses Generic Associated Types to name "the same
//! container over another type".

mod applicative;
mod functor;
mod higher;
mod monad;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use semigroup::Semigroup;
