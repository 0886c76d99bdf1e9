//! Multi-error validation.
//!
//! Two failure-propagation policies coexist in this crate:
//!
//! - **short-circuit** (`Result<T, ValidationError>` and [`Monad::flat_map`]):
//!   for dependent steps, the first failure stops everything;
//! - **accumulate** ([`Validated`], i.e. `Result<T, ValidationErrors>` once
//!   converted): for independent fields, every failure is reported.
//!
//! [`Monad::flat_map`]: crate::typeclass::Monad::flat_map

mod validated;

pub use validated::Validated;
