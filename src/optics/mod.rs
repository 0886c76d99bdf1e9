//! Optics for immutable records and tagged unions.
//!
//! - [`Lens`]: get/set one field of a record, returning a new record
//! - [`Prism`]: preview/review one variant of a tagged union
//!
//! `#[derive(Lenses)]` and `#[derive(Prisms)]` generate them per field and
//! per variant; [`lens!`](crate::lens) and [`prism!`](crate::prism) build
//! them ad hoc.

mod lens;
mod prism;

pub use lens::{ComposedLens, FunctionLens, Lens};
pub use prism::{FunctionPrism, Prism};
