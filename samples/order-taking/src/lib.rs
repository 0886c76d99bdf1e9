//! An order-taking domain modeled with typedomain.
//!
//! - [`simple_types`]: constrained scalars (codes, quantities, ids, amounts);
//! - [`compound_types`]: product codes, quantities and payment methods as
//!   tagged unions, plus the records built from them;
//! - [`entities`]: contacts, the invoice lifecycle and the order aggregate;
//! - [`workflow`]: order validation and invoice payment;
//! - [`printers`]: shape-based descriptions of lists.

#![forbid(unsafe_code)]

pub mod compound_types;
pub mod entities;
pub mod printers;
pub mod simple_types;
pub mod workflow;
