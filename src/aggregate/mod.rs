//! Copy-on-write updates of an aggregate's sub-entities.
//!
//! An aggregate is a root entity owning a [`Children`] collection of
//! sub-entities. Sub-entities are only reachable through the root and only
//! change through [`update_sub_entity`] (or [`try_update_sub_entity`]):
//!
//! 1. the child whose identity matches is located (or [`UpdateError::NotFound`]);
//! 2. the updater builds a replacement from a shared reference to it;
//! 3. the replacement must keep the identity (or [`UpdateError::IdentityChanged`]);
//! 4. a new collection is built with the replacement at the same position,
//!    sharing every other child with the old collection;
//! 5. a new root holding the new collection is returned.
//!
//! The old root is never touched and stays fully usable.
//!
//! # Examples
//!
//! ```
//! use typedomain::aggregate::{AggregateRoot, Children, update_sub_entity};
//! use typedomain::optics::Lens;
//! use typedomain::{Entity, Lenses};
//!
//! #[derive(Clone, Debug, Entity)]
//! struct OrderLine {
//!     id: u32,
//!     price: u32,
//! }
//!
//! #[derive(Clone, Debug, Entity, Lenses)]
//! struct Order {
//!     id: u32,
//!     lines: Children<OrderLine>,
//! }
//!
//! impl AggregateRoot for Order {
//!     type Child = OrderLine;
//!
//!     fn children_lens() -> impl Lens<Self, Children<OrderLine>> {
//!         Self::lines_lens()
//!     }
//! }
//!
//! let order = Order {
//!     id: 1,
//!     lines: Children::from_vec(vec![OrderLine { id: 10, price: 5 }, OrderLine { id: 11, price: 7 }]),
//! };
//!
//! let repriced = update_sub_entity(&order, &11, |line| OrderLine { price: 9, ..line.clone() }).unwrap();
//!
//! assert_eq!(repriced.lines.get(1).map(|line| line.price), Some(9));
//! assert_eq!(order.lines.get(1).map(|line| line.price), Some(7));
//! ```

mod children;

pub use children::Children;

use crate::equality::Entity;
use crate::error::UpdateError;
use crate::optics::Lens;

/// The identity type of an aggregate's sub-entities.
pub type ChildId<A> = <<A as AggregateRoot>::Child as Entity>::Id;

/// The root entity of an aggregate.
pub trait AggregateRoot: Entity + Clone {
    /// The sub-entity type held by the root.
    type Child: Entity;

    /// Focus on the root's child collection.
    fn children_lens() -> impl Lens<Self, Children<Self::Child>>;

    /// The current children.
    fn children(&self) -> &Children<Self::Child> {
        Self::children_lens().get(self)
    }

    /// The child with identity `id`.
    fn sub_entity(&self, id: &ChildId<Self>) -> Option<&Self::Child> {
        self.children().find(id)
    }
}

/// Replaces the sub-entity `id` with `updater`'s result, returning a new root.
///
/// # Errors
///
/// - [`UpdateError::NotFound`] if no child has identity `id`;
/// - [`UpdateError::IdentityChanged`] if the replacement has another identity.
///
/// `root` is unchanged in both cases.
pub fn update_sub_entity<A, F>(
    root: &A,
    id: &ChildId<A>,
    updater: F,
) -> Result<A, UpdateError<ChildId<A>>>
where
    A: AggregateRoot,
    F: FnOnce(&A::Child) -> A::Child,
{
    try_update_sub_entity(root, id, |child| Ok(updater(child)))
}

/// Like [`update_sub_entity`], for updaters that can fail.
///
/// The updater's error type must absorb [`UpdateError`], so that both
/// failure sources flow through one `Result`.
///
/// # Errors
///
/// The updater's error, or an [`UpdateError`] converted into `E`.
pub fn try_update_sub_entity<A, E, F>(root: &A, id: &ChildId<A>, updater: F) -> Result<A, E>
where
    A: AggregateRoot,
    E: From<UpdateError<ChildId<A>>>,
    F: FnOnce(&A::Child) -> Result<A::Child, E>,
{
    let lens = A::children_lens();
    let children = lens.get(root);

    let Some(position) = children.position_of(id) else {
        tracing::debug!(root = ?root.id(), child = ?id, "sub-entity not found");
        return Err(UpdateError::NotFound { id: id.clone() }.into());
    };
    let current = children
        .get(position)
        .ok_or_else(|| UpdateError::NotFound { id: id.clone() })?;

    let replacement = updater(current)?;
    if replacement.id() != id {
        tracing::debug!(
            root = ?root.id(),
            expected = ?id,
            found = ?replacement.id(),
            "updater changed the identity of a sub-entity"
        );
        return Err(UpdateError::IdentityChanged {
            expected: id.clone(),
            found: replacement.id().clone(),
        }
        .into());
    }

    let updated = children
        .replaced(position, replacement)
        .ok_or_else(|| UpdateError::NotFound { id: id.clone() })?;
    tracing::trace!(
        root = ?root.id(),
        child = ?id,
        position,
        children = updated.len(),
        "sub-entity replaced"
    );

    Ok(lens.set(root.clone(), updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equality::{Equality, Identity};
    use crate::lens;
    use rstest::rstest;

    #[derive(Clone, Debug, PartialEq)]
    struct Line {
        id: u8,
        quantity: u32,
    }

    impl Equality for Line {
        type Strategy = Identity;
    }

    impl Entity for Line {
        type Id = u8;

        fn id(&self) -> &u8 {
            &self.id
        }
    }

    #[derive(Clone, Debug)]
    struct Basket {
        id: u8,
        lines: Children<Line>,
    }

    impl Equality for Basket {
        type Strategy = Identity;
    }

    impl Entity for Basket {
        type Id = u8;

        fn id(&self) -> &u8 {
            &self.id
        }
    }

    impl AggregateRoot for Basket {
        type Child = Line;

        fn children_lens() -> impl Lens<Self, Children<Line>> {
            lens!(Basket, lines)
        }
    }

    fn basket() -> Basket {
        Basket {
            id: 1,
            lines: Children::from_vec(vec![
                Line { id: 1, quantity: 1 },
                Line { id: 2, quantity: 2 },
                Line { id: 3, quantity: 3 },
            ]),
        }
    }

    #[rstest]
    fn update_replaces_at_same_position() {
        let original = basket();
        let updated = update_sub_entity(&original, &2, |line| Line {
            quantity: 20,
            ..line.clone()
        })
        .unwrap();

        let quantities: Vec<u32> = updated.children().iter().map(|line| line.quantity).collect();
        assert_eq!(quantities, vec![1, 20, 3]);
        assert_eq!(original.sub_entity(&2).map(|line| line.quantity), Some(2));
    }

    #[rstest]
    fn update_of_missing_child_is_not_found() {
        let result = update_sub_entity(&basket(), &9, Clone::clone);
        assert_eq!(result.unwrap_err(), UpdateError::NotFound { id: 9 });
    }

    #[rstest]
    fn update_rejects_identity_change() {
        let result = update_sub_entity(&basket(), &1, |line| Line {
            id: 7,
            ..line.clone()
        });
        assert_eq!(
            result.unwrap_err(),
            UpdateError::IdentityChanged {
                expected: 1,
                found: 7
            }
        );
    }

    #[derive(Debug, PartialEq)]
    enum AdjustError {
        Update(UpdateError<u8>),
        Negative,
    }

    impl From<UpdateError<u8>> for AdjustError {
        fn from(error: UpdateError<u8>) -> Self {
            Self::Update(error)
        }
    }

    #[rstest]
    #[case(5, Ok(vec![1, 2, 8]))]
    #[case(-10, Err(AdjustError::Negative))]
    fn try_update_propagates_updater_error(
        #[case] delta: i64,
        #[case] expected: Result<Vec<u32>, AdjustError>,
    ) {
        let result = try_update_sub_entity(&basket(), &3, |line: &Line| {
            u32::try_from(i64::from(line.quantity) + delta)
                .map(|quantity| Line { quantity, ..line.clone() })
                .map_err(|_| AdjustError::Negative)
        });

        let quantities: Result<Vec<u32>, AdjustError> = result.map(|basket| basket.lines.iter().map(|line| line.quantity).collect());
        assert_eq!(quantities, expected);
    }

    #[rstest]
    fn try_update_converts_not_found() {
        let result = try_update_sub_entity(&basket(), &9, |line: &Line| Ok::<_, AdjustError>(line.clone()));
        assert!(matches!(result, Err(AdjustError::Update(UpdateError::NotFound { id: 9 }))));
    }
}
