//! Persistent child collection of an aggregate root.

use std::fmt;
use std::sync::Arc;

use crate::equality::Entity;

/// An immutable, ordered collection of sub-entities.
///
/// Each child sits behind its own `Arc`, and the collection itself is one
/// `Arc`'d slice. Cloning is a reference-count increment, and
/// [`replaced`](Self::replaced) builds a new collection that shares every
/// untouched child with the old one. Nothing in the API hands out `&mut T`.
pub struct Children<T> {
    items: Arc<[Arc<T>]>,
}

impl<T> Children<T> {
    /// Wraps each element.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The child at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index).map(|item| &**item)
    }

    /// Children in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + DoubleEndedIterator {
        self.items.iter().map(|item| &**item)
    }

    /// Index of the first child accepted by `predicate`.
    pub fn position<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(|item| predicate(&**item))
    }

    /// A new collection with `value` at `index`; `None` if out of bounds.
    ///
    /// `self` is left as it was, and every other child is shared with it.
    #[must_use]
    pub fn replaced(&self, index: usize, value: T) -> Option<Self> {
        let mut items = self.items.to_vec();
        *items.get_mut(index)? = Arc::new(value);
        Some(Self {
            items: items.into(),
        })
    }

    /// A new collection with `value` appended.
    #[must_use]
    pub fn appended(&self, value: T) -> Self {
        let mut items = self.items.to_vec();
        items.push(Arc::new(value));
        Self {
            items: items.into(),
        }
    }

    /// `true` if the child at `index` is the same allocation in both
    /// collections.
    #[must_use]
    pub fn shares_child_with(&self, other: &Self, index: usize) -> bool {
        match (self.items.get(index), other.items.get(index)) {
            (Some(mine), Some(theirs)) => Arc::ptr_eq(mine, theirs),
            _ => false,
        }
    }

    /// Copies the children out.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Entity> Children<T> {
    /// The child with identity `id`.
    #[must_use]
    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.iter().find(|child| child.id() == id)
    }

    /// Index of the child with identity `id`.
    #[must_use]
    pub fn position_of(&self, id: &T::Id) -> Option<usize> {
        self.position(|child| child.id() == id)
    }
}

impl<T> Clone for Children<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for Children<T> {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Children<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Children<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(mine, theirs)| mine == theirs)
    }
}

impl<T: Eq> Eq for Children<T> {}

impl<T> FromIterator<T> for Children<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Children<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, Arc<T>>, fn(&'a Arc<T>) -> &'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().map(child_ref as fn(&'a Arc<T>) -> &'a T)
    }
}

fn child_ref<T>(item: &Arc<T>) -> &T {
    item
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Children<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Children<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_vec)
    }
}

static_assertions::assert_impl_all!(Children<String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn replaced_leaves_original_untouched() {
        let original = Children::from_vec(vec!["a", "b", "c"]);
        let updated = original.replaced(1, "B").unwrap();

        assert_eq!(original.to_vec(), vec!["a", "b", "c"]);
        assert_eq!(updated.to_vec(), vec!["a", "B", "c"]);
    }

    #[rstest]
    fn replaced_shares_untouched_children() {
        let original = Children::from_vec(vec![1, 2, 3]);
        let updated = original.replaced(2, 30).unwrap();

        assert!(updated.shares_child_with(&original, 0));
        assert!(updated.shares_child_with(&original, 1));
        assert!(!updated.shares_child_with(&original, 2));
    }

    #[rstest]
    fn replaced_out_of_bounds_is_none() {
        assert!(Children::from_vec(vec![1]).replaced(1, 2).is_none());
    }

    #[rstest]
    fn appended_keeps_order() {
        let children = Children::from_vec(vec![1, 2]).appended(3);
        assert_eq!(children.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn equality_is_elementwise_and_ordered() {
        assert_eq!(Children::from_vec(vec![1, 2]), Children::from_vec(vec![1, 2]));
        assert_ne!(Children::from_vec(vec![1, 2]), Children::from_vec(vec![2, 1]));
    }

    #[rstest]
    fn default_is_empty() {
        let children: Children<u8> = Children::default();
        assert!(children.is_empty());
        assert_eq!(format!("{children:?}"), "[]");
    }
}
