//! Disjoint-set (union-find) collections.
//!
//! [`DisjointSets`] is the contract shared by the two representations shipped
//! with the crate:
//!
//! - [`LinkedListDisjointSets`] keeps every set as a singly linked chain whose
//!   head is the representative. Unions append the smaller chain to the larger
//!   one (union by size), so `find_set` is a single link lookup.
//! - [`ForestDisjointSets`] keeps every set as a rooted tree and combines
//!   union by rank with path compression.
//!
//! Both store their elements in an index-based arena: a slot whose parent (or
//! representative) index equals its own index is the representative of its set.
//! Elements are identified by value, so `E` must be hashable.

mod forest;
mod linked_list;

use std::collections::HashSet;

use crate::error::DisjointSetError;

pub use self::{forest::ForestDisjointSets, linked_list::LinkedListDisjointSets};

/// Outcome of a [`DisjointSets::union`] call.
///
/// `root` is the representative of the merged set. `absorbed` holds the former
/// representative of the set that was merged into `root`, or `None` when both
/// elements already shared a set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Unioned<E> {
    /// Representative of the set that contains both elements.
    pub root: E,
    /// Former representative that lost its role, if a merge happened.
    pub absorbed: Option<E>,
}

impl<E> Unioned<E> {
    /// Returns `true` when two distinct sets were merged.
    #[inline]
    #[must_use]
    pub fn did_merge(&self) -> bool {
        self.absorbed.is_some()
    }

    /// Maps both representatives through `f`.
    pub fn map<F, G: Fn(E) -> F>(self, f: G) -> Unioned<F> {
        Unioned {
            root: f(self.root),
            absorbed: self.absorbed.map(f),
        }
    }
}

/// A collection of disjoint sets over elements of type `E`.
///
/// Every element belongs to at most one set. Elements enter through
/// [`make_set`](Self::make_set) as singletons and sets only ever grow through
/// [`union`](Self::union); individual elements cannot be removed, but the
/// whole collection can be reset with [`clear`](Self::clear).
///
/// Lookups take `&mut self` because representations are free to restructure
/// themselves while answering (the forest compresses paths).
///
/// # Examples
/// ```
/// use arbor_core::{DisjointSets, ForestDisjointSets};
///
/// let mut sets = ForestDisjointSets::new();
/// for element in ['a', 'b', 'c'] {
///     sets.make_set(element)?;
/// }
/// sets.union(&'a', &'b')?;
///
/// assert_eq!(sets.find_set(&'a')?, sets.find_set(&'b')?);
/// assert_ne!(sets.find_set(&'a')?, sets.find_set(&'c')?);
/// assert_eq!(sets.cardinality_of_set_containing(&'b')?, 2);
/// # Ok::<(), arbor_core::DisjointSetError>(())
/// ```
pub trait DisjointSets<E> {
    /// Returns `true` if `element` belongs to some set.
    fn is_present(&self, element: &E) -> bool;

    /// Creates a singleton set containing `element`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::AlreadyPresent`] if `element` already
    /// belongs to a set.
    fn make_set(&mut self, element: E) -> Result<(), DisjointSetError>;

    /// Returns the representative of the set containing `element`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotPresent`] if `element` is untracked.
    fn find_set(&mut self, element: &E) -> Result<E, DisjointSetError>;

    /// Merges the sets containing `left` and `right`.
    ///
    /// Merging two elements of the same set is a no-op reported through
    /// [`Unioned::did_merge`].
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotPresent`] if either element is
    /// untracked.
    fn union(&mut self, left: &E, right: &E) -> Result<Unioned<E>, DisjointSetError>;

    /// Returns the representatives of all current sets.
    fn current_representatives(&mut self) -> HashSet<E>;

    /// Returns every element of the set containing `element`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotPresent`] if `element` is untracked.
    fn current_elements_of_set_containing(
        &mut self,
        element: &E,
    ) -> Result<HashSet<E>, DisjointSetError>;

    /// Returns the number of elements in the set containing `element`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotPresent`] if `element` is untracked.
    fn cardinality_of_set_containing(&mut self, element: &E) -> Result<usize, DisjointSetError>;

    /// Returns the number of tracked elements across all sets.
    fn len(&self) -> usize;

    /// Returns `true` if no element is tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets every element and set.
    fn clear(&mut self);
}
