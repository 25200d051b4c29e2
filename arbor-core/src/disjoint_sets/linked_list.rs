//! Linked-list disjoint sets with union by size.
//!
//! Each set is a chain of arena slots threaded through `next`. The head of the
//! chain is the representative: its `representative` index points at itself
//! and it alone carries the set size and the index of the chain tail. Every
//! other slot points straight at the head, so `find_set` never walks.

use std::{
    collections::{BTreeSet, HashMap, HashSet},
    fmt,
    hash::Hash,
};

use tracing::trace;

use super::{DisjointSets, Unioned};
use crate::error::DisjointSetError;

#[derive(Clone, Debug)]
struct Slot<E> {
    element: E,
    representative: usize,
    next: Option<usize>,
    /// Cardinality of the set; meaningful on the representative only.
    size: usize,
    /// Last slot of the chain; meaningful on the representative only.
    tail: usize,
}

/// Disjoint sets stored as linked chains with union by size.
///
/// When two sets are merged the representative of the larger set survives;
/// on equal sizes the representative of the left-hand element's set wins.
///
/// # Examples
/// ```
/// use arbor_core::{DisjointSets, LinkedListDisjointSets};
///
/// let mut sets = LinkedListDisjointSets::new();
/// sets.make_set(1)?;
/// sets.make_set(2)?;
///
/// let unioned = sets.union(&1, &2)?;
/// assert_eq!(unioned.root, 1);
/// assert_eq!(sets.find_set(&2)?, 1);
/// # Ok::<(), arbor_core::DisjointSetError>(())
/// ```
#[derive(Clone)]
pub struct LinkedListDisjointSets<E> {
    slots: Vec<Slot<E>>,
    index: HashMap<E, usize>,
    representatives: BTreeSet<usize>,
}

impl<E> Default for LinkedListDisjointSets<E> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            representatives: BTreeSet::new(),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for LinkedListDisjointSets<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for &head in &self.representatives {
            list.entry(&Chain { sets: self, head });
        }
        list.finish()
    }
}

struct Chain<'a, E> {
    sets: &'a LinkedListDisjointSets<E>,
    head: usize,
}

impl<E: fmt::Debug> fmt::Debug for Chain<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.sets.chain(self.head).map(|slot| &slot.element))
            .finish()
    }
}

impl<E> LinkedListDisjointSets<E> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.representatives.len()
    }

    /// Iterates over the slots of the chain starting at `head`.
    fn chain(&self, head: usize) -> impl Iterator<Item = &Slot<E>> + '_ {
        let mut cursor = Some(head);
        std::iter::from_fn(move || {
            let slot = &self.slots[cursor?];
            cursor = slot.next;
            Some(slot)
        })
    }

    /// Appends the chain headed by `absorbed` to the chain headed by `root`
    /// and repoints every absorbed slot at `root`.
    fn append(&mut self, root: usize, absorbed: usize) {
        let tail = self.slots[root].tail;
        self.slots[tail].next = Some(absorbed);

        let mut cursor = Some(absorbed);
        while let Some(current) = cursor {
            let slot = &mut self.slots[current];
            slot.representative = root;
            cursor = slot.next;
        }

        let absorbed_size = self.slots[absorbed].size;
        let absorbed_tail = self.slots[absorbed].tail;
        let head = &mut self.slots[root];
        head.size = head.size.saturating_add(absorbed_size);
        head.tail = absorbed_tail;

        self.representatives.remove(&absorbed);
        trace!(root, absorbed, size = head.size, "appended linked chain");
    }
}

impl<E: Eq + Hash> LinkedListDisjointSets<E> {
    fn representative_of(&self, element: &E) -> Result<usize, DisjointSetError> {
        self.index
            .get(element)
            .map(|&slot| self.slots[slot].representative)
            .ok_or(DisjointSetError::NotPresent)
    }
}

impl<E: Clone + Eq + Hash> DisjointSets<E> for LinkedListDisjointSets<E> {
    fn is_present(&self, element: &E) -> bool {
        self.index.contains_key(element)
    }

    fn make_set(&mut self, element: E) -> Result<(), DisjointSetError> {
        if self.index.contains_key(&element) {
            return Err(DisjointSetError::AlreadyPresent);
        }

        let key = self.slots.len();
        self.slots.push(Slot {
            element: element.clone(),
            representative: key,
            next: None,
            size: 1,
            tail: key,
        });
        self.index.insert(element, key);
        self.representatives.insert(key);
        Ok(())
    }

    fn find_set(&mut self, element: &E) -> Result<E, DisjointSetError> {
        let representative = self.representative_of(element)?;
        Ok(self.slots[representative].element.clone())
    }

    fn union(&mut self, left: &E, right: &E) -> Result<Unioned<E>, DisjointSetError> {
        let left_rep = self.representative_of(left)?;
        let right_rep = self.representative_of(right)?;

        if left_rep == right_rep {
            return Ok(Unioned {
                root: self.slots[left_rep].element.clone(),
                absorbed: None,
            });
        }

        let (root, absorbed) = if self.slots[left_rep].size >= self.slots[right_rep].size {
            (left_rep, right_rep)
        } else {
            (right_rep, left_rep)
        };

        self.append(root, absorbed);

        #[cfg(feature = "metrics")]
        metrics::counter!("disjoint_set_unions", "backend" => "linked_list").increment(1);

        Ok(Unioned {
            root: self.slots[root].element.clone(),
            absorbed: Some(self.slots[absorbed].element.clone()),
        })
    }

    fn current_representatives(&mut self) -> HashSet<E> {
        self.representatives
            .iter()
            .map(|&head| self.slots[head].element.clone())
            .collect()
    }

    fn current_elements_of_set_containing(
        &mut self,
        element: &E,
    ) -> Result<HashSet<E>, DisjointSetError> {
        let head = self.representative_of(element)?;
        Ok(self.chain(head).map(|slot| slot.element.clone()).collect())
    }

    fn cardinality_of_set_containing(&mut self, element: &E) -> Result<usize, DisjointSetError> {
        let head = self.representative_of(element)?;
        Ok(self.slots[head].size)
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.representatives.clear();
    }
}
