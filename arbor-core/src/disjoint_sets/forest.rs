//! Forest disjoint sets with union by rank and path compression.
//!
//! See Cormen et al., *Introduction to Algorithms* (3rd ed.), §21.3. Roots are
//! arena nodes whose parent index is their own index. `rank` bounds the height
//! of the subtree below a node; after compression it is only an upper bound.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
};

use tracing::trace;

use super::{DisjointSets, Unioned};
use crate::error::DisjointSetError;

#[derive(Clone, Debug)]
struct Node<E> {
    element: E,
    parent: usize,
    rank: usize,
    /// Cardinality of the tree; meaningful on roots only.
    size: usize,
}

/// Disjoint sets stored as a forest of rooted trees.
///
/// [`find_set`](DisjointSets::find_set) rewrites the parent of every node on
/// the search path to point at the root. [`union`](DisjointSets::union) hangs
/// the lower-ranked root below the higher-ranked one; when ranks are equal the
/// root of the right-hand element's tree becomes the parent and its rank grows
/// by one.
///
/// # Examples
/// ```
/// use arbor_core::{DisjointSets, ForestDisjointSets};
///
/// let mut sets = ForestDisjointSets::new();
/// sets.make_set("left")?;
/// sets.make_set("right")?;
///
/// let unioned = sets.union(&"left", &"right")?;
/// assert_eq!(unioned.root, "right");
/// assert_eq!(sets.rank(&"right")?, 1);
/// # Ok::<(), arbor_core::DisjointSetError>(())
/// ```
#[derive(Clone)]
pub struct ForestDisjointSets<E> {
    nodes: Vec<Node<E>>,
    index: HashMap<E, usize>,
}

impl<E> Default for ForestDisjointSets<E> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for ForestDisjointSets<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, node) in self.nodes.iter().enumerate() {
            let parent = (node.parent != key).then(|| &self.nodes[node.parent].element);
            map.entry(&node.element, &parent);
        }
        map.finish()
    }
}

impl<E> ForestDisjointSets<E> {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of trees in the forest.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(key, node)| node.parent == *key)
            .count()
    }

    fn find_root(&mut self, key: usize) -> usize {
        let parent = self.nodes[key].parent;
        if parent == key {
            return key;
        }

        let root = self.find_root(parent);
        self.nodes[key].parent = root;
        root
    }

    /// Links two distinct roots by rank and returns `(root, absorbed)`.
    fn link(&mut self, left: usize, right: usize) -> (usize, usize) {
        let left_rank = self.nodes[left].rank;
        let right_rank = self.nodes[right].rank;

        let (root, absorbed) = if left_rank > right_rank {
            (left, right)
        } else {
            (right, left)
        };

        self.nodes[absorbed].parent = root;
        let absorbed_size = self.nodes[absorbed].size;
        let node = &mut self.nodes[root];
        node.size = node.size.saturating_add(absorbed_size);
        if left_rank == right_rank {
            node.rank = node.rank.saturating_add(1);
        }

        trace!(root, absorbed, rank = node.rank, "linked forest roots");
        (root, absorbed)
    }
}

impl<E: Eq + Hash> ForestDisjointSets<E> {
    fn key_of(&self, element: &E) -> Result<usize, DisjointSetError> {
        self.index
            .get(element)
            .copied()
            .ok_or(DisjointSetError::NotPresent)
    }

    /// Returns the rank stored on `element`'s node.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotPresent`] if `element` is untracked.
    pub fn rank(&self, element: &E) -> Result<usize, DisjointSetError> {
        Ok(self.nodes[self.key_of(element)?].rank)
    }

    /// Returns the element stored in the parent of `element`'s node, without
    /// compressing the path. Roots are their own parent.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotPresent`] if `element` is untracked.
    pub fn parent(&self, element: &E) -> Result<&E, DisjointSetError> {
        let node = &self.nodes[self.key_of(element)?];
        Ok(&self.nodes[node.parent].element)
    }
}

impl<E: Clone + Eq + Hash> DisjointSets<E> for ForestDisjointSets<E> {
    fn is_present(&self, element: &E) -> bool {
        self.index.contains_key(element)
    }

    fn make_set(&mut self, element: E) -> Result<(), DisjointSetError> {
        if self.index.contains_key(&element) {
            return Err(DisjointSetError::AlreadyPresent);
        }

        let key = self.nodes.len();
        self.nodes.push(Node {
            element: element.clone(),
            parent: key,
            rank: 0,
            size: 1,
        });
        self.index.insert(element, key);
        Ok(())
    }

    fn find_set(&mut self, element: &E) -> Result<E, DisjointSetError> {
        let key = self.key_of(element)?;
        let root = self.find_root(key);
        Ok(self.nodes[root].element.clone())
    }

    fn union(&mut self, left: &E, right: &E) -> Result<Unioned<E>, DisjointSetError> {
        let left_key = self.key_of(left)?;
        let right_key = self.key_of(right)?;

        let left_root = self.find_root(left_key);
        let right_root = self.find_root(right_key);

        if left_root == right_root {
            return Ok(Unioned {
                root: self.nodes[left_root].element.clone(),
                absorbed: None,
            });
        }

        let (root, absorbed) = self.link(left_root, right_root);

        #[cfg(feature = "metrics")]
        metrics::counter!("disjoint_set_unions", "backend" => "forest").increment(1);

        Ok(Unioned {
            root: self.nodes[root].element.clone(),
            absorbed: Some(self.nodes[absorbed].element.clone()),
        })
    }

    fn current_representatives(&mut self) -> HashSet<E> {
        let roots: Vec<usize> = (0..self.nodes.len())
            .map(|key| self.find_root(key))
            .collect();
        roots
            .into_iter()
            .map(|root| self.nodes[root].element.clone())
            .collect()
    }

    fn current_elements_of_set_containing(
        &mut self,
        element: &E,
    ) -> Result<HashSet<E>, DisjointSetError> {
        let key = self.key_of(element)?;
        let root = self.find_root(key);

        let mut members = HashSet::with_capacity(self.nodes[root].size);
        for candidate in 0..self.nodes.len() {
            if self.find_root(candidate) == root {
                members.insert(self.nodes[candidate].element.clone());
            }
        }
        Ok(members)
    }

    fn cardinality_of_set_containing(&mut self, element: &E) -> Result<usize, DisjointSetError> {
        let key = self.key_of(element)?;
        let root = self.find_root(key);
        Ok(self.nodes[root].size)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }
}
