//! Hash-backed multiset counting occurrences per element.

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
    iter,
};

use crate::error::MultisetError;

/// An unordered collection that records how many times each element occurs.
///
/// Elements with zero occurrences are never stored, so [`contains`] and
/// [`element_set`] only see elements that occur at least once.
///
/// [`contains`]: Self::contains
/// [`element_set`]: Self::element_set
///
/// # Examples
/// ```
/// use arbor_core::Multiset;
///
/// let mut bag = Multiset::new();
/// bag.add("ash", 2)?;
/// bag.add_one("oak")?;
///
/// assert_eq!(bag.len(), 3);
/// assert_eq!(bag.count(&"ash"), 2);
/// assert_eq!(bag.remove(&"ash", 5), 2);
/// assert!(!bag.contains(&"ash"));
/// # Ok::<(), arbor_core::MultisetError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Multiset<E: Eq + Hash> {
    counts: HashMap<E, usize>,
}

impl<E: Eq + Hash> Default for Multiset<E> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<E: Eq + Hash> Multiset<E> {
    /// Creates an empty multiset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of occurrences across all elements.
    ///
    /// Each count fits in a `usize` but their sum may not; the total
    /// saturates at `usize::MAX`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts
            .values()
            .fold(0_usize, |total, &count| total.saturating_add(count))
    }

    /// Returns `true` when no element occurs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns how many times `element` occurs.
    #[must_use]
    pub fn count(&self, element: &E) -> usize {
        self.counts.get(element).copied().unwrap_or(0)
    }

    /// Returns `true` if `element` occurs at least once.
    #[must_use]
    pub fn contains(&self, element: &E) -> bool {
        self.counts.contains_key(element)
    }

    /// Adds `occurrences` copies of `element` and returns the previous count.
    ///
    /// Adding zero occurrences leaves the multiset unchanged.
    ///
    /// # Errors
    /// Returns [`MultisetError::CountOverflow`] when the new count would not
    /// fit in a `usize`; the multiset is left unchanged.
    pub fn add(&mut self, element: E, occurrences: usize) -> Result<usize, MultisetError> {
        let current = self.count(&element);
        if occurrences == 0 {
            return Ok(current);
        }

        let updated = current
            .checked_add(occurrences)
            .ok_or(MultisetError::CountOverflow {
                current,
                requested: occurrences,
            })?;
        self.counts.insert(element, updated);
        Ok(current)
    }

    /// Adds a single occurrence of `element`.
    ///
    /// # Errors
    /// Returns [`MultisetError::CountOverflow`] when the count is saturated.
    pub fn add_one(&mut self, element: E) -> Result<(), MultisetError> {
        self.add(element, 1).map(drop)
    }

    /// Removes up to `occurrences` copies of `element` and returns the
    /// previous count. The element disappears once its count reaches zero.
    pub fn remove(&mut self, element: &E, occurrences: usize) -> usize {
        let Some(count) = self.counts.get_mut(element) else {
            return 0;
        };

        let previous = *count;
        if occurrences >= previous {
            self.counts.remove(element);
        } else {
            *count -= occurrences;
        }
        previous
    }

    /// Removes one occurrence of `element`, returning whether one existed.
    pub fn remove_one(&mut self, element: &E) -> bool {
        self.remove(element, 1) > 0
    }

    /// Sets the count of `element` and returns the previous count.
    ///
    /// A count of zero removes the element.
    pub fn set_count(&mut self, element: E, count: usize) -> usize {
        let previous = if count == 0 {
            self.counts.remove(&element)
        } else {
            self.counts.insert(element, count)
        };
        previous.unwrap_or(0)
    }

    /// Iterates over every occurrence; each element repeats by multiplicity.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.counts
            .iter()
            .flat_map(|(element, &count)| iter::repeat_n(element, count))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

impl<E: Clone + Eq + Hash> Multiset<E> {
    /// Returns the distinct elements.
    #[must_use]
    pub fn element_set(&self) -> HashSet<E> {
        self.counts.keys().cloned().collect()
    }
}

impl<E: Eq + Hash> Extend<E> for Multiset<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, elements: I) {
        for element in elements {
            let count = self.counts.entry(element).or_insert(0);
            *count = count.saturating_add(1);
        }
    }
}

impl<E: Eq + Hash> FromIterator<E> for Multiset<E> {
    fn from_iter<I: IntoIterator<Item = E>>(elements: I) -> Self {
        let mut multiset = Self::new();
        multiset.extend(elements);
        multiset
    }
}
