//! Insertion-ordered collection used for handler and hook lists

use std::collections::VecDeque;

/// Double-ended, insertion-ordered list with identity removal.
///
/// Equality of `T` is expected to be identity equality (see
/// [`Handler`](super::Handler) and [`Hook`](super::Hook)). Duplicates are
/// kept; `remove` drops every matching entry.
#[derive(Debug, Clone)]
pub struct OrderedList<T> {
    items: VecDeque<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T: PartialEq> OrderedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn push_front(&mut self, item: T) {
        self.items.push_front(item);
    }

    /// Remove every entry equal to `item`, returning how many were removed
    pub fn remove(&mut self, item: &T) -> usize {
        let before = self.items.len();
        self.items.retain(|existing| existing != item);
        before - self.items.len()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone + PartialEq> OrderedList<T> {
    /// Copy the current contents so they can be iterated without holding a
    /// borrow of the list
    pub fn snapshot(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}
