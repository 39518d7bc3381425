//! Lazily materialised tree of event nodes

use super::node::EventNode;
use std::collections::HashMap;

/// Mapping from root segment to root node
pub struct EventTree<A, R> {
    roots: HashMap<String, EventNode<A, R>>,
}

impl<A, R> Default for EventTree<A, R> {
    fn default() -> Self {
        Self {
            roots: HashMap::new(),
        }
    }
}

impl<A, R> EventTree<A, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `segments` from the root, creating missing nodes, and return the
    /// leaf. `visit` sees every node on the chain, root first.
    ///
    /// `segments` must be non-empty.
    pub fn resolve_with<F>(
        &mut self,
        segments: &[&str],
        mut visit: F,
    ) -> Option<&mut EventNode<A, R>>
    where
        F: FnMut(&EventNode<A, R>),
    {
        let (first, rest) = segments.split_first()?;
        let mut node = self
            .roots
            .entry((*first).to_string())
            .or_insert_with(EventNode::new);
        visit(&*node);
        for segment in rest {
            node = node
                .children
                .entry((*segment).to_string())
                .or_insert_with(EventNode::new);
            visit(&*node);
        }
        Some(node)
    }

    /// Resolve the leaf for `segments`, creating nodes as needed
    pub fn resolve(&mut self, segments: &[&str]) -> Option<&mut EventNode<A, R>> {
        self.resolve_with(segments, |_| {})
    }

    /// Find the leaf for `segments` without creating anything
    pub fn lookup(&self, segments: &[&str]) -> Option<&EventNode<A, R>> {
        let (first, rest) = segments.split_first()?;
        let mut node = self.roots.get(*first)?;
        for segment in rest {
            node = node.children.get(*segment)?;
        }
        Some(node)
    }

    /// Mutable variant of [`lookup`](Self::lookup)
    pub fn lookup_mut(&mut self, segments: &[&str]) -> Option<&mut EventNode<A, R>> {
        let (first, rest) = segments.split_first()?;
        let mut node = self.roots.get_mut(*first)?;
        for segment in rest {
            node = node.children.get_mut(*segment)?;
        }
        Some(node)
    }

    /// Drop the node at `segments` together with all of its descendants
    pub fn remove_subtree(&mut self, segments: &[&str]) -> Option<EventNode<A, R>> {
        let (last, parents) = segments.split_last()?;
        if parents.is_empty() {
            return self.roots.remove(*last);
        }
        self.lookup_mut(parents)?.children.remove(*last)
    }

    pub fn clear(&mut self) {
        self.roots = HashMap::new();
    }

    pub fn node_count(&self) -> usize {
        self.roots.values().map(EventNode::subtree_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Tree = EventTree<(), ()>;

    #[test]
    fn test_resolve_creates_chain() {
        let mut tree = Tree::new();
        let mut visited = 0;
        assert!(tree.resolve_with(&["a", "b", "c"], |_| visited += 1).is_some());
        assert_eq!(visited, 3);
        assert_eq!(tree.node_count(), 3);

        tree.resolve(&["a", "b"]);
        tree.resolve(&["a", "d"]);
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_lookup_does_not_create() {
        let mut tree = Tree::new();
        assert!(tree.lookup(&["a"]).is_none());
        assert!(tree.lookup_mut(&["a", "b"]).is_none());
        assert!(tree.is_empty());

        tree.resolve(&["a"]);
        assert!(tree.lookup(&["a"]).is_some());
        assert!(tree.lookup(&["a", "b"]).is_none());
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_remove_subtree() {
        let mut tree = Tree::new();
        tree.resolve(&["a", "b", "c"]);
        tree.resolve(&["a", "x"]);
        tree.resolve(&["z"]);

        assert!(tree.remove_subtree(&["a", "b"]).is_some());
        assert!(tree.lookup(&["a", "b", "c"]).is_none());
        assert!(tree.lookup(&["a", "x"]).is_some());
        assert!(tree.remove_subtree(&["a", "b"]).is_none());

        assert!(tree.remove_subtree(&["z"]).is_some());
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut tree = Tree::new();
        tree.resolve(&["a", "b"]);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 0);
    }
}
