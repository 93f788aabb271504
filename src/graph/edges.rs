//! Edges between logical packages and the deduplicated set that holds them.

use std::collections::BTreeSet;

/// A directed dependency: package `from` imports package `to`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Canonical string encoding of the `(from, to)` pair.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{} -> {}", self.from, self.to)
    }
}

/// Unique edges, iterated in `(from, to)` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSet {
    edges: BTreeSet<Edge>,
}

impl EdgeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an edge. Returns false if an identical edge was already present.
    pub fn insert(&mut self, edge: Edge) -> bool {
        self.edges.insert(edge)
    }

    #[must_use]
    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.edges.contains(&Edge::new(from, to))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = std::collections::btree_set::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}
