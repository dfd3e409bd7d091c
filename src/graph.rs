//! Accumulating triple set
//!
//! A `Graph` is the output of one top-level mapping call: a set of triples
//! deduplicated by value equality, with stable insertion order so repeated
//! runs serialize identically.

use crate::types::{rdf_type, NamedNode, Triple};
use indexmap::IndexSet;

/// Deduplicated, insertion-ordered triple set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    triples: IndexSet<Triple>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple; returns false if it was already present
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Check if a triple is present
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Number of distinct triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate triples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Merge another graph into this one
    pub fn merge(&mut self, other: Graph) {
        self.triples.extend(other.triples);
    }

    /// Triples with a given subject
    pub fn triples_with_subject<'a>(
        &'a self,
        subject: &'a NamedNode,
    ) -> impl Iterator<Item = &'a Triple> {
        self.triples.iter().filter(move |t| &t.subject == subject)
    }

    /// Triples with a given predicate
    pub fn triples_with_predicate<'a>(
        &'a self,
        predicate: &'a NamedNode,
    ) -> impl Iterator<Item = &'a Triple> {
        self.triples
            .iter()
            .filter(move |t| &t.predicate == predicate)
    }

    /// Distinct subjects, in first-seen order
    pub fn subjects(&self) -> Vec<NamedNode> {
        let mut seen: IndexSet<NamedNode> = IndexSet::new();
        for t in &self.triples {
            seen.insert(t.subject.clone());
        }
        seen.into_iter().collect()
    }

    /// Type-assertion triples (`rdf:type` predicate)
    pub fn type_assertions(&self) -> impl Iterator<Item = &Triple> {
        let ty = rdf_type();
        self.triples.iter().filter(move |t| t.predicate == ty)
    }

    /// Convert to oxrdf triples for external serialization
    pub fn to_oxrdf(&self) -> Vec<oxrdf::Triple> {
        self.triples.iter().map(Triple::to_oxrdf).collect()
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = indexmap::set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = indexmap::set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
