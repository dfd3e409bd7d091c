//! Namespace and prefix management
//!
//! Prefix bindings serve two purposes: compact IRIs (`foaf:name`) in
//! descriptors are expanded when the registry is populated, and the finished
//! prefix table travels with the graph to the external serializer.

use indexmap::IndexMap;
use thiserror::Error;

/// Prefix errors
#[derive(Error, Debug)]
pub enum PrefixError {
    /// Unknown prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Not a compact IRI
    #[error("Not a compact IRI: {0}")]
    NotCompact(String),
}

pub type PrefixResult<T> = Result<T, PrefixError>;

/// Prefix → namespace IRI table
#[derive(Debug, Clone)]
pub struct Namespaces {
    prefixes: IndexMap<String, String>,
}

impl Namespaces {
    /// Create a namespace table with common prefixes pre-registered
    pub fn new() -> Self {
        let mut ns = Self::empty();

        ns.add("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        ns.add("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        ns.add("xsd", "http://www.w3.org/2001/XMLSchema#");
        ns.add("owl", "http://www.w3.org/2002/07/owl#");
        ns.add("foaf", "http://xmlns.com/foaf/0.1/");
        ns.add("dc", "http://purl.org/dc/elements/1.1/");
        ns.add("dcterms", "http://purl.org/dc/terms/");

        ns
    }

    /// Create an empty namespace table
    pub fn empty() -> Self {
        Self {
            prefixes: IndexMap::new(),
        }
    }

    /// Bind a prefix to a namespace IRI
    pub fn add(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Get the namespace IRI bound to a prefix
    pub fn iri_for(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Expand a compact IRI (prefix:local) to a full IRI
    pub fn expand(&self, compact: &str) -> PrefixResult<String> {
        let pos = compact
            .find(':')
            .ok_or_else(|| PrefixError::NotCompact(compact.to_string()))?;
        let prefix = &compact[..pos];
        let local = &compact[pos + 1..];
        let iri = self
            .iri_for(prefix)
            .ok_or_else(|| PrefixError::UnknownPrefix(prefix.to_string()))?;
        Ok(format!("{}{}", iri, local))
    }

    /// Expand if the prefix is known, otherwise return the input unchanged
    ///
    /// Full IRIs pass through untouched since their scheme ("http", "urn")
    /// is not a registered prefix.
    pub fn expand_or(&self, term: &str) -> String {
        match term.find(':') {
            Some(pos) if self.prefixes.contains_key(&term[..pos]) => {
                format!("{}{}", &self.prefixes[&term[..pos]], &term[pos + 1..])
            }
            _ => term.to_string(),
        }
    }

    /// Compact an IRI using the longest matching namespace
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.prefixes
            .iter()
            .filter(|(_, ns)| iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, ns)| format!("{}:{}", prefix, &iri[ns.len()..]))
    }

    /// Iterate prefix bindings, for the serialization collaborator
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes
            .iter()
            .map(|(p, iri)| (p.as_str(), iri.as_str()))
    }
}

impl Default for Namespaces {
    fn default() -> Self {
        Self::new()
    }
}
