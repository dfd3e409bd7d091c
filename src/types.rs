//! RDF term definitions
//!
//! Thin wrappers around the oxrdf primitives. The mapping engine only ever
//! produces IRI-named subjects, so there is no blank node support here.

use oxrdf::{
    Literal as OxLiteral, NamedNode as OxNamedNode, Term as OxTerm, Triple as OxTriple,
};
use std::fmt;
use thiserror::Error;

/// Term errors
#[derive(Error, Debug)]
pub enum TermError {
    /// Invalid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),
}

pub type TermResult<T> = Result<T, TermError>;

/// Named node (IRI)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedNode(OxNamedNode);

impl NamedNode {
    /// Create a new named node from an IRI string
    pub fn new(iri: impl Into<String>) -> TermResult<Self> {
        OxNamedNode::new(iri.into())
            .map(Self)
            .map_err(|e| TermError::InvalidIri(e.to_string()))
    }

    /// Get the IRI string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Get the inner oxrdf NamedNode
    pub fn inner(&self) -> &OxNamedNode {
        &self.0
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

impl From<OxNamedNode> for NamedNode {
    fn from(node: OxNamedNode) -> Self {
        Self(node)
    }
}

impl From<NamedNode> for OxNamedNode {
    fn from(node: NamedNode) -> Self {
        node.0
    }
}

/// The `rdf:type` predicate
pub fn rdf_type() -> NamedNode {
    NamedNode(oxrdf::vocab::rdf::TYPE.into_owned())
}

/// RDF literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(OxLiteral);

impl Literal {
    /// Create a simple literal (plain string)
    pub fn new_simple_literal(value: impl Into<String>) -> Self {
        Self(OxLiteral::new_simple_literal(value))
    }

    /// Create a typed literal
    pub fn new_typed_literal(value: impl Into<String>, datatype: NamedNode) -> Self {
        Self(OxLiteral::new_typed_literal(value, datatype.0))
    }

    /// Get the lexical value
    pub fn value(&self) -> &str {
        self.0.value()
    }

    /// Get the language tag if present
    pub fn language(&self) -> Option<&str> {
        self.0.language()
    }

    /// Get the datatype
    pub fn datatype(&self) -> NamedNode {
        NamedNode(self.0.datatype().into_owned())
    }

    /// Get the inner oxrdf Literal
    pub fn inner(&self) -> &OxLiteral {
        &self.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(lang) = self.language() {
            write!(f, "\"{}\"@{}", self.value(), lang)
        } else {
            write!(f, "\"{}\"^^{}", self.value(), self.datatype())
        }
    }
}

impl From<OxLiteral> for Literal {
    fn from(lit: OxLiteral) -> Self {
        Self(lit)
    }
}

impl From<Literal> for OxLiteral {
    fn from(lit: Literal) -> Self {
        lit.0
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self(OxLiteral::from(value))
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self(OxLiteral::from(value))
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self(OxLiteral::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self(OxLiteral::from(value))
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self(OxLiteral::from(value))
    }
}

/// Triple object (IRI or literal)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    /// Named node (IRI)
    Iri(NamedNode),
    /// Literal value
    Literal(Literal),
}

impl Object {
    /// Check if this is an IRI
    pub fn is_iri(&self) -> bool {
        matches!(self, Object::Iri(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Object::Literal(_))
    }

    /// Get the IRI if this is one
    pub fn as_iri(&self) -> Option<&NamedNode> {
        match self {
            Object::Iri(n) => Some(n),
            Object::Literal(_) => None,
        }
    }

    /// Get the literal if this is one
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Object::Iri(_) => None,
            Object::Literal(l) => Some(l),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Iri(n) => write!(f, "{}", n),
            Object::Literal(l) => write!(f, "{}", l),
        }
    }
}

impl From<NamedNode> for Object {
    fn from(node: NamedNode) -> Self {
        Object::Iri(node)
    }
}

impl From<Literal> for Object {
    fn from(lit: Literal) -> Self {
        Object::Literal(lit)
    }
}

/// RDF triple (subject-predicate-object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject IRI
    pub subject: NamedNode,
    /// Predicate IRI
    pub predicate: NamedNode,
    /// Object
    pub object: Object,
}

impl Triple {
    /// Create a new triple
    pub fn new(subject: NamedNode, predicate: NamedNode, object: impl Into<Object>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
        }
    }

    /// Convert to an oxrdf Triple
    pub fn to_oxrdf(&self) -> OxTriple {
        let object: OxTerm = match &self.object {
            Object::Iri(n) => OxTerm::NamedNode(n.0.clone()),
            Object::Literal(l) => OxTerm::Literal(l.0.clone()),
        };
        OxTriple::new(self.subject.0.clone(), self.predicate.0.clone(), object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
