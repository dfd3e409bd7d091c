//! Value classification and vocabulary substitution
//!
//! Given a property descriptor and a runtime value, decide the triple shape
//! to emit. Every downstream consumer matches exhaustively over [`Emission`]
//! instead of branching on runtime value checks.
//!
//! One deliberate special case: in reference position, a plain string is a
//! vocabulary term (a "named category" like an interest) and becomes a
//! reference IRI directly, while a resource becomes a nested reference the
//! builder recurses into. Both can live in the same property slot.

use crate::registry::PropertyDescriptor;
use crate::types::Literal;
use crate::value::{Resource, Value};
use std::rc::Rc;
use thiserror::Error;

/// A property value the classifier has no triple shape for
#[derive(Error, Debug)]
#[error("unsupported {kind} value in {position} position")]
pub struct UnsupportedShape {
    /// Value kind name
    pub kind: &'static str,
    /// "literal" or "reference"
    pub position: &'static str,
}

/// The triple shape a property value maps to
#[derive(Debug, Clone)]
pub enum Emission {
    /// Absent or empty value; nothing is emitted
    Skip,
    /// Single literal triple
    Literal(Literal),
    /// One literal triple per element
    LiteralList(Vec<Literal>),
    /// Single reference triple
    Reference(RefTarget),
    /// One reference triple per element
    ReferenceList(Vec<RefTarget>),
}

/// Target of a reference triple
#[derive(Clone)]
pub enum RefTarget {
    /// Vocabulary term emitted as an IRI, no recursion
    Iri(String),
    /// Nested resource the builder recurses into
    Nested(Rc<dyn Resource>),
}

impl std::fmt::Debug for RefTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefTarget::Iri(iri) => f.debug_tuple("Iri").field(iri).finish(),
            RefTarget::Nested(r) => f.debug_tuple("Nested").field(&r.type_name()).finish(),
        }
    }
}

/// Substitute a vocabulary term, falling back to the raw value
pub fn map_term<'a>(descriptor: &'a PropertyDescriptor, raw: &'a str) -> &'a str {
    descriptor
        .vocabulary
        .as_ref()
        .and_then(|table| table.get(raw))
        .map(String::as_str)
        .unwrap_or(raw)
}

/// Classify a property value into its emission shape
pub fn classify(
    descriptor: &PropertyDescriptor,
    value: &Value,
) -> Result<Emission, UnsupportedShape> {
    match value {
        Value::Null => Ok(Emission::Skip),
        Value::List(items) if items.is_empty() => Ok(Emission::Skip),
        Value::List(items) => {
            if descriptor.is_literal {
                let literals = items
                    .iter()
                    .map(|item| literal_of(descriptor, item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Emission::LiteralList(literals))
            } else {
                let targets = items
                    .iter()
                    .map(|item| ref_target_of(descriptor, item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Emission::ReferenceList(targets))
            }
        }
        scalar => {
            if descriptor.is_literal {
                Ok(Emission::Literal(literal_of(descriptor, scalar)?))
            } else {
                Ok(Emission::Reference(ref_target_of(descriptor, scalar)?))
            }
        }
    }
}

fn literal_of(
    descriptor: &PropertyDescriptor,
    value: &Value,
) -> Result<Literal, UnsupportedShape> {
    match value {
        Value::String(s) => Ok(Literal::from(map_term(descriptor, s))),
        Value::Integer(i) => Ok(Literal::from(*i)),
        Value::Float(f) => Ok(Literal::from(*f)),
        Value::Boolean(b) => Ok(Literal::from(*b)),
        other => Err(UnsupportedShape {
            kind: other.kind(),
            position: "literal",
        }),
    }
}

fn ref_target_of(
    descriptor: &PropertyDescriptor,
    value: &Value,
) -> Result<RefTarget, UnsupportedShape> {
    match value {
        Value::String(s) => Ok(RefTarget::Iri(map_term(descriptor, s).to_string())),
        Value::Resource(r) => Ok(RefTarget::Nested(r.clone())),
        other => Err(UnsupportedShape {
            kind: other.kind(),
            position: "reference",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn literal_descriptor() -> PropertyDescriptor {
        PropertyDescriptor {
            predicate: "http://xmlns.com/foaf/0.1/name".to_string(),
            is_literal: true,
            vocabulary: None,
        }
    }

    fn interest_descriptor() -> PropertyDescriptor {
        let mut table = HashMap::new();
        table.insert(
            "Reading".to_string(),
            "http://example.org/interests/reading".to_string(),
        );
        PropertyDescriptor {
            predicate: "http://xmlns.com/foaf/0.1/interest".to_string(),
            is_literal: false,
            vocabulary: Some(table),
        }
    }

    #[test]
    fn test_null_and_empty_list_skip() {
        let d = literal_descriptor();
        assert!(matches!(classify(&d, &Value::Null), Ok(Emission::Skip)));
        assert!(matches!(
            classify(&d, &Value::List(vec![])),
            Ok(Emission::Skip)
        ));
    }

    #[test]
    fn test_scalar_literal() {
        let d = literal_descriptor();
        match classify(&d, &Value::from("Jane")).unwrap() {
            Emission::Literal(lit) => assert_eq!(lit.value(), "Jane"),
            other => panic!("expected literal, got {:?}", other),
        }
    }

    #[test]
    fn test_literal_list() {
        let d = literal_descriptor();
        let value = Value::List(vec![Value::from("a"), Value::from(2i64)]);
        match classify(&d, &value).unwrap() {
            Emission::LiteralList(lits) => {
                assert_eq!(lits.len(), 2);
                assert_eq!(lits[1].value(), "2");
            }
            other => panic!("expected literal list, got {:?}", other),
        }
    }

    #[test]
    fn test_vocabulary_terms_become_reference_iris() {
        let d = interest_descriptor();
        let value = Value::List(vec![
            Value::from("Reading"),
            Value::from("urn:interest:chess"),
        ]);
        match classify(&d, &value).unwrap() {
            Emission::ReferenceList(targets) => {
                assert!(matches!(
                    &targets[0],
                    RefTarget::Iri(iri) if iri == "http://example.org/interests/reading"
                ));
                // no table entry: raw value passes through
                assert!(matches!(
                    &targets[1],
                    RefTarget::Iri(iri) if iri == "urn:interest:chess"
                ));
            }
            other => panic!("expected reference list, got {:?}", other),
        }
    }

    #[test]
    fn test_vocabulary_applies_to_literals_with_a_table() {
        let mut d = literal_descriptor();
        let mut table = HashMap::new();
        table.insert("NO".to_string(), "Norway".to_string());
        d.vocabulary = Some(table);

        match classify(&d, &Value::from("NO")).unwrap() {
            Emission::Literal(lit) => assert_eq!(lit.value(), "Norway"),
            other => panic!("expected literal, got {:?}", other),
        }
        // numbers never pass through the table
        match classify(&d, &Value::from(3i64)).unwrap() {
            Emission::Literal(lit) => assert_eq!(lit.value(), "3"),
            other => panic!("expected literal, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_shapes() {
        let d = literal_descriptor();
        let nested = Value::List(vec![Value::List(vec![Value::from("x")])]);
        let err = classify(&d, &nested).unwrap_err();
        assert_eq!(err.kind, "List");
        assert_eq!(err.position, "literal");

        let d = interest_descriptor();
        let err = classify(&d, &Value::from(1i64)).unwrap_err();
        assert_eq!(err.position, "reference");
    }
}
