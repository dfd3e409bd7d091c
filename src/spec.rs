//! Standalone specification table
//!
//! The table-driven alternative to declaration-site metadata: one document
//! describing namespaces and every mapped class, loadable from JSON or YAML.
//! It converts into the same [`TermRegistry`](crate::TermRegistry) shape via
//! [`TermRegistry::from_spec`](crate::TermRegistry::from_spec).
//!
//! ```yaml
//! namespaces:
//!   ex: "http://example.org/"
//! classes:
//!   Person:
//!     rdf_type: "foaf:Person"
//!     uri_template: "ex:person/{id}"
//!     properties:
//!       first_name:
//!         predicate: "foaf:firstName"
//!       knows:
//!         predicate: "foaf:knows"
//!         is_literal: false
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Specification loading errors
#[derive(Error, Debug)]
pub enum SpecError {
    /// JSON syntax or shape error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML syntax or shape error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type SpecResult<T> = Result<T, SpecError>;

/// Whole specification: namespaces plus mapped classes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingSpec {
    /// Prefix → namespace IRI bindings
    #[serde(default)]
    pub namespaces: IndexMap<String, String>,

    /// Type name → class mapping
    pub classes: IndexMap<String, ClassSpec>,
}

/// Mapping for one domain type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSpec {
    /// Canonical `rdf:type` IRI or compact IRI
    pub rdf_type: String,

    /// URI template; absent means instances carry their own identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri_template: Option<String>,

    /// Property name → property mapping
    #[serde(default)]
    pub properties: IndexMap<String, PropertySpec>,
}

/// Mapping for one property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySpec {
    /// Predicate IRI or compact IRI
    pub predicate: String,

    /// Literal vs reference; literal when omitted
    #[serde(default = "default_is_literal")]
    pub is_literal: bool,

    /// Controlled-vocabulary substitution table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<HashMap<String, String>>,
}

fn default_is_literal() -> bool {
    true
}

impl MappingSpec {
    /// Load a specification from JSON text
    pub fn from_json_str(input: &str) -> SpecResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a specification from YAML text
    pub fn from_yaml_str(input: &str) -> SpecResult<Self> {
        Ok(serde_yaml::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON_SPEC: &str = r#"{
        "namespaces": {"ex": "http://example.org/"},
        "classes": {
            "Person": {
                "rdf_type": "foaf:Person",
                "uri_template": "ex:person/{id}",
                "properties": {
                    "first_name": {"predicate": "foaf:firstName"},
                    "knows": {"predicate": "foaf:knows", "is_literal": false},
                    "interests": {
                        "predicate": "foaf:interest",
                        "is_literal": false,
                        "mapping": {"Reading": "http://example.org/interests/reading"}
                    }
                }
            }
        }
    }"#;

    #[test]
    fn test_json_round() {
        let spec = MappingSpec::from_json_str(JSON_SPEC).unwrap();
        assert_eq!(spec.namespaces["ex"], "http://example.org/");

        let person = &spec.classes["Person"];
        assert_eq!(person.rdf_type, "foaf:Person");
        assert_eq!(person.uri_template.as_deref(), Some("ex:person/{id}"));
        assert_eq!(person.properties.len(), 3);

        // is_literal defaults to true when omitted
        assert!(person.properties["first_name"].is_literal);
        assert!(!person.properties["knows"].is_literal);

        let interests = &person.properties["interests"];
        let mapping = interests.mapping.as_ref().unwrap();
        assert_eq!(mapping["Reading"], "http://example.org/interests/reading");
    }

    #[test]
    fn test_yaml_equivalent() {
        let yaml = r#"
namespaces:
  ex: "http://example.org/"
classes:
  Person:
    rdf_type: "foaf:Person"
    uri_template: "ex:person/{id}"
    properties:
      first_name:
        predicate: "foaf:firstName"
      knows:
        predicate: "foaf:knows"
        is_literal: false
"#;
        let spec = MappingSpec::from_yaml_str(yaml).unwrap();
        assert_eq!(spec.classes["Person"].properties.len(), 2);
        assert!(!spec.classes["Person"].properties["knows"].is_literal);
    }

    #[test]
    fn test_missing_predicate_is_an_error() {
        let bad = r#"{"classes": {"Person": {"rdf_type": "foaf:Person",
            "properties": {"name": {}}}}}"#;
        assert!(MappingSpec::from_json_str(bad).is_err());
    }

    #[test]
    fn test_classes_preserve_declaration_order() {
        let json = r#"{"classes": {
            "B": {"rdf_type": "ex:B"},
            "A": {"rdf_type": "ex:A"}
        }}"#;
        let spec = MappingSpec::from_json_str(json).unwrap();
        let names: Vec<&String> = spec.classes.keys().collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
