//! Term registry
//!
//! Maps type names to descriptors: the type's canonical `rdf:type` IRI, its
//! URI template, and the properties it emits. Two sources populate the same
//! registry shape — metadata attached at the type's declaration site (the
//! [`Described`] trait) and the standalone specification table
//! ([`crate::spec::MappingSpec`]). The graph builder never knows which one
//! was used.
//!
//! Descriptors are registered once at startup and immutable afterwards.
//! Compact IRIs (`foaf:name`) are expanded against the registry's namespace
//! table at registration time when the prefix is known.

use crate::namespace::Namespaces;
use crate::spec::MappingSpec;
use indexmap::IndexMap;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Schema errors
///
/// Metadata misconfiguration is a programming error: these abort the whole
/// mapping call rather than degrade.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// No descriptor registered for a type name
    #[error("Unknown type: {0}")]
    UnknownType(String),

    /// No descriptor registered for a property of a registered type
    #[error("Unknown property: {0}.{1}")]
    UnknownProperty(String, String),

    /// Type registered twice
    #[error("Type already registered: {0}")]
    DuplicateType(String),

    /// Property registered twice on one type
    #[error("Property already registered: {0}.{1}")]
    DuplicateProperty(String, String),
}

pub type SchemaResult<T> = Result<T, SchemaError>;

/// One mapped property of a type
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    /// Predicate IRI (expanded)
    pub predicate: String,
    /// Literal value vs reference to another resource
    pub is_literal: bool,
    /// Controlled-vocabulary substitution table, if any
    pub vocabulary: Option<HashMap<String, String>>,
}

/// One mapped domain type
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Canonical `rdf:type` IRI (expanded)
    pub rdf_type: String,
    /// URI template with `{path}` placeholders; absent means instances
    /// carry their own identifier (`Resource::iri`)
    pub uri_template: Option<String>,
    properties: IndexMap<String, PropertyDescriptor>,
}

impl TypeDescriptor {
    /// Look up a property descriptor by name
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(name)
    }

    /// Iterate property descriptors in registration order
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyDescriptor)> {
        self.properties.iter().map(|(n, d)| (n.as_str(), d))
    }
}

/// Registry of type and property descriptors
#[derive(Debug, Clone)]
pub struct TermRegistry {
    types: IndexMap<String, TypeDescriptor>,
    namespaces: Namespaces,
}

impl Default for TermRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TermRegistry {
    /// Create a registry with the common namespace prefixes bound
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
            namespaces: Namespaces::new(),
        }
    }

    /// Create a registry over a caller-provided namespace table
    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            types: IndexMap::new(),
            namespaces,
        }
    }

    /// Build a registry from a specification table
    pub fn from_spec(spec: &MappingSpec) -> SchemaResult<Self> {
        let mut namespaces = Namespaces::new();
        for (prefix, iri) in &spec.namespaces {
            namespaces.add(prefix, iri);
        }

        let mut registry = Self::with_namespaces(namespaces);
        for (type_name, class) in &spec.classes {
            registry.register_type(type_name, &class.rdf_type, class.uri_template.as_deref())?;
            for (prop_name, prop) in &class.properties {
                registry.register_property(
                    type_name,
                    prop_name,
                    &prop.predicate,
                    prop.is_literal,
                    prop.mapping.clone(),
                )?;
            }
        }
        Ok(registry)
    }

    /// Register a type whose metadata is attached at its declaration site
    pub fn register<T: Described>(&mut self) -> SchemaResult<()> {
        let description = T::describe();
        self.register_type(
            &description.name,
            &description.rdf_type,
            description.uri_template.as_deref(),
        )?;
        for (prop_name, predicate, is_literal) in description.properties {
            self.register_property(&description.name, &prop_name, &predicate, is_literal, None)?;
        }
        for (prop_name, table) in description.vocabularies {
            self.attach_vocabulary(&description.name, &prop_name, table)?;
        }
        Ok(())
    }

    /// Register a type descriptor
    pub fn register_type(
        &mut self,
        name: &str,
        rdf_type: &str,
        uri_template: Option<&str>,
    ) -> SchemaResult<()> {
        if self.types.contains_key(name) {
            return Err(SchemaError::DuplicateType(name.to_string()));
        }
        let descriptor = TypeDescriptor {
            rdf_type: self.namespaces.expand_or(rdf_type),
            uri_template: uri_template.map(|t| self.namespaces.expand_or(t)),
            properties: IndexMap::new(),
        };
        debug!(type_name = name, rdf_type = %descriptor.rdf_type, "registered type");
        self.types.insert(name.to_string(), descriptor);
        Ok(())
    }

    /// Register a property descriptor on an already-registered type
    pub fn register_property(
        &mut self,
        type_name: &str,
        prop_name: &str,
        predicate: &str,
        is_literal: bool,
        vocabulary: Option<HashMap<String, String>>,
    ) -> SchemaResult<()> {
        let expanded = self.namespaces.expand_or(predicate);
        let descriptor = self
            .types
            .get_mut(type_name)
            .ok_or_else(|| SchemaError::UnknownType(type_name.to_string()))?;
        if descriptor.properties.contains_key(prop_name) {
            return Err(SchemaError::DuplicateProperty(
                type_name.to_string(),
                prop_name.to_string(),
            ));
        }
        descriptor.properties.insert(
            prop_name.to_string(),
            PropertyDescriptor {
                predicate: expanded,
                is_literal,
                vocabulary,
            },
        );
        Ok(())
    }

    /// Look up a type descriptor; unregistered types are a hard error
    pub fn type_descriptor(&self, name: &str) -> SchemaResult<&TypeDescriptor> {
        self.types
            .get(name)
            .ok_or_else(|| SchemaError::UnknownType(name.to_string()))
    }

    /// Look up a property descriptor
    pub fn property_descriptor(
        &self,
        type_name: &str,
        prop_name: &str,
    ) -> SchemaResult<&PropertyDescriptor> {
        self.type_descriptor(type_name)?
            .property(prop_name)
            .ok_or_else(|| {
                SchemaError::UnknownProperty(type_name.to_string(), prop_name.to_string())
            })
    }

    /// The registry's namespace table
    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    fn attach_vocabulary(
        &mut self,
        type_name: &str,
        prop_name: &str,
        table: HashMap<String, String>,
    ) -> SchemaResult<()> {
        let descriptor = self
            .types
            .get_mut(type_name)
            .ok_or_else(|| SchemaError::UnknownType(type_name.to_string()))?;
        let property = descriptor.properties.get_mut(prop_name).ok_or_else(|| {
            SchemaError::UnknownProperty(type_name.to_string(), prop_name.to_string())
        })?;
        property.vocabulary = Some(table);
        Ok(())
    }
}

/// Declaration-site metadata for one type, built with a fluent API
///
/// The Rust analog of annotating a type and its accessors: the description
/// lives next to the type definition and is pulled into a registry with
/// [`TermRegistry::register`].
#[derive(Debug, Clone)]
pub struct TypeDescription {
    name: String,
    rdf_type: String,
    uri_template: Option<String>,
    properties: Vec<(String, String, bool)>,
    vocabularies: Vec<(String, HashMap<String, String>)>,
}

impl TypeDescription {
    /// Describe a type by name and canonical `rdf:type` IRI
    pub fn new(name: impl Into<String>, rdf_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rdf_type: rdf_type.into(),
            uri_template: None,
            properties: Vec::new(),
            vocabularies: Vec::new(),
        }
    }

    /// Set the URI template
    pub fn uri_template(mut self, template: impl Into<String>) -> Self {
        self.uri_template = Some(template.into());
        self
    }

    /// Declare a literal-valued property
    pub fn literal(mut self, name: impl Into<String>, predicate: impl Into<String>) -> Self {
        self.properties.push((name.into(), predicate.into(), true));
        self
    }

    /// Declare a reference-valued property
    pub fn reference(mut self, name: impl Into<String>, predicate: impl Into<String>) -> Self {
        self.properties.push((name.into(), predicate.into(), false));
        self
    }

    /// Attach a controlled-vocabulary table to a declared property
    pub fn vocabulary(
        mut self,
        name: impl Into<String>,
        table: HashMap<String, String>,
    ) -> Self {
        self.vocabularies.push((name.into(), table));
        self
    }
}

/// Types carrying their mapping metadata at the declaration site
pub trait Described {
    /// Produce this type's descriptor metadata
    fn describe() -> TypeDescription;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person;

    impl Described for Person {
        fn describe() -> TypeDescription {
            TypeDescription::new("Person", "foaf:Person")
                .uri_template("http://example.org/person/{id}")
                .literal("first_name", "foaf:firstName")
                .reference("knows", "foaf:knows")
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = TermRegistry::new();
        registry.register::<Person>().unwrap();

        let descriptor = registry.type_descriptor("Person").unwrap();
        assert_eq!(descriptor.rdf_type, "http://xmlns.com/foaf/0.1/Person");
        assert_eq!(
            descriptor.uri_template.as_deref(),
            Some("http://example.org/person/{id}")
        );

        let prop = registry.property_descriptor("Person", "first_name").unwrap();
        assert_eq!(prop.predicate, "http://xmlns.com/foaf/0.1/firstName");
        assert!(prop.is_literal);

        let knows = registry.property_descriptor("Person", "knows").unwrap();
        assert!(!knows.is_literal);
    }

    #[test]
    fn test_unknown_type_is_hard_error() {
        let registry = TermRegistry::new();
        assert!(matches!(
            registry.type_descriptor("Ghost"),
            Err(SchemaError::UnknownType(_))
        ));
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut registry = TermRegistry::new();
        registry.register::<Person>().unwrap();
        assert!(matches!(
            registry.register::<Person>(),
            Err(SchemaError::DuplicateType(_))
        ));
    }

    #[test]
    fn test_duplicate_property_rejected() {
        let mut registry = TermRegistry::new();
        registry.register_type("City", "ex:City", None).unwrap();
        registry
            .register_property("City", "name", "ex:name", true, None)
            .unwrap();
        assert!(matches!(
            registry.register_property("City", "name", "ex:name", true, None),
            Err(SchemaError::DuplicateProperty(_, _))
        ));
    }

    #[test]
    fn test_vocabulary_on_unknown_property() {
        struct Broken;
        impl Described for Broken {
            fn describe() -> TypeDescription {
                TypeDescription::new("Broken", "ex:Broken")
                    .vocabulary("missing", HashMap::new())
            }
        }

        let mut registry = TermRegistry::new();
        assert!(matches!(
            registry.register::<Broken>(),
            Err(SchemaError::UnknownProperty(_, _))
        ));
    }

    #[test]
    fn test_property_on_unknown_type() {
        let mut registry = TermRegistry::new();
        assert!(matches!(
            registry.register_property("Ghost", "name", "ex:name", true, None),
            Err(SchemaError::UnknownType(_))
        ));
    }
}
