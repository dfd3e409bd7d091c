//! Object graph → RDF mapping
//!
//! The recursive core of the crate. For one resource the mapper resolves a
//! subject IRI, emits the type-assertion triple, classifies every registered
//! property, and recurses into referenced resources — all into one shared
//! accumulating [`Graph`].
//!
//! # Cycle termination
//!
//! The type-assertion triple doubles as the visit sentinel: if the graph
//! already contains `(subject, rdf:type, type_iri)` the resource has been
//! mapped and the call returns before touching any property. This bounds the
//! traversal to one visit per distinct subject IRI, so mutually referencing
//! resources (A knows B, B knows A) terminate.

use crate::classify::{classify, Emission, RefTarget};
use crate::graph::Graph;
use crate::registry::{SchemaError, TermRegistry, TypeDescriptor};
use crate::template::UriResolver;
use crate::types::{rdf_type, NamedNode, TermError, Triple};
use crate::value::Resource;
use thiserror::Error;
use tracing::{debug, warn};

/// Mapping errors
#[derive(Error, Debug)]
pub enum MappingError {
    /// Type or property metadata is missing; aborts the whole call
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A resolved subject or reference is not a valid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// A type has no URI template and its instance carries no identifier
    #[error("No URI template and no intrinsic IRI for instance of type {0}")]
    MissingSubject(String),

    /// Strict mode only: a property value has no recognized triple shape
    #[error("Unsupported {kind} value for {type_name}.{property}")]
    UnsupportedValue {
        /// Registered type name
        type_name: String,
        /// Property name
        property: String,
        /// Value kind name
        kind: &'static str,
    },
}

impl From<TermError> for MappingError {
    fn from(err: TermError) -> Self {
        match err {
            TermError::InvalidIri(iri) => MappingError::InvalidIri(iri),
        }
    }
}

pub type MappingResult<T> = Result<T, MappingError>;

/// Mapper configuration
#[derive(Debug, Clone, Default)]
pub struct MapperConfig {
    /// Fail on unsupported property value shapes instead of skipping them
    pub strict: bool,
}

/// Object graph → RDF mapper
pub struct Mapper<'a> {
    registry: &'a TermRegistry,
    resolver: UriResolver,
    config: MapperConfig,
}

impl<'a> Mapper<'a> {
    /// Create a mapper over a populated registry
    pub fn new(registry: &'a TermRegistry) -> Self {
        Self::with_config(registry, MapperConfig::default())
    }

    /// Create a mapper with custom configuration
    pub fn with_config(registry: &'a TermRegistry, config: MapperConfig) -> Self {
        Self {
            registry,
            resolver: UriResolver::new(),
            config,
        }
    }

    /// Map a root resource into a fresh graph
    pub fn map(&self, root: &dyn Resource) -> MappingResult<Graph> {
        let mut graph = Graph::new();
        self.map_into(root, &mut graph)?;
        Ok(graph)
    }

    /// Map a resource into an existing graph
    ///
    /// Cross-references merge into the shared accumulator; callers wanting
    /// isolated per-branch graphs map each branch with [`Mapper::map`] and
    /// merge explicitly.
    pub fn map_into(&self, resource: &dyn Resource, graph: &mut Graph) -> MappingResult<()> {
        let type_name = resource.type_name().to_string();
        let descriptor = self.registry.type_descriptor(&type_name)?;
        let subject = self.subject_of(resource, descriptor)?;

        let type_triple = Triple::new(
            subject.clone(),
            rdf_type(),
            NamedNode::new(descriptor.rdf_type.as_str())?,
        );
        if graph.contains(&type_triple) {
            // Already visited via another reference path
            return Ok(());
        }
        graph.insert(type_triple);
        debug!(type_name = %type_name, subject = %subject, "mapping resource");

        for (prop_name, prop) in descriptor.properties() {
            let value = resource.get(prop_name);
            let emission = match classify(prop, &value) {
                Ok(emission) => emission,
                Err(shape) if self.config.strict => {
                    return Err(MappingError::UnsupportedValue {
                        type_name,
                        property: prop_name.to_string(),
                        kind: shape.kind,
                    });
                }
                Err(shape) => {
                    warn!(type_name = %type_name, property = prop_name, error = %shape, "skipping property");
                    continue;
                }
            };

            let predicate = NamedNode::new(prop.predicate.as_str())?;
            match emission {
                Emission::Skip => {}
                Emission::Literal(lit) => {
                    graph.insert(Triple::new(subject.clone(), predicate, lit));
                }
                Emission::LiteralList(lits) => {
                    for lit in lits {
                        graph.insert(Triple::new(subject.clone(), predicate.clone(), lit));
                    }
                }
                Emission::Reference(target) => {
                    self.emit_reference(&subject, &predicate, target, graph)?;
                }
                Emission::ReferenceList(targets) => {
                    for target in targets {
                        self.emit_reference(&subject, &predicate, target, graph)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Resolve a resource's subject IRI
    fn subject_of(
        &self,
        resource: &dyn Resource,
        descriptor: &TypeDescriptor,
    ) -> MappingResult<NamedNode> {
        let iri = match &descriptor.uri_template {
            Some(template) => self.resolver.resolve(resource, template),
            None => resource
                .iri()
                .ok_or_else(|| MappingError::MissingSubject(resource.type_name().to_string()))?,
        };
        Ok(NamedNode::new(iri)?)
    }

    fn emit_reference(
        &self,
        subject: &NamedNode,
        predicate: &NamedNode,
        target: RefTarget,
        graph: &mut Graph,
    ) -> MappingResult<()> {
        match target {
            RefTarget::Iri(raw) => {
                let expanded = self.registry.namespaces().expand_or(&raw);
                let object = NamedNode::new(expanded)?;
                graph.insert(Triple::new(subject.clone(), predicate.clone(), object));
            }
            RefTarget::Nested(nested) => {
                let nested_descriptor = self.registry.type_descriptor(nested.type_name())?;
                let nested_subject = self.subject_of(nested.as_ref(), nested_descriptor)?;
                graph.insert(Triple::new(
                    subject.clone(),
                    predicate.clone(),
                    nested_subject,
                ));
                self.map_into(nested.as_ref(), graph)?;
            }
        }
        Ok(())
    }
}
