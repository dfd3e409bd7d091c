//! rdfmap — metadata-driven mapping of object graphs to RDF triples
//!
//! Domain objects become subject IRIs and sets of outgoing triples, driven by
//! declarative descriptors instead of per-type serialization code. The engine
//! walks references recursively, merges everything into one deduplicated
//! triple set, and terminates on cyclic object graphs.
//!
//! Two equivalent metadata sources populate the same [`TermRegistry`]:
//! descriptors attached at the type's declaration site (the [`Described`]
//! trait) or a standalone [`MappingSpec`] table loaded from JSON/YAML.
//!
//! Storage and wire-format serialization are external collaborators: the
//! produced [`Graph`] converts to `oxrdf` triples, and the registry's
//! [`Namespaces`] table travels with it to whichever serializer renders the
//! output.
//!
//! # Example
//!
//! ```
//! use rdfmap::{Described, Mapper, Resource, TermRegistry, TypeDescription, Value};
//!
//! struct Person {
//!     id: String,
//!     name: String,
//! }
//!
//! impl Described for Person {
//!     fn describe() -> TypeDescription {
//!         TypeDescription::new("Person", "foaf:Person")
//!             .uri_template("http://example.org/person/{id}")
//!             .literal("name", "foaf:name")
//!     }
//! }
//!
//! impl Resource for Person {
//!     fn type_name(&self) -> &str {
//!         "Person"
//!     }
//!
//!     fn get(&self, property: &str) -> Value {
//!         match property {
//!             "id" => Value::from(self.id.as_str()),
//!             "name" => Value::from(self.name.as_str()),
//!             _ => Value::Null,
//!         }
//!     }
//! }
//!
//! let mut registry = TermRegistry::new();
//! registry.register::<Person>()?;
//!
//! let alice = Person {
//!     id: "1".to_string(),
//!     name: "Alice".to_string(),
//! };
//! let graph = Mapper::new(&registry).map(&alice)?;
//! assert_eq!(graph.len(), 2); // type assertion + name literal
//! # Ok::<(), rdfmap::MappingError>(())
//! ```

#![warn(clippy::all)]

pub mod classify;
pub mod graph;
pub mod mapping;
pub mod namespace;
pub mod registry;
pub mod spec;
pub mod template;
pub mod types;
pub mod value;

// Re-export main types for convenience
pub use classify::{classify, map_term, Emission, RefTarget, UnsupportedShape};
pub use graph::Graph;
pub use mapping::{Mapper, MapperConfig, MappingError, MappingResult};
pub use namespace::{Namespaces, PrefixError, PrefixResult};
pub use registry::{
    Described, PropertyDescriptor, SchemaError, SchemaResult, TermRegistry, TypeDescription,
    TypeDescriptor,
};
pub use spec::{ClassSpec, MappingSpec, PropertySpec, SpecError, SpecResult};
pub use template::UriResolver;
pub use types::{rdf_type, Literal, NamedNode, Object, TermError, TermResult, Triple};
pub use value::{Resource, Value};
