//! URI template resolution
//!
//! Expands templates like `http://example.org/person/{id}-{first_name}` by
//! reading placeholder paths off a resource. Dot-separated paths follow
//! references (`{owner.id}`). A missing value anywhere along a path resolves
//! to the empty string rather than an error: instances are legitimately
//! allowed to lack optional identifying attributes at mapping time.

use crate::value::{Resource, Value};
use regex::{Captures, Regex};

/// Template placeholder expander
#[derive(Debug, Clone)]
pub struct UriResolver {
    placeholder: Regex,
}

impl UriResolver {
    /// Create a resolver
    pub fn new() -> Self {
        Self {
            // Matches {property} and {nested.property.path}
            placeholder: Regex::new(r"\{([^}]+)\}").expect("placeholder pattern is valid"),
        }
    }

    /// Expand every placeholder in `template` from `resource`'s data
    pub fn resolve(&self, resource: &dyn Resource, template: &str) -> String {
        self.placeholder
            .replace_all(template, |caps: &Captures<'_>| {
                self.lookup_path(resource, &caps[1])
            })
            .into_owned()
    }

    /// Walk a dot-separated property path, stopping early on a missing step
    fn lookup_path(&self, resource: &dyn Resource, path: &str) -> String {
        let mut segments = path.split('.');
        let first = match segments.next() {
            Some(s) => s,
            None => return String::new(),
        };

        let mut current = resource.get(first);
        for segment in segments {
            current = match current {
                Value::Resource(r) => r.get(segment),
                _ => return String::new(),
            };
        }
        current.lexical().unwrap_or_default()
    }
}

impl Default for UriResolver {
    fn default() -> Self {
        Self::new()
    }
}
