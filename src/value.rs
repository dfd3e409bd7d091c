//! Property values and the resource access trait
//!
//! `Value` is the tagged representation of everything a mapped property can
//! hold: scalars, ordered lists, and references to other resources. The
//! `Resource` trait is how the engine reads an instance's data without
//! knowing its concrete type.

use std::fmt;
use std::rc::Rc;

/// A property value read off a resource
#[derive(Clone)]
pub enum Value {
    /// Absent value; classified as a skip
    Null,
    /// String scalar
    String(String),
    /// Integer scalar
    Integer(i64),
    /// Float scalar
    Float(f64),
    /// Boolean scalar
    Boolean(bool),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Reference to another resource
    Resource(Rc<dyn Resource>),
}

impl Value {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get string value if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get list elements if this is a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Lexical form of a scalar, used for URI template substitution
    pub fn lexical(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Get kind name as string
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::String(_) => "String",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Boolean(_) => "Boolean",
            Value::List(_) => "List",
            Value::Resource(_) => "Resource",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Integer(i) => f.debug_tuple("Integer").field(i).finish(),
            Value::Float(fl) => f.debug_tuple("Float").field(fl).finish(),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Resource(r) => f.debug_tuple("Resource").field(&r.type_name()).finish(),
        }
    }
}

// Convenience conversions
impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Rc<dyn Resource>> for Value {
    fn from(resource: Rc<dyn Resource>) -> Self {
        Value::Resource(resource)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Read access to a mapped instance
///
/// Implementations expose a registered type name and per-property values.
/// References to other resources are handed out as `Rc<dyn Resource>`, so
/// object graphs may be cyclic (callers tie cycles with `Rc` plus interior
/// mutability). Instances are read-only during a mapping call.
pub trait Resource {
    /// The type name this instance is registered under
    fn type_name(&self) -> &str;

    /// Read a property value; unknown properties yield `Value::Null`
    fn get(&self, property: &str) -> Value;

    /// Intrinsic identifier, used when the type carries no URI template
    fn iri(&self) -> Option<String> {
        None
    }
}
