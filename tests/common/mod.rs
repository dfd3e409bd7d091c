//! Shared FOAF person fixture for integration tests

#![allow(dead_code)]

use rdfmap::{Described, Resource, TermRegistry, TypeDescription, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Local interest labels → standardized identifiers
pub fn interest_mappings() -> HashMap<String, String> {
    [
        ("Reading", "http://example.org/interests/reading"),
        ("Hiking", "http://example.org/interests/hiking"),
        ("Traveling", "http://example.org/interests/traveling"),
        ("Photography", "http://example.org/interests/photography"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i64>,
    pub knows: RefCell<Vec<Rc<Person>>>,
    pub interests: Vec<String>,
}

impl Person {
    pub fn new(id: &str, first_name: &str, last_name: &str, age: i64, interests: &[&str]) -> Rc<Self> {
        Rc::new(Self {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age: Some(age),
            knows: RefCell::new(Vec::new()),
            interests: interests.iter().map(|s| s.to_string()).collect(),
        })
    }
}

impl Described for Person {
    fn describe() -> TypeDescription {
        TypeDescription::new("Person", "foaf:Person")
            .uri_template("http://example.org/person/{id}-{first_name}")
            .literal("first_name", "foaf:firstName")
            .literal("last_name", "foaf:lastName")
            .literal("age", "foaf:age")
            .reference("knows", "foaf:knows")
            .reference("interests", "foaf:interest")
            .vocabulary("interests", interest_mappings())
    }
}

impl Resource for Person {
    fn type_name(&self) -> &str {
        "Person"
    }

    fn get(&self, property: &str) -> Value {
        match property {
            "id" => Value::from(self.id.as_str()),
            "first_name" => Value::from(self.first_name.as_str()),
            "last_name" => Value::from(self.last_name.as_str()),
            "age" => Value::from(self.age),
            "knows" => Value::List(
                self.knows
                    .borrow()
                    .iter()
                    .map(|p| Value::Resource(p.clone() as Rc<dyn Resource>))
                    .collect(),
            ),
            "interests" => Value::List(
                self.interests
                    .iter()
                    .map(|s| Value::from(s.as_str()))
                    .collect(),
            ),
            _ => Value::Null,
        }
    }
}

/// Registry populated from the declaration-site metadata
pub fn person_registry() -> TermRegistry {
    let mut registry = TermRegistry::new();
    registry.register::<Person>().expect("register Person");
    registry
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
