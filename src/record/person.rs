//! Typed person record and its field references

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::projection::FieldRef;

/// A named person with an age. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Reference to the `name` field
    pub fn name_field() -> FieldRef<Person, String> {
        FieldRef::new("name", |person: &Person| &person.name)
    }

    /// Reference to the `age` field
    pub fn age_field() -> FieldRef<Person, u32> {
        FieldRef::new("age", |person: &Person| &person.age)
    }

    /// The three people shown by default
    pub fn samples() -> Vec<Person> {
        vec![
            Person::new("Alice", 25),
            Person::new("Bob", 30),
            Person::new("Charlie", 22),
        ]
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}
