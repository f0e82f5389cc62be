//! String value stored in upper case
//!
//! The transformation happens when a value is assigned, so reads never
//! do any work and never see a lower-case value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper-cased string
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Capitalized {
    value: String,
}

impl Capitalized {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self {
            value: value.as_ref().to_uppercase(),
        }
    }

    /// Assigns a new value, upper-casing it
    pub fn set(&mut self, value: impl AsRef<str>) {
        self.value = value.as_ref().to_uppercase();
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<String> for Capitalized {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Capitalized {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Capitalized> for String {
    fn from(value: Capitalized) -> Self {
        value.value
    }
}

impl AsRef<str> for Capitalized {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Capitalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
