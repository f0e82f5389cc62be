//! User record with a capitalized name

use serde::{Deserialize, Serialize};

use super::capitalized::Capitalized;

/// A user whose name is always stored upper-cased
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: Capitalized,
}

impl User {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: Capitalized::new(name),
        }
    }

    pub fn name(&self) -> &str {
        self.name.get()
    }

    /// Assigns the name; it is upper-cased on the way in
    pub fn set_name(&mut self, name: impl AsRef<str>) {
        self.name.set(name);
    }
}
