//! Module representation.

use super::Function;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An IR module: a named, ordered collection of functions.
///
/// Functions are keyed by name but iterate in insertion order, which is the
/// order every traversal observes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Display name, possibly empty
    name: String,
    /// Functions in insertion order
    functions: IndexMap<String, Function>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_function(&mut self, func: Function) {
        self.functions.insert(func.name().to_string(), func);
    }

    pub fn get_function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Iterate over functions in insertion order.
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.values()
    }
}

impl Default for Module {
    fn default() -> Self {
        Self::new("")
    }
}
