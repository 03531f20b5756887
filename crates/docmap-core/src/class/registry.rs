use super::{Class, Describe};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Class descriptors, by fully-qualified name.
///
/// Stands in for runtime class lookup: the parser resolves embed targets
/// here, and the mappers find constructors and attributes here.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    classes: IndexMap<String, Class>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Describe>(&mut self) -> &mut Self {
        self.register_class(T::describe())
    }

    /// Adds a descriptor, replacing any previous descriptor with the same
    /// name.
    pub fn register_class(&mut self, class: Class) -> &mut Self {
        self.classes.insert(class.name().to_string(), class);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Class> {
        self.classes.get(name)
    }

    pub fn class(&self, name: &str) -> Result<&Class> {
        self.get(name).ok_or_else(|| Error::unknown_class(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
