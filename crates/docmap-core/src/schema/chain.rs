use crate::{Error, Result};

use indexmap::IndexSet;

/// Classes currently being built, outermost first.
///
/// Each recursive step receives its own copy extended with the class that
/// embeds it, so sibling attributes never see each other's entries.
#[derive(Debug, Default, Clone)]
pub struct DependencyChain {
    classes: IndexSet<String>,
}

impl DependencyChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the chain with `class` appended.
    pub fn with(&self, class: &str) -> Self {
        let mut classes = self.classes.clone();
        classes.insert(class.to_string());
        Self { classes }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Fails with a cyclic dependency error if `class` is already on the
    /// chain.
    pub fn check(&self, class: &str) -> Result<()> {
        if self.contains(class) {
            return Err(Error::cyclic_dependency(class, self.iter()));
        }

        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
