//! Naming conventions between attributes, storage keys and methods.

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use std::fmt;

/// Storage key reserved for the document identifier.
pub const ID_KEY: &str = "_id";

/// Attribute that holds the document identifier.
pub const ID_ATTRIBUTE: &str = "id";

/// Derives storage keys and method names from attribute names.
pub trait Formatter: Send + Sync + fmt::Debug {
    /// Storage key for an attribute without an explicit key.
    fn to_storage_key(&self, attribute: &str) -> String;

    /// Attribute name for a storage key.
    fn to_attribute_name(&self, key: &str) -> String;

    /// Name of the method that reads a private attribute.
    ///
    /// `type_hint` is the attribute's declared type token, if any.
    fn accessor_name_for(&self, attribute: &str, type_hint: Option<&str>) -> String;

    /// Name of the method that writes a private attribute.
    fn mutator_name_for(&self, attribute: &str) -> String;
}

/// Letter case used when spelling a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// `first_name`
    Snake,

    /// `firstName`
    Camel,

    /// `FirstName`
    Pascal,

    /// `first-name`
    Kebab,
}

impl Case {
    pub fn apply(self, name: &str) -> String {
        match self {
            Case::Snake => name.to_snake_case(),
            Case::Camel => name.to_lower_camel_case(),
            Case::Pascal => name.to_upper_camel_case(),
            Case::Kebab => name.to_kebab_case(),
        }
    }
}

/// A [`Formatter`] that converts between letter cases.
///
/// Storage keys default to lower camel case and attributes to snake case.
/// Accessors share the attribute's name (`is_<name>` for booleans) and
/// mutators are `set_<name>`. The identifier attribute always maps to `_id`.
#[derive(Debug, Clone, Copy)]
pub struct CaseFormatter {
    storage: Case,
    attribute: Case,
}

impl CaseFormatter {
    pub fn new(storage: Case, attribute: Case) -> Self {
        Self { storage, attribute }
    }

    pub fn storage_case(&self) -> Case {
        self.storage
    }

    pub fn attribute_case(&self) -> Case {
        self.attribute
    }
}

impl Default for CaseFormatter {
    fn default() -> Self {
        Self::new(Case::Camel, Case::Snake)
    }
}

impl Formatter for CaseFormatter {
    fn to_storage_key(&self, attribute: &str) -> String {
        if attribute == ID_ATTRIBUTE {
            return ID_KEY.to_string();
        }

        self.storage.apply(attribute)
    }

    fn to_attribute_name(&self, key: &str) -> String {
        if key == ID_KEY {
            return ID_ATTRIBUTE.to_string();
        }

        self.attribute.apply(key)
    }

    fn accessor_name_for(&self, attribute: &str, type_hint: Option<&str>) -> String {
        let name = attribute.to_snake_case();

        match type_hint.map(str::trim) {
            Some("bool") if !name.starts_with("is_") => format!("is_{name}"),
            _ => name,
        }
    }

    fn mutator_name_for(&self, attribute: &str) -> String {
        format!("set_{}", attribute.to_snake_case())
    }
}
