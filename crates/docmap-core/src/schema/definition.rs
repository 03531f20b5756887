use super::TypeTag;

/// How one persistable attribute is stored.
///
/// Built by the parser from a single attribute declaration. Immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Definition {
    /// Key of the value in the stored document
    pub storage_key: String,

    /// Name of the attribute on the class
    pub attribute_name: String,

    /// Declared type, `None` for an untyped attribute
    pub declared_type: Option<TypeTag>,

    pub kind: DefinitionKind,

    /// Embedded class (document) or element class (collection)
    pub mapped_class: Option<String>,

    /// Accessor method, for private attributes
    pub accessor: Option<String>,

    /// Mutator method, for private attributes
    pub mutator: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefinitionKind {
    /// Stored as-is
    Scalar,

    /// A storage-native value, passed through unnormalized
    Native,

    /// A single embedded document
    Document,

    /// An ordered collection of embedded documents
    Collection,
}

impl Definition {
    pub fn is_embedded(&self) -> bool {
        matches!(self.kind, DefinitionKind::Document | DefinitionKind::Collection)
    }

    /// Stored under `_id`, or holds the `id` attribute whatever key the
    /// formatter gave it.
    pub fn is_identifier(&self) -> bool {
        self.storage_key == crate::format::ID_KEY
            || self.attribute_name == crate::format::ID_ATTRIBUTE
    }
}
