use super::{Definition, DefinitionKind};
use crate::class::{Constructor, FieldAccess, Getter, Mapped, Setter};
use crate::{err, Error, Result, Value};

use indexmap::IndexMap;
use std::fmt;

/// The persistable shape of one class.
///
/// A map pairs every storage key with exactly one attribute (and back), knows
/// how to read and write each attribute, and owns the maps of the classes it
/// embeds. Maps are built by the [`Parser`](super::Parser) and are read-only
/// once handed to a mapper.
#[derive(Debug, Clone)]
pub struct Map {
    pub(super) class_name: String,

    constructor: Constructor,

    /// Definitions by storage key, in declaration order
    definitions: IndexMap<String, Definition>,

    /// Storage key to attribute name
    pub(super) storage_index: IndexMap<String, String>,

    /// Attribute name to storage key. Always the inverse of `storage_index`.
    pub(super) attribute_index: IndexMap<String, String>,

    accessors: IndexMap<String, Accessor>,

    mutators: IndexMap<String, Mutator>,

    /// Direct access for public attributes
    fields: IndexMap<String, FieldAccess>,

    embed_kinds: IndexMap<String, EmbedKind>,

    /// Maps of embedded user classes
    embed_maps: IndexMap<String, Map>,
}

/// A public no-argument method that reads an attribute.
#[derive(Clone)]
pub struct Accessor {
    pub name: String,
    pub get: Getter,
}

/// A public one-argument method that writes an attribute.
#[derive(Clone)]
pub struct Mutator {
    pub name: String,
    pub set: Setter,
}

/// How an attribute is reached on an instance.
#[derive(Debug, Clone)]
pub enum Binding {
    /// Direct field access
    Field(FieldAccess),

    /// Accessor and mutator methods
    Methods { accessor: Accessor, mutator: Mutator },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedKind {
    Native,
    Document,
    Collection,
}

impl Map {
    pub fn new(class_name: impl Into<String>, constructor: Constructor) -> Self {
        Self {
            class_name: class_name.into(),
            constructor,
            definitions: IndexMap::new(),
            storage_index: IndexMap::new(),
            attribute_index: IndexMap::new(),
            accessors: IndexMap::new(),
            mutators: IndexMap::new(),
            fields: IndexMap::new(),
            embed_kinds: IndexMap::new(),
            embed_maps: IndexMap::new(),
        }
    }

    /// Adds a definition.
    ///
    /// Both indices are updated together. A previous entry for the same
    /// storage key or the same attribute is dropped first, so the indices
    /// remain inverse of each other.
    pub fn add(&mut self, definition: Definition, binding: Binding, embed_map: Option<Map>) {
        if let Some(stale) = self.attribute_index.get(&definition.attribute_name).cloned() {
            self.remove(&stale);
        }

        if self.storage_index.contains_key(&definition.storage_key) {
            let stale = definition.storage_key.clone();
            self.remove(&stale);
        }

        let key = definition.storage_key.clone();
        let attribute = definition.attribute_name.clone();

        self.storage_index.insert(key.clone(), attribute.clone());
        self.attribute_index.insert(attribute, key.clone());

        match binding {
            Binding::Field(access) => {
                self.fields.insert(key.clone(), access);
            }
            Binding::Methods { accessor, mutator } => {
                self.accessors.insert(key.clone(), accessor);
                self.mutators.insert(key.clone(), mutator);
            }
        }

        let embed_kind = match definition.kind {
            DefinitionKind::Scalar => None,
            DefinitionKind::Native => Some(EmbedKind::Native),
            DefinitionKind::Document => Some(EmbedKind::Document),
            DefinitionKind::Collection => Some(EmbedKind::Collection),
        };

        if let Some(embed_kind) = embed_kind {
            self.embed_kinds.insert(key.clone(), embed_kind);
        }

        if let Some(embed_map) = embed_map {
            self.embed_maps.insert(key.clone(), embed_map);
        }

        self.definitions.insert(key, definition);
    }

    fn remove(&mut self, key: &str) {
        if let Some(attribute) = self.storage_index.shift_remove(key) {
            self.attribute_index.shift_remove(&attribute);
        }

        self.definitions.shift_remove(key);
        self.accessors.shift_remove(key);
        self.mutators.shift_remove(key);
        self.fields.shift_remove(key);
        self.embed_kinds.shift_remove(key);
        self.embed_maps.shift_remove(key);
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn constructor(&self) -> &Constructor {
        &self.constructor
    }

    pub fn attribute_for(&self, key: &str) -> Option<&str> {
        self.storage_index.get(key).map(String::as_str)
    }

    pub fn storage_key_for(&self, attribute: &str) -> Option<&str> {
        self.attribute_index.get(attribute).map(String::as_str)
    }

    pub fn accessor(&self, key: &str) -> Option<&Accessor> {
        self.accessors.get(key)
    }

    pub fn mutator(&self, key: &str) -> Option<&Mutator> {
        self.mutators.get(key)
    }

    pub fn field(&self, key: &str) -> Option<&FieldAccess> {
        self.fields.get(key)
    }

    pub fn embed_kind(&self, key: &str) -> Option<EmbedKind> {
        self.embed_kinds.get(key).copied()
    }

    pub fn embed_map(&self, key: &str) -> Option<&Map> {
        self.embed_maps.get(key)
    }

    pub fn definition(&self, key: &str) -> Option<&Definition> {
        self.definitions.get(key)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &Definition> + '_ {
        self.definitions.values()
    }

    /// Storage keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.definitions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Reads the value stored under `key` from `object`.
    ///
    /// Goes through the bound accessor when there is one, otherwise through
    /// direct field access.
    pub fn read(&self, key: &str, object: &dyn Mapped) -> Result<Value> {
        let read = match (self.accessors.get(key), self.fields.get(key)) {
            (Some(accessor), _) => (accessor.get)(object),
            (None, Some(access)) => (access.get)(object),
            (None, None) => return Err(self.unknown_key(key)),
        };

        read.map_err(|err| err.context(err!("cannot read {}", self.locate(key))))
    }

    /// Writes `value` to the attribute stored under `key`.
    pub fn write(&self, key: &str, object: &mut dyn Mapped, value: Value) -> Result<()> {
        let written = match (self.mutators.get(key), self.fields.get(key)) {
            (Some(mutator), _) => (mutator.set)(object, value),
            (None, Some(access)) => (access.set)(object, value),
            (None, None) => return Err(self.unknown_key(key)),
        };

        written.map_err(|err| err.context(err!("cannot write {}", self.locate(key))))
    }

    /// Creates an empty instance of the mapped class.
    pub fn instantiate(&self) -> Result<Box<dyn Mapped>> {
        self.constructor.instantiate(&self.class_name)
    }

    fn locate(&self, key: &str) -> String {
        let attribute = self.attribute_for(key).unwrap_or(key);
        format!("`{}.{attribute}` (key `{key}`)", self.class_name)
    }

    fn unknown_key(&self, key: &str) -> Error {
        Error::invalid_argument(format!(
            "`{}` has no attribute stored under `{key}`",
            self.class_name
        ))
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor").field("name", &self.name).finish()
    }
}

impl fmt::Debug for Mutator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutator").field("name", &self.name).finish()
    }
}
