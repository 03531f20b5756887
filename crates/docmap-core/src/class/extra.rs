use super::Mapped;
use crate::{Result, Value};

use indexmap::IndexMap;

/// Stores attributes a class does not declare.
///
/// Used by the schema-less mapper: document keys with no matching attribute
/// are appended here on hydrate and written back out on serialize.
#[derive(Clone, Copy)]
pub struct ExtraAccess {
    pub get: fn(&dyn Mapped) -> Result<IndexMap<String, Value>>,
    pub insert: fn(&mut dyn Mapped, String, Value) -> Result<()>,
}

impl core::fmt::Debug for ExtraAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("ExtraAccess")
    }
}
