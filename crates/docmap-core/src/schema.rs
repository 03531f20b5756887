//! Mapping metadata: how one class's attributes correspond to document keys.

mod chain;
pub use chain::DependencyChain;

mod definition;
pub use definition::{Definition, DefinitionKind};

mod map;
pub use map::{Accessor, Binding, EmbedKind, Map, Mutator};

mod parser;
pub use parser::Parser;

mod ty;
pub use ty::{is_native, is_qualified_name, TypeTag, NATIVE_TYPES};

mod verify;
