mod cache;
pub use cache::MemoryCache;

pub mod mapper;
pub use mapper::Mapper;

mod normalize;

mod persist;
pub use persist::Persist;

mod simple;
pub use simple::SimpleMapper;

pub use docmap_core::{
    bail,
    class::{self, Class, Describe, Mapped, Registry},
    err,
    format::{self, CaseFormatter, Formatter},
    schema::{self, Map, Parser},
    Cache, Error, Result, Value,
};

pub use docmap_macros::Document;

pub use bson;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Error, Persist, Result, Value};
    pub use docmap_core::class::{
        downcast, downcast_mut, downcast_ref, Annotation, Attribute, Class, Constructor,
        Describe, ExtraAccess, FieldAccess, Mapped, Method,
    };
    pub use std::{any::Any, borrow::Cow, boxed::Box, clone::Clone, default::Default};
}
