mod cache;
pub use cache::Cache;

pub mod class;
pub use class::{Class, Describe, Mapped, Registry};

mod error;
pub use error::{Error, IntoError};

pub mod format;
pub use format::{CaseFormatter, Formatter};

pub mod schema;
pub use schema::{Map, Parser};

pub mod value;
pub use value::Value;

pub use bson;

/// A Result type alias that uses docmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
