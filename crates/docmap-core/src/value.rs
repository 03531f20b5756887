use crate::class::Mapped;

use bson::Bson;
use indexmap::IndexMap;

/// A dynamically typed attribute value.
///
/// Every read from and write to a mapped object passes through `Value`. The
/// mappers convert between `Value` and [`Bson`] when flattening objects into
/// documents and when reconstructing them.
#[derive(Debug, Default, Clone)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// 64-bit floating point value
    F64(f64),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// A value the storage driver understands natively (object ids, dates,
    /// binary, ...). Never normalized.
    Native(Bson),

    /// Null value
    #[default]
    Null,

    /// Instance of a mapped class
    Object(Box<dyn Mapped>),

    /// Untyped keyed structure
    Record(IndexMap<String, Value>),

    /// A list of values
    List(Vec<Value>),

    /// String value
    String(String),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn object<T: Mapped>(value: T) -> Self {
        Self::Object(Box::new(value))
    }

    pub fn as_object(&self) -> Option<&dyn Mapped> {
        match self {
            Self::Object(object) => Some(&**object),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::F64(_) => "F64",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::Native(_) => "Native",
            Self::Null => "Null",
            Self::Object(_) => "Object",
            Self::Record(_) => "Record",
            Self::List(_) => "List",
            Self::String(_) => "String",
        }
    }

    /// Converts a stored BSON value without any schema knowledge.
    ///
    /// Documents become records and arrays become lists; BSON types with no
    /// scalar counterpart are kept as [`Value::Native`].
    pub fn from_bson(bson: Bson) -> Self {
        match bson {
            Bson::Null | Bson::Undefined => Self::Null,
            Bson::Boolean(v) => Self::Bool(v),
            Bson::Int32(v) => Self::I32(v),
            Bson::Int64(v) => Self::I64(v),
            Bson::Double(v) => Self::F64(v),
            Bson::String(v) => Self::String(v),
            Bson::Array(items) => Self::List(items.into_iter().map(Self::from_bson).collect()),
            Bson::Document(document) => Self::Record(
                document
                    .into_iter()
                    .map(|(key, value)| (key, Self::from_bson(value)))
                    .collect(),
            ),
            native => Self::Native(native),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<bson::oid::ObjectId> for Value {
    fn from(src: bson::oid::ObjectId) -> Self {
        Self::Native(Bson::ObjectId(src))
    }
}

impl From<Vec<Value>> for Value {
    fn from(src: Vec<Value>) -> Self {
        Self::List(src)
    }
}

/// Short name of a BSON value's type, used in shape mismatch errors.
pub fn bson_type_name(bson: &Bson) -> &'static str {
    match bson {
        Bson::Document(_) => "document",
        Bson::Array(_) => "array",
        Bson::String(_) => "string",
        Bson::Boolean(_) => "bool",
        Bson::Int32(_) | Bson::Int64(_) => "int",
        Bson::Double(_) => "double",
        Bson::Null | Bson::Undefined => "null",
        Bson::ObjectId(_) => "objectId",
        Bson::DateTime(_) => "date",
        _ => "native value",
    }
}
