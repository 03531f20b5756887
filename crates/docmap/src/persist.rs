use crate::{Error, Result, Value};

use bson::{oid::ObjectId, Binary, Bson, DateTime, Decimal128, Regex, Timestamp};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// A Rust type that can be stored in a mapped attribute.
///
/// `#[derive(Document)]` uses this trait to read and write fields through
/// [`Value`] and to infer each field's type token.
pub trait Persist: Sized {
    /// Type token recorded on attributes of this type.
    fn type_token() -> Cow<'static, str>;

    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Result<Self>;
}

macro_rules! impl_persist_int {
    ( $( $ty:ty => $variant:ident ),* ) => {
        $(
            impl Persist for $ty {
                fn type_token() -> Cow<'static, str> {
                    Cow::Borrowed("int")
                }

                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }

                fn from_value(value: Value) -> Result<Self> {
                    let converted = match value {
                        Value::I32(v) => <$ty>::try_from(v).ok(),
                        Value::I64(v) => <$ty>::try_from(v).ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(&value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_persist_int!(i8 => I32, i16 => I32, i32 => I32, u8 => I32, u16 => I32, i64 => I64, u32 => I64);

impl Persist for f64 {
    fn type_token() -> Cow<'static, str> {
        Cow::Borrowed("float")
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I32(v) => Ok(v.into()),
            Value::I64(v) => Ok(v as f64),
            _ => Err(Error::type_conversion(&value, "f64")),
        }
    }
}

impl Persist for f32 {
    fn type_token() -> Cow<'static, str> {
        Cow::Borrowed("float")
    }

    fn to_value(&self) -> Value {
        Value::F64((*self).into())
    }

    fn from_value(value: Value) -> Result<Self> {
        f64::from_value(value).map(|v| v as f32)
    }
}

impl Persist for bool {
    fn type_token() -> Cow<'static, str> {
        Cow::Borrowed("bool")
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            _ => Err(Error::type_conversion(&value, "bool")),
        }
    }
}

impl Persist for String {
    fn type_token() -> Cow<'static, str> {
        Cow::Borrowed("string")
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(Error::type_conversion(&value, "String")),
        }
    }
}

impl Persist for Value {
    fn type_token() -> Cow<'static, str> {
        Cow::Borrowed("mixed")
    }

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl<T: Persist> Persist for Option<T> {
    fn type_token() -> Cow<'static, str> {
        T::type_token()
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }
}

impl<T: Persist> Persist for Vec<T> {
    fn type_token() -> Cow<'static, str> {
        Cow::Borrowed("array")
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Persist::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            _ => Err(Error::type_conversion(&value, "Vec")),
        }
    }
}

macro_rules! impl_persist_record {
    ( $( $map:ident ),* ) => {
        $(
            impl<T: Persist> Persist for $map<String, T> {
                fn type_token() -> Cow<'static, str> {
                    Cow::Borrowed("object")
                }

                fn to_value(&self) -> Value {
                    Value::Record(
                        self.iter()
                            .map(|(key, value)| (key.clone(), value.to_value()))
                            .collect(),
                    )
                }

                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::Record(entries) => entries
                            .into_iter()
                            .map(|(key, value)| T::from_value(value).map(|value| (key, value)))
                            .collect(),
                        _ => Err(Error::type_conversion(&value, stringify!($map))),
                    }
                }
            }
        )*
    };
}

impl_persist_record!(IndexMap, HashMap, BTreeMap);

macro_rules! impl_persist_native {
    ( $( $ty:ty => $variant:ident, $token:literal ),* ) => {
        $(
            impl Persist for $ty {
                fn type_token() -> Cow<'static, str> {
                    Cow::Borrowed($token)
                }

                fn to_value(&self) -> Value {
                    Value::Native(Bson::$variant(self.clone()))
                }

                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::Native(Bson::$variant(v)) => Ok(v),
                        _ => Err(Error::type_conversion(&value, $token)),
                    }
                }
            }
        )*
    };
}

impl_persist_native!(
    DateTime => DateTime, "bson::DateTime",
    Binary => Binary, "bson::Binary",
    Decimal128 => Decimal128, "bson::Decimal128",
    Timestamp => Timestamp, "bson::Timestamp",
    Regex => RegularExpression, "bson::Regex"
);

impl Persist for ObjectId {
    fn type_token() -> Cow<'static, str> {
        Cow::Borrowed("bson::oid::ObjectId")
    }

    fn to_value(&self) -> Value {
        Value::Native(Bson::ObjectId(*self))
    }

    /// Also accepts the hex string form.
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Native(Bson::ObjectId(v)) => Ok(v),
            Value::String(v) => Ok(ObjectId::parse_str(v)?),
            _ => Err(Error::type_conversion(&value, "bson::oid::ObjectId")),
        }
    }
}
