use std::fmt;

/// Storage-native types. Values of these types are handed to the driver
/// untouched and never get a sub-map.
pub const NATIVE_TYPES: &[&str] = &[
    "bson::oid::ObjectId",
    "bson::DateTime",
    "bson::Binary",
    "bson::Decimal128",
    "bson::Timestamp",
    "bson::Regex",
];

/// A parsed type token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeTag {
    Int,
    Bool,
    Float,
    String,
    Number,
    Array,
    Mixed,
    Object,

    /// A fully-qualified class name
    Class(String),
}

impl TypeTag {
    /// Parses a type token.
    ///
    /// Returns `None` when the token is neither a primitive nor a valid
    /// fully-qualified name.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();

        Self::primitive(token).or_else(|| {
            is_qualified_name(token).then(|| Self::Class(token.trim_start_matches("::").to_string()))
        })
    }

    /// Parses a primitive token only.
    pub fn primitive(token: &str) -> Option<Self> {
        Some(match token {
            "int" => Self::Int,
            "bool" => Self::Bool,
            "float" => Self::Float,
            "string" => Self::String,
            "number" => Self::Number,
            "array" => Self::Array,
            "mixed" => Self::Mixed,
            "object" => Self::Object,
            _ => return None,
        })
    }

    pub fn is_primitive(&self) -> bool {
        !self.is_class()
    }

    pub fn is_class(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array)
    }

    pub fn as_class(&self) -> Option<&str> {
        match self {
            Self::Class(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Float => "float",
            Self::String => "string",
            Self::Number => "number",
            Self::Array => "array",
            Self::Mixed => "mixed",
            Self::Object => "object",
            Self::Class(name) => name,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` if `name` is a path of identifiers separated by `::`, with
/// an optional leading `::`.
pub fn is_qualified_name(name: &str) -> bool {
    let path = name.strip_prefix("::").unwrap_or(name);

    !path.is_empty() && path.split("::").all(is_identifier)
}

/// Returns `true` if `name` is one of [`NATIVE_TYPES`].
pub fn is_native(name: &str) -> bool {
    let name = name.strip_prefix("::").unwrap_or(name);
    NATIVE_TYPES.contains(&name)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();

    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }

    segment != "_" && chars.all(|c| c == '_' || c.is_alphanumeric())
}
