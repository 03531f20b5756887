/// A single declarative tag attached to an attribute.
///
/// Tags are kept exactly as declared, duplicates included, so that the
/// parser can reject malformed declarations instead of silently picking one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Marks the attribute as persistable, optionally overriding its storage
    /// key.
    Field { key: Option<String> },

    /// Declared type token: a primitive (`int`, `bool`, `float`, `string`,
    /// `number`, `array`, `mixed`, `object`) or a fully-qualified type name.
    Type(String),

    /// Element type of an embedded collection.
    Embed(String),
}

impl Annotation {
    pub fn field() -> Self {
        Self::Field { key: None }
    }

    pub fn field_with_key(key: impl Into<String>) -> Self {
        Self::Field {
            key: Some(key.into()),
        }
    }

    pub fn ty(token: impl Into<String>) -> Self {
        Self::Type(token.into())
    }

    pub fn embed(token: impl Into<String>) -> Self {
        Self::Embed(token.into())
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field { .. })
    }

    /// Name of the tag, used in diagnostics.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Field { .. } => "field",
            Self::Type(_) => "type",
            Self::Embed(_) => "embed",
        }
    }
}
