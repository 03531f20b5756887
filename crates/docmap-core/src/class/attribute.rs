use super::{Annotation, Getter, Setter};

/// A declared attribute of a class.
#[derive(Debug, Clone)]
pub struct Attribute {
    /// The attribute name, as spelled in the type definition
    pub name: String,

    /// Whether the attribute can be read and written directly
    pub visibility: Visibility,

    /// Declarative tags, in declaration order
    pub annotations: Vec<Annotation>,

    /// Direct field access. Only public attributes carry one.
    pub access: Option<FieldAccess>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// Reads and writes a public attribute without going through methods.
#[derive(Clone, Copy)]
pub struct FieldAccess {
    pub get: Getter,
    pub set: Setter,
}

impl Attribute {
    pub fn public(name: impl Into<String>, access: FieldAccess) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            annotations: vec![],
            access: Some(access),
        }
    }

    pub fn private(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Private,
            annotations: vec![],
            access: None,
        }
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn is_persistable(&self) -> bool {
        self.annotations.iter().any(Annotation::is_field)
    }

    /// Storage key given explicitly by the first `Field` tag.
    pub fn explicit_key(&self) -> Option<&str> {
        self.annotations.iter().find_map(|annotation| match annotation {
            Annotation::Field { key } => key.as_deref(),
            _ => None,
        })
    }

    /// First declared type token.
    pub fn type_token(&self) -> Option<&str> {
        self.annotations.iter().find_map(|annotation| match annotation {
            Annotation::Type(token) => Some(token.as_str()),
            _ => None,
        })
    }

    /// First declared embedded element token.
    pub fn embed_token(&self) -> Option<&str> {
        self.annotations.iter().find_map(|annotation| match annotation {
            Annotation::Embed(token) => Some(token.as_str()),
            _ => None,
        })
    }
}

impl core::fmt::Debug for FieldAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FieldAccess")
    }
}
