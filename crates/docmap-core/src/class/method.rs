use super::{Mapped, Visibility};
use crate::{Result, Value};

/// Reads an attribute value from an instance.
pub type Getter = fn(&dyn Mapped) -> Result<Value>;

/// Writes an attribute value to an instance.
pub type Setter = fn(&mut dyn Mapped, Value) -> Result<()>;

/// A method declared on a class.
///
/// Only methods with a [`MethodBody::Getter`] or [`MethodBody::Setter`] body
/// can be bound as accessors or mutators. Other methods are recorded so that
/// binding errors can tell "missing" apart from "present but unusable".
#[derive(Debug, Clone)]
pub struct Method {
    pub name: String,

    pub visibility: Visibility,

    /// Number of parameters without a default, not counting the receiver
    pub required_params: usize,

    pub body: MethodBody,
}

#[derive(Clone, Copy)]
pub enum MethodBody {
    Getter(Getter),
    Setter(Setter),
    Opaque,
}

impl Method {
    /// A public method taking no arguments and returning the attribute value.
    pub fn getter(name: impl Into<String>, get: Getter) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            required_params: 0,
            body: MethodBody::Getter(get),
        }
    }

    /// A public method taking the new attribute value.
    pub fn setter(name: impl Into<String>, set: Setter) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            required_params: 1,
            body: MethodBody::Setter(set),
        }
    }

    /// A method that neither reads nor writes an attribute.
    pub fn opaque(name: impl Into<String>, required_params: usize) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            required_params,
            body: MethodBody::Opaque,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_required_params(mut self, required_params: usize) -> Self {
        self.required_params = required_params;
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn as_getter(&self) -> Option<Getter> {
        match self.body {
            MethodBody::Getter(get) => Some(get),
            _ => None,
        }
    }

    pub fn as_setter(&self) -> Option<Setter> {
        match self.body {
            MethodBody::Setter(set) => Some(set),
            _ => None,
        }
    }
}

impl core::fmt::Debug for MethodBody {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Getter(_) => f.write_str("Getter"),
            Self::Setter(_) => f.write_str("Setter"),
            Self::Opaque => f.write_str("Opaque"),
        }
    }
}
