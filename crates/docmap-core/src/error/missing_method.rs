use super::{Error, MethodRole};

/// Error when a private attribute has no accessor or mutator under the name
/// the formatter derived for it.
#[derive(Debug)]
pub(super) struct MissingMethod {
    role: MethodRole,
    class: Box<str>,
    attribute: Box<str>,
    method: Box<str>,
}

impl std::error::Error for MissingMethod {}

impl core::fmt::Display for MissingMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing {} `{}` for private attribute `{}.{}`",
            self.role.as_str(),
            self.method,
            self.class,
            self.attribute
        )
    }
}

impl Error {
    /// Creates a missing accessor error.
    pub fn missing_accessor(
        class: impl Into<String>,
        attribute: impl Into<String>,
        method: impl Into<String>,
    ) -> Error {
        Error::missing_method(MethodRole::Accessor, class.into(), attribute.into(), method.into())
    }

    /// Creates a missing mutator error.
    pub fn missing_mutator(
        class: impl Into<String>,
        attribute: impl Into<String>,
        method: impl Into<String>,
    ) -> Error {
        Error::missing_method(MethodRole::Mutator, class.into(), attribute.into(), method.into())
    }

    fn missing_method(role: MethodRole, class: String, attribute: String, method: String) -> Error {
        Error::from(super::ErrorKind::MissingMethod(MissingMethod {
            role,
            class: class.into(),
            attribute: attribute.into(),
            method: method.into(),
        }))
    }

    /// Returns `true` if this error is a missing accessor error.
    pub fn is_missing_accessor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingMethod(err) if err.role == MethodRole::Accessor)
    }

    /// Returns `true` if this error is a missing mutator error.
    pub fn is_missing_mutator(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingMethod(err) if err.role == MethodRole::Mutator)
    }
}
