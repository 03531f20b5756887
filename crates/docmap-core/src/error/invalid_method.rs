use super::{Error, MethodRole};

/// Error when an accessor or mutator exists but cannot be bound: it is not
/// public, takes the wrong number of required parameters, or does not read
/// (accessor) or write (mutator) a value.
#[derive(Debug)]
pub(super) struct InvalidMethod {
    role: MethodRole,
    class: Box<str>,
    attribute: Box<str>,
    method: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidMethod {}

impl core::fmt::Display for InvalidMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid {} `{}` for attribute `{}.{}`: {}",
            self.role.as_str(),
            self.method,
            self.class,
            self.attribute,
            self.reason
        )
    }
}

impl Error {
    /// Creates an invalid accessor error.
    pub fn invalid_accessor(
        class: impl Into<String>,
        attribute: impl Into<String>,
        method: impl Into<String>,
        reason: impl Into<String>,
    ) -> Error {
        Error::invalid_method(
            MethodRole::Accessor,
            class.into(),
            attribute.into(),
            method.into(),
            reason.into(),
        )
    }

    /// Creates an invalid mutator error.
    pub fn invalid_mutator(
        class: impl Into<String>,
        attribute: impl Into<String>,
        method: impl Into<String>,
        reason: impl Into<String>,
    ) -> Error {
        Error::invalid_method(
            MethodRole::Mutator,
            class.into(),
            attribute.into(),
            method.into(),
            reason.into(),
        )
    }

    fn invalid_method(
        role: MethodRole,
        class: String,
        attribute: String,
        method: String,
        reason: String,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidMethod(InvalidMethod {
            role,
            class: class.into(),
            attribute: attribute.into(),
            method: method.into(),
            reason: reason.into(),
        }))
    }

    /// Returns `true` if this error is an invalid accessor error.
    pub fn is_invalid_accessor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidMethod(err) if err.role == MethodRole::Accessor)
    }

    /// Returns `true` if this error is an invalid mutator error.
    pub fn is_invalid_mutator(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidMethod(err) if err.role == MethodRole::Mutator)
    }
}
