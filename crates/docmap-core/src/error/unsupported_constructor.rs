use super::Error;

/// Error when hydrating a class that cannot be instantiated without
/// arguments.
#[derive(Debug)]
pub(super) struct UnsupportedConstructor {
    class: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for UnsupportedConstructor {}

impl core::fmt::Display for UnsupportedConstructor {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot instantiate `{}`: {}", self.class, self.reason)
    }
}

impl Error {
    /// Creates an unsupported constructor error.
    pub fn unsupported_constructor(class: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedConstructor(
            UnsupportedConstructor {
                class: class.into().into(),
                reason: reason.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported constructor error.
    pub fn is_unsupported_constructor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedConstructor(_))
    }
}
