use super::Error;

/// Error when a class is referenced (directly or as an embed target) but was
/// never registered.
#[derive(Debug)]
pub(super) struct UnknownClass {
    class: Box<str>,
}

impl std::error::Error for UnknownClass {}

impl core::fmt::Display for UnknownClass {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "class `{}` is not registered", self.class)
    }
}

impl Error {
    /// Creates an unknown class error.
    pub fn unknown_class(class: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownClass(UnknownClass {
            class: class.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown class error.
    pub fn is_unknown_class(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownClass(_))
    }
}
