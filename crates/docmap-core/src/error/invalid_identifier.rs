use super::Error;

/// Error when the identifier attribute (stored under `_id`) is not backed by a
/// public accessor and mutator.
#[derive(Debug)]
pub(super) struct InvalidIdentifier {
    class: Box<str>,
    attribute: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidIdentifier {}

impl core::fmt::Display for InvalidIdentifier {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid identifier `{}.{}`: {}",
            self.class, self.attribute, self.reason
        )
    }
}

impl Error {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(
        class: impl Into<String>,
        attribute: impl Into<String>,
        reason: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidIdentifier(InvalidIdentifier {
            class: class.into().into(),
            attribute: attribute.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid identifier error.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidIdentifier(_))
    }
}
