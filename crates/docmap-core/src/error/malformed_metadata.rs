use super::Error;

/// Error when the declarative metadata of a class cannot be understood.
///
/// This occurs when:
/// - A type token is neither a known primitive nor a valid qualified name
/// - An attribute carries the same tag more than once
/// - An `embed` tag is attached to an attribute that is not an `array`
/// - Two attributes resolve to the same storage key
#[derive(Debug)]
pub(super) struct MalformedMetadata {
    class: Box<str>,
    attribute: Option<Box<str>>,
    message: Box<str>,
}

impl std::error::Error for MalformedMetadata {}

impl core::fmt::Display for MalformedMetadata {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.attribute {
            Some(attribute) => write!(
                f,
                "malformed metadata on `{}.{}`: {}",
                self.class, attribute, self.message
            ),
            None => write!(f, "malformed metadata on `{}`: {}", self.class, self.message),
        }
    }
}

impl Error {
    /// Creates a malformed metadata error.
    ///
    /// `attribute` is `None` when the problem spans the whole class, for
    /// example when two attributes claim the same storage key.
    pub fn malformed_metadata(
        class: impl Into<String>,
        attribute: Option<&str>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::MalformedMetadata(MalformedMetadata {
            class: class.into().into(),
            attribute: attribute.map(Into::into),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a malformed metadata error.
    pub fn is_malformed_metadata(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MalformedMetadata(_))
    }
}
