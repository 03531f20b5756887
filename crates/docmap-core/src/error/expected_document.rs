use super::Error;

/// Error when a key mapped to an embedded document holds something other
/// than a document.
#[derive(Debug)]
pub(super) struct ExpectedDocument {
    class: Box<str>,
    key: Box<str>,
    found: &'static str,
}

impl std::error::Error for ExpectedDocument {}

impl core::fmt::Display for ExpectedDocument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "expected a document at `{}.{}`, found {}",
            self.class, self.key, self.found
        )
    }
}

impl Error {
    /// Creates an expected document error. `found` names the BSON type that
    /// was present instead.
    pub fn expected_document(
        class: impl Into<String>,
        key: impl Into<String>,
        found: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::ExpectedDocument(ExpectedDocument {
            class: class.into().into(),
            key: key.into().into(),
            found,
        }))
    }

    /// Returns `true` if this error is an expected document error.
    pub fn is_expected_document(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ExpectedDocument(_))
    }
}
