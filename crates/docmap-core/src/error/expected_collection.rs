use super::Error;

/// Error when a key mapped to an embedded collection holds something other
/// than an array.
#[derive(Debug)]
pub(super) struct ExpectedCollection {
    class: Box<str>,
    key: Box<str>,
    found: &'static str,
}

impl std::error::Error for ExpectedCollection {}

impl core::fmt::Display for ExpectedCollection {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "expected a collection at `{}.{}`, found {}",
            self.class, self.key, self.found
        )
    }
}

impl Error {
    /// Creates an expected collection error. `found` names the BSON type
    /// that was present instead.
    pub fn expected_collection(
        class: impl Into<String>,
        key: impl Into<String>,
        found: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::ExpectedCollection(ExpectedCollection {
            class: class.into().into(),
            key: key.into().into(),
            found,
        }))
    }

    /// Returns `true` if this error is an expected collection error.
    pub fn is_expected_collection(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ExpectedCollection(_))
    }
}
