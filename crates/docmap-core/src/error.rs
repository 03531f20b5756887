mod adhoc;
mod cyclic_dependency;
mod expected_collection;
mod expected_document;
mod invalid_argument;
mod invalid_identifier;
mod invalid_method;
mod malformed_metadata;
mod missing_method;
mod type_conversion;
mod unknown_class;
mod unsupported_constructor;

use adhoc::AdhocError;
use cyclic_dependency::CyclicDependency;
use expected_collection::ExpectedCollection;
use expected_document::ExpectedDocument;
use invalid_argument::InvalidArgument;
use invalid_identifier::InvalidIdentifier;
use invalid_method::InvalidMethod;
use malformed_metadata::MalformedMetadata;
use missing_method::MissingMethod;
use std::sync::Arc;
use type_conversion::TypeConversionError;
use unknown_class::UnknownClass;
use unsupported_constructor::UnsupportedConstructor;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc [`Error`] from a format string.
///
/// Used for context messages and for failures that do not warrant a
/// dedicated error kind.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while building a map or mapping a value.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

/// Which half of an accessor/mutator pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MethodRole {
    Accessor,
    Mutator,
}

impl MethodRole {
    fn as_str(self) -> &'static str {
        match self {
            MethodRole::Accessor => "accessor",
            MethodRole::Mutator => "mutator",
        }
    }
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap()
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    MalformedMetadata(MalformedMetadata),
    MissingMethod(MissingMethod),
    InvalidMethod(InvalidMethod),
    InvalidIdentifier(InvalidIdentifier),
    CyclicDependency(CyclicDependency),
    InvalidArgument(InvalidArgument),
    UnsupportedConstructor(UnsupportedConstructor),
    ExpectedDocument(ExpectedDocument),
    ExpectedCollection(ExpectedCollection),
    UnknownClass(UnknownClass),
    TypeConversion(TypeConversionError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            MalformedMetadata(err) => core::fmt::Display::fmt(err, f),
            MissingMethod(err) => core::fmt::Display::fmt(err, f),
            InvalidMethod(err) => core::fmt::Display::fmt(err, f),
            InvalidIdentifier(err) => core::fmt::Display::fmt(err, f),
            CyclicDependency(err) => core::fmt::Display::fmt(err, f),
            InvalidArgument(err) => core::fmt::Display::fmt(err, f),
            UnsupportedConstructor(err) => core::fmt::Display::fmt(err, f),
            ExpectedDocument(err) => core::fmt::Display::fmt(err, f),
            ExpectedCollection(err) => core::fmt::Display::fmt(err, f),
            UnknownClass(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown docmap error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<bson::oid::Error> for Error {
    fn from(err: bson::oid::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
