use super::Error;

/// Error when resolving embedded classes revisits a class that is already on
/// the current resolution path.
#[derive(Debug)]
pub(super) struct CyclicDependency {
    class: Box<str>,
    chain: Box<[Box<str>]>,
}

impl std::error::Error for CyclicDependency {}

impl core::fmt::Display for CyclicDependency {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("cyclic dependency: ")?;
        for class in self.chain.iter() {
            write!(f, "{class} -> ")?;
        }
        f.write_str(&self.class)
    }
}

impl Error {
    /// Creates a cyclic dependency error.
    ///
    /// `chain` is the resolution path that led back to `class`, outermost
    /// class first.
    pub fn cyclic_dependency<I>(class: impl Into<String>, chain: I) -> Error
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Error::from(super::ErrorKind::CyclicDependency(CyclicDependency {
            class: class.into().into(),
            chain: chain
                .into_iter()
                .map(|class| class.into().into_boxed_str())
                .collect(),
        }))
    }

    /// Returns `true` if this error is a cyclic dependency error.
    pub fn is_cyclic_dependency(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::CyclicDependency(_))
    }
}
