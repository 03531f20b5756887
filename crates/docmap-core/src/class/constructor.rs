use super::Mapped;
use crate::{Error, Result};

/// How instances of a class are created during hydration.
#[derive(Clone, Copy)]
pub enum Constructor {
    /// The class can be created without arguments.
    Default(fn() -> Box<dyn Mapped>),

    /// The constructor requires the given number of arguments. Hydration
    /// cannot call it.
    RequiresArgs(usize),

    /// The class declares no usable constructor.
    Unavailable,
}

impl Constructor {
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default(_))
    }

    pub(crate) fn instantiate(&self, class: &str) -> Result<Box<dyn Mapped>> {
        match self {
            Self::Default(new) => Ok(new()),
            Self::RequiresArgs(n) => Err(Error::unsupported_constructor(
                class,
                format!("constructor requires {n} argument(s)"),
            )),
            Self::Unavailable => Err(Error::unsupported_constructor(
                class,
                "class declares no constructor",
            )),
        }
    }
}

impl core::fmt::Debug for Constructor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Default(_) => f.write_str("Default"),
            Self::RequiresArgs(n) => f.debug_tuple("RequiresArgs").field(n).finish(),
            Self::Unavailable => f.write_str("Unavailable"),
        }
    }
}
