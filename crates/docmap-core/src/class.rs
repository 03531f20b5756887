//! Declarative class metadata.
//!
//! A [`Class`] describes one mapped type: its attributes with their
//! annotations, the methods that may serve as accessors and mutators, and how
//! to instantiate it. Descriptors are produced by `#[derive(Document)]` or
//! assembled by hand with [`Class::builder`], then handed to a [`Registry`].

mod annotation;
pub use annotation::Annotation;

mod attribute;
pub use attribute::{Attribute, FieldAccess, Visibility};

mod constructor;
pub use constructor::Constructor;

mod extra;
pub use extra::ExtraAccess;

mod method;
pub use method::{Getter, Method, MethodBody, Setter};

mod registry;
pub use registry::Registry;

use crate::{Error, Result};

use std::any::Any;
use std::fmt;

/// An instance of a mapped class.
///
/// Implemented by `#[derive(Document)]`. The trait is object safe so mappers
/// can hold and build instances without knowing their concrete type.
pub trait Mapped: Any + fmt::Debug + Send + Sync {
    /// Fully-qualified name of the instance's class.
    fn class_name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn clone_boxed(&self) -> Box<dyn Mapped>;
}

impl Clone for Box<dyn Mapped> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// A type that can describe its own persistable shape.
pub trait Describe: Mapped + Sized {
    /// Builds the class descriptor.
    fn describe() -> Class;

    /// Fully-qualified name used to identify the class.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Downcasts a mapped instance to its concrete type.
pub fn downcast_ref<T: Mapped>(object: &dyn Mapped) -> Result<&T> {
    let class = object.class_name().to_string();
    object.as_any().downcast_ref::<T>().ok_or_else(|| {
        Error::invalid_argument(format!(
            "expected an instance of `{}`, found `{class}`",
            std::any::type_name::<T>()
        ))
    })
}

/// Downcasts a mutable mapped instance to its concrete type.
pub fn downcast_mut<T: Mapped>(object: &mut dyn Mapped) -> Result<&mut T> {
    let class = object.class_name().to_string();
    object.as_any_mut().downcast_mut::<T>().ok_or_else(|| {
        Error::invalid_argument(format!(
            "expected an instance of `{}`, found `{class}`",
            std::any::type_name::<T>()
        ))
    })
}

/// Converts an owned mapped instance back into its concrete type.
pub fn downcast<T: Mapped>(object: Box<dyn Mapped>) -> Result<T> {
    let class = object.class_name().to_string();
    object.into_any().downcast::<T>().map(|boxed| *boxed).map_err(|_| {
        Error::invalid_argument(format!(
            "expected an instance of `{}`, found `{class}`",
            std::any::type_name::<T>()
        ))
    })
}

#[derive(Debug, Clone)]
pub struct Class {
    /// Fully-qualified class name
    name: String,

    /// Declared attributes, in declaration order
    attributes: Vec<Attribute>,

    /// Methods that may bind as accessors or mutators
    methods: Vec<Method>,

    /// How instances are created during hydration
    constructor: Constructor,

    /// Sink for attributes that are not declared (schema-less mode)
    extra: Option<ExtraAccess>,
}

#[derive(Debug)]
pub struct ClassBuilder {
    class: Class,
}

impl Class {
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder {
            class: Class {
                name: name.into(),
                attributes: vec![],
                methods: vec![],
                constructor: Constructor::Unavailable,
                extra: None,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attribute| attribute.name == name)
    }

    /// Attributes carrying the persistable tag.
    pub fn persistable(&self) -> impl Iterator<Item = &Attribute> + '_ {
        self.attributes
            .iter()
            .filter(|attribute| attribute.is_persistable())
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|method| method.name == name)
    }

    pub fn constructor(&self) -> &Constructor {
        &self.constructor
    }

    pub fn extra(&self) -> Option<&ExtraAccess> {
        self.extra.as_ref()
    }

    /// Creates a fresh instance through the no-args constructor.
    pub fn instantiate(&self) -> Result<Box<dyn Mapped>> {
        self.constructor.instantiate(&self.name)
    }
}

impl ClassBuilder {
    pub fn attribute(&mut self, attribute: Attribute) -> &mut Self {
        self.class.attributes.push(attribute);
        self
    }

    pub fn method(&mut self, method: Method) -> &mut Self {
        self.class.methods.push(method);
        self
    }

    pub fn constructor(&mut self, constructor: Constructor) -> &mut Self {
        self.class.constructor = constructor;
        self
    }

    pub fn extra(&mut self, extra: ExtraAccess) -> &mut Self {
        self.class.extra = Some(extra);
        self
    }

    pub fn build(&mut self) -> Class {
        self.class.clone()
    }
}
