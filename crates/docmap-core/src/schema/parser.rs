use super::{
    is_native, Accessor, Binding, Definition, DefinitionKind, DependencyChain, Map, Mutator,
    TypeTag,
};
use crate::class::{Attribute, Class, Registry};
use crate::format::{Formatter, ID_ATTRIBUTE, ID_KEY};
use crate::{Error, Result};

use tracing::{debug, trace};

/// Builds [`Map`]s from the class descriptors in a [`Registry`].
#[derive(Debug)]
pub struct Parser<'a> {
    registry: &'a Registry,
    formatter: &'a dyn Formatter,
}

/// The resolved type of one attribute.
struct Resolved {
    declared_type: Option<TypeTag>,
    kind: DefinitionKind,
    mapped_class: Option<String>,
}

impl<'a> Parser<'a> {
    pub fn new(registry: &'a Registry, formatter: &'a dyn Formatter) -> Self {
        Self {
            registry,
            formatter,
        }
    }

    /// Builds the map of `class`, along with the maps of every class it
    /// embeds.
    pub fn build_map(&self, class: &str) -> Result<Map> {
        self.build(class, DependencyChain::new())
    }

    fn build(&self, class_name: &str, chain: DependencyChain) -> Result<Map> {
        chain.check(class_name)?;

        let class = self.registry.class(class_name)?;
        let chain = chain.with(class.name());
        let mut map = Map::new(class.name(), *class.constructor());

        for attribute in class.persistable() {
            self.define(&mut map, class, attribute, &chain)?;
        }

        debug_assert!(map.verify().is_ok(), "{:?}", map.verify());
        debug!(class = %class.name(), keys = map.len(), depth = chain.len(), "built map");

        Ok(map)
    }

    fn define(
        &self,
        map: &mut Map,
        class: &Class,
        attribute: &Attribute,
        chain: &DependencyChain,
    ) -> Result<()> {
        check_tags(class, attribute)?;

        let resolved = resolve_type(class, attribute)?;
        let storage_key = self.storage_key(map, class, attribute)?;

        let binding = if storage_key == ID_KEY || attribute.name == ID_ATTRIBUTE {
            self.bind_identifier(class, attribute, &resolved)?
        } else {
            match attribute.access {
                Some(access) if attribute.is_public() => Binding::Field(access),
                _ => self.bind_methods(class, attribute, &resolved)?,
            }
        };

        let (accessor, mutator) = match &binding {
            Binding::Field(_) => (None, None),
            Binding::Methods { accessor, mutator } => {
                (Some(accessor.name.clone()), Some(mutator.name.clone()))
            }
        };

        let embed_map = match (resolved.kind, &resolved.mapped_class) {
            (DefinitionKind::Document | DefinitionKind::Collection, Some(target)) => {
                Some(self.build(target, chain.clone())?)
            }
            _ => None,
        };

        trace!(
            class = %class.name(),
            attribute = %attribute.name,
            key = %storage_key,
            kind = ?resolved.kind,
            "defined attribute"
        );

        map.add(
            Definition {
                storage_key,
                attribute_name: attribute.name.clone(),
                declared_type: resolved.declared_type,
                kind: resolved.kind,
                mapped_class: resolved.mapped_class,
                accessor,
                mutator,
            },
            binding,
            embed_map,
        );

        Ok(())
    }

    fn storage_key(&self, map: &Map, class: &Class, attribute: &Attribute) -> Result<String> {
        let key = match attribute.explicit_key() {
            Some(key) => key.to_string(),
            None => self.formatter.to_storage_key(&attribute.name),
        };

        if key.is_empty() {
            return Err(Error::malformed_metadata(
                class.name(),
                Some(&attribute.name),
                "storage key is empty",
            ));
        }

        if let Some(other) = map.attribute_for(&key) {
            return Err(Error::malformed_metadata(
                class.name(),
                None,
                format!(
                    "storage key `{key}` is used by both `{other}` and `{}`",
                    attribute.name
                ),
            ));
        }

        Ok(key)
    }

    /// The identifier must be readable and writable from outside: either as a
    /// public field or through a valid accessor and mutator.
    fn bind_identifier(
        &self,
        class: &Class,
        attribute: &Attribute,
        resolved: &Resolved,
    ) -> Result<Binding> {
        if let (true, Some(access)) = (attribute.is_public(), attribute.access) {
            return Ok(Binding::Field(access));
        }

        self.bind_methods(class, attribute, resolved).map_err(|err| {
            Error::invalid_identifier(class.name(), &attribute.name, err.to_string())
        })
    }

    fn bind_methods(
        &self,
        class: &Class,
        attribute: &Attribute,
        resolved: &Resolved,
    ) -> Result<Binding> {
        let type_hint = resolved.declared_type.as_ref().map(TypeTag::as_str);

        let accessor_name = self.formatter.accessor_name_for(&attribute.name, type_hint);
        let Some(method) = class.method(&accessor_name) else {
            return Err(Error::missing_accessor(
                class.name(),
                &attribute.name,
                accessor_name,
            ));
        };

        let invalid = |reason: String| {
            Error::invalid_accessor(class.name(), &attribute.name, &accessor_name, reason)
        };

        if !method.is_public() {
            return Err(invalid("method is not public".to_string()));
        }

        if method.required_params != 0 {
            return Err(invalid(format!(
                "expected 0 required parameters, found {}",
                method.required_params
            )));
        }

        let Some(get) = method.as_getter() else {
            return Err(invalid("method does not return the attribute value".to_string()));
        };

        let mutator_name = self.formatter.mutator_name_for(&attribute.name);
        let Some(method) = class.method(&mutator_name) else {
            return Err(Error::missing_mutator(
                class.name(),
                &attribute.name,
                mutator_name,
            ));
        };

        let invalid = |reason: String| {
            Error::invalid_mutator(class.name(), &attribute.name, &mutator_name, reason)
        };

        if !method.is_public() {
            return Err(invalid("method is not public".to_string()));
        }

        if method.required_params != 1 {
            return Err(invalid(format!(
                "expected 1 required parameter, found {}",
                method.required_params
            )));
        }

        let Some(set) = method.as_setter() else {
            return Err(invalid("method does not accept the attribute value".to_string()));
        };

        Ok(Binding::Methods {
            accessor: Accessor {
                name: accessor_name.clone(),
                get,
            },
            mutator: Mutator {
                name: mutator_name.clone(),
                set,
            },
        })
    }
}

/// Each tag may appear at most once per attribute.
fn check_tags(class: &Class, attribute: &Attribute) -> Result<()> {
    for tag in ["field", "type", "embed"] {
        let count = attribute
            .annotations
            .iter()
            .filter(|annotation| annotation.tag() == tag)
            .count();

        if count > 1 {
            return Err(Error::malformed_metadata(
                class.name(),
                Some(&attribute.name),
                format!("duplicate `{tag}` tag"),
            ));
        }
    }

    Ok(())
}

fn resolve_type(class: &Class, attribute: &Attribute) -> Result<Resolved> {
    let malformed =
        |message: String| Error::malformed_metadata(class.name(), Some(&attribute.name), message);

    let declared_type = match attribute.type_token() {
        Some(token) => Some(
            TypeTag::parse(token)
                .ok_or_else(|| malformed(format!("unrecognized type `{token}`")))?,
        ),
        None => None,
    };

    let embed = match attribute.embed_token() {
        Some(token) => {
            if !matches!(declared_type, Some(TypeTag::Array)) {
                return Err(malformed(format!(
                    "`embed` tag requires type `array`, found {}",
                    declared_type
                        .as_ref()
                        .map(|ty| format!("`{ty}`"))
                        .unwrap_or_else(|| "no type".to_string())
                )));
            }

            match TypeTag::parse(token) {
                Some(TypeTag::Class(name)) => Some(name),
                _ => {
                    return Err(malformed(format!(
                        "embedded type `{token}` is not a class name"
                    )))
                }
            }
        }
        None => None,
    };

    let (kind, mapped_class) = match (&declared_type, embed) {
        (Some(TypeTag::Array), Some(element)) => (DefinitionKind::Collection, Some(element)),
        (Some(TypeTag::Class(name)), _) => (DefinitionKind::Document, Some(name.clone())),
        _ => (DefinitionKind::Scalar, None),
    };

    let kind = match &mapped_class {
        Some(name) if is_native(name) => DefinitionKind::Native,
        _ => kind,
    };

    Ok(Resolved {
        declared_type,
        kind,
        mapped_class,
    })
}

