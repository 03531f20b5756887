//! The schema-less mapper.

use crate::class::{downcast, Attribute, Getter, Method, Setter};
use crate::normalize::{to_bson, SerializeObject};
use crate::schema::TypeTag;
use crate::{err, Class, Describe, Error, Formatter, Mapped, Registry, Result, Value};

use bson::{Bson, Document};
use docmap_core::value::bson_type_name;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::trace;

/// Maps objects without building [`Map`](crate::Map)s.
///
/// Every attribute of a class that can be reached, annotated or not, is
/// written to the document under the key the formatter (or an explicit
/// `Field` key) gives it. Private attributes are reached through methods
/// found by name on each call.
///
/// When schema-less mode is enabled, document keys the class does not
/// declare are kept in the class's extra-attribute sink, and written back out
/// on serialize.
#[derive(Debug, Clone)]
pub struct SimpleMapper {
    registry: Arc<Registry>,
    formatter: Arc<dyn Formatter>,
    schemaless: bool,
}

impl SimpleMapper {
    pub(crate) fn new(
        registry: Arc<Registry>,
        formatter: Arc<dyn Formatter>,
        schemaless: bool,
    ) -> Self {
        Self {
            registry,
            formatter,
            schemaless,
        }
    }

    pub fn is_schemaless(&self) -> bool {
        self.schemaless
    }

    pub fn serialize(&self, object: &dyn Mapped) -> Result<Document> {
        let class = self.registry.class(object.class_name())?;
        let mut document = Document::new();

        let mut claimed = HashSet::new();

        for attribute in class.attributes() {
            let key = self.storage_key(attribute);

            // The first attribute declared under a key owns it.
            if !claimed.insert(key.clone()) {
                trace!(
                    class = %class.name(),
                    attribute = %attribute.name,
                    key = %key,
                    "storage key taken by an earlier attribute; skipping"
                );
                continue;
            }

            let Some(get) = self.getter(class, attribute) else {
                trace!(class = %class.name(), attribute = %attribute.name, "no accessor; skipping");
                continue;
            };

            let value = get(object).map_err(|err| {
                err.context(err!("cannot read {}", locate(class, attribute, &key)))
            })?;

            if value.is_null() {
                continue;
            }

            document.insert(key, to_bson(self, &value)?);
        }

        if let Some(extra) = class.extra() {
            for (key, value) in (extra.get)(object)? {
                if value.is_null() || claimed.contains(&key) || document.contains_key(&key) {
                    continue;
                }

                let bson = to_bson(self, &value)?;
                document.insert(key, bson);
            }
        }

        Ok(document)
    }

    pub fn serialize_value(&self, value: &Value) -> Result<Document> {
        match value.as_object() {
            Some(object) => self.serialize(object),
            None => Err(Error::invalid_argument(format!(
                "only objects can be serialized, found {}",
                value.kind_name()
            ))),
        }
    }

    pub fn hydrate<T: Describe>(&self, document: &Document) -> Result<T> {
        let object = self.hydrate_class(T::type_name(), document)?;
        downcast::<T>(object)
    }

    pub fn hydrate_class(&self, class: &str, document: &Document) -> Result<Box<dyn Mapped>> {
        let class = self.registry.class(class)?;
        let mut object = class.instantiate()?;

        let attributes: Vec<(String, &Attribute)> = class
            .attributes()
            .iter()
            .map(|attribute| (self.storage_key(attribute), attribute))
            .collect();

        for (key, bson) in document {
            if matches!(bson, Bson::Null | Bson::Undefined) {
                continue;
            }

            let attribute = attributes
                .iter()
                .find(|(storage_key, _)| storage_key == key)
                .map(|(_, attribute)| *attribute);

            match attribute {
                Some(attribute) => {
                    let Some(set) = self.setter(class, attribute) else {
                        trace!(class = %class.name(), attribute = %attribute.name, "no mutator; skipping");
                        continue;
                    };

                    let value = self.hydrate_attribute(class, attribute, key, bson)?;
                    set(&mut *object, value).map_err(|err| {
                        err.context(err!("cannot write {}", locate(class, attribute, key)))
                    })?;
                }
                None => match class.extra() {
                    Some(extra) if self.schemaless => {
                        (extra.insert)(&mut *object, key.clone(), Value::from_bson(bson.clone()))?;
                    }
                    _ => {
                        trace!(class = %class.name(), key = %key, "dropping undeclared key");
                    }
                },
            }
        }

        Ok(object)
    }

    fn hydrate_attribute(
        &self,
        class: &Class,
        attribute: &Attribute,
        key: &str,
        bson: &Bson,
    ) -> Result<Value> {
        match attribute.type_token().and_then(TypeTag::parse) {
            Some(TypeTag::Class(name)) if self.registry.contains(&name) => {
                self.hydrate_document(class, key, &name, bson)
            }
            Some(TypeTag::Array) => match attribute.embed_token() {
                Some(element) if self.registry.contains(element) => {
                    let Bson::Array(items) = bson else {
                        return Err(Error::expected_collection(
                            class.name(),
                            key,
                            bson_type_name(bson),
                        ));
                    };

                    let items = items
                        .iter()
                        .map(|item| match item {
                            Bson::Null => Ok(Value::Null),
                            item => self.hydrate_document(class, key, element, item),
                        })
                        .collect::<Result<_>>()?;

                    Ok(Value::List(items))
                }
                _ => Ok(Value::from_bson(bson.clone())),
            },
            _ => Ok(Value::from_bson(bson.clone())),
        }
    }

    fn hydrate_document(
        &self,
        class: &Class,
        key: &str,
        target: &str,
        bson: &Bson,
    ) -> Result<Value> {
        let Bson::Document(document) = bson else {
            return Err(Error::expected_document(
                class.name(),
                key,
                bson_type_name(bson),
            ));
        };

        Ok(Value::Object(self.hydrate_class(target, document)?))
    }

    fn storage_key(&self, attribute: &Attribute) -> String {
        match attribute.explicit_key() {
            Some(key) => key.to_string(),
            None => self.formatter.to_storage_key(&attribute.name),
        }
    }

    fn getter(&self, class: &Class, attribute: &Attribute) -> Option<Getter> {
        match attribute.access {
            Some(access) if attribute.is_public() => Some(access.get),
            _ => {
                let name = self
                    .formatter
                    .accessor_name_for(&attribute.name, attribute.type_token());

                class
                    .method(&name)
                    .filter(|method| method.is_public() && method.required_params == 0)
                    .and_then(Method::as_getter)
            }
        }
    }

    fn setter(&self, class: &Class, attribute: &Attribute) -> Option<Setter> {
        match attribute.access {
            Some(access) if attribute.is_public() => Some(access.set),
            _ => {
                let name = self.formatter.mutator_name_for(&attribute.name);

                class
                    .method(&name)
                    .filter(|method| method.is_public() && method.required_params == 1)
                    .and_then(Method::as_setter)
            }
        }
    }
}

fn locate(class: &Class, attribute: &Attribute, key: &str) -> String {
    format!("`{}.{}` (key `{key}`)", class.name(), attribute.name)
}

impl SerializeObject for SimpleMapper {
    fn serialize_object(&self, object: &dyn Mapped) -> Result<Document> {
        self.serialize(object)
    }
}
