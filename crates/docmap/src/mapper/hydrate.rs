use super::Mapper;
use crate::class::downcast;
use crate::schema::DefinitionKind;
use crate::{Describe, Error, Map, Mapped, Result, Value};

use bson::{Bson, Document};
use docmap_core::value::bson_type_name;
use tracing::trace;

impl Mapper {
    /// Rebuilds a `T` from `document`.
    pub fn hydrate<T: Describe>(&self, document: &Document) -> Result<T> {
        let object = self.hydrate_class(T::type_name(), document)?;
        downcast::<T>(object)
    }

    /// Rebuilds an instance of the registered class `class`.
    pub fn hydrate_class(&self, class: &str, document: &Document) -> Result<Box<dyn Mapped>> {
        let map = self.map_for(class)?;
        self.hydrate_with(&map, document, class)
    }

    /// Rebuilds an instance of `class` using `map`.
    ///
    /// Null entries and keys the map does not know are skipped; the matching
    /// attributes keep the values the constructor gave them.
    pub fn hydrate_with(
        &self,
        map: &Map,
        document: &Document,
        class: &str,
    ) -> Result<Box<dyn Mapped>> {
        if class != map.class_name() {
            return Err(Error::invalid_argument(format!(
                "map of `{}` cannot hydrate an instance of `{class}`",
                map.class_name()
            )));
        }

        let mut object = map.instantiate()?;

        for (key, bson) in document {
            if matches!(bson, Bson::Null | Bson::Undefined) {
                continue;
            }

            let Some(definition) = map.definition(key) else {
                trace!(class = %class, key = %key, "ignoring unknown key");
                continue;
            };

            let value = match (definition.kind, map.embed_map(key)) {
                (DefinitionKind::Document, Some(embed_map)) => {
                    self.hydrate_document(map, key, embed_map, bson)?
                }
                (DefinitionKind::Collection, Some(embed_map)) => {
                    let Bson::Array(items) = bson else {
                        return Err(Error::expected_collection(
                            map.class_name(),
                            key,
                            bson_type_name(bson),
                        ));
                    };

                    Value::List(
                        items
                            .iter()
                            .map(|item| match item {
                                Bson::Null => Ok(Value::Null),
                                item => self.hydrate_document(map, key, embed_map, item),
                            })
                            .collect::<Result<_>>()?,
                    )
                }
                _ => Value::from_bson(bson.clone()),
            };

            map.write(key, &mut *object, value)?;
        }

        Ok(object)
    }

    fn hydrate_document(
        &self,
        map: &Map,
        key: &str,
        embed_map: &Map,
        bson: &Bson,
    ) -> Result<Value> {
        let Bson::Document(document) = bson else {
            return Err(Error::expected_document(
                map.class_name(),
                key,
                bson_type_name(bson),
            ));
        };

        let object = self.hydrate_with(embed_map, document, embed_map.class_name())?;
        Ok(Value::Object(object))
    }
}
