use super::Mapper;
use crate::normalize::{to_bson, SerializeObject};
use crate::schema::EmbedKind;
use crate::{Error, Map, Mapped, Result, Value};

use bson::{Bson, Document};

impl Mapper {
    /// Flattens `object` into a document using the map of its class.
    pub fn serialize(&self, object: &dyn Mapped) -> Result<Document> {
        let map = self.map_for(object.class_name())?;
        self.serialize_with(&map, object)
    }

    /// Flattens the object held by `value`.
    pub fn serialize_value(&self, value: &Value) -> Result<Document> {
        match value.as_object() {
            Some(object) => self.serialize(object),
            None => Err(Error::invalid_argument(format!(
                "only objects can be serialized, found {}",
                value.kind_name()
            ))),
        }
    }

    /// Flattens `object` using `map`, which must be the map of the object's
    /// class.
    ///
    /// Attributes holding null are left out of the document.
    pub fn serialize_with(&self, map: &Map, object: &dyn Mapped) -> Result<Document> {
        if object.class_name() != map.class_name() {
            return Err(Error::invalid_argument(format!(
                "map of `{}` cannot serialize an instance of `{}`",
                map.class_name(),
                object.class_name()
            )));
        }

        let mut document = Document::new();

        for key in map.keys() {
            let value = map.read(key, object)?;

            if value.is_null() {
                continue;
            }

            let bson = match (map.embed_kind(key), map.embed_map(key)) {
                (Some(EmbedKind::Document), Some(embed_map)) => {
                    self.serialize_embedded(embed_map, &value)?
                }
                (Some(EmbedKind::Collection), Some(embed_map)) => match &value {
                    Value::List(items) => Bson::Array(
                        items
                            .iter()
                            .map(|item| self.serialize_embedded(embed_map, item))
                            .collect::<Result<_>>()?,
                    ),
                    _ => to_bson(self, &value)?,
                },
                _ => to_bson(self, &value)?,
            };

            document.insert(key, bson);
        }

        Ok(document)
    }

    fn serialize_embedded(&self, embed_map: &Map, value: &Value) -> Result<Bson> {
        match value.as_object() {
            Some(object) => Ok(Bson::Document(self.serialize_with(embed_map, object)?)),
            None => to_bson(self, value),
        }
    }
}

impl SerializeObject for Mapper {
    fn serialize_object(&self, object: &dyn Mapped) -> Result<Document> {
        self.serialize(object)
    }
}
