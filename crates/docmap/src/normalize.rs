use crate::{Mapped, Result, Value};

use bson::{Bson, Document};
use indexmap::IndexMap;

/// Turns objects found inside values into documents.
pub(crate) trait SerializeObject {
    fn serialize_object(&self, object: &dyn Mapped) -> Result<Document>;
}

/// Converts a value into its stored form.
///
/// Objects are serialized through `serializer`, lists become arrays and
/// records become documents. Native values pass through untouched.
pub(crate) fn to_bson<S>(serializer: &S, value: &Value) -> Result<Bson>
where
    S: SerializeObject + ?Sized,
{
    Ok(match value {
        Value::Null => Bson::Null,
        Value::Bool(v) => Bson::Boolean(*v),
        Value::I32(v) => Bson::Int32(*v),
        Value::I64(v) => Bson::Int64(*v),
        Value::F64(v) => Bson::Double(*v),
        Value::String(v) => Bson::String(v.clone()),
        Value::Native(v) => v.clone(),
        Value::List(items) => Bson::Array(
            items
                .iter()
                .map(|item| to_bson(serializer, item))
                .collect::<Result<_>>()?,
        ),
        Value::Record(entries) => Bson::Document(record_to_document(serializer, entries)?),
        Value::Object(object) => Bson::Document(serializer.serialize_object(&**object)?),
    })
}

fn record_to_document<S>(serializer: &S, entries: &IndexMap<String, Value>) -> Result<Document>
where
    S: SerializeObject + ?Sized,
{
    let mut document = Document::new();

    for (key, value) in entries {
        document.insert(key.clone(), to_bson(serializer, value)?);
    }

    Ok(document)
}
