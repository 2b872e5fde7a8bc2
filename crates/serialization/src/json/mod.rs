//! JSON backing for the parse-node / serialization-writer pair.

mod parse_node;
mod writer;

pub use parse_node::JsonParseNode;
pub use writer::JsonSerializationWriter;

use serde_json::Value;

use crate::error::SerializationError;
use crate::parsable::Parsable;
use crate::parse_node::ParseNode;

/// Reserved discriminator key selecting the concrete variant of a
/// polymorphic record.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Deserializes one record from raw JSON text.
pub fn from_json_slice<T, F>(payload: &[u8], factory: F) -> Result<T, SerializationError>
where
    T: Parsable,
    F: FnMut(Option<&str>) -> T,
{
    let value: Value = serde_json::from_slice(payload)?;
    from_json_value(&value, factory)
}

/// Deserializes one record from an already-parsed JSON value.
pub fn from_json_value<T, F>(value: &Value, factory: F) -> Result<T, SerializationError>
where
    T: Parsable,
    F: FnMut(Option<&str>) -> T,
{
    let node = JsonParseNode::new(value);
    node.get_object_value(factory)?
        .ok_or(SerializationError::UnexpectedKind {
            expected: "object",
            found: "null",
        })
}

/// Serializes one record to a JSON value tree.
pub fn to_json_value<T: Parsable>(record: &T) -> Result<Value, SerializationError> {
    let mut writer = JsonSerializationWriter::new();
    record.serialize(&mut writer)?;
    Ok(Value::Object(writer.into_map()))
}

/// Serializes one record to raw JSON text.
pub fn to_json_vec<T: Parsable>(record: &T) -> Result<Vec<u8>, SerializationError> {
    Ok(serde_json::to_vec(&to_json_value(record)?)?)
}
