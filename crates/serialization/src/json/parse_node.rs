//! Borrowing reader over a `serde_json` value tree.

use base64::Engine;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::ODATA_TYPE_KEY;
use crate::duration::IsoDuration;
use crate::error::SerializationError;
use crate::parsable::{Parsable, WireEnum};
use crate::parse_node::ParseNode;

pub(super) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One node of an incoming JSON payload.
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    fn mismatch(&self, expected: &'static str) -> SerializationError {
        SerializationError::UnexpectedKind {
            expected,
            found: kind(self.value),
        }
    }

    fn text(&self, expected: &'static str) -> Result<Option<&'a str>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(text) => Ok(Some(text)),
            _ => Err(self.mismatch(expected)),
        }
    }

    fn elements(&self) -> Result<Option<&'a [Value]>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(items)),
            _ => Err(self.mismatch("array")),
        }
    }
}

impl<'a> ParseNode for JsonParseNode<'a> {
    fn get_string_value(&self) -> Result<Option<String>, SerializationError> {
        Ok(self.text("string")?.map(str::to_owned))
    }

    fn get_bool_value(&self) -> Result<Option<bool>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(value) => Ok(Some(*value)),
            _ => Err(self.mismatch("bool")),
        }
    }

    fn get_i32_value(&self) -> Result<Option<i32>, SerializationError> {
        match self.get_i64_value()? {
            None => Ok(None),
            Some(wide) => i32::try_from(wide).map(Some).map_err(|_| {
                SerializationError::OutOfRange {
                    field_kind: "i32",
                    value: wide,
                }
            }),
        }
    }

    fn get_i64_value(&self) -> Result<Option<i64>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(number) => number
                .as_i64()
                .map(Some)
                .ok_or_else(|| self.mismatch("integer")),
            _ => Err(self.mismatch("integer")),
        }
    }

    fn get_f64_value(&self) -> Result<Option<f64>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(number) => number
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.mismatch("number")),
            _ => Err(self.mismatch("number")),
        }
    }

    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>, SerializationError> {
        match self.text("base64 string")? {
            None => Ok(None),
            Some(text) => base64::engine::general_purpose::STANDARD
                .decode(text)
                .map(Some)
                .map_err(|err| SerializationError::InvalidBase64(err.to_string())),
        }
    }

    fn get_date_time_value(&self) -> Result<Option<OffsetDateTime>, SerializationError> {
        match self.text("RFC 3339 string")? {
            None => Ok(None),
            Some(text) => OffsetDateTime::parse(text, &Rfc3339)
                .map(Some)
                .map_err(|_| SerializationError::InvalidDate(text.to_owned())),
        }
    }

    fn get_date_only_value(&self) -> Result<Option<Date>, SerializationError> {
        match self.text("date string")? {
            None => Ok(None),
            Some(text) => Date::parse(text, format_description!("[year]-[month]-[day]"))
                .map(Some)
                .map_err(|_| SerializationError::InvalidDate(text.to_owned())),
        }
    }

    fn get_duration_value(&self) -> Result<Option<IsoDuration>, SerializationError> {
        match self.text("duration string")? {
            None => Ok(None),
            Some(text) => text.parse().map(Some),
        }
    }

    fn get_uuid_value(&self) -> Result<Option<Uuid>, SerializationError> {
        match self.text("UUID string")? {
            None => Ok(None),
            Some(text) => Uuid::parse_str(text)
                .map(Some)
                .map_err(|_| SerializationError::InvalidUuid(text.to_owned())),
        }
    }

    fn get_enum_value<E: WireEnum>(&self) -> Result<Option<E>, SerializationError> {
        match self.text("enum string")? {
            None => Ok(None),
            Some(text) => E::parse(text).map(Some),
        }
    }

    fn get_object_value<T, F>(&self, mut factory: F) -> Result<Option<T>, SerializationError>
    where
        T: Parsable,
        F: FnMut(Option<&str>) -> T,
    {
        let fields = match self.value {
            Value::Null => return Ok(None),
            Value::Object(fields) => fields,
            _ => return Err(self.mismatch("object")),
        };
        let tag = fields.get(ODATA_TYPE_KEY).and_then(Value::as_str);
        let mut record = factory(tag);
        for (key, value) in fields {
            let child = JsonParseNode::new(value);
            if record.deserialize_field(key, &child)? {
                continue;
            }
            if let Some(bag) = record.additional_data_mut() {
                bag.insert(key.clone(), value.clone());
            }
        }
        Ok(Some(record))
    }

    fn get_collection_of_object_values<T, F>(
        &self,
        mut factory: F,
    ) -> Result<Option<Vec<T>>, SerializationError>
    where
        T: Parsable,
        F: FnMut(Option<&str>) -> T,
    {
        match self.elements()? {
            None => Ok(None),
            Some(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    let child = JsonParseNode::new(element);
                    if let Some(value) = child.get_object_value(&mut factory)? {
                        values.push(value);
                    }
                }
                Ok(Some(values))
            }
        }
    }

    fn get_collection_of_string_values(
        &self,
    ) -> Result<Option<Vec<String>>, SerializationError> {
        match self.elements()? {
            None => Ok(None),
            Some(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    if let Some(value) = JsonParseNode::new(element).get_string_value()? {
                        values.push(value);
                    }
                }
                Ok(Some(values))
            }
        }
    }

    fn get_collection_of_uuid_values(&self) -> Result<Option<Vec<Uuid>>, SerializationError> {
        match self.elements()? {
            None => Ok(None),
            Some(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    if let Some(value) = JsonParseNode::new(element).get_uuid_value()? {
                        values.push(value);
                    }
                }
                Ok(Some(values))
            }
        }
    }

    fn get_collection_of_enum_values<E: WireEnum>(
        &self,
    ) -> Result<Option<Vec<E>>, SerializationError> {
        match self.elements()? {
            None => Ok(None),
            Some(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    if let Some(value) = JsonParseNode::new(element).get_enum_value()? {
                        values.push(value);
                    }
                }
                Ok(Some(values))
            }
        }
    }

    fn get_child_node(&self, name: &str) -> Option<Self> {
        self.value
            .as_object()
            .and_then(|fields| fields.get(name))
            .map(JsonParseNode::new)
    }
}
