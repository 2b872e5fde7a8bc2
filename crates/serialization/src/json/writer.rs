//! Writer building one outgoing JSON object in insertion order.

use base64::Engine;
use serde_json::{Map, Number, Value};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::duration::IsoDuration;
use crate::error::SerializationError;
use crate::parsable::{AdditionalData, Parsable, WireEnum};
use crate::writer::SerializationWriter;

/// Collects one record's fields into a JSON object.
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    fields: Map<String, Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    fn put(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_owned(), value);
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(
        &mut self,
        key: &str,
        value: Option<&str>,
    ) -> Result<(), SerializationError> {
        if let Some(value) = value {
            self.put(key, Value::String(value.to_owned()));
        }
        Ok(())
    }

    fn write_bool_value(
        &mut self,
        key: &str,
        value: Option<bool>,
    ) -> Result<(), SerializationError> {
        if let Some(value) = value {
            self.put(key, Value::Bool(value));
        }
        Ok(())
    }

    fn write_i32_value(
        &mut self,
        key: &str,
        value: Option<i32>,
    ) -> Result<(), SerializationError> {
        if let Some(value) = value {
            self.put(key, Value::Number(Number::from(value)));
        }
        Ok(())
    }

    fn write_i64_value(
        &mut self,
        key: &str,
        value: Option<i64>,
    ) -> Result<(), SerializationError> {
        if let Some(value) = value {
            self.put(key, Value::Number(Number::from(value)));
        }
        Ok(())
    }

    fn write_f64_value(
        &mut self,
        key: &str,
        value: Option<f64>,
    ) -> Result<(), SerializationError> {
        if let Some(value) = value {
            let number =
                Number::from_f64(value).ok_or(SerializationError::UnexpectedKind {
                    expected: "finite number",
                    found: "non-finite number",
                })?;
            self.put(key, Value::Number(number));
        }
        Ok(())
    }

    fn write_byte_array_value(
        &mut self,
        key: &str,
        value: Option<&[u8]>,
    ) -> Result<(), SerializationError> {
        if let Some(value) = value {
            let encoded = base64::engine::general_purpose::STANDARD.encode(value);
            self.put(key, Value::String(encoded));
        }
        Ok(())
    }

    fn write_date_time_value(
        &mut self,
        key: &str,
        value: Option<OffsetDateTime>,
    ) -> Result<(), SerializationError> {
        if let Some(value) = value {
            let text = value
                .format(&Rfc3339)
                .map_err(|err| SerializationError::InvalidDate(err.to_string()))?;
            self.put(key, Value::String(text));
        }
        Ok(())
    }

    fn write_date_only_value(
        &mut self,
        key: &str,
        value: Option<Date>,
    ) -> Result<(), SerializationError> {
        if let Some(value) = value {
            let text = value
                .format(format_description!("[year]-[month]-[day]"))
                .map_err(|err| SerializationError::InvalidDate(err.to_string()))?;
            self.put(key, Value::String(text));
        }
        Ok(())
    }

    fn write_duration_value(
        &mut self,
        key: &str,
        value: Option<IsoDuration>,
    ) -> Result<(), SerializationError> {
        if let Some(value) = value {
            self.put(key, Value::String(value.to_string()));
        }
        Ok(())
    }

    fn write_uuid_value(
        &mut self,
        key: &str,
        value: Option<Uuid>,
    ) -> Result<(), SerializationError> {
        if let Some(value) = value {
            self.put(key, Value::String(value.to_string()));
        }
        Ok(())
    }

    fn write_enum_value<E: WireEnum>(
        &mut self,
        key: &str,
        value: Option<E>,
    ) -> Result<(), SerializationError> {
        self.write_string_value(key, value.map(WireEnum::as_str))
    }

    fn write_object_value<T: Parsable>(
        &mut self,
        key: &str,
        value: Option<&T>,
    ) -> Result<(), SerializationError> {
        if let Some(value) = value {
            let mut nested = JsonSerializationWriter::new();
            value.serialize(&mut nested)?;
            self.put(key, Value::Object(nested.into_map()));
        }
        Ok(())
    }

    fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> Result<(), SerializationError> {
        if let Some(values) = values {
            let mut elements = Vec::with_capacity(values.len());
            for value in values {
                let mut nested = JsonSerializationWriter::new();
                value.serialize(&mut nested)?;
                elements.push(Value::Object(nested.into_map()));
            }
            self.put(key, Value::Array(elements));
        }
        Ok(())
    }

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), SerializationError> {
        if let Some(values) = values {
            let elements = values
                .iter()
                .map(|value| Value::String(value.clone()))
                .collect();
            self.put(key, Value::Array(elements));
        }
        Ok(())
    }

    fn write_collection_of_uuid_values(
        &mut self,
        key: &str,
        values: Option<&[Uuid]>,
    ) -> Result<(), SerializationError> {
        if let Some(values) = values {
            let elements = values
                .iter()
                .map(|value| Value::String(value.to_string()))
                .collect();
            self.put(key, Value::Array(elements));
        }
        Ok(())
    }

    fn write_collection_of_enum_values<E: WireEnum>(
        &mut self,
        key: &str,
        values: Option<&[E]>,
    ) -> Result<(), SerializationError> {
        if let Some(values) = values {
            let elements = E::serialize_list(values)
                .into_iter()
                .map(|text| Value::String(text.to_owned()))
                .collect();
            self.put(key, Value::Array(elements));
        }
        Ok(())
    }

    fn write_additional_data(
        &mut self,
        data: &AdditionalData,
    ) -> Result<(), SerializationError> {
        for (key, value) in data {
            if !self.fields.contains_key(key) {
                self.fields.insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }
}
