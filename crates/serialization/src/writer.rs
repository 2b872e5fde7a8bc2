//! Typed writer building one outgoing wire record.

use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::duration::IsoDuration;
use crate::error::SerializationError;
use crate::parsable::{AdditionalData, Parsable, WireEnum};

/// Field-by-field writer for one record.
///
/// `None` is the writer's no-value representation: the key is omitted from
/// the output entirely, so an absent field never reappears as an explicit
/// null or empty container.
pub trait SerializationWriter: Sized {
    fn write_string_value(
        &mut self,
        key: &str,
        value: Option<&str>,
    ) -> Result<(), SerializationError>;
    fn write_bool_value(
        &mut self,
        key: &str,
        value: Option<bool>,
    ) -> Result<(), SerializationError>;
    fn write_i32_value(&mut self, key: &str, value: Option<i32>)
        -> Result<(), SerializationError>;
    fn write_i64_value(&mut self, key: &str, value: Option<i64>)
        -> Result<(), SerializationError>;
    fn write_f64_value(&mut self, key: &str, value: Option<f64>)
        -> Result<(), SerializationError>;
    fn write_byte_array_value(
        &mut self,
        key: &str,
        value: Option<&[u8]>,
    ) -> Result<(), SerializationError>;
    fn write_date_time_value(
        &mut self,
        key: &str,
        value: Option<OffsetDateTime>,
    ) -> Result<(), SerializationError>;
    fn write_date_only_value(
        &mut self,
        key: &str,
        value: Option<Date>,
    ) -> Result<(), SerializationError>;
    fn write_duration_value(
        &mut self,
        key: &str,
        value: Option<IsoDuration>,
    ) -> Result<(), SerializationError>;
    fn write_uuid_value(
        &mut self,
        key: &str,
        value: Option<Uuid>,
    ) -> Result<(), SerializationError>;
    fn write_enum_value<E: WireEnum>(
        &mut self,
        key: &str,
        value: Option<E>,
    ) -> Result<(), SerializationError>;

    fn write_object_value<T: Parsable>(
        &mut self,
        key: &str,
        value: Option<&T>,
    ) -> Result<(), SerializationError>;
    fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> Result<(), SerializationError>;
    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), SerializationError>;
    fn write_collection_of_uuid_values(
        &mut self,
        key: &str,
        values: Option<&[Uuid]>,
    ) -> Result<(), SerializationError>;
    fn write_collection_of_enum_values<E: WireEnum>(
        &mut self,
        key: &str,
        values: Option<&[E]>,
    ) -> Result<(), SerializationError>;

    /// Flushes the extension bag, last. Keys already written as declared
    /// fields are not overwritten by bag entries.
    fn write_additional_data(&mut self, data: &AdditionalData)
        -> Result<(), SerializationError>;
}
