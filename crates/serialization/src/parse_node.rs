//! Typed reader over one wire value node.

use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::duration::IsoDuration;
use crate::error::SerializationError;
use crate::parsable::{Parsable, WireEnum};

/// One node of an incoming payload tree.
///
/// Every reader returns `Ok(None)` for an absent value (wire null); a
/// present value of the wrong kind is an error, never a silent default.
pub trait ParseNode: Sized {
    fn get_string_value(&self) -> Result<Option<String>, SerializationError>;
    fn get_bool_value(&self) -> Result<Option<bool>, SerializationError>;
    fn get_i32_value(&self) -> Result<Option<i32>, SerializationError>;
    fn get_i64_value(&self) -> Result<Option<i64>, SerializationError>;
    fn get_f64_value(&self) -> Result<Option<f64>, SerializationError>;

    /// Base64 text to raw bytes.
    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>, SerializationError>;

    /// RFC 3339 timestamp.
    fn get_date_time_value(&self) -> Result<Option<OffsetDateTime>, SerializationError>;

    /// `YYYY-MM-DD` calendar date.
    fn get_date_only_value(&self) -> Result<Option<Date>, SerializationError>;

    fn get_duration_value(&self) -> Result<Option<IsoDuration>, SerializationError>;
    fn get_uuid_value(&self) -> Result<Option<Uuid>, SerializationError>;

    fn get_enum_value<E: WireEnum>(&self) -> Result<Option<E>, SerializationError>;

    /// Reads a nested record. The factory receives the node's
    /// discriminator tag (if any) and must produce the record to populate;
    /// unmatched wire fields land in the record's extension bag when it
    /// carries one.
    fn get_object_value<T, F>(&self, factory: F) -> Result<Option<T>, SerializationError>
    where
        T: Parsable,
        F: FnMut(Option<&str>) -> T;

    fn get_collection_of_object_values<T, F>(
        &self,
        factory: F,
    ) -> Result<Option<Vec<T>>, SerializationError>
    where
        T: Parsable,
        F: FnMut(Option<&str>) -> T;

    fn get_collection_of_string_values(&self)
        -> Result<Option<Vec<String>>, SerializationError>;
    fn get_collection_of_uuid_values(&self) -> Result<Option<Vec<Uuid>>, SerializationError>;
    fn get_collection_of_enum_values<E: WireEnum>(
        &self,
    ) -> Result<Option<Vec<E>>, SerializationError>;

    /// Child node under `name`, when this node is an object.
    fn get_child_node(&self, name: &str) -> Option<Self>;
}
