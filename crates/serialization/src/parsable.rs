//! Record and enum contracts shared by every wire model.

use crate::error::SerializationError;
use crate::parse_node::ParseNode;
use crate::writer::SerializationWriter;

/// Open-ended extension bag: wire fields unknown to the compiled model,
/// preserved verbatim in insertion order across round-trips.
pub type AdditionalData = serde_json::Map<String, serde_json::Value>;

/// A record that converts to and from the wire field-by-field.
pub trait Parsable {
    /// Applies one wire field to the record.
    ///
    /// Returns `Ok(true)` when the field belongs to this record's map (a
    /// null read leaves the field absent but still counts as recognized)
    /// and `Ok(false)` when the field is unknown. Records embedding a base
    /// record try their own fields first and then delegate, so a derived
    /// map is always a superset of its base's.
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError>;

    /// Writes every declared field in fixed order, extension bag last.
    fn serialize<W: SerializationWriter>(&self, writer: &mut W)
        -> Result<(), SerializationError>;

    /// The extension bag, for records that carry one.
    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        None
    }
}

/// A closed set of named wire values.
///
/// `parse` is the single validation point for enum wire text: readers never
/// accept an unrecognized literal silently.
pub trait WireEnum: Copy + Sized + 'static {
    /// Wire name of the enum family, used in error messages.
    const FAMILY: &'static str;

    /// Every declared constant, in declaration order. The first entry is
    /// the zero value.
    const VALUES: &'static [Self];

    /// Canonical wire string for the value. Total.
    fn as_str(self) -> &'static str;

    /// Parses a wire string, naming the offending literal on failure.
    fn parse(value: &str) -> Result<Self, SerializationError>;

    /// Wire strings for a list of values, preserving input order.
    fn serialize_list(values: &[Self]) -> Vec<&'static str> {
        values.iter().map(|value| value.as_str()).collect()
    }
}
