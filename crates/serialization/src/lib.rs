//! Parse-node / serialization-writer runtime for graphbeta wire models.
//!
//! Models convert to and from the wire through two typed surfaces: a
//! [`ParseNode`] reading one payload tree and a [`SerializationWriter`]
//! building one outgoing record. The JSON backing lives in [`json`]; the
//! record and enum contracts ([`Parsable`], [`WireEnum`]) are format
//! independent.

mod duration;
mod error;
mod parsable;
mod parse_node;
mod writer;

pub mod json;

pub use duration::IsoDuration;
pub use error::SerializationError;
pub use json::ODATA_TYPE_KEY;
pub use parsable::{AdditionalData, Parsable, WireEnum};
pub use parse_node::ParseNode;
pub use writer::SerializationWriter;
