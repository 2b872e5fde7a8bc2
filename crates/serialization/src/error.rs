//! Wire runtime error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("unknown value `{value}` for enum `{family}`")]
    UnknownEnumValue { value: String, family: &'static str },
    #[error("expected {expected} node, found {found}")]
    UnexpectedKind {
        expected: &'static str,
        found: &'static str,
    },
    #[error("invalid date/time `{0}`")]
    InvalidDate(String),
    #[error("invalid UUID `{0}`")]
    InvalidUuid(String),
    #[error("invalid ISO 8601 duration `{0}`")]
    InvalidDuration(String),
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
    #[error("{field_kind} value {value} out of range")]
    OutOfRange {
        field_kind: &'static str,
        value: i64,
    },
    #[error("payload error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SerializationError {
    pub fn unknown_enum(value: &str, family: &'static str) -> Self {
        Self::UnknownEnumValue {
            value: value.to_owned(),
            family,
        }
    }
}
