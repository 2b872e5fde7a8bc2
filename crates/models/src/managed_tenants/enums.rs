//! Wire enums of the `microsoft.graph.managedTenants` namespace.

use graphbeta_serialization::{SerializationError, WireEnum};

/// Category of a baseline management template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ManagementCategory {
    #[default]
    Custom,
    Devices,
    Identity,
    UnknownFutureValue,
}

impl WireEnum for ManagementCategory {
    const FAMILY: &'static str = "managementCategory";
    const VALUES: &'static [Self] = &[
        Self::Custom,
        Self::Devices,
        Self::Identity,
        Self::UnknownFutureValue,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Devices => "devices",
            Self::Identity => "identity",
            Self::UnknownFutureValue => "unknownFutureValue",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "custom" => Self::Custom,
            "devices" => Self::Devices,
            "identity" => Self::Identity,
            "unknownFutureValue" => Self::UnknownFutureValue,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}
