//! Wire enums of the `microsoft.graph.tenantAdmin` namespace.

use graphbeta_serialization::{SerializationError, WireEnum};

/// Image tagging mode for the tenant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageTaggingChoice {
    #[default]
    Disabled,
    Basic,
    Enhanced,
}

impl WireEnum for ImageTaggingChoice {
    const FAMILY: &'static str = "imageTaggingChoice";
    const VALUES: &'static [Self] = &[Self::Disabled, Self::Basic, Self::Enhanced];

    fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Basic => "basic",
            Self::Enhanced => "enhanced",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "disabled" => Self::Disabled,
            "basic" => Self::Basic,
            "enhanced" => Self::Enhanced,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

/// External sharing capability of the tenant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SharingCapabilities {
    #[default]
    Disabled,
    ExternalUserSharingOnly,
    ExternalUserAndGuestSharing,
    ExistingExternalUserSharingOnly,
}

impl WireEnum for SharingCapabilities {
    const FAMILY: &'static str = "sharingCapabilities";
    const VALUES: &'static [Self] = &[
        Self::Disabled,
        Self::ExternalUserSharingOnly,
        Self::ExternalUserAndGuestSharing,
        Self::ExistingExternalUserSharingOnly,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::ExternalUserSharingOnly => "externalUserSharingOnly",
            Self::ExternalUserAndGuestSharing => "externalUserAndGuestSharing",
            Self::ExistingExternalUserSharingOnly => "existingExternalUserSharingOnly",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "disabled" => Self::Disabled,
            "externalUserSharingOnly" => Self::ExternalUserSharingOnly,
            "externalUserAndGuestSharing" => Self::ExternalUserAndGuestSharing,
            "existingExternalUserSharingOnly" => Self::ExistingExternalUserSharingOnly,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

/// Domain allow/block mode for external sharing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SharingDomainRestrictionMode {
    #[default]
    None,
    AllowList,
    BlockList,
}

impl WireEnum for SharingDomainRestrictionMode {
    const FAMILY: &'static str = "sharingDomainRestrictionMode";
    const VALUES: &'static [Self] = &[Self::None, Self::AllowList, Self::BlockList];

    fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::AllowList => "allowList",
            Self::BlockList => "blockList",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "none" => Self::None,
            "allowList" => Self::AllowList,
            "blockList" => Self::BlockList,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}
