//! `microsoft.graph.tenantAdmin` namespace: SharePoint tenant settings.

mod enums;
mod settings;

pub use enums::{ImageTaggingChoice, SharingCapabilities, SharingDomainRestrictionMode};
pub use settings::{IdleSessionSignOut, Settings};
