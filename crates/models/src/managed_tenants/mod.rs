//! `microsoft.graph.managedTenants` namespace: multi-tenant management views.

mod cloud_pc_overview;
mod compliance;
mod enums;
mod managed_tenant;
mod management_templates;

pub use cloud_pc_overview::CloudPcOverview;
pub use compliance::{CredentialUserRegistrationsSummary, ManagedDeviceCompliance};
pub use enums::ManagementCategory;
pub use managed_tenant::ManagedTenant;
pub use management_templates::{
    ManagementTemplate, ManagementTemplateStep, ManagementTemplateStepTenantSummary,
    ManagementTemplateStepVersion,
};
