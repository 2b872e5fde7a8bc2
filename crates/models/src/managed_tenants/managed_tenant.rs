//! `microsoft.graph.managedTenants.managedTenant` resource model.

use graphbeta_serialization::{
    Parsable, ParseNode, SerializationError, SerializationWriter,
};

use crate::entity::Entity;
use crate::managed_tenants::cloud_pc_overview::CloudPcOverview;
use crate::managed_tenants::compliance::{
    CredentialUserRegistrationsSummary, ManagedDeviceCompliance,
};
use crate::managed_tenants::management_templates::{
    ManagementTemplateStep, ManagementTemplateStepTenantSummary,
};

/// Entry point of the multi-tenant management platform: rollup collections
/// across every managed tenant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagedTenant {
    entity: Entity,
    cloud_pcs_overview: Option<Vec<CloudPcOverview>>,
    credential_user_registrations_summaries:
        Option<Vec<CredentialUserRegistrationsSummary>>,
    managed_device_compliances: Option<Vec<ManagedDeviceCompliance>>,
    management_template_steps: Option<Vec<ManagementTemplateStep>>,
    management_template_step_tenant_summaries:
        Option<Vec<ManagementTemplateStepTenantSummary>>,
}

impl ManagedTenant {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.managedTenants.managedTenant";

    pub fn new() -> Self {
        let mut tenant = Self::default();
        tenant
            .entity
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        tenant
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn id(&self) -> Option<&str> {
        self.entity.id()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.entity.set_id(value);
    }

    pub fn cloud_pcs_overview(&self) -> Option<&[CloudPcOverview]> {
        self.cloud_pcs_overview.as_deref()
    }

    pub fn set_cloud_pcs_overview(&mut self, value: Option<Vec<CloudPcOverview>>) {
        self.cloud_pcs_overview = value;
    }

    pub fn credential_user_registrations_summaries(
        &self,
    ) -> Option<&[CredentialUserRegistrationsSummary]> {
        self.credential_user_registrations_summaries.as_deref()
    }

    pub fn set_credential_user_registrations_summaries(
        &mut self,
        value: Option<Vec<CredentialUserRegistrationsSummary>>,
    ) {
        self.credential_user_registrations_summaries = value;
    }

    pub fn managed_device_compliances(&self) -> Option<&[ManagedDeviceCompliance]> {
        self.managed_device_compliances.as_deref()
    }

    pub fn set_managed_device_compliances(
        &mut self,
        value: Option<Vec<ManagedDeviceCompliance>>,
    ) {
        self.managed_device_compliances = value;
    }

    pub fn management_template_steps(&self) -> Option<&[ManagementTemplateStep]> {
        self.management_template_steps.as_deref()
    }

    pub fn set_management_template_steps(
        &mut self,
        value: Option<Vec<ManagementTemplateStep>>,
    ) {
        self.management_template_steps = value;
    }

    pub fn management_template_step_tenant_summaries(
        &self,
    ) -> Option<&[ManagementTemplateStepTenantSummary]> {
        self.management_template_step_tenant_summaries.as_deref()
    }

    pub fn set_management_template_step_tenant_summaries(
        &mut self,
        value: Option<Vec<ManagementTemplateStepTenantSummary>>,
    ) {
        self.management_template_step_tenant_summaries = value;
    }
}

impl Parsable for ManagedTenant {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "cloudPcsOverview" => {
                if let Some(value) =
                    node.get_collection_of_object_values(CloudPcOverview::from_discriminator)?
                {
                    self.cloud_pcs_overview = Some(value);
                }
            }
            "credentialUserRegistrationsSummaries" => {
                if let Some(value) = node.get_collection_of_object_values(
                    CredentialUserRegistrationsSummary::from_discriminator,
                )? {
                    self.credential_user_registrations_summaries = Some(value);
                }
            }
            "managedDeviceCompliances" => {
                if let Some(value) = node.get_collection_of_object_values(
                    ManagedDeviceCompliance::from_discriminator,
                )? {
                    self.managed_device_compliances = Some(value);
                }
            }
            "managementTemplateSteps" => {
                if let Some(value) = node.get_collection_of_object_values(
                    ManagementTemplateStep::from_discriminator,
                )? {
                    self.management_template_steps = Some(value);
                }
            }
            "managementTemplateStepTenantSummaries" => {
                if let Some(value) = node.get_collection_of_object_values(
                    ManagementTemplateStepTenantSummary::from_discriminator,
                )? {
                    self.management_template_step_tenant_summaries = Some(value);
                }
            }
            _ => return self.entity.deserialize_field(field, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.entity.serialize(writer)?;
        writer.write_collection_of_object_values(
            "cloudPcsOverview",
            self.cloud_pcs_overview.as_deref(),
        )?;
        writer.write_collection_of_object_values(
            "credentialUserRegistrationsSummaries",
            self.credential_user_registrations_summaries.as_deref(),
        )?;
        writer.write_collection_of_object_values(
            "managedDeviceCompliances",
            self.managed_device_compliances.as_deref(),
        )?;
        writer.write_collection_of_object_values(
            "managementTemplateSteps",
            self.management_template_steps.as_deref(),
        )?;
        writer.write_collection_of_object_values(
            "managementTemplateStepTenantSummaries",
            self.management_template_step_tenant_summaries.as_deref(),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphbeta_serialization::json::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn rollup_collections_roundtrip() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.managedTenants.managedTenant",
            "id": "mt-1",
            "managedDeviceCompliances": [
                {"managedDeviceName": "LAPTOP-01", "complianceStatus": "compliant", "tenantId": "t-1"},
            ],
            "cloudPcsOverview": [
                {"tenantDisplayName": "Fabrikam", "totalCloudPcStatus": 42},
            ],
        });
        let tenant: ManagedTenant =
            from_json_value(&payload, ManagedTenant::from_discriminator).unwrap();
        let devices = tenant.managed_device_compliances().unwrap();
        assert_eq!(devices[0].managed_device_name(), Some("LAPTOP-01"));
        assert_eq!(devices[0].compliance_status(), Some("compliant"));
        let overview = tenant.cloud_pcs_overview().unwrap();
        assert_eq!(overview[0].total_cloud_pc_status(), Some(42));

        let back = to_json_value(&tenant).unwrap();
        assert_eq!(
            back["managedDeviceCompliances"][0]["managedDeviceName"],
            json!("LAPTOP-01")
        );
        assert!(back.get("managementTemplateSteps").is_none());
    }
}
