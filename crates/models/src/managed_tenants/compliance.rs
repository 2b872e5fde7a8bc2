//! Device compliance and credential registration rollups per managed tenant.

use graphbeta_serialization::{
    Parsable, ParseNode, SerializationError, SerializationWriter,
};
use time::OffsetDateTime;

use crate::entity::Entity;

/// Compliance state of one managed device.
///
/// `complianceStatus`, `deviceType`, and `ownerType` are plain strings on
/// the wire for this rollup, not enum fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagedDeviceCompliance {
    entity: Entity,
    compliance_status: Option<String>,
    device_type: Option<String>,
    in_grace_period_until_date_time: Option<OffsetDateTime>,
    last_refreshed_date_time: Option<OffsetDateTime>,
    last_sync_date_time: Option<OffsetDateTime>,
    managed_device_id: Option<String>,
    managed_device_name: Option<String>,
    manufacturer: Option<String>,
    model: Option<String>,
    os_description: Option<String>,
    os_version: Option<String>,
    owner_type: Option<String>,
    tenant_display_name: Option<String>,
    tenant_id: Option<String>,
}

impl ManagedDeviceCompliance {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.managedTenants.managedDeviceCompliance";

    pub fn new() -> Self {
        let mut compliance = Self::default();
        compliance
            .entity
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        compliance
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

    pub fn compliance_status(&self) -> Option<&str> {
        self.compliance_status.as_deref()
    }

    pub fn set_compliance_status(&mut self, value: Option<String>) {
        self.compliance_status = value;
    }

    pub fn device_type(&self) -> Option<&str> {
        self.device_type.as_deref()
    }

    pub fn set_device_type(&mut self, value: Option<String>) {
        self.device_type = value;
    }

    pub fn in_grace_period_until_date_time(&self) -> Option<OffsetDateTime> {
        self.in_grace_period_until_date_time
    }

    pub fn set_in_grace_period_until_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.in_grace_period_until_date_time = value;
    }

    pub fn last_refreshed_date_time(&self) -> Option<OffsetDateTime> {
        self.last_refreshed_date_time
    }

    pub fn set_last_refreshed_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.last_refreshed_date_time = value;
    }

    pub fn last_sync_date_time(&self) -> Option<OffsetDateTime> {
        self.last_sync_date_time
    }

    pub fn set_last_sync_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.last_sync_date_time = value;
    }

    pub fn managed_device_id(&self) -> Option<&str> {
        self.managed_device_id.as_deref()
    }

    pub fn set_managed_device_id(&mut self, value: Option<String>) {
        self.managed_device_id = value;
    }

    pub fn managed_device_name(&self) -> Option<&str> {
        self.managed_device_name.as_deref()
    }

    pub fn set_managed_device_name(&mut self, value: Option<String>) {
        self.managed_device_name = value;
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    pub fn set_manufacturer(&mut self, value: Option<String>) {
        self.manufacturer = value;
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn set_model(&mut self, value: Option<String>) {
        self.model = value;
    }

    pub fn os_description(&self) -> Option<&str> {
        self.os_description.as_deref()
    }

    pub fn set_os_description(&mut self, value: Option<String>) {
        self.os_description = value;
    }

    pub fn os_version(&self) -> Option<&str> {
        self.os_version.as_deref()
    }

    pub fn set_os_version(&mut self, value: Option<String>) {
        self.os_version = value;
    }

    pub fn owner_type(&self) -> Option<&str> {
        self.owner_type.as_deref()
    }

    pub fn set_owner_type(&mut self, value: Option<String>) {
        self.owner_type = value;
    }

    pub fn tenant_display_name(&self) -> Option<&str> {
        self.tenant_display_name.as_deref()
    }

    pub fn set_tenant_display_name(&mut self, value: Option<String>) {
        self.tenant_display_name = value;
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    pub fn set_tenant_id(&mut self, value: Option<String>) {
        self.tenant_id = value;
    }
}

impl Parsable for ManagedDeviceCompliance {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "complianceStatus" => {
                if let Some(value) = node.get_string_value()? {
                    self.compliance_status = Some(value);
                }
            }
            "deviceType" => {
                if let Some(value) = node.get_string_value()? {
                    self.device_type = Some(value);
                }
            }
            "inGracePeriodUntilDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.in_grace_period_until_date_time = Some(value);
                }
            }
            "lastRefreshedDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.last_refreshed_date_time = Some(value);
                }
            }
            "lastSyncDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.last_sync_date_time = Some(value);
                }
            }
            "managedDeviceId" => {
                if let Some(value) = node.get_string_value()? {
                    self.managed_device_id = Some(value);
                }
            }
            "managedDeviceName" => {
                if let Some(value) = node.get_string_value()? {
                    self.managed_device_name = Some(value);
                }
            }
            "manufacturer" => {
                if let Some(value) = node.get_string_value()? {
                    self.manufacturer = Some(value);
                }
            }
            "model" => {
                if let Some(value) = node.get_string_value()? {
                    self.model = Some(value);
                }
            }
            "osDescription" => {
                if let Some(value) = node.get_string_value()? {
                    self.os_description = Some(value);
                }
            }
            "osVersion" => {
                if let Some(value) = node.get_string_value()? {
                    self.os_version = Some(value);
                }
            }
            "ownerType" => {
                if let Some(value) = node.get_string_value()? {
                    self.owner_type = Some(value);
                }
            }
            "tenantDisplayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.tenant_display_name = Some(value);
                }
            }
            "tenantId" => {
                if let Some(value) = node.get_string_value()? {
                    self.tenant_id = Some(value);
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
        writer.write_string_value("complianceStatus", self.compliance_status.as_deref())?;
        writer.write_string_value("deviceType", self.device_type.as_deref())?;
        writer.write_date_time_value(
            "inGracePeriodUntilDateTime",
            self.in_grace_period_until_date_time,
        )?;
        writer.write_date_time_value("lastRefreshedDateTime", self.last_refreshed_date_time)?;
        writer.write_date_time_value("lastSyncDateTime", self.last_sync_date_time)?;
        writer.write_string_value("managedDeviceId", self.managed_device_id.as_deref())?;
        writer.write_string_value("managedDeviceName", self.managed_device_name.as_deref())?;
        writer.write_string_value("manufacturer", self.manufacturer.as_deref())?;
        writer.write_string_value("model", self.model.as_deref())?;
        writer.write_string_value("osDescription", self.os_description.as_deref())?;
        writer.write_string_value("osVersion", self.os_version.as_deref())?;
        writer.write_string_value("ownerType", self.owner_type.as_deref())?;
        writer.write_string_value("tenantDisplayName", self.tenant_display_name.as_deref())?;
        writer.write_string_value("tenantId", self.tenant_id.as_deref())?;
        Ok(())
    }
}

/// MFA and self-service password reset registration rollup for one tenant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialUserRegistrationsSummary {
    entity: Entity,
    last_refreshed_date_time: Option<OffsetDateTime>,
    mfa_and_sspr_capable_user_count: Option<i32>,
    mfa_conditional_access_policy_state: Option<String>,
    mfa_excluded_user_count: Option<i32>,
    mfa_registered_user_count: Option<i32>,
    security_defaults_enabled: Option<bool>,
    sspr_enabled_user_count: Option<i32>,
    sspr_registered_user_count: Option<i32>,
    tenant_display_name: Option<String>,
    tenant_id: Option<String>,
    total_user_count: Option<i32>,
}

impl CredentialUserRegistrationsSummary {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.managedTenants.credentialUserRegistrationsSummary";

    pub fn new() -> Self {
        let mut summary = Self::default();
        summary
            .entity
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        summary
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

    pub fn last_refreshed_date_time(&self) -> Option<OffsetDateTime> {
        self.last_refreshed_date_time
    }

    pub fn set_last_refreshed_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.last_refreshed_date_time = value;
    }

    pub fn mfa_and_sspr_capable_user_count(&self) -> Option<i32> {
        self.mfa_and_sspr_capable_user_count
    }

    pub fn set_mfa_and_sspr_capable_user_count(&mut self, value: Option<i32>) {
        self.mfa_and_sspr_capable_user_count = value;
    }

    pub fn mfa_conditional_access_policy_state(&self) -> Option<&str> {
        self.mfa_conditional_access_policy_state.as_deref()
    }

    pub fn set_mfa_conditional_access_policy_state(&mut self, value: Option<String>) {
        self.mfa_conditional_access_policy_state = value;
    }

    pub fn mfa_excluded_user_count(&self) -> Option<i32> {
        self.mfa_excluded_user_count
    }

    pub fn set_mfa_excluded_user_count(&mut self, value: Option<i32>) {
        self.mfa_excluded_user_count = value;
    }

    pub fn mfa_registered_user_count(&self) -> Option<i32> {
        self.mfa_registered_user_count
    }

    pub fn set_mfa_registered_user_count(&mut self, value: Option<i32>) {
        self.mfa_registered_user_count = value;
    }

    pub fn security_defaults_enabled(&self) -> Option<bool> {
        self.security_defaults_enabled
    }

    pub fn set_security_defaults_enabled(&mut self, value: Option<bool>) {
        self.security_defaults_enabled = value;
    }

    pub fn sspr_enabled_user_count(&self) -> Option<i32> {
        self.sspr_enabled_user_count
    }

    pub fn set_sspr_enabled_user_count(&mut self, value: Option<i32>) {
        self.sspr_enabled_user_count = value;
    }

    pub fn sspr_registered_user_count(&self) -> Option<i32> {
        self.sspr_registered_user_count
    }

    pub fn set_sspr_registered_user_count(&mut self, value: Option<i32>) {
        self.sspr_registered_user_count = value;
    }

    pub fn tenant_display_name(&self) -> Option<&str> {
        self.tenant_display_name.as_deref()
    }

    pub fn set_tenant_display_name(&mut self, value: Option<String>) {
        self.tenant_display_name = value;
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    pub fn set_tenant_id(&mut self, value: Option<String>) {
        self.tenant_id = value;
    }

    pub fn total_user_count(&self) -> Option<i32> {
        self.total_user_count
    }

    pub fn set_total_user_count(&mut self, value: Option<i32>) {
        self.total_user_count = value;
    }
}

impl Parsable for CredentialUserRegistrationsSummary {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "lastRefreshedDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.last_refreshed_date_time = Some(value);
                }
            }
            "mfaAndSsprCapableUserCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.mfa_and_sspr_capable_user_count = Some(value);
                }
            }
            "mfaConditionalAccessPolicyState" => {
                if let Some(value) = node.get_string_value()? {
                    self.mfa_conditional_access_policy_state = Some(value);
                }
            }
            "mfaExcludedUserCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.mfa_excluded_user_count = Some(value);
                }
            }
            "mfaRegisteredUserCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.mfa_registered_user_count = Some(value);
                }
            }
            "securityDefaultsEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.security_defaults_enabled = Some(value);
                }
            }
            "ssprEnabledUserCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.sspr_enabled_user_count = Some(value);
                }
            }
            "ssprRegisteredUserCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.sspr_registered_user_count = Some(value);
                }
            }
            "tenantDisplayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.tenant_display_name = Some(value);
                }
            }
            "tenantId" => {
                if let Some(value) = node.get_string_value()? {
                    self.tenant_id = Some(value);
                }
            }
            "totalUserCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.total_user_count = Some(value);
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
        writer.write_date_time_value("lastRefreshedDateTime", self.last_refreshed_date_time)?;
        writer.write_i32_value(
            "mfaAndSsprCapableUserCount",
            self.mfa_and_sspr_capable_user_count,
        )?;
        writer.write_string_value(
            "mfaConditionalAccessPolicyState",
            self.mfa_conditional_access_policy_state.as_deref(),
        )?;
        writer.write_i32_value("mfaExcludedUserCount", self.mfa_excluded_user_count)?;
        writer.write_i32_value("mfaRegisteredUserCount", self.mfa_registered_user_count)?;
        writer.write_bool_value("securityDefaultsEnabled", self.security_defaults_enabled)?;
        writer.write_i32_value("ssprEnabledUserCount", self.sspr_enabled_user_count)?;
        writer.write_i32_value("ssprRegisteredUserCount", self.sspr_registered_user_count)?;
        writer.write_string_value("tenantDisplayName", self.tenant_display_name.as_deref())?;
        writer.write_string_value("tenantId", self.tenant_id.as_deref())?;
        writer.write_i32_value("totalUserCount", self.total_user_count)?;
        Ok(())
    }
}
