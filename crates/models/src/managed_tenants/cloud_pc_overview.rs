//! `microsoft.graph.managedTenants.cloudPcOverview` resource model.

use graphbeta_serialization::{
    Parsable, ParseNode, SerializationError, SerializationWriter,
};
use time::OffsetDateTime;

use crate::entity::Entity;

/// Cloud PC status counters for one managed tenant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CloudPcOverview {
    entity: Entity,
    last_refreshed_date_time: Option<OffsetDateTime>,
    number_of_cloud_pc_connection_status_failed: Option<i32>,
    number_of_cloud_pc_connection_status_passed: Option<i32>,
    number_of_cloud_pc_connection_status_pending: Option<i32>,
    number_of_cloud_pc_connection_status_running: Option<i32>,
    number_of_cloud_pc_connection_status_unknown_future_value: Option<i32>,
    number_of_cloud_pc_status_deprovisioning: Option<i32>,
    number_of_cloud_pc_status_failed: Option<i32>,
    number_of_cloud_pc_status_in_grace_period: Option<i32>,
    number_of_cloud_pc_status_not_provisioned: Option<i32>,
    number_of_cloud_pc_status_provisioned: Option<i32>,
    number_of_cloud_pc_status_provisioning: Option<i32>,
    number_of_cloud_pc_status_unknown: Option<i32>,
    number_of_cloud_pc_status_upgrading: Option<i32>,
    tenant_display_name: Option<String>,
    tenant_id: Option<String>,
    total_business_licenses: Option<i32>,
    total_cloud_pc_connection_status: Option<i32>,
    total_cloud_pc_status: Option<i32>,
    total_enterprise_licenses: Option<i32>,
}

impl CloudPcOverview {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.managedTenants.cloudPcOverview";

    pub fn new() -> Self {
        let mut overview = Self::default();
        overview
            .entity
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        overview
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

    pub fn number_of_cloud_pc_connection_status_failed(&self) -> Option<i32> {
        self.number_of_cloud_pc_connection_status_failed
    }

    pub fn set_number_of_cloud_pc_connection_status_failed(&mut self, value: Option<i32>) {
        self.number_of_cloud_pc_connection_status_failed = value;
    }

    pub fn number_of_cloud_pc_connection_status_passed(&self) -> Option<i32> {
        self.number_of_cloud_pc_connection_status_passed
    }

    pub fn set_number_of_cloud_pc_connection_status_passed(&mut self, value: Option<i32>) {
        self.number_of_cloud_pc_connection_status_passed = value;
    }

    pub fn number_of_cloud_pc_connection_status_pending(&self) -> Option<i32> {
        self.number_of_cloud_pc_connection_status_pending
    }

    pub fn set_number_of_cloud_pc_connection_status_pending(&mut self, value: Option<i32>) {
        self.number_of_cloud_pc_connection_status_pending = value;
    }

    pub fn number_of_cloud_pc_connection_status_running(&self) -> Option<i32> {
        self.number_of_cloud_pc_connection_status_running
    }

    pub fn set_number_of_cloud_pc_connection_status_running(&mut self, value: Option<i32>) {
        self.number_of_cloud_pc_connection_status_running = value;
    }

    pub fn number_of_cloud_pc_connection_status_unknown_future_value(&self) -> Option<i32> {
        self.number_of_cloud_pc_connection_status_unknown_future_value
    }

    pub fn set_number_of_cloud_pc_connection_status_unknown_future_value(
        &mut self,
        value: Option<i32>,
    ) {
        self.number_of_cloud_pc_connection_status_unknown_future_value = value;
    }

    pub fn number_of_cloud_pc_status_deprovisioning(&self) -> Option<i32> {
        self.number_of_cloud_pc_status_deprovisioning
    }

    pub fn set_number_of_cloud_pc_status_deprovisioning(&mut self, value: Option<i32>) {
        self.number_of_cloud_pc_status_deprovisioning = value;
    }

    pub fn number_of_cloud_pc_status_failed(&self) -> Option<i32> {
        self.number_of_cloud_pc_status_failed
    }

    pub fn set_number_of_cloud_pc_status_failed(&mut self, value: Option<i32>) {
        self.number_of_cloud_pc_status_failed = value;
    }

    pub fn number_of_cloud_pc_status_in_grace_period(&self) -> Option<i32> {
        self.number_of_cloud_pc_status_in_grace_period
    }

    pub fn set_number_of_cloud_pc_status_in_grace_period(&mut self, value: Option<i32>) {
        self.number_of_cloud_pc_status_in_grace_period = value;
    }

    pub fn number_of_cloud_pc_status_not_provisioned(&self) -> Option<i32> {
        self.number_of_cloud_pc_status_not_provisioned
    }

    pub fn set_number_of_cloud_pc_status_not_provisioned(&mut self, value: Option<i32>) {
        self.number_of_cloud_pc_status_not_provisioned = value;
    }

    pub fn number_of_cloud_pc_status_provisioned(&self) -> Option<i32> {
        self.number_of_cloud_pc_status_provisioned
    }

    pub fn set_number_of_cloud_pc_status_provisioned(&mut self, value: Option<i32>) {
        self.number_of_cloud_pc_status_provisioned = value;
    }

    pub fn number_of_cloud_pc_status_provisioning(&self) -> Option<i32> {
        self.number_of_cloud_pc_status_provisioning
    }

    pub fn set_number_of_cloud_pc_status_provisioning(&mut self, value: Option<i32>) {
        self.number_of_cloud_pc_status_provisioning = value;
    }

    pub fn number_of_cloud_pc_status_unknown(&self) -> Option<i32> {
        self.number_of_cloud_pc_status_unknown
    }

    pub fn set_number_of_cloud_pc_status_unknown(&mut self, value: Option<i32>) {
        self.number_of_cloud_pc_status_unknown = value;
    }

    pub fn number_of_cloud_pc_status_upgrading(&self) -> Option<i32> {
        self.number_of_cloud_pc_status_upgrading
    }

    pub fn set_number_of_cloud_pc_status_upgrading(&mut self, value: Option<i32>) {
        self.number_of_cloud_pc_status_upgrading = value;
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

    pub fn total_business_licenses(&self) -> Option<i32> {
        self.total_business_licenses
    }

    pub fn set_total_business_licenses(&mut self, value: Option<i32>) {
        self.total_business_licenses = value;
    }

    pub fn total_cloud_pc_connection_status(&self) -> Option<i32> {
        self.total_cloud_pc_connection_status
    }

    pub fn set_total_cloud_pc_connection_status(&mut self, value: Option<i32>) {
        self.total_cloud_pc_connection_status = value;
    }

    pub fn total_cloud_pc_status(&self) -> Option<i32> {
        self.total_cloud_pc_status
    }

    pub fn set_total_cloud_pc_status(&mut self, value: Option<i32>) {
        self.total_cloud_pc_status = value;
    }

    pub fn total_enterprise_licenses(&self) -> Option<i32> {
        self.total_enterprise_licenses
    }

    pub fn set_total_enterprise_licenses(&mut self, value: Option<i32>) {
        self.total_enterprise_licenses = value;
    }
}

impl Parsable for CloudPcOverview {
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
            "numberOfCloudPcConnectionStatusFailed" => {
                if let Some(value) = node.get_i32_value()? {
                    self.number_of_cloud_pc_connection_status_failed = Some(value);
                }
            }
            "numberOfCloudPcConnectionStatusPassed" => {
                if let Some(value) = node.get_i32_value()? {
                    self.number_of_cloud_pc_connection_status_passed = Some(value);
                }
            }
            "numberOfCloudPcConnectionStatusPending" => {
                if let Some(value) = node.get_i32_value()? {
                    self.number_of_cloud_pc_connection_status_pending = Some(value);
                }
            }
            "numberOfCloudPcConnectionStatusRunning" => {
                if let Some(value) = node.get_i32_value()? {
                    self.number_of_cloud_pc_connection_status_running = Some(value);
                }
            }
            "numberOfCloudPcConnectionStatusUnkownFutureValue" => {
                if let Some(value) = node.get_i32_value()? {
                    self.number_of_cloud_pc_connection_status_unknown_future_value =
                        Some(value);
                }
            }
            "numberOfCloudPcStatusDeprovisioning" => {
                if let Some(value) = node.get_i32_value()? {
                    self.number_of_cloud_pc_status_deprovisioning = Some(value);
                }
            }
            "numberOfCloudPcStatusFailed" => {
                if let Some(value) = node.get_i32_value()? {
                    self.number_of_cloud_pc_status_failed = Some(value);
                }
            }
            "numberOfCloudPcStatusInGracePeriod" => {
                if let Some(value) = node.get_i32_value()? {
                    self.number_of_cloud_pc_status_in_grace_period = Some(value);
                }
            }
            "numberOfCloudPcStatusNotProvisioned" => {
                if let Some(value) = node.get_i32_value()? {
                    self.number_of_cloud_pc_status_not_provisioned = Some(value);
                }
            }
            "numberOfCloudPcStatusProvisioned" => {
                if let Some(value) = node.get_i32_value()? {
                    self.number_of_cloud_pc_status_provisioned = Some(value);
                }
            }
            "numberOfCloudPcStatusProvisioning" => {
                if let Some(value) = node.get_i32_value()? {
                    self.number_of_cloud_pc_status_provisioning = Some(value);
                }
            }
            "numberOfCloudPcStatusUnknown" => {
                if let Some(value) = node.get_i32_value()? {
                    self.number_of_cloud_pc_status_unknown = Some(value);
                }
            }
            "numberOfCloudPcStatusUpgrading" => {
                if let Some(value) = node.get_i32_value()? {
                    self.number_of_cloud_pc_status_upgrading = Some(value);
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
            "totalBusinessLicenses" => {
                if let Some(value) = node.get_i32_value()? {
                    self.total_business_licenses = Some(value);
                }
            }
            "totalCloudPcConnectionStatus" => {
                if let Some(value) = node.get_i32_value()? {
                    self.total_cloud_pc_connection_status = Some(value);
                }
            }
            "totalCloudPcStatus" => {
                if let Some(value) = node.get_i32_value()? {
                    self.total_cloud_pc_status = Some(value);
                }
            }
            "totalEnterpriseLicenses" => {
                if let Some(value) = node.get_i32_value()? {
                    self.total_enterprise_licenses = Some(value);
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
            "numberOfCloudPcConnectionStatusFailed",
            self.number_of_cloud_pc_connection_status_failed,
        )?;
        writer.write_i32_value(
            "numberOfCloudPcConnectionStatusPassed",
            self.number_of_cloud_pc_connection_status_passed,
        )?;
        writer.write_i32_value(
            "numberOfCloudPcConnectionStatusPending",
            self.number_of_cloud_pc_connection_status_pending,
        )?;
        writer.write_i32_value(
            "numberOfCloudPcConnectionStatusRunning",
            self.number_of_cloud_pc_connection_status_running,
        )?;
        writer.write_i32_value(
            "numberOfCloudPcConnectionStatusUnkownFutureValue",
            self.number_of_cloud_pc_connection_status_unknown_future_value,
        )?;
        writer.write_i32_value(
            "numberOfCloudPcStatusDeprovisioning",
            self.number_of_cloud_pc_status_deprovisioning,
        )?;
        writer.write_i32_value(
            "numberOfCloudPcStatusFailed",
            self.number_of_cloud_pc_status_failed,
        )?;
        writer.write_i32_value(
            "numberOfCloudPcStatusInGracePeriod",
            self.number_of_cloud_pc_status_in_grace_period,
        )?;
        writer.write_i32_value(
            "numberOfCloudPcStatusNotProvisioned",
            self.number_of_cloud_pc_status_not_provisioned,
        )?;
        writer.write_i32_value(
            "numberOfCloudPcStatusProvisioned",
            self.number_of_cloud_pc_status_provisioned,
        )?;
        writer.write_i32_value(
            "numberOfCloudPcStatusProvisioning",
            self.number_of_cloud_pc_status_provisioning,
        )?;
        writer.write_i32_value(
            "numberOfCloudPcStatusUnknown",
            self.number_of_cloud_pc_status_unknown,
        )?;
        writer.write_i32_value(
            "numberOfCloudPcStatusUpgrading",
            self.number_of_cloud_pc_status_upgrading,
        )?;
        writer.write_string_value("tenantDisplayName", self.tenant_display_name.as_deref())?;
        writer.write_string_value("tenantId", self.tenant_id.as_deref())?;
        writer.write_i32_value("totalBusinessLicenses", self.total_business_licenses)?;
        writer.write_i32_value(
            "totalCloudPcConnectionStatus",
            self.total_cloud_pc_connection_status,
        )?;
        writer.write_i32_value("totalCloudPcStatus", self.total_cloud_pc_status)?;
        writer.write_i32_value("totalEnterpriseLicenses", self.total_enterprise_licenses)?;
        Ok(())
    }
}
