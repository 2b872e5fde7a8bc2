//! Baseline management template records.

use graphbeta_serialization::{
    Parsable, ParseNode, SerializationError, SerializationWriter,
};
use time::OffsetDateTime;

use crate::common::ActionUrl;
use crate::entity::Entity;
use crate::managed_tenants::enums::ManagementCategory;

/// A baseline configuration template offered to managed tenants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagementTemplate {
    entity: Entity,
    category: Option<ManagementCategory>,
    description: Option<String>,
    display_name: Option<String>,
    information_links: Option<Vec<ActionUrl>>,
    priority: Option<i32>,
    user_impact: Option<String>,
    version: Option<i32>,
}

impl ManagementTemplate {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.managedTenants.managementTemplate";

    pub fn new() -> Self {
        let mut template = Self::default();
        template
            .entity
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        template
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

    pub fn category(&self) -> Option<ManagementCategory> {
        self.category
    }

    pub fn set_category(&mut self, value: Option<ManagementCategory>) {
        self.category = value;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn information_links(&self) -> Option<&[ActionUrl]> {
        self.information_links.as_deref()
    }

    pub fn set_information_links(&mut self, value: Option<Vec<ActionUrl>>) {
        self.information_links = value;
    }

    pub fn priority(&self) -> Option<i32> {
        self.priority
    }

    pub fn set_priority(&mut self, value: Option<i32>) {
        self.priority = value;
    }

    pub fn user_impact(&self) -> Option<&str> {
        self.user_impact.as_deref()
    }

    pub fn set_user_impact(&mut self, value: Option<String>) {
        self.user_impact = value;
    }

    pub fn version(&self) -> Option<i32> {
        self.version
    }

    pub fn set_version(&mut self, value: Option<i32>) {
        self.version = value;
    }
}

impl Parsable for ManagementTemplate {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "category" => {
                if let Some(value) = node.get_enum_value()? {
                    self.category = Some(value);
                }
            }
            "description" => {
                if let Some(value) = node.get_string_value()? {
                    self.description = Some(value);
                }
            }
            "displayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.display_name = Some(value);
                }
            }
            "informationLinks" => {
                if let Some(value) =
                    node.get_collection_of_object_values(ActionUrl::from_discriminator)?
                {
                    self.information_links = Some(value);
                }
            }
            "priority" => {
                if let Some(value) = node.get_i32_value()? {
                    self.priority = Some(value);
                }
            }
            "userImpact" => {
                if let Some(value) = node.get_string_value()? {
                    self.user_impact = Some(value);
                }
            }
            "version" => {
                if let Some(value) = node.get_i32_value()? {
                    self.version = Some(value);
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
        writer.write_enum_value("category", self.category)?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_collection_of_object_values(
            "informationLinks",
            self.information_links.as_deref(),
        )?;
        writer.write_i32_value("priority", self.priority)?;
        writer.write_string_value("userImpact", self.user_impact.as_deref())?;
        writer.write_i32_value("version", self.version)?;
        Ok(())
    }
}

/// One published version of a management template step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagementTemplateStepVersion {
    entity: Entity,
    created_by_user_id: Option<String>,
    created_date_time: Option<OffsetDateTime>,
    last_action_by_user_id: Option<String>,
    last_action_date_time: Option<OffsetDateTime>,
    name: Option<String>,
    version: Option<i32>,
}

impl ManagementTemplateStepVersion {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.managedTenants.managementTemplateStepVersion";

    pub fn new() -> Self {
        let mut step_version = Self::default();
        step_version
            .entity
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        step_version
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

    pub fn created_by_user_id(&self) -> Option<&str> {
        self.created_by_user_id.as_deref()
    }

    pub fn set_created_by_user_id(&mut self, value: Option<String>) {
        self.created_by_user_id = value;
    }

    pub fn created_date_time(&self) -> Option<OffsetDateTime> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.created_date_time = value;
    }

    pub fn last_action_by_user_id(&self) -> Option<&str> {
        self.last_action_by_user_id.as_deref()
    }

    pub fn set_last_action_by_user_id(&mut self, value: Option<String>) {
        self.last_action_by_user_id = value;
    }

    pub fn last_action_date_time(&self) -> Option<OffsetDateTime> {
        self.last_action_date_time
    }

    pub fn set_last_action_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.last_action_date_time = value;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn version(&self) -> Option<i32> {
        self.version
    }

    pub fn set_version(&mut self, value: Option<i32>) {
        self.version = value;
    }
}

impl Parsable for ManagementTemplateStepVersion {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "createdByUserId" => {
                if let Some(value) = node.get_string_value()? {
                    self.created_by_user_id = Some(value);
                }
            }
            "createdDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.created_date_time = Some(value);
                }
            }
            "lastActionByUserId" => {
                if let Some(value) = node.get_string_value()? {
                    self.last_action_by_user_id = Some(value);
                }
            }
            "lastActionDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.last_action_date_time = Some(value);
                }
            }
            "name" => {
                if let Some(value) = node.get_string_value()? {
                    self.name = Some(value);
                }
            }
            "version" => {
                if let Some(value) = node.get_i32_value()? {
                    self.version = Some(value);
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
        writer.write_string_value("createdByUserId", self.created_by_user_id.as_deref())?;
        writer.write_date_time_value("createdDateTime", self.created_date_time)?;
        writer.write_string_value(
            "lastActionByUserId",
            self.last_action_by_user_id.as_deref(),
        )?;
        writer.write_date_time_value("lastActionDateTime", self.last_action_date_time)?;
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_i32_value("version", self.version)?;
        Ok(())
    }
}

/// One step of a management template rollout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagementTemplateStep {
    entity: Entity,
    accepted_version: Option<ManagementTemplateStepVersion>,
    category: Option<ManagementCategory>,
    created_by_user_id: Option<String>,
    created_date_time: Option<OffsetDateTime>,
    description: Option<String>,
    display_name: Option<String>,
    last_action_by_user_id: Option<String>,
    last_action_date_time: Option<OffsetDateTime>,
    management_template: Option<ManagementTemplate>,
    portal_link: Option<ActionUrl>,
    priority: Option<i32>,
    versions: Option<Vec<ManagementTemplateStepVersion>>,
}

impl ManagementTemplateStep {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.managedTenants.managementTemplateStep";

    pub fn new() -> Self {
        let mut step = Self::default();
        step.entity.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        step
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

    pub fn accepted_version(&self) -> Option<&ManagementTemplateStepVersion> {
        self.accepted_version.as_ref()
    }

    pub fn set_accepted_version(&mut self, value: Option<ManagementTemplateStepVersion>) {
        self.accepted_version = value;
    }

    pub fn category(&self) -> Option<ManagementCategory> {
        self.category
    }

    pub fn set_category(&mut self, value: Option<ManagementCategory>) {
        self.category = value;
    }

    pub fn created_by_user_id(&self) -> Option<&str> {
        self.created_by_user_id.as_deref()
    }

    pub fn set_created_by_user_id(&mut self, value: Option<String>) {
        self.created_by_user_id = value;
    }

    pub fn created_date_time(&self) -> Option<OffsetDateTime> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.created_date_time = value;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn last_action_by_user_id(&self) -> Option<&str> {
        self.last_action_by_user_id.as_deref()
    }

    pub fn set_last_action_by_user_id(&mut self, value: Option<String>) {
        self.last_action_by_user_id = value;
    }

    pub fn last_action_date_time(&self) -> Option<OffsetDateTime> {
        self.last_action_date_time
    }

    pub fn set_last_action_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.last_action_date_time = value;
    }

    pub fn management_template(&self) -> Option<&ManagementTemplate> {
        self.management_template.as_ref()
    }

    pub fn set_management_template(&mut self, value: Option<ManagementTemplate>) {
        self.management_template = value;
    }

    pub fn portal_link(&self) -> Option<&ActionUrl> {
        self.portal_link.as_ref()
    }

    pub fn set_portal_link(&mut self, value: Option<ActionUrl>) {
        self.portal_link = value;
    }

    pub fn priority(&self) -> Option<i32> {
        self.priority
    }

    pub fn set_priority(&mut self, value: Option<i32>) {
        self.priority = value;
    }

    pub fn versions(&self) -> Option<&[ManagementTemplateStepVersion]> {
        self.versions.as_deref()
    }

    pub fn set_versions(&mut self, value: Option<Vec<ManagementTemplateStepVersion>>) {
        self.versions = value;
    }
}

impl Parsable for ManagementTemplateStep {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "acceptedVersion" => {
                if let Some(value) =
                    node.get_object_value(ManagementTemplateStepVersion::from_discriminator)?
                {
                    self.accepted_version = Some(value);
                }
            }
            "category" => {
                if let Some(value) = node.get_enum_value()? {
                    self.category = Some(value);
                }
            }
            "createdByUserId" => {
                if let Some(value) = node.get_string_value()? {
                    self.created_by_user_id = Some(value);
                }
            }
            "createdDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.created_date_time = Some(value);
                }
            }
            "description" => {
                if let Some(value) = node.get_string_value()? {
                    self.description = Some(value);
                }
            }
            "displayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.display_name = Some(value);
                }
            }
            "lastActionByUserId" => {
                if let Some(value) = node.get_string_value()? {
                    self.last_action_by_user_id = Some(value);
                }
            }
            "lastActionDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.last_action_date_time = Some(value);
                }
            }
            "managementTemplate" => {
                if let Some(value) =
                    node.get_object_value(ManagementTemplate::from_discriminator)?
                {
                    self.management_template = Some(value);
                }
            }
            "portalLink" => {
                if let Some(value) = node.get_object_value(ActionUrl::from_discriminator)? {
                    self.portal_link = Some(value);
                }
            }
            "priority" => {
                if let Some(value) = node.get_i32_value()? {
                    self.priority = Some(value);
                }
            }
            "versions" => {
                if let Some(value) = node.get_collection_of_object_values(
                    ManagementTemplateStepVersion::from_discriminator,
                )? {
                    self.versions = Some(value);
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
        writer.write_object_value("acceptedVersion", self.accepted_version.as_ref())?;
        writer.write_enum_value("category", self.category)?;
        writer.write_string_value("createdByUserId", self.created_by_user_id.as_deref())?;
        writer.write_date_time_value("createdDateTime", self.created_date_time)?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_string_value(
            "lastActionByUserId",
            self.last_action_by_user_id.as_deref(),
        )?;
        writer.write_date_time_value("lastActionDateTime", self.last_action_date_time)?;
        writer.write_object_value("managementTemplate", self.management_template.as_ref())?;
        writer.write_object_value("portalLink", self.portal_link.as_ref())?;
        writer.write_i32_value("priority", self.priority)?;
        writer.write_collection_of_object_values("versions", self.versions.as_deref())?;
        Ok(())
    }
}

/// Per-tenant adoption counters for one management template step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagementTemplateStepTenantSummary {
    entity: Entity,
    assigned_tenants_count: Option<i32>,
    compliant_tenants_count: Option<i32>,
    created_by_user_id: Option<String>,
    created_date_time: Option<OffsetDateTime>,
    dismissed_tenants_count: Option<i32>,
    ineligible_tenants_count: Option<i32>,
    last_action_by_user_id: Option<String>,
    last_action_date_time: Option<OffsetDateTime>,
    management_template_collection_display_name: Option<String>,
    management_template_collection_id: Option<String>,
    management_template_display_name: Option<String>,
    management_template_id: Option<String>,
    management_template_step_display_name: Option<String>,
    management_template_step_id: Option<String>,
    not_compliant_tenants_count: Option<i32>,
}

impl ManagementTemplateStepTenantSummary {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.managedTenants.managementTemplateStepTenantSummary";

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

    pub fn assigned_tenants_count(&self) -> Option<i32> {
        self.assigned_tenants_count
    }

    pub fn set_assigned_tenants_count(&mut self, value: Option<i32>) {
        self.assigned_tenants_count = value;
    }

    pub fn compliant_tenants_count(&self) -> Option<i32> {
        self.compliant_tenants_count
    }

    pub fn set_compliant_tenants_count(&mut self, value: Option<i32>) {
        self.compliant_tenants_count = value;
    }

    pub fn created_by_user_id(&self) -> Option<&str> {
        self.created_by_user_id.as_deref()
    }

    pub fn set_created_by_user_id(&mut self, value: Option<String>) {
        self.created_by_user_id = value;
    }

    pub fn created_date_time(&self) -> Option<OffsetDateTime> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.created_date_time = value;
    }

    pub fn dismissed_tenants_count(&self) -> Option<i32> {
        self.dismissed_tenants_count
    }

    pub fn set_dismissed_tenants_count(&mut self, value: Option<i32>) {
        self.dismissed_tenants_count = value;
    }

    pub fn ineligible_tenants_count(&self) -> Option<i32> {
        self.ineligible_tenants_count
    }

    pub fn set_ineligible_tenants_count(&mut self, value: Option<i32>) {
        self.ineligible_tenants_count = value;
    }

    pub fn last_action_by_user_id(&self) -> Option<&str> {
        self.last_action_by_user_id.as_deref()
    }

    pub fn set_last_action_by_user_id(&mut self, value: Option<String>) {
        self.last_action_by_user_id = value;
    }

    pub fn last_action_date_time(&self) -> Option<OffsetDateTime> {
        self.last_action_date_time
    }

    pub fn set_last_action_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.last_action_date_time = value;
    }

    pub fn management_template_collection_display_name(&self) -> Option<&str> {
        self.management_template_collection_display_name.as_deref()
    }

    pub fn set_management_template_collection_display_name(&mut self, value: Option<String>) {
        self.management_template_collection_display_name = value;
    }

    pub fn management_template_collection_id(&self) -> Option<&str> {
        self.management_template_collection_id.as_deref()
    }

    pub fn set_management_template_collection_id(&mut self, value: Option<String>) {
        self.management_template_collection_id = value;
    }

    pub fn management_template_display_name(&self) -> Option<&str> {
        self.management_template_display_name.as_deref()
    }

    pub fn set_management_template_display_name(&mut self, value: Option<String>) {
        self.management_template_display_name = value;
    }

    pub fn management_template_id(&self) -> Option<&str> {
        self.management_template_id.as_deref()
    }

    pub fn set_management_template_id(&mut self, value: Option<String>) {
        self.management_template_id = value;
    }

    pub fn management_template_step_display_name(&self) -> Option<&str> {
        self.management_template_step_display_name.as_deref()
    }

    pub fn set_management_template_step_display_name(&mut self, value: Option<String>) {
        self.management_template_step_display_name = value;
    }

    pub fn management_template_step_id(&self) -> Option<&str> {
        self.management_template_step_id.as_deref()
    }

    pub fn set_management_template_step_id(&mut self, value: Option<String>) {
        self.management_template_step_id = value;
    }

    pub fn not_compliant_tenants_count(&self) -> Option<i32> {
        self.not_compliant_tenants_count
    }

    pub fn set_not_compliant_tenants_count(&mut self, value: Option<i32>) {
        self.not_compliant_tenants_count = value;
    }
}

impl Parsable for ManagementTemplateStepTenantSummary {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "assignedTenantsCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.assigned_tenants_count = Some(value);
                }
            }
            "compliantTenantsCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.compliant_tenants_count = Some(value);
                }
            }
            "createdByUserId" => {
                if let Some(value) = node.get_string_value()? {
                    self.created_by_user_id = Some(value);
                }
            }
            "createdDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.created_date_time = Some(value);
                }
            }
            "dismissedTenantsCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.dismissed_tenants_count = Some(value);
                }
            }
            "ineligibleTenantsCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.ineligible_tenants_count = Some(value);
                }
            }
            "lastActionByUserId" => {
                if let Some(value) = node.get_string_value()? {
                    self.last_action_by_user_id = Some(value);
                }
            }
            "lastActionDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.last_action_date_time = Some(value);
                }
            }
            "managementTemplateCollectionDisplayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.management_template_collection_display_name = Some(value);
                }
            }
            "managementTemplateCollectionId" => {
                if let Some(value) = node.get_string_value()? {
                    self.management_template_collection_id = Some(value);
                }
            }
            "managementTemplateDisplayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.management_template_display_name = Some(value);
                }
            }
            "managementTemplateId" => {
                if let Some(value) = node.get_string_value()? {
                    self.management_template_id = Some(value);
                }
            }
            "managementTemplateStepDisplayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.management_template_step_display_name = Some(value);
                }
            }
            "managementTemplateStepId" => {
                if let Some(value) = node.get_string_value()? {
                    self.management_template_step_id = Some(value);
                }
            }
            "notCompliantTenantsCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.not_compliant_tenants_count = Some(value);
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
        writer.write_i32_value("assignedTenantsCount", self.assigned_tenants_count)?;
        writer.write_i32_value("compliantTenantsCount", self.compliant_tenants_count)?;
        writer.write_string_value("createdByUserId", self.created_by_user_id.as_deref())?;
        writer.write_date_time_value("createdDateTime", self.created_date_time)?;
        writer.write_i32_value("dismissedTenantsCount", self.dismissed_tenants_count)?;
        writer.write_i32_value("ineligibleTenantsCount", self.ineligible_tenants_count)?;
        writer.write_string_value(
            "lastActionByUserId",
            self.last_action_by_user_id.as_deref(),
        )?;
        writer.write_date_time_value("lastActionDateTime", self.last_action_date_time)?;
        writer.write_string_value(
            "managementTemplateCollectionDisplayName",
            self.management_template_collection_display_name.as_deref(),
        )?;
        writer.write_string_value(
            "managementTemplateCollectionId",
            self.management_template_collection_id.as_deref(),
        )?;
        writer.write_string_value(
            "managementTemplateDisplayName",
            self.management_template_display_name.as_deref(),
        )?;
        writer.write_string_value(
            "managementTemplateId",
            self.management_template_id.as_deref(),
        )?;
        writer.write_string_value(
            "managementTemplateStepDisplayName",
            self.management_template_step_display_name.as_deref(),
        )?;
        writer.write_string_value(
            "managementTemplateStepId",
            self.management_template_step_id.as_deref(),
        )?;
        writer.write_i32_value("notCompliantTenantsCount", self.not_compliant_tenants_count)?;
        Ok(())
    }
}
