//! `microsoft.graph.tenantAdmin.settings` resource model.

use graphbeta_serialization::{
    AdditionalData, Parsable, ParseNode, SerializationError, SerializationWriter,
};
use uuid::Uuid;

use crate::entity::Entity;
use crate::tenant_admin::enums::{
    ImageTaggingChoice, SharingCapabilities, SharingDomainRestrictionMode,
};

/// Idle session sign-out policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdleSessionSignOut {
    additional_data: AdditionalData,
    is_enabled: Option<bool>,
    odata_type: Option<String>,
    sign_out_after_in_seconds: Option<i64>,
    warn_after_in_seconds: Option<i64>,
}

impl IdleSessionSignOut {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.tenantAdmin.idleSessionSignOut";

    pub fn new() -> Self {
        Self {
            odata_type: Some(Self::ODATA_TYPE.to_owned()),
            ..Self::default()
        }
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    pub fn is_enabled(&self) -> Option<bool> {
        self.is_enabled
    }

    pub fn set_is_enabled(&mut self, value: Option<bool>) {
        self.is_enabled = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn sign_out_after_in_seconds(&self) -> Option<i64> {
        self.sign_out_after_in_seconds
    }

    pub fn set_sign_out_after_in_seconds(&mut self, value: Option<i64>) {
        self.sign_out_after_in_seconds = value;
    }

    pub fn warn_after_in_seconds(&self) -> Option<i64> {
        self.warn_after_in_seconds
    }

    pub fn set_warn_after_in_seconds(&mut self, value: Option<i64>) {
        self.warn_after_in_seconds = value;
    }
}

impl Parsable for IdleSessionSignOut {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "@odata.type" => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "isEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_enabled = Some(value);
                }
            }
            "signOutAfterInSeconds" => {
                if let Some(value) = node.get_i64_value()? {
                    self.sign_out_after_in_seconds = Some(value);
                }
            }
            "warnAfterInSeconds" => {
                if let Some(value) = node.get_i64_value()? {
                    self.warn_after_in_seconds = Some(value);
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_bool_value("isEnabled", self.is_enabled)?;
        writer.write_i64_value("signOutAfterInSeconds", self.sign_out_after_in_seconds)?;
        writer.write_i64_value("warnAfterInSeconds", self.warn_after_in_seconds)?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// SharePoint and OneDrive settings for the tenant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    entity: Entity,
    allowed_domain_guids_for_sync_app: Option<Vec<Uuid>>,
    available_managed_paths_for_site_creation: Option<Vec<String>>,
    deleted_user_personal_site_retention_period_in_days: Option<i32>,
    excluded_file_extensions_for_sync_app: Option<Vec<String>>,
    idle_session_sign_out: Option<IdleSessionSignOut>,
    image_tagging_option: Option<ImageTaggingChoice>,
    is_commenting_on_site_pages_enabled: Option<bool>,
    is_file_activity_notification_enabled: Option<bool>,
    is_legacy_auth_protocols_enabled: Option<bool>,
    is_loop_enabled: Option<bool>,
    is_mac_sync_app_enabled: Option<bool>,
    is_require_accepting_user_to_match_invited_user_enabled: Option<bool>,
    is_resharing_by_external_users_enabled: Option<bool>,
    is_share_point_mobile_notification_enabled: Option<bool>,
    is_share_point_newsfeed_enabled: Option<bool>,
    is_site_creation_enabled: Option<bool>,
    is_site_creation_ui_enabled: Option<bool>,
    is_site_pages_creation_enabled: Option<bool>,
    is_sites_storage_limit_automatic: Option<bool>,
    is_sync_button_hidden_on_personal_site: Option<bool>,
    is_unmanaged_sync_app_for_tenant_restricted: Option<bool>,
    personal_site_default_storage_limit_in_mb: Option<i64>,
    sharing_allowed_domain_list: Option<Vec<String>>,
    sharing_blocked_domain_list: Option<Vec<String>>,
    sharing_capability: Option<SharingCapabilities>,
    sharing_domain_restriction_mode: Option<SharingDomainRestrictionMode>,
    site_creation_default_managed_path: Option<String>,
    site_creation_default_storage_limit_in_mb: Option<i32>,
    tenant_default_timezone: Option<String>,
}

impl Settings {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.tenantAdmin.settings";

    pub fn new() -> Self {
        let mut settings = Self::default();
        settings
            .entity
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        settings
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

    pub fn allowed_domain_guids_for_sync_app(&self) -> Option<&[Uuid]> {
        self.allowed_domain_guids_for_sync_app.as_deref()
    }

    pub fn set_allowed_domain_guids_for_sync_app(&mut self, value: Option<Vec<Uuid>>) {
        self.allowed_domain_guids_for_sync_app = value;
    }

    pub fn available_managed_paths_for_site_creation(&self) -> Option<&[String]> {
        self.available_managed_paths_for_site_creation.as_deref()
    }

    pub fn set_available_managed_paths_for_site_creation(
        &mut self,
        value: Option<Vec<String>>,
    ) {
        self.available_managed_paths_for_site_creation = value;
    }

    pub fn deleted_user_personal_site_retention_period_in_days(&self) -> Option<i32> {
        self.deleted_user_personal_site_retention_period_in_days
    }

    pub fn set_deleted_user_personal_site_retention_period_in_days(
        &mut self,
        value: Option<i32>,
    ) {
        self.deleted_user_personal_site_retention_period_in_days = value;
    }

    pub fn excluded_file_extensions_for_sync_app(&self) -> Option<&[String]> {
        self.excluded_file_extensions_for_sync_app.as_deref()
    }

    pub fn set_excluded_file_extensions_for_sync_app(&mut self, value: Option<Vec<String>>) {
        self.excluded_file_extensions_for_sync_app = value;
    }

    pub fn idle_session_sign_out(&self) -> Option<&IdleSessionSignOut> {
        self.idle_session_sign_out.as_ref()
    }

    pub fn set_idle_session_sign_out(&mut self, value: Option<IdleSessionSignOut>) {
        self.idle_session_sign_out = value;
    }

    pub fn image_tagging_option(&self) -> Option<ImageTaggingChoice> {
        self.image_tagging_option
    }

    pub fn set_image_tagging_option(&mut self, value: Option<ImageTaggingChoice>) {
        self.image_tagging_option = value;
    }

    pub fn is_commenting_on_site_pages_enabled(&self) -> Option<bool> {
        self.is_commenting_on_site_pages_enabled
    }

    pub fn set_is_commenting_on_site_pages_enabled(&mut self, value: Option<bool>) {
        self.is_commenting_on_site_pages_enabled = value;
    }

    pub fn is_file_activity_notification_enabled(&self) -> Option<bool> {
        self.is_file_activity_notification_enabled
    }

    pub fn set_is_file_activity_notification_enabled(&mut self, value: Option<bool>) {
        self.is_file_activity_notification_enabled = value;
    }

    pub fn is_legacy_auth_protocols_enabled(&self) -> Option<bool> {
        self.is_legacy_auth_protocols_enabled
    }

    pub fn set_is_legacy_auth_protocols_enabled(&mut self, value: Option<bool>) {
        self.is_legacy_auth_protocols_enabled = value;
    }

    pub fn is_loop_enabled(&self) -> Option<bool> {
        self.is_loop_enabled
    }

    pub fn set_is_loop_enabled(&mut self, value: Option<bool>) {
        self.is_loop_enabled = value;
    }

    pub fn is_mac_sync_app_enabled(&self) -> Option<bool> {
        self.is_mac_sync_app_enabled
    }

    pub fn set_is_mac_sync_app_enabled(&mut self, value: Option<bool>) {
        self.is_mac_sync_app_enabled = value;
    }

    pub fn is_require_accepting_user_to_match_invited_user_enabled(&self) -> Option<bool> {
        self.is_require_accepting_user_to_match_invited_user_enabled
    }

    pub fn set_is_require_accepting_user_to_match_invited_user_enabled(
        &mut self,
        value: Option<bool>,
    ) {
        self.is_require_accepting_user_to_match_invited_user_enabled = value;
    }

    pub fn is_resharing_by_external_users_enabled(&self) -> Option<bool> {
        self.is_resharing_by_external_users_enabled
    }

    pub fn set_is_resharing_by_external_users_enabled(&mut self, value: Option<bool>) {
        self.is_resharing_by_external_users_enabled = value;
    }

    pub fn is_share_point_mobile_notification_enabled(&self) -> Option<bool> {
        self.is_share_point_mobile_notification_enabled
    }

    pub fn set_is_share_point_mobile_notification_enabled(&mut self, value: Option<bool>) {
        self.is_share_point_mobile_notification_enabled = value;
    }

    pub fn is_share_point_newsfeed_enabled(&self) -> Option<bool> {
        self.is_share_point_newsfeed_enabled
    }

    pub fn set_is_share_point_newsfeed_enabled(&mut self, value: Option<bool>) {
        self.is_share_point_newsfeed_enabled = value;
    }

    pub fn is_site_creation_enabled(&self) -> Option<bool> {
        self.is_site_creation_enabled
    }

    pub fn set_is_site_creation_enabled(&mut self, value: Option<bool>) {
        self.is_site_creation_enabled = value;
    }

    pub fn is_site_creation_ui_enabled(&self) -> Option<bool> {
        self.is_site_creation_ui_enabled
    }

    pub fn set_is_site_creation_ui_enabled(&mut self, value: Option<bool>) {
        self.is_site_creation_ui_enabled = value;
    }

    pub fn is_site_pages_creation_enabled(&self) -> Option<bool> {
        self.is_site_pages_creation_enabled
    }

    pub fn set_is_site_pages_creation_enabled(&mut self, value: Option<bool>) {
        self.is_site_pages_creation_enabled = value;
    }

    pub fn is_sites_storage_limit_automatic(&self) -> Option<bool> {
        self.is_sites_storage_limit_automatic
    }

    pub fn set_is_sites_storage_limit_automatic(&mut self, value: Option<bool>) {
        self.is_sites_storage_limit_automatic = value;
    }

    pub fn is_sync_button_hidden_on_personal_site(&self) -> Option<bool> {
        self.is_sync_button_hidden_on_personal_site
    }

    pub fn set_is_sync_button_hidden_on_personal_site(&mut self, value: Option<bool>) {
        self.is_sync_button_hidden_on_personal_site = value;
    }

    pub fn is_unmanaged_sync_app_for_tenant_restricted(&self) -> Option<bool> {
        self.is_unmanaged_sync_app_for_tenant_restricted
    }

    pub fn set_is_unmanaged_sync_app_for_tenant_restricted(&mut self, value: Option<bool>) {
        self.is_unmanaged_sync_app_for_tenant_restricted = value;
    }

    pub fn personal_site_default_storage_limit_in_mb(&self) -> Option<i64> {
        self.personal_site_default_storage_limit_in_mb
    }

    pub fn set_personal_site_default_storage_limit_in_mb(&mut self, value: Option<i64>) {
        self.personal_site_default_storage_limit_in_mb = value;
    }

    pub fn sharing_allowed_domain_list(&self) -> Option<&[String]> {
        self.sharing_allowed_domain_list.as_deref()
    }

    pub fn set_sharing_allowed_domain_list(&mut self, value: Option<Vec<String>>) {
        self.sharing_allowed_domain_list = value;
    }

    pub fn sharing_blocked_domain_list(&self) -> Option<&[String]> {
        self.sharing_blocked_domain_list.as_deref()
    }

    pub fn set_sharing_blocked_domain_list(&mut self, value: Option<Vec<String>>) {
        self.sharing_blocked_domain_list = value;
    }

    pub fn sharing_capability(&self) -> Option<SharingCapabilities> {
        self.sharing_capability
    }

    pub fn set_sharing_capability(&mut self, value: Option<SharingCapabilities>) {
        self.sharing_capability = value;
    }

    pub fn sharing_domain_restriction_mode(&self) -> Option<SharingDomainRestrictionMode> {
        self.sharing_domain_restriction_mode
    }

    pub fn set_sharing_domain_restriction_mode(
        &mut self,
        value: Option<SharingDomainRestrictionMode>,
    ) {
        self.sharing_domain_restriction_mode = value;
    }

    pub fn site_creation_default_managed_path(&self) -> Option<&str> {
        self.site_creation_default_managed_path.as_deref()
    }

    pub fn set_site_creation_default_managed_path(&mut self, value: Option<String>) {
        self.site_creation_default_managed_path = value;
    }

    pub fn site_creation_default_storage_limit_in_mb(&self) -> Option<i32> {
        self.site_creation_default_storage_limit_in_mb
    }

    pub fn set_site_creation_default_storage_limit_in_mb(&mut self, value: Option<i32>) {
        self.site_creation_default_storage_limit_in_mb = value;
    }

    pub fn tenant_default_timezone(&self) -> Option<&str> {
        self.tenant_default_timezone.as_deref()
    }

    pub fn set_tenant_default_timezone(&mut self, value: Option<String>) {
        self.tenant_default_timezone = value;
    }
}

impl Parsable for Settings {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "allowedDomainGuidsForSyncApp" => {
                if let Some(value) = node.get_collection_of_uuid_values()? {
                    self.allowed_domain_guids_for_sync_app = Some(value);
                }
            }
            "availableManagedPathsForSiteCreation" => {
                if let Some(value) = node.get_collection_of_string_values()? {
                    self.available_managed_paths_for_site_creation = Some(value);
                }
            }
            "deletedUserPersonalSiteRetentionPeriodInDays" => {
                if let Some(value) = node.get_i32_value()? {
                    self.deleted_user_personal_site_retention_period_in_days = Some(value);
                }
            }
            "excludedFileExtensionsForSyncApp" => {
                if let Some(value) = node.get_collection_of_string_values()? {
                    self.excluded_file_extensions_for_sync_app = Some(value);
                }
            }
            "idleSessionSignOut" => {
                if let Some(value) =
                    node.get_object_value(IdleSessionSignOut::from_discriminator)?
                {
                    self.idle_session_sign_out = Some(value);
                }
            }
            "imageTaggingOption" => {
                if let Some(value) = node.get_enum_value()? {
                    self.image_tagging_option = Some(value);
                }
            }
            "isCommentingOnSitePagesEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_commenting_on_site_pages_enabled = Some(value);
                }
            }
            "isFileActivityNotificationEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_file_activity_notification_enabled = Some(value);
                }
            }
            "isLegacyAuthProtocolsEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_legacy_auth_protocols_enabled = Some(value);
                }
            }
            "isLoopEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_loop_enabled = Some(value);
                }
            }
            "isMacSyncAppEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_mac_sync_app_enabled = Some(value);
                }
            }
            "isRequireAcceptingUserToMatchInvitedUserEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_require_accepting_user_to_match_invited_user_enabled = Some(value);
                }
            }
            "isResharingByExternalUsersEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_resharing_by_external_users_enabled = Some(value);
                }
            }
            "isSharePointMobileNotificationEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_share_point_mobile_notification_enabled = Some(value);
                }
            }
            "isSharePointNewsfeedEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_share_point_newsfeed_enabled = Some(value);
                }
            }
            "isSiteCreationEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_site_creation_enabled = Some(value);
                }
            }
            "isSiteCreationUIEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_site_creation_ui_enabled = Some(value);
                }
            }
            "isSitePagesCreationEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_site_pages_creation_enabled = Some(value);
                }
            }
            "isSitesStorageLimitAutomatic" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_sites_storage_limit_automatic = Some(value);
                }
            }
            "isSyncButtonHiddenOnPersonalSite" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_sync_button_hidden_on_personal_site = Some(value);
                }
            }
            "isUnmanagedSyncAppForTenantRestricted" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_unmanaged_sync_app_for_tenant_restricted = Some(value);
                }
            }
            "personalSiteDefaultStorageLimitInMB" => {
                if let Some(value) = node.get_i64_value()? {
                    self.personal_site_default_storage_limit_in_mb = Some(value);
                }
            }
            "sharingAllowedDomainList" => {
                if let Some(value) = node.get_collection_of_string_values()? {
                    self.sharing_allowed_domain_list = Some(value);
                }
            }
            "sharingBlockedDomainList" => {
                if let Some(value) = node.get_collection_of_string_values()? {
                    self.sharing_blocked_domain_list = Some(value);
                }
            }
            "sharingCapability" => {
                if let Some(value) = node.get_enum_value()? {
                    self.sharing_capability = Some(value);
                }
            }
            "sharingDomainRestrictionMode" => {
                if let Some(value) = node.get_enum_value()? {
                    self.sharing_domain_restriction_mode = Some(value);
                }
            }
            "siteCreationDefaultManagedPath" => {
                if let Some(value) = node.get_string_value()? {
                    self.site_creation_default_managed_path = Some(value);
                }
            }
            "siteCreationDefaultStorageLimitInMB" => {
                if let Some(value) = node.get_i32_value()? {
                    self.site_creation_default_storage_limit_in_mb = Some(value);
                }
            }
            "tenantDefaultTimezone" => {
                if let Some(value) = node.get_string_value()? {
                    self.tenant_default_timezone = Some(value);
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
        writer.write_collection_of_uuid_values(
            "allowedDomainGuidsForSyncApp",
            self.allowed_domain_guids_for_sync_app.as_deref(),
        )?;
        writer.write_collection_of_string_values(
            "availableManagedPathsForSiteCreation",
            self.available_managed_paths_for_site_creation.as_deref(),
        )?;
        writer.write_i32_value(
            "deletedUserPersonalSiteRetentionPeriodInDays",
            self.deleted_user_personal_site_retention_period_in_days,
        )?;
        writer.write_collection_of_string_values(
            "excludedFileExtensionsForSyncApp",
            self.excluded_file_extensions_for_sync_app.as_deref(),
        )?;
        writer.write_object_value("idleSessionSignOut", self.idle_session_sign_out.as_ref())?;
        writer.write_enum_value("imageTaggingOption", self.image_tagging_option)?;
        writer.write_bool_value(
            "isCommentingOnSitePagesEnabled",
            self.is_commenting_on_site_pages_enabled,
        )?;
        writer.write_bool_value(
            "isFileActivityNotificationEnabled",
            self.is_file_activity_notification_enabled,
        )?;
        writer.write_bool_value(
            "isLegacyAuthProtocolsEnabled",
            self.is_legacy_auth_protocols_enabled,
        )?;
        writer.write_bool_value("isLoopEnabled", self.is_loop_enabled)?;
        writer.write_bool_value("isMacSyncAppEnabled", self.is_mac_sync_app_enabled)?;
        writer.write_bool_value(
            "isRequireAcceptingUserToMatchInvitedUserEnabled",
            self.is_require_accepting_user_to_match_invited_user_enabled,
        )?;
        writer.write_bool_value(
            "isResharingByExternalUsersEnabled",
            self.is_resharing_by_external_users_enabled,
        )?;
        writer.write_bool_value(
            "isSharePointMobileNotificationEnabled",
            self.is_share_point_mobile_notification_enabled,
        )?;
        writer.write_bool_value(
            "isSharePointNewsfeedEnabled",
            self.is_share_point_newsfeed_enabled,
        )?;
        writer.write_bool_value("isSiteCreationEnabled", self.is_site_creation_enabled)?;
        writer.write_bool_value("isSiteCreationUIEnabled", self.is_site_creation_ui_enabled)?;
        writer.write_bool_value(
            "isSitePagesCreationEnabled",
            self.is_site_pages_creation_enabled,
        )?;
        writer.write_bool_value(
            "isSitesStorageLimitAutomatic",
            self.is_sites_storage_limit_automatic,
        )?;
        writer.write_bool_value(
            "isSyncButtonHiddenOnPersonalSite",
            self.is_sync_button_hidden_on_personal_site,
        )?;
        writer.write_bool_value(
            "isUnmanagedSyncAppForTenantRestricted",
            self.is_unmanaged_sync_app_for_tenant_restricted,
        )?;
        writer.write_i64_value(
            "personalSiteDefaultStorageLimitInMB",
            self.personal_site_default_storage_limit_in_mb,
        )?;
        writer.write_collection_of_string_values(
            "sharingAllowedDomainList",
            self.sharing_allowed_domain_list.as_deref(),
        )?;
        writer.write_collection_of_string_values(
            "sharingBlockedDomainList",
            self.sharing_blocked_domain_list.as_deref(),
        )?;
        writer.write_enum_value("sharingCapability", self.sharing_capability)?;
        writer.write_enum_value(
            "sharingDomainRestrictionMode",
            self.sharing_domain_restriction_mode,
        )?;
        writer.write_string_value(
            "siteCreationDefaultManagedPath",
            self.site_creation_default_managed_path.as_deref(),
        )?;
        writer.write_i32_value(
            "siteCreationDefaultStorageLimitInMB",
            self.site_creation_default_storage_limit_in_mb,
        )?;
        writer.write_string_value(
            "tenantDefaultTimezone",
            self.tenant_default_timezone.as_deref(),
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
    fn guid_collections_and_policy_enums_roundtrip() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.tenantAdmin.settings",
            "id": "settings",
            "allowedDomainGuidsForSyncApp": ["5d3dc1ec-1398-4e3e-a0f0-1b397d5616b4"],
            "excludedFileExtensionsForSyncApp": [".pst", ".iso"],
            "sharingCapability": "externalUserSharingOnly",
            "sharingDomainRestrictionMode": "allowList",
            "sharingAllowedDomainList": ["fabrikam.example"],
            "imageTaggingOption": "enhanced",
            "idleSessionSignOut": {"isEnabled": true, "signOutAfterInSeconds": 3600},
            "personalSiteDefaultStorageLimitInMB": 1048576,
            "tenantDefaultTimezone": "(UTC-08:00) Pacific Time (US and Canada)",
        });
        let settings: Settings =
            from_json_value(&payload, Settings::from_discriminator).unwrap();
        assert_eq!(
            settings.allowed_domain_guids_for_sync_app().unwrap()[0].to_string(),
            "5d3dc1ec-1398-4e3e-a0f0-1b397d5616b4"
        );
        assert_eq!(
            settings.sharing_capability(),
            Some(SharingCapabilities::ExternalUserSharingOnly)
        );
        assert_eq!(
            settings.sharing_domain_restriction_mode(),
            Some(SharingDomainRestrictionMode::AllowList)
        );
        assert_eq!(
            settings
                .idle_session_sign_out()
                .unwrap()
                .sign_out_after_in_seconds(),
            Some(3600)
        );
        assert_eq!(
            settings.personal_site_default_storage_limit_in_mb(),
            Some(1_048_576)
        );

        let back = to_json_value(&settings).unwrap();
        assert_eq!(
            back["allowedDomainGuidsForSyncApp"],
            json!(["5d3dc1ec-1398-4e3e-a0f0-1b397d5616b4"])
        );
        assert_eq!(back["sharingCapability"], json!("externalUserSharingOnly"));
        assert_eq!(back["idleSessionSignOut"]["isEnabled"], json!(true));
        assert!(back.get("isLoopEnabled").is_none());
    }

    #[test]
    fn unknown_enum_literal_is_rejected() {
        let payload = json!({"sharingCapability": "everyoneEverywhere"});
        let err = from_json_value(&payload, Settings::from_discriminator).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("everyoneEverywhere"));
        assert!(text.contains("sharingCapabilities"));
    }
}
