//! `microsoft.graph.ediscovery.dataSource` family and container records.

use graphbeta_serialization::{
    Parsable, ParseNode, SerializationError, SerializationWriter,
};
use time::OffsetDateTime;

use crate::ediscovery::enums::{
    DataSourceContainerStatus, DataSourceHoldStatus, SourceType,
};
use crate::entity::Entity;
use crate::group::Group;
use crate::identity::IdentitySet;
use crate::site::Site;

/// Base record of the data source family.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSource {
    entity: Entity,
    created_by: Option<IdentitySet>,
    created_date_time: Option<OffsetDateTime>,
    display_name: Option<String>,
    hold_status: Option<DataSourceHoldStatus>,
}

impl DataSource {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.ediscovery.dataSource";

    pub fn new() -> Self {
        let mut source = Self::default();
        source
            .entity
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        source
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

    pub fn created_by(&self) -> Option<&IdentitySet> {
        self.created_by.as_ref()
    }

    pub fn set_created_by(&mut self, value: Option<IdentitySet>) {
        self.created_by = value;
    }

    pub fn created_date_time(&self) -> Option<OffsetDateTime> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.created_date_time = value;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn hold_status(&self) -> Option<DataSourceHoldStatus> {
        self.hold_status
    }

    pub fn set_hold_status(&mut self, value: Option<DataSourceHoldStatus>) {
        self.hold_status = value;
    }
}

impl Parsable for DataSource {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "createdBy" => {
                if let Some(value) = node.get_object_value(IdentitySet::from_discriminator)? {
                    self.created_by = Some(value);
                }
            }
            "createdDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.created_date_time = Some(value);
                }
            }
            "displayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.display_name = Some(value);
                }
            }
            "holdStatus" => {
                if let Some(value) = node.get_enum_value()? {
                    self.hold_status = Some(value);
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
        writer.write_object_value("createdBy", self.created_by.as_ref())?;
        writer.write_date_time_value("createdDateTime", self.created_date_time)?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_enum_value("holdStatus", self.hold_status)?;
        Ok(())
    }
}

/// A custodian mailbox (and optionally OneDrive) source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSource {
    data_source: DataSource,
    email: Option<String>,
    included_sources: Option<SourceType>,
    site_web_url: Option<String>,
}

impl UserSource {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.ediscovery.userSource";

    pub fn new() -> Self {
        let mut source = Self::default();
        source
            .data_source
            .entity_mut()
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        source
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn data_source(&self) -> &DataSource {
        &self.data_source
    }

    pub fn data_source_mut(&mut self) -> &mut DataSource {
        &mut self.data_source
    }

    pub fn id(&self) -> Option<&str> {
        self.data_source.id()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.data_source.set_id(value);
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, value: Option<String>) {
        self.email = value;
    }

    pub fn included_sources(&self) -> Option<SourceType> {
        self.included_sources
    }

    pub fn set_included_sources(&mut self, value: Option<SourceType>) {
        self.included_sources = value;
    }

    pub fn site_web_url(&self) -> Option<&str> {
        self.site_web_url.as_deref()
    }

    pub fn set_site_web_url(&mut self, value: Option<String>) {
        self.site_web_url = value;
    }
}

impl Parsable for UserSource {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "email" => {
                if let Some(value) = node.get_string_value()? {
                    self.email = Some(value);
                }
            }
            "includedSources" => {
                if let Some(value) = node.get_enum_value()? {
                    self.included_sources = Some(value);
                }
            }
            "siteWebUrl" => {
                if let Some(value) = node.get_string_value()? {
                    self.site_web_url = Some(value);
                }
            }
            _ => return self.data_source.deserialize_field(field, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.data_source.serialize(writer)?;
        writer.write_string_value("email", self.email.as_deref())?;
        writer.write_enum_value("includedSources", self.included_sources)?;
        writer.write_string_value("siteWebUrl", self.site_web_url.as_deref())?;
        Ok(())
    }
}

/// A SharePoint site source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteSource {
    data_source: DataSource,
    site: Option<Site>,
}

impl SiteSource {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.ediscovery.siteSource";

    pub fn new() -> Self {
        let mut source = Self::default();
        source
            .data_source
            .entity_mut()
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        source
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn data_source(&self) -> &DataSource {
        &self.data_source
    }

    pub fn data_source_mut(&mut self) -> &mut DataSource {
        &mut self.data_source
    }

    pub fn id(&self) -> Option<&str> {
        self.data_source.id()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.data_source.set_id(value);
    }

    pub fn site(&self) -> Option<&Site> {
        self.site.as_ref()
    }

    pub fn set_site(&mut self, value: Option<Site>) {
        self.site = value;
    }
}

impl Parsable for SiteSource {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "site" => {
                if let Some(value) = node.get_object_value(Site::from_discriminator)? {
                    self.site = Some(value);
                }
            }
            _ => return self.data_source.deserialize_field(field, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.data_source.serialize(writer)?;
        writer.write_object_value("site", self.site.as_ref())?;
        Ok(())
    }
}

/// A Microsoft 365 group source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnifiedGroupSource {
    data_source: DataSource,
    group: Option<Group>,
    included_sources: Option<SourceType>,
}

impl UnifiedGroupSource {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.ediscovery.unifiedGroupSource";

    pub fn new() -> Self {
        let mut source = Self::default();
        source
            .data_source
            .entity_mut()
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        source
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn data_source(&self) -> &DataSource {
        &self.data_source
    }

    pub fn data_source_mut(&mut self) -> &mut DataSource {
        &mut self.data_source
    }

    pub fn id(&self) -> Option<&str> {
        self.data_source.id()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.data_source.set_id(value);
    }

    pub fn group(&self) -> Option<&Group> {
        self.group.as_ref()
    }

    pub fn set_group(&mut self, value: Option<Group>) {
        self.group = value;
    }

    pub fn included_sources(&self) -> Option<SourceType> {
        self.included_sources
    }

    pub fn set_included_sources(&mut self, value: Option<SourceType>) {
        self.included_sources = value;
    }
}

impl Parsable for UnifiedGroupSource {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "group" => {
                if let Some(value) = node.get_object_value(Group::from_discriminator)? {
                    self.group = Some(value);
                }
            }
            "includedSources" => {
                if let Some(value) = node.get_enum_value()? {
                    self.included_sources = Some(value);
                }
            }
            _ => return self.data_source.deserialize_field(field, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.data_source.serialize(writer)?;
        writer.write_object_value("group", self.group.as_ref())?;
        writer.write_enum_value("includedSources", self.included_sources)?;
        Ok(())
    }
}

/// Concrete variants of the data source family.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyDataSource {
    DataSource(DataSource),
    UserSource(UserSource),
    SiteSource(Box<SiteSource>),
    UnifiedGroupSource(Box<UnifiedGroupSource>),
}

impl Default for AnyDataSource {
    fn default() -> Self {
        Self::DataSource(DataSource::new())
    }
}

impl AnyDataSource {
    pub fn from_discriminator(tag: Option<&str>) -> Self {
        match tag {
            Some("#microsoft.graph.ediscovery.userSource") => {
                Self::UserSource(UserSource::new())
            }
            Some("#microsoft.graph.ediscovery.siteSource") => {
                Self::SiteSource(Box::new(SiteSource::new()))
            }
            Some("#microsoft.graph.ediscovery.unifiedGroupSource") => {
                Self::UnifiedGroupSource(Box::new(UnifiedGroupSource::new()))
            }
            _ => Self::DataSource(DataSource::new()),
        }
    }

    pub fn data_source(&self) -> &DataSource {
        match self {
            Self::DataSource(record) => record,
            Self::UserSource(record) => record.data_source(),
            Self::SiteSource(record) => record.data_source(),
            Self::UnifiedGroupSource(record) => record.data_source(),
        }
    }

    pub fn as_user_source(&self) -> Option<&UserSource> {
        match self {
            Self::UserSource(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_site_source(&self) -> Option<&SiteSource> {
        match self {
            Self::SiteSource(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_unified_group_source(&self) -> Option<&UnifiedGroupSource> {
        match self {
            Self::UnifiedGroupSource(record) => Some(record),
            _ => None,
        }
    }
}

impl Parsable for AnyDataSource {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match self {
            Self::DataSource(record) => record.deserialize_field(field, node),
            Self::UserSource(record) => record.deserialize_field(field, node),
            Self::SiteSource(record) => record.deserialize_field(field, node),
            Self::UnifiedGroupSource(record) => record.deserialize_field(field, node),
        }
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        match self {
            Self::DataSource(record) => record.serialize(writer),
            Self::UserSource(record) => record.serialize(writer),
            Self::SiteSource(record) => record.serialize(writer),
            Self::UnifiedGroupSource(record) => record.serialize(writer),
        }
    }
}

/// Base record tracking the hold lifecycle of a source container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSourceContainer {
    entity: Entity,
    created_date_time: Option<OffsetDateTime>,
    display_name: Option<String>,
    hold_status: Option<DataSourceHoldStatus>,
    last_modified_date_time: Option<OffsetDateTime>,
    released_date_time: Option<OffsetDateTime>,
    status: Option<DataSourceContainerStatus>,
}

impl DataSourceContainer {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.ediscovery.dataSourceContainer";

    pub fn new() -> Self {
        let mut container = Self::default();
        container
            .entity
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        container
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

    pub fn created_date_time(&self) -> Option<OffsetDateTime> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.created_date_time = value;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn hold_status(&self) -> Option<DataSourceHoldStatus> {
        self.hold_status
    }

    pub fn set_hold_status(&mut self, value: Option<DataSourceHoldStatus>) {
        self.hold_status = value;
    }

    pub fn last_modified_date_time(&self) -> Option<OffsetDateTime> {
        self.last_modified_date_time
    }

    pub fn set_last_modified_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.last_modified_date_time = value;
    }

    pub fn released_date_time(&self) -> Option<OffsetDateTime> {
        self.released_date_time
    }

    pub fn set_released_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.released_date_time = value;
    }

    pub fn status(&self) -> Option<DataSourceContainerStatus> {
        self.status
    }

    pub fn set_status(&mut self, value: Option<DataSourceContainerStatus>) {
        self.status = value;
    }
}

impl Parsable for DataSourceContainer {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "createdDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.created_date_time = Some(value);
                }
            }
            "displayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.display_name = Some(value);
                }
            }
            "holdStatus" => {
                if let Some(value) = node.get_enum_value()? {
                    self.hold_status = Some(value);
                }
            }
            "lastModifiedDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.last_modified_date_time = Some(value);
                }
            }
            "releasedDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.released_date_time = Some(value);
                }
            }
            "status" => {
                if let Some(value) = node.get_enum_value()? {
                    self.status = Some(value);
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
        writer.write_date_time_value("createdDateTime", self.created_date_time)?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_enum_value("holdStatus", self.hold_status)?;
        writer.write_date_time_value("lastModifiedDateTime", self.last_modified_date_time)?;
        writer.write_date_time_value("releasedDateTime", self.released_date_time)?;
        writer.write_enum_value("status", self.status)?;
        Ok(())
    }
}

/// A data source in a case that is not attached to a custodian.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoncustodialDataSource {
    container: DataSourceContainer,
    applies_hold_to_source: Option<bool>,
    data_source: Option<Box<AnyDataSource>>,
}

impl NoncustodialDataSource {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.ediscovery.noncustodialDataSource";

    pub fn new() -> Self {
        let mut source = Self::default();
        source
            .container
            .entity_mut()
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        source
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn container(&self) -> &DataSourceContainer {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut DataSourceContainer {
        &mut self.container
    }

    pub fn id(&self) -> Option<&str> {
        self.container.id()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.container.set_id(value);
    }

    pub fn applies_hold_to_source(&self) -> Option<bool> {
        self.applies_hold_to_source
    }

    pub fn set_applies_hold_to_source(&mut self, value: Option<bool>) {
        self.applies_hold_to_source = value;
    }

    pub fn data_source(&self) -> Option<&AnyDataSource> {
        self.data_source.as_deref()
    }

    pub fn set_data_source(&mut self, value: Option<AnyDataSource>) {
        self.data_source = value.map(Box::new);
    }
}

impl Parsable for NoncustodialDataSource {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "appliesHoldToSource" => {
                if let Some(value) = node.get_bool_value()? {
                    self.applies_hold_to_source = Some(value);
                }
            }
            "dataSource" => {
                if let Some(value) = node.get_object_value(AnyDataSource::from_discriminator)? {
                    self.data_source = Some(Box::new(value));
                }
            }
            _ => return self.container.deserialize_field(field, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.container.serialize(writer)?;
        writer.write_bool_value("appliesHoldToSource", self.applies_hold_to_source)?;
        writer.write_object_value("dataSource", self.data_source.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphbeta_serialization::json::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn family_dispatch_matrix() {
        let cases = [
            ("#microsoft.graph.ediscovery.userSource", "user"),
            ("#microsoft.graph.ediscovery.siteSource", "site"),
            ("#microsoft.graph.ediscovery.unifiedGroupSource", "group"),
            ("#microsoft.graph.ediscovery.somethingElse", "base"),
        ];
        for (tag, expected) in cases {
            let source = AnyDataSource::from_discriminator(Some(tag));
            let actual = match source {
                AnyDataSource::UserSource(_) => "user",
                AnyDataSource::SiteSource(_) => "site",
                AnyDataSource::UnifiedGroupSource(_) => "group",
                AnyDataSource::DataSource(_) => "base",
            };
            assert_eq!(actual, expected, "tag {tag}");
        }
        assert!(matches!(
            AnyDataSource::from_discriminator(None),
            AnyDataSource::DataSource(_)
        ));
    }

    #[test]
    fn user_source_roundtrip_through_family() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.ediscovery.userSource",
            "id": "src-1",
            "displayName": "Custodian mailbox",
            "email": "dana@contoso.example",
            "includedSources": "mailbox",
            "holdStatus": "applied",
        });
        let source: AnyDataSource =
            from_json_value(&payload, AnyDataSource::from_discriminator).unwrap();
        let user = source.as_user_source().expect("user source variant");
        assert_eq!(user.email(), Some("dana@contoso.example"));
        assert_eq!(user.included_sources(), Some(SourceType::Mailbox));
        assert_eq!(
            user.data_source().hold_status(),
            Some(DataSourceHoldStatus::Applied)
        );

        let back = to_json_value(&source).unwrap();
        assert_eq!(
            back["@odata.type"],
            json!("#microsoft.graph.ediscovery.userSource")
        );
        assert_eq!(back["email"], json!("dana@contoso.example"));
    }
}
