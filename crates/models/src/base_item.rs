//! `microsoft.graph.baseItem` base record for site-backed items.

use graphbeta_serialization::{
    Parsable, ParseNode, SerializationError, SerializationWriter,
};
use time::OffsetDateTime;

use crate::entity::Entity;
use crate::identity::IdentitySet;
use crate::site::Site;
use crate::site_page::SitePage;

/// Base record for items stored in a site: audit identities, timestamps,
/// name, and address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseItem {
    entity: Entity,
    created_by: Option<IdentitySet>,
    created_date_time: Option<OffsetDateTime>,
    description: Option<String>,
    etag: Option<String>,
    last_modified_by: Option<IdentitySet>,
    last_modified_date_time: Option<OffsetDateTime>,
    name: Option<String>,
    web_url: Option<String>,
}

impl BaseItem {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.baseItem";

    pub fn new() -> Self {
        let mut item = Self::default();
        item.entity.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        item
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

    pub fn odata_type(&self) -> Option<&str> {
        self.entity.odata_type()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.entity.set_odata_type(value);
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

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    pub fn set_etag(&mut self, value: Option<String>) {
        self.etag = value;
    }

    pub fn last_modified_by(&self) -> Option<&IdentitySet> {
        self.last_modified_by.as_ref()
    }

    pub fn set_last_modified_by(&mut self, value: Option<IdentitySet>) {
        self.last_modified_by = value;
    }

    pub fn last_modified_date_time(&self) -> Option<OffsetDateTime> {
        self.last_modified_date_time
    }

    pub fn set_last_modified_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.last_modified_date_time = value;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn web_url(&self) -> Option<&str> {
        self.web_url.as_deref()
    }

    pub fn set_web_url(&mut self, value: Option<String>) {
        self.web_url = value;
    }
}

impl Parsable for BaseItem {
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
            "description" => {
                if let Some(value) = node.get_string_value()? {
                    self.description = Some(value);
                }
            }
            "eTag" => {
                if let Some(value) = node.get_string_value()? {
                    self.etag = Some(value);
                }
            }
            "lastModifiedBy" => {
                if let Some(value) = node.get_object_value(IdentitySet::from_discriminator)? {
                    self.last_modified_by = Some(value);
                }
            }
            "lastModifiedDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.last_modified_date_time = Some(value);
                }
            }
            "name" => {
                if let Some(value) = node.get_string_value()? {
                    self.name = Some(value);
                }
            }
            "webUrl" => {
                if let Some(value) = node.get_string_value()? {
                    self.web_url = Some(value);
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
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("eTag", self.etag.as_deref())?;
        writer.write_object_value("lastModifiedBy", self.last_modified_by.as_ref())?;
        writer.write_date_time_value("lastModifiedDateTime", self.last_modified_date_time)?;
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_string_value("webUrl", self.web_url.as_deref())?;
        Ok(())
    }
}

/// Concrete variants of the `baseItem` family. Fields typed as a base item
/// collection dispatch here on the wire discriminator.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyBaseItem {
    BaseItem(BaseItem),
    Site(Box<Site>),
    SitePage(Box<SitePage>),
}

impl Default for AnyBaseItem {
    fn default() -> Self {
        Self::BaseItem(BaseItem::new())
    }
}

impl AnyBaseItem {
    pub fn from_discriminator(tag: Option<&str>) -> Self {
        match tag {
            Some("#microsoft.graph.site") => Self::Site(Box::new(Site::new())),
            Some("#microsoft.graph.sitePage") => Self::SitePage(Box::new(SitePage::new())),
            _ => Self::BaseItem(BaseItem::new()),
        }
    }

    pub fn base_item(&self) -> &BaseItem {
        match self {
            Self::BaseItem(record) => record,
            Self::Site(record) => record.base_item(),
            Self::SitePage(record) => record.base_item(),
        }
    }

    pub fn as_site(&self) -> Option<&Site> {
        match self {
            Self::Site(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_site_page(&self) -> Option<&SitePage> {
        match self {
            Self::SitePage(record) => Some(record),
            _ => None,
        }
    }
}

impl Parsable for AnyBaseItem {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match self {
            Self::BaseItem(record) => record.deserialize_field(field, node),
            Self::Site(record) => record.deserialize_field(field, node),
            Self::SitePage(record) => record.deserialize_field(field, node),
        }
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        match self {
            Self::BaseItem(record) => record.serialize(writer),
            Self::Site(record) => record.serialize(writer),
            Self::SitePage(record) => record.serialize(writer),
        }
    }
}
