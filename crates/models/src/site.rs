//! `microsoft.graph.site` resource model and its facet complex types.

use graphbeta_serialization::{
    AdditionalData, Parsable, ParseNode, SerializationError, SerializationWriter,
};

use crate::base_item::{AnyBaseItem, BaseItem};
use crate::site_page::SitePage;

/// Deletion state facet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deleted {
    additional_data: AdditionalData,
    odata_type: Option<String>,
    state: Option<String>,
}

impl Deleted {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deleted";

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

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn set_state(&mut self, value: Option<String>) {
        self.state = value;
    }
}

impl Parsable for Deleted {
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
            "state" => {
                if let Some(value) = node.get_string_value()? {
                    self.state = Some(value);
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
        writer.write_string_value("state", self.state.as_deref())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// Marker facet flagging the root of a hierarchy. Carries no declared
/// fields of its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Root {
    additional_data: AdditionalData,
    odata_type: Option<String>,
}

impl Root {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.root";

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

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
}

impl Parsable for Root {
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
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// SharePoint REST compatibility identifiers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharepointIds {
    additional_data: AdditionalData,
    list_id: Option<String>,
    list_item_id: Option<String>,
    list_item_unique_id: Option<String>,
    odata_type: Option<String>,
    site_id: Option<String>,
    site_url: Option<String>,
    tenant_id: Option<String>,
    web_id: Option<String>,
}

impl SharepointIds {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.sharepointIds";

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

    pub fn list_id(&self) -> Option<&str> {
        self.list_id.as_deref()
    }

    pub fn set_list_id(&mut self, value: Option<String>) {
        self.list_id = value;
    }

    pub fn list_item_id(&self) -> Option<&str> {
        self.list_item_id.as_deref()
    }

    pub fn set_list_item_id(&mut self, value: Option<String>) {
        self.list_item_id = value;
    }

    pub fn list_item_unique_id(&self) -> Option<&str> {
        self.list_item_unique_id.as_deref()
    }

    pub fn set_list_item_unique_id(&mut self, value: Option<String>) {
        self.list_item_unique_id = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn site_id(&self) -> Option<&str> {
        self.site_id.as_deref()
    }

    pub fn set_site_id(&mut self, value: Option<String>) {
        self.site_id = value;
    }

    pub fn site_url(&self) -> Option<&str> {
        self.site_url.as_deref()
    }

    pub fn set_site_url(&mut self, value: Option<String>) {
        self.site_url = value;
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    pub fn set_tenant_id(&mut self, value: Option<String>) {
        self.tenant_id = value;
    }

    pub fn web_id(&self) -> Option<&str> {
        self.web_id.as_deref()
    }

    pub fn set_web_id(&mut self, value: Option<String>) {
        self.web_id = value;
    }
}

impl Parsable for SharepointIds {
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
            "listId" => {
                if let Some(value) = node.get_string_value()? {
                    self.list_id = Some(value);
                }
            }
            "listItemId" => {
                if let Some(value) = node.get_string_value()? {
                    self.list_item_id = Some(value);
                }
            }
            "listItemUniqueId" => {
                if let Some(value) = node.get_string_value()? {
                    self.list_item_unique_id = Some(value);
                }
            }
            "siteId" => {
                if let Some(value) = node.get_string_value()? {
                    self.site_id = Some(value);
                }
            }
            "siteUrl" => {
                if let Some(value) = node.get_string_value()? {
                    self.site_url = Some(value);
                }
            }
            "tenantId" => {
                if let Some(value) = node.get_string_value()? {
                    self.tenant_id = Some(value);
                }
            }
            "webId" => {
                if let Some(value) = node.get_string_value()? {
                    self.web_id = Some(value);
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
        writer.write_string_value("listId", self.list_id.as_deref())?;
        writer.write_string_value("listItemId", self.list_item_id.as_deref())?;
        writer.write_string_value("listItemUniqueId", self.list_item_unique_id.as_deref())?;
        writer.write_string_value("siteId", self.site_id.as_deref())?;
        writer.write_string_value("siteUrl", self.site_url.as_deref())?;
        writer.write_string_value("tenantId", self.tenant_id.as_deref())?;
        writer.write_string_value("webId", self.web_id.as_deref())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// Details about the site collection hosting a site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteCollection {
    additional_data: AdditionalData,
    data_location_code: Option<String>,
    hostname: Option<String>,
    odata_type: Option<String>,
    root: Option<Root>,
}

impl SiteCollection {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.siteCollection";

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

    pub fn data_location_code(&self) -> Option<&str> {
        self.data_location_code.as_deref()
    }

    pub fn set_data_location_code(&mut self, value: Option<String>) {
        self.data_location_code = value;
    }

    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    pub fn set_hostname(&mut self, value: Option<String>) {
        self.hostname = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn root(&self) -> Option<&Root> {
        self.root.as_ref()
    }

    pub fn set_root(&mut self, value: Option<Root>) {
        self.root = value;
    }
}

impl Parsable for SiteCollection {
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
            "dataLocationCode" => {
                if let Some(value) = node.get_string_value()? {
                    self.data_location_code = Some(value);
                }
            }
            "hostname" => {
                if let Some(value) = node.get_string_value()? {
                    self.hostname = Some(value);
                }
            }
            "root" => {
                if let Some(value) = node.get_object_value(Root::from_discriminator)? {
                    self.root = Some(value);
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
        writer.write_string_value("dataLocationCode", self.data_location_code.as_deref())?;
        writer.write_string_value("hostname", self.hostname.as_deref())?;
        writer.write_object_value("root", self.root.as_ref())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// Regional settings of a site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteSettings {
    additional_data: AdditionalData,
    language_tag: Option<String>,
    odata_type: Option<String>,
    time_zone: Option<String>,
}

impl SiteSettings {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.siteSettings";

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

    pub fn language_tag(&self) -> Option<&str> {
        self.language_tag.as_deref()
    }

    pub fn set_language_tag(&mut self, value: Option<String>) {
        self.language_tag = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }

    pub fn set_time_zone(&mut self, value: Option<String>) {
        self.time_zone = value;
    }
}

impl Parsable for SiteSettings {
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
            "languageTag" => {
                if let Some(value) = node.get_string_value()? {
                    self.language_tag = Some(value);
                }
            }
            "timeZone" => {
                if let Some(value) = node.get_string_value()? {
                    self.time_zone = Some(value);
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
        writer.write_string_value("languageTag", self.language_tag.as_deref())?;
        writer.write_string_value("timeZone", self.time_zone.as_deref())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// A SharePoint site: facets, page collections, and sub-sites.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Site {
    base_item: BaseItem,
    deleted: Option<Deleted>,
    display_name: Option<String>,
    items: Option<Vec<AnyBaseItem>>,
    pages: Option<Vec<SitePage>>,
    root: Option<Root>,
    settings: Option<SiteSettings>,
    sharepoint_ids: Option<SharepointIds>,
    site_collection: Option<SiteCollection>,
    sites: Option<Vec<Site>>,
}

impl Site {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.site";

    pub fn new() -> Self {
        let mut site = Self::default();
        site.base_item
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        site
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn base_item(&self) -> &BaseItem {
        &self.base_item
    }

    pub fn base_item_mut(&mut self) -> &mut BaseItem {
        &mut self.base_item
    }

    pub fn id(&self) -> Option<&str> {
        self.base_item.id()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.base_item.set_id(value);
    }

    pub fn deleted(&self) -> Option<&Deleted> {
        self.deleted.as_ref()
    }

    pub fn set_deleted(&mut self, value: Option<Deleted>) {
        self.deleted = value;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn items(&self) -> Option<&[AnyBaseItem]> {
        self.items.as_deref()
    }

    pub fn set_items(&mut self, value: Option<Vec<AnyBaseItem>>) {
        self.items = value;
    }

    pub fn pages(&self) -> Option<&[SitePage]> {
        self.pages.as_deref()
    }

    pub fn set_pages(&mut self, value: Option<Vec<SitePage>>) {
        self.pages = value;
    }

    pub fn root(&self) -> Option<&Root> {
        self.root.as_ref()
    }

    pub fn set_root(&mut self, value: Option<Root>) {
        self.root = value;
    }

    pub fn settings(&self) -> Option<&SiteSettings> {
        self.settings.as_ref()
    }

    pub fn set_settings(&mut self, value: Option<SiteSettings>) {
        self.settings = value;
    }

    pub fn sharepoint_ids(&self) -> Option<&SharepointIds> {
        self.sharepoint_ids.as_ref()
    }

    pub fn set_sharepoint_ids(&mut self, value: Option<SharepointIds>) {
        self.sharepoint_ids = value;
    }

    pub fn site_collection(&self) -> Option<&SiteCollection> {
        self.site_collection.as_ref()
    }

    pub fn set_site_collection(&mut self, value: Option<SiteCollection>) {
        self.site_collection = value;
    }

    pub fn sites(&self) -> Option<&[Site]> {
        self.sites.as_deref()
    }

    pub fn set_sites(&mut self, value: Option<Vec<Site>>) {
        self.sites = value;
    }
}

impl Parsable for Site {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "deleted" => {
                if let Some(value) = node.get_object_value(Deleted::from_discriminator)? {
                    self.deleted = Some(value);
                }
            }
            "displayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.display_name = Some(value);
                }
            }
            "items" => {
                if let Some(value) =
                    node.get_collection_of_object_values(AnyBaseItem::from_discriminator)?
                {
                    self.items = Some(value);
                }
            }
            "pages" => {
                if let Some(value) =
                    node.get_collection_of_object_values(SitePage::from_discriminator)?
                {
                    self.pages = Some(value);
                }
            }
            "root" => {
                if let Some(value) = node.get_object_value(Root::from_discriminator)? {
                    self.root = Some(value);
                }
            }
            "settings" => {
                if let Some(value) = node.get_object_value(SiteSettings::from_discriminator)? {
                    self.settings = Some(value);
                }
            }
            "sharepointIds" => {
                if let Some(value) =
                    node.get_object_value(SharepointIds::from_discriminator)?
                {
                    self.sharepoint_ids = Some(value);
                }
            }
            "siteCollection" => {
                if let Some(value) =
                    node.get_object_value(SiteCollection::from_discriminator)?
                {
                    self.site_collection = Some(value);
                }
            }
            "sites" => {
                if let Some(value) =
                    node.get_collection_of_object_values(Site::from_discriminator)?
                {
                    self.sites = Some(value);
                }
            }
            _ => return self.base_item.deserialize_field(field, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.base_item.serialize(writer)?;
        writer.write_object_value("deleted", self.deleted.as_ref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_collection_of_object_values("items", self.items.as_deref())?;
        writer.write_collection_of_object_values("pages", self.pages.as_deref())?;
        writer.write_object_value("root", self.root.as_ref())?;
        writer.write_object_value("settings", self.settings.as_ref())?;
        writer.write_object_value("sharepointIds", self.sharepoint_ids.as_ref())?;
        writer.write_object_value("siteCollection", self.site_collection.as_ref())?;
        writer.write_collection_of_object_values("sites", self.sites.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphbeta_serialization::json::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn nested_facets_and_subsites_roundtrip() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.site",
            "id": "contoso.sharepoint.com,7a1b",
            "displayName": "Marketing",
            "root": {},
            "siteCollection": {"hostname": "contoso.sharepoint.com"},
            "sites": [
                {"id": "sub-1", "displayName": "Archive"},
            ],
        });
        let site: Site = from_json_value(&payload, Site::from_discriminator).unwrap();
        assert_eq!(site.id(), Some("contoso.sharepoint.com,7a1b"));
        assert_eq!(site.display_name(), Some("Marketing"));
        assert!(site.root().is_some());
        assert_eq!(
            site.site_collection().unwrap().hostname(),
            Some("contoso.sharepoint.com")
        );
        assert_eq!(site.sites().unwrap().len(), 1);
        assert_eq!(site.sites().unwrap()[0].display_name(), Some("Archive"));

        let back = to_json_value(&site).unwrap();
        assert_eq!(back["displayName"], json!("Marketing"));
        assert_eq!(back["sites"][0]["id"], json!("sub-1"));
        assert!(back.get("pages").is_none());
        assert!(back.get("deleted").is_none());
    }

    #[test]
    fn item_collection_dispatches_on_discriminator() {
        let payload = json!({
            "items": [
                {"@odata.type": "#microsoft.graph.sitePage", "title": "Welcome"},
                {"@odata.type": "#microsoft.graph.site", "displayName": "Nested"},
                {"@odata.type": "#microsoft.graph.somethingNewer", "name": "future"},
            ],
        });
        let site: Site = from_json_value(&payload, Site::from_discriminator).unwrap();
        let items = site.items().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_site_page().unwrap().title(), Some("Welcome"));
        assert_eq!(items[1].as_site().unwrap().display_name(), Some("Nested"));
        // unknown tag falls back to the family base
        assert_eq!(items[2].base_item().name(), Some("future"));
        assert!(items[2].as_site().is_none());
    }
}
