//! Collection response wrappers: one page of entities plus paging metadata.

use graphbeta_serialization::{
    AdditionalData, Parsable, ParseNode, SerializationError, SerializationWriter,
};

use crate::identity_governance::UserProcessingResult;
use crate::managed_tenants::ManagedDeviceCompliance;
use crate::site::Site;
use crate::site_page::SitePage;

/// Paging metadata shared by every collection response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseCollectionPaginationCountResponse {
    additional_data: AdditionalData,
    odata_count: Option<i64>,
    odata_next_link: Option<String>,
}

impl BaseCollectionPaginationCountResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    pub fn odata_count(&self) -> Option<i64> {
        self.odata_count
    }

    pub fn set_odata_count(&mut self, value: Option<i64>) {
        self.odata_count = value;
    }

    pub fn odata_next_link(&self) -> Option<&str> {
        self.odata_next_link.as_deref()
    }

    pub fn set_odata_next_link(&mut self, value: Option<String>) {
        self.odata_next_link = value;
    }
}

impl Parsable for BaseCollectionPaginationCountResponse {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "@odata.count" => {
                if let Some(value) = node.get_i64_value()? {
                    self.odata_count = Some(value);
                }
            }
            "@odata.nextLink" => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_next_link = Some(value);
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
        writer.write_i64_value("@odata.count", self.odata_count)?;
        writer.write_string_value("@odata.nextLink", self.odata_next_link.as_deref())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// One page of [`Site`] records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteCollectionResponse {
    base: BaseCollectionPaginationCountResponse,
    value: Option<Vec<Site>>,
}

impl SiteCollectionResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn base(&self) -> &BaseCollectionPaginationCountResponse {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseCollectionPaginationCountResponse {
        &mut self.base
    }

    pub fn value(&self) -> Option<&[Site]> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<Vec<Site>>) {
        self.value = value;
    }
}

impl Parsable for SiteCollectionResponse {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "value" => {
                if let Some(value) =
                    node.get_collection_of_object_values(Site::from_discriminator)?
                {
                    self.value = Some(value);
                }
                Ok(true)
            }
            _ => self.base.deserialize_field(field, node),
        }
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_collection_of_object_values("value", self.value.as_deref())?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.base.additional_data_mut()
    }
}

/// One page of [`SitePage`] records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitePageCollectionResponse {
    base: BaseCollectionPaginationCountResponse,
    value: Option<Vec<SitePage>>,
}

impl SitePageCollectionResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn base(&self) -> &BaseCollectionPaginationCountResponse {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseCollectionPaginationCountResponse {
        &mut self.base
    }

    pub fn value(&self) -> Option<&[SitePage]> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<Vec<SitePage>>) {
        self.value = value;
    }
}

impl Parsable for SitePageCollectionResponse {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "value" => {
                if let Some(value) =
                    node.get_collection_of_object_values(SitePage::from_discriminator)?
                {
                    self.value = Some(value);
                }
                Ok(true)
            }
            _ => self.base.deserialize_field(field, node),
        }
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_collection_of_object_values("value", self.value.as_deref())?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.base.additional_data_mut()
    }
}

/// One page of [`UserProcessingResult`] records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProcessingResultCollectionResponse {
    base: BaseCollectionPaginationCountResponse,
    value: Option<Vec<UserProcessingResult>>,
}

impl UserProcessingResultCollectionResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn base(&self) -> &BaseCollectionPaginationCountResponse {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseCollectionPaginationCountResponse {
        &mut self.base
    }

    pub fn value(&self) -> Option<&[UserProcessingResult]> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<Vec<UserProcessingResult>>) {
        self.value = value;
    }
}

impl Parsable for UserProcessingResultCollectionResponse {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "value" => {
                if let Some(value) = node
                    .get_collection_of_object_values(UserProcessingResult::from_discriminator)?
                {
                    self.value = Some(value);
                }
                Ok(true)
            }
            _ => self.base.deserialize_field(field, node),
        }
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_collection_of_object_values("value", self.value.as_deref())?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.base.additional_data_mut()
    }
}

/// One page of [`ManagedDeviceCompliance`] records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagedDeviceComplianceCollectionResponse {
    base: BaseCollectionPaginationCountResponse,
    value: Option<Vec<ManagedDeviceCompliance>>,
}

impl ManagedDeviceComplianceCollectionResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn base(&self) -> &BaseCollectionPaginationCountResponse {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseCollectionPaginationCountResponse {
        &mut self.base
    }

    pub fn value(&self) -> Option<&[ManagedDeviceCompliance]> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<Vec<ManagedDeviceCompliance>>) {
        self.value = value;
    }
}

impl Parsable for ManagedDeviceComplianceCollectionResponse {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "value" => {
                if let Some(value) = node.get_collection_of_object_values(
                    ManagedDeviceCompliance::from_discriminator,
                )? {
                    self.value = Some(value);
                }
                Ok(true)
            }
            _ => self.base.deserialize_field(field, node),
        }
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_collection_of_object_values("value", self.value.as_deref())?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.base.additional_data_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphbeta_serialization::json::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn paging_metadata_and_items_roundtrip() {
        let payload = json!({
            "@odata.count": 2,
            "@odata.nextLink": "https://graph.example.com/beta/sites?$skiptoken=p2",
            "value": [
                {"id": "site-1", "displayName": "One"},
                {"id": "site-2", "displayName": "Two"},
            ],
        });
        let page: SiteCollectionResponse =
            from_json_value(&payload, SiteCollectionResponse::from_discriminator).unwrap();
        assert_eq!(page.base().odata_count(), Some(2));
        assert_eq!(page.value().unwrap().len(), 2);
        assert_eq!(page.value().unwrap()[1].display_name(), Some("Two"));

        let back = to_json_value(&page).unwrap();
        assert_eq!(back["@odata.count"], json!(2));
        assert_eq!(back["value"][0]["id"], json!("site-1"));
    }

    #[test]
    fn empty_response_serializes_clean() {
        let empty = SitePageCollectionResponse::new();
        assert_eq!(to_json_value(&empty).unwrap(), json!({}));
    }
}
