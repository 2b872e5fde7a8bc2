//! `microsoft.graph.ediscovery.sourceCollection` resource model.

use graphbeta_serialization::{
    Parsable, ParseNode, SerializationError, SerializationWriter,
};
use time::OffsetDateTime;

use crate::ediscovery::data_source::{AnyDataSource, NoncustodialDataSource};
use crate::ediscovery::enums::DataSourceScopes;
use crate::ediscovery::operations::{AddToReviewSetOperation, EstimateStatisticsOperation};
use crate::entity::Entity;
use crate::identity::IdentitySet;

/// A saved search across the data sources of a case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceCollection {
    entity: Entity,
    additional_sources: Option<Vec<AnyDataSource>>,
    add_to_review_set_operation: Option<Box<AddToReviewSetOperation>>,
    content_query: Option<String>,
    created_by: Option<IdentitySet>,
    created_date_time: Option<OffsetDateTime>,
    custodian_sources: Option<Vec<AnyDataSource>>,
    data_source_scopes: Option<DataSourceScopes>,
    description: Option<String>,
    display_name: Option<String>,
    last_estimate_statistics_operation: Option<Box<EstimateStatisticsOperation>>,
    last_modified_by: Option<IdentitySet>,
    last_modified_date_time: Option<OffsetDateTime>,
    noncustodial_sources: Option<Vec<NoncustodialDataSource>>,
}

impl SourceCollection {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.ediscovery.sourceCollection";

    pub fn new() -> Self {
        let mut collection = Self::default();
        collection
            .entity
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        collection
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

    pub fn additional_sources(&self) -> Option<&[AnyDataSource]> {
        self.additional_sources.as_deref()
    }

    pub fn set_additional_sources(&mut self, value: Option<Vec<AnyDataSource>>) {
        self.additional_sources = value;
    }

    pub fn add_to_review_set_operation(&self) -> Option<&AddToReviewSetOperation> {
        self.add_to_review_set_operation.as_deref()
    }

    pub fn set_add_to_review_set_operation(
        &mut self,
        value: Option<AddToReviewSetOperation>,
    ) {
        self.add_to_review_set_operation = value.map(Box::new);
    }

    pub fn content_query(&self) -> Option<&str> {
        self.content_query.as_deref()
    }

    pub fn set_content_query(&mut self, value: Option<String>) {
        self.content_query = value;
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

    pub fn custodian_sources(&self) -> Option<&[AnyDataSource]> {
        self.custodian_sources.as_deref()
    }

    pub fn set_custodian_sources(&mut self, value: Option<Vec<AnyDataSource>>) {
        self.custodian_sources = value;
    }

    pub fn data_source_scopes(&self) -> Option<DataSourceScopes> {
        self.data_source_scopes
    }

    pub fn set_data_source_scopes(&mut self, value: Option<DataSourceScopes>) {
        self.data_source_scopes = value;
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

    pub fn last_estimate_statistics_operation(
        &self,
    ) -> Option<&EstimateStatisticsOperation> {
        self.last_estimate_statistics_operation.as_deref()
    }

    pub fn set_last_estimate_statistics_operation(
        &mut self,
        value: Option<EstimateStatisticsOperation>,
    ) {
        self.last_estimate_statistics_operation = value.map(Box::new);
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

    pub fn noncustodial_sources(&self) -> Option<&[NoncustodialDataSource]> {
        self.noncustodial_sources.as_deref()
    }

    pub fn set_noncustodial_sources(&mut self, value: Option<Vec<NoncustodialDataSource>>) {
        self.noncustodial_sources = value;
    }
}

impl Parsable for SourceCollection {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "additionalSources" => {
                if let Some(value) =
                    node.get_collection_of_object_values(AnyDataSource::from_discriminator)?
                {
                    self.additional_sources = Some(value);
                }
            }
            "addToReviewSetOperation" => {
                if let Some(value) =
                    node.get_object_value(AddToReviewSetOperation::from_discriminator)?
                {
                    self.add_to_review_set_operation = Some(Box::new(value));
                }
            }
            "contentQuery" => {
                if let Some(value) = node.get_string_value()? {
                    self.content_query = Some(value);
                }
            }
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
            "custodianSources" => {
                if let Some(value) =
                    node.get_collection_of_object_values(AnyDataSource::from_discriminator)?
                {
                    self.custodian_sources = Some(value);
                }
            }
            "dataSourceScopes" => {
                if let Some(value) = node.get_enum_value()? {
                    self.data_source_scopes = Some(value);
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
            "lastEstimateStatisticsOperation" => {
                if let Some(value) =
                    node.get_object_value(EstimateStatisticsOperation::from_discriminator)?
                {
                    self.last_estimate_statistics_operation = Some(Box::new(value));
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
            "noncustodialSources" => {
                if let Some(value) = node
                    .get_collection_of_object_values(NoncustodialDataSource::from_discriminator)?
                {
                    self.noncustodial_sources = Some(value);
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
            "additionalSources",
            self.additional_sources.as_deref(),
        )?;
        writer.write_object_value(
            "addToReviewSetOperation",
            self.add_to_review_set_operation.as_deref(),
        )?;
        writer.write_string_value("contentQuery", self.content_query.as_deref())?;
        writer.write_object_value("createdBy", self.created_by.as_ref())?;
        writer.write_date_time_value("createdDateTime", self.created_date_time)?;
        writer.write_collection_of_object_values(
            "custodianSources",
            self.custodian_sources.as_deref(),
        )?;
        writer.write_enum_value("dataSourceScopes", self.data_source_scopes)?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_object_value(
            "lastEstimateStatisticsOperation",
            self.last_estimate_statistics_operation.as_deref(),
        )?;
        writer.write_object_value("lastModifiedBy", self.last_modified_by.as_ref())?;
        writer.write_date_time_value("lastModifiedDateTime", self.last_modified_date_time)?;
        writer.write_collection_of_object_values(
            "noncustodialSources",
            self.noncustodial_sources.as_deref(),
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
    fn mixed_source_kinds_roundtrip() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.ediscovery.sourceCollection",
            "id": "col-1",
            "displayName": "Quarterly financials sweep",
            "contentQuery": "subject:'Quarterly Financials'",
            "dataSourceScopes": "allTenantMailboxes",
            "custodianSources": [
                {"@odata.type": "#microsoft.graph.ediscovery.userSource", "email": "a@contoso.example"},
                {"@odata.type": "#microsoft.graph.ediscovery.siteSource", "site": {"displayName": "Legal"}},
            ],
        });
        let collection: SourceCollection =
            from_json_value(&payload, SourceCollection::from_discriminator).unwrap();
        assert_eq!(
            collection.data_source_scopes(),
            Some(DataSourceScopes::AllTenantMailboxes)
        );
        let sources = collection.custodian_sources().unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(
            sources[0].as_user_source().unwrap().email(),
            Some("a@contoso.example")
        );
        assert_eq!(
            sources[1]
                .as_site_source()
                .unwrap()
                .site()
                .unwrap()
                .display_name(),
            Some("Legal")
        );

        let back = to_json_value(&collection).unwrap();
        assert_eq!(back["dataSourceScopes"], json!("allTenantMailboxes"));
        assert_eq!(
            back["custodianSources"][1]["@odata.type"],
            json!("#microsoft.graph.ediscovery.siteSource")
        );
        assert!(back.get("noncustodialSources").is_none());
    }
}
