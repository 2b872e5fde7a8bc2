//! `microsoft.graph.ediscovery.caseOperation` family and review sets.

use graphbeta_serialization::{
    Parsable, ParseNode, SerializationError, SerializationWriter,
};
use time::OffsetDateTime;

use crate::common::ResultInfo;
use crate::ediscovery::enums::{CaseAction, CaseOperationStatus};
use crate::ediscovery::source_collection::SourceCollection;
use crate::entity::Entity;
use crate::identity::IdentitySet;

/// Base record of long-running case operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseOperation {
    entity: Entity,
    action: Option<CaseAction>,
    completed_date_time: Option<OffsetDateTime>,
    created_by: Option<IdentitySet>,
    created_date_time: Option<OffsetDateTime>,
    percent_progress: Option<i32>,
    result_info: Option<ResultInfo>,
    status: Option<CaseOperationStatus>,
}

impl CaseOperation {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.ediscovery.caseOperation";

    pub fn new() -> Self {
        let mut operation = Self::default();
        operation
            .entity
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        operation
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

    pub fn action(&self) -> Option<CaseAction> {
        self.action
    }

    pub fn set_action(&mut self, value: Option<CaseAction>) {
        self.action = value;
    }

    pub fn completed_date_time(&self) -> Option<OffsetDateTime> {
        self.completed_date_time
    }

    pub fn set_completed_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.completed_date_time = value;
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

    pub fn percent_progress(&self) -> Option<i32> {
        self.percent_progress
    }

    pub fn set_percent_progress(&mut self, value: Option<i32>) {
        self.percent_progress = value;
    }

    pub fn result_info(&self) -> Option<&ResultInfo> {
        self.result_info.as_ref()
    }

    pub fn set_result_info(&mut self, value: Option<ResultInfo>) {
        self.result_info = value;
    }

    pub fn status(&self) -> Option<CaseOperationStatus> {
        self.status
    }

    pub fn set_status(&mut self, value: Option<CaseOperationStatus>) {
        self.status = value;
    }
}

impl Parsable for CaseOperation {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "action" => {
                if let Some(value) = node.get_enum_value()? {
                    self.action = Some(value);
                }
            }
            "completedDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.completed_date_time = Some(value);
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
            "percentProgress" => {
                if let Some(value) = node.get_i32_value()? {
                    self.percent_progress = Some(value);
                }
            }
            "resultInfo" => {
                if let Some(value) = node.get_object_value(ResultInfo::from_discriminator)? {
                    self.result_info = Some(value);
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
        writer.write_enum_value("action", self.action)?;
        writer.write_date_time_value("completedDateTime", self.completed_date_time)?;
        writer.write_object_value("createdBy", self.created_by.as_ref())?;
        writer.write_date_time_value("createdDateTime", self.created_date_time)?;
        writer.write_i32_value("percentProgress", self.percent_progress)?;
        writer.write_object_value("resultInfo", self.result_info.as_ref())?;
        writer.write_enum_value("status", self.status)?;
        Ok(())
    }
}

/// A set of review-ready documents collected for a case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewSet {
    entity: Entity,
    created_by: Option<IdentitySet>,
    created_date_time: Option<OffsetDateTime>,
    display_name: Option<String>,
}

impl ReviewSet {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.ediscovery.reviewSet";

    pub fn new() -> Self {
        let mut set = Self::default();
        set.entity.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        set
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
}

impl Parsable for ReviewSet {
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
        Ok(())
    }
}

/// Operation estimating the item counts and sizes a collection would hit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimateStatisticsOperation {
    case_operation: CaseOperation,
    indexed_item_count: Option<i64>,
    indexed_items_size: Option<i64>,
    mail_count: Option<i64>,
    site_count: Option<i32>,
    source_collection: Option<Box<SourceCollection>>,
    unindexed_item_count: Option<i64>,
    unindexed_items_size: Option<i64>,
}

impl EstimateStatisticsOperation {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.ediscovery.estimateStatisticsOperation";

    pub fn new() -> Self {
        let mut operation = Self::default();
        operation
            .case_operation
            .entity_mut()
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        operation
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn case_operation(&self) -> &CaseOperation {
        &self.case_operation
    }

    pub fn case_operation_mut(&mut self) -> &mut CaseOperation {
        &mut self.case_operation
    }

    pub fn id(&self) -> Option<&str> {
        self.case_operation.id()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.case_operation.set_id(value);
    }

    pub fn indexed_item_count(&self) -> Option<i64> {
        self.indexed_item_count
    }

    pub fn set_indexed_item_count(&mut self, value: Option<i64>) {
        self.indexed_item_count = value;
    }

    pub fn indexed_items_size(&self) -> Option<i64> {
        self.indexed_items_size
    }

    pub fn set_indexed_items_size(&mut self, value: Option<i64>) {
        self.indexed_items_size = value;
    }

    pub fn mail_count(&self) -> Option<i64> {
        self.mail_count
    }

    pub fn set_mail_count(&mut self, value: Option<i64>) {
        self.mail_count = value;
    }

    pub fn site_count(&self) -> Option<i32> {
        self.site_count
    }

    pub fn set_site_count(&mut self, value: Option<i32>) {
        self.site_count = value;
    }

    pub fn source_collection(&self) -> Option<&SourceCollection> {
        self.source_collection.as_deref()
    }

    pub fn set_source_collection(&mut self, value: Option<SourceCollection>) {
        self.source_collection = value.map(Box::new);
    }

    pub fn unindexed_item_count(&self) -> Option<i64> {
        self.unindexed_item_count
    }

    pub fn set_unindexed_item_count(&mut self, value: Option<i64>) {
        self.unindexed_item_count = value;
    }

    pub fn unindexed_items_size(&self) -> Option<i64> {
        self.unindexed_items_size
    }

    pub fn set_unindexed_items_size(&mut self, value: Option<i64>) {
        self.unindexed_items_size = value;
    }
}

impl Parsable for EstimateStatisticsOperation {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "indexedItemCount" => {
                if let Some(value) = node.get_i64_value()? {
                    self.indexed_item_count = Some(value);
                }
            }
            "indexedItemsSize" => {
                if let Some(value) = node.get_i64_value()? {
                    self.indexed_items_size = Some(value);
                }
            }
            "mailCount" => {
                if let Some(value) = node.get_i64_value()? {
                    self.mail_count = Some(value);
                }
            }
            "siteCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.site_count = Some(value);
                }
            }
            "sourceCollection" => {
                if let Some(value) =
                    node.get_object_value(SourceCollection::from_discriminator)?
                {
                    self.source_collection = Some(Box::new(value));
                }
            }
            "unindexedItemCount" => {
                if let Some(value) = node.get_i64_value()? {
                    self.unindexed_item_count = Some(value);
                }
            }
            "unindexedItemsSize" => {
                if let Some(value) = node.get_i64_value()? {
                    self.unindexed_items_size = Some(value);
                }
            }
            _ => return self.case_operation.deserialize_field(field, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.case_operation.serialize(writer)?;
        writer.write_i64_value("indexedItemCount", self.indexed_item_count)?;
        writer.write_i64_value("indexedItemsSize", self.indexed_items_size)?;
        writer.write_i64_value("mailCount", self.mail_count)?;
        writer.write_i32_value("siteCount", self.site_count)?;
        writer.write_object_value("sourceCollection", self.source_collection.as_deref())?;
        writer.write_i64_value("unindexedItemCount", self.unindexed_item_count)?;
        writer.write_i64_value("unindexedItemsSize", self.unindexed_items_size)?;
        Ok(())
    }
}

/// Operation copying collection results into a review set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddToReviewSetOperation {
    case_operation: CaseOperation,
    review_set: Option<ReviewSet>,
    source_collection: Option<Box<SourceCollection>>,
}

impl AddToReviewSetOperation {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.ediscovery.addToReviewSetOperation";

    pub fn new() -> Self {
        let mut operation = Self::default();
        operation
            .case_operation
            .entity_mut()
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        operation
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn case_operation(&self) -> &CaseOperation {
        &self.case_operation
    }

    pub fn case_operation_mut(&mut self) -> &mut CaseOperation {
        &mut self.case_operation
    }

    pub fn id(&self) -> Option<&str> {
        self.case_operation.id()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.case_operation.set_id(value);
    }

    pub fn review_set(&self) -> Option<&ReviewSet> {
        self.review_set.as_ref()
    }

    pub fn set_review_set(&mut self, value: Option<ReviewSet>) {
        self.review_set = value;
    }

    pub fn source_collection(&self) -> Option<&SourceCollection> {
        self.source_collection.as_deref()
    }

    pub fn set_source_collection(&mut self, value: Option<SourceCollection>) {
        self.source_collection = value.map(Box::new);
    }
}

impl Parsable for AddToReviewSetOperation {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "reviewSet" => {
                if let Some(value) = node.get_object_value(ReviewSet::from_discriminator)? {
                    self.review_set = Some(value);
                }
            }
            "sourceCollection" => {
                if let Some(value) =
                    node.get_object_value(SourceCollection::from_discriminator)?
                {
                    self.source_collection = Some(Box::new(value));
                }
            }
            _ => return self.case_operation.deserialize_field(field, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.case_operation.serialize(writer)?;
        writer.write_object_value("reviewSet", self.review_set.as_ref())?;
        writer.write_object_value("sourceCollection", self.source_collection.as_deref())?;
        Ok(())
    }
}

/// Concrete variants of the case operation family.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyCaseOperation {
    CaseOperation(CaseOperation),
    EstimateStatisticsOperation(Box<EstimateStatisticsOperation>),
    AddToReviewSetOperation(Box<AddToReviewSetOperation>),
}

impl Default for AnyCaseOperation {
    fn default() -> Self {
        Self::CaseOperation(CaseOperation::new())
    }
}

impl AnyCaseOperation {
    pub fn from_discriminator(tag: Option<&str>) -> Self {
        match tag {
            Some("#microsoft.graph.ediscovery.estimateStatisticsOperation") => {
                Self::EstimateStatisticsOperation(Box::new(EstimateStatisticsOperation::new()))
            }
            Some("#microsoft.graph.ediscovery.addToReviewSetOperation") => {
                Self::AddToReviewSetOperation(Box::new(AddToReviewSetOperation::new()))
            }
            _ => Self::CaseOperation(CaseOperation::new()),
        }
    }

    pub fn case_operation(&self) -> &CaseOperation {
        match self {
            Self::CaseOperation(record) => record,
            Self::EstimateStatisticsOperation(record) => record.case_operation(),
            Self::AddToReviewSetOperation(record) => record.case_operation(),
        }
    }
}

impl Parsable for AnyCaseOperation {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match self {
            Self::CaseOperation(record) => record.deserialize_field(field, node),
            Self::EstimateStatisticsOperation(record) => record.deserialize_field(field, node),
            Self::AddToReviewSetOperation(record) => record.deserialize_field(field, node),
        }
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        match self {
            Self::CaseOperation(record) => record.serialize(writer),
            Self::EstimateStatisticsOperation(record) => record.serialize(writer),
            Self::AddToReviewSetOperation(record) => record.serialize(writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphbeta_serialization::json::from_json_value;
    use serde_json::json;

    #[test]
    fn operation_family_dispatch() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.ediscovery.estimateStatisticsOperation",
            "id": "op-4",
            "action": "estimateStatistics",
            "status": "succeeded",
            "percentProgress": 100,
            "indexedItemCount": 1200,
            "mailCount": 900,
        });
        let operation: AnyCaseOperation =
            from_json_value(&payload, AnyCaseOperation::from_discriminator).unwrap();
        match &operation {
            AnyCaseOperation::EstimateStatisticsOperation(estimate) => {
                assert_eq!(estimate.indexed_item_count(), Some(1200));
                assert_eq!(estimate.mail_count(), Some(900));
            }
            other => panic!("expected estimate operation, got {other:?}"),
        }
        assert_eq!(
            operation.case_operation().action(),
            Some(CaseAction::EstimateStatistics)
        );
        assert_eq!(
            operation.case_operation().status(),
            Some(CaseOperationStatus::Succeeded)
        );
        assert_eq!(operation.case_operation().percent_progress(), Some(100));

        assert!(matches!(
            AnyCaseOperation::from_discriminator(Some("#microsoft.graph.ediscovery.unknownOp")),
            AnyCaseOperation::CaseOperation(_)
        ));
    }
}
