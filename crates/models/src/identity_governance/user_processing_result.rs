//! `microsoft.graph.identityGovernance.userProcessingResult` resource model.

use graphbeta_serialization::{
    Parsable, ParseNode, SerializationError, SerializationWriter,
};
use time::OffsetDateTime;

use crate::entity::Entity;
use crate::identity_governance::enums::{
    LifecycleWorkflowProcessingStatus, WorkflowExecutionType,
};
use crate::identity_governance::task::TaskProcessingResult;
use crate::user::User;

/// The outcome of one workflow execution for one user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProcessingResult {
    entity: Entity,
    completed_date_time: Option<OffsetDateTime>,
    failed_tasks_count: Option<i32>,
    processing_status: Option<LifecycleWorkflowProcessingStatus>,
    scheduled_date_time: Option<OffsetDateTime>,
    started_date_time: Option<OffsetDateTime>,
    subject: Option<User>,
    task_processing_results: Option<Vec<TaskProcessingResult>>,
    total_tasks_count: Option<i32>,
    total_unprocessed_tasks_count: Option<i32>,
    workflow_execution_type: Option<WorkflowExecutionType>,
    workflow_version: Option<i32>,
}

impl UserProcessingResult {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.identityGovernance.userProcessingResult";

    pub fn new() -> Self {
        let mut result = Self::default();
        result
            .entity
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        result
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

    pub fn completed_date_time(&self) -> Option<OffsetDateTime> {
        self.completed_date_time
    }

    pub fn set_completed_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.completed_date_time = value;
    }

    pub fn failed_tasks_count(&self) -> Option<i32> {
        self.failed_tasks_count
    }

    pub fn set_failed_tasks_count(&mut self, value: Option<i32>) {
        self.failed_tasks_count = value;
    }

    pub fn processing_status(&self) -> Option<LifecycleWorkflowProcessingStatus> {
        self.processing_status
    }

    pub fn set_processing_status(
        &mut self,
        value: Option<LifecycleWorkflowProcessingStatus>,
    ) {
        self.processing_status = value;
    }

    pub fn scheduled_date_time(&self) -> Option<OffsetDateTime> {
        self.scheduled_date_time
    }

    pub fn set_scheduled_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.scheduled_date_time = value;
    }

    pub fn started_date_time(&self) -> Option<OffsetDateTime> {
        self.started_date_time
    }

    pub fn set_started_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.started_date_time = value;
    }

    pub fn subject(&self) -> Option<&User> {
        self.subject.as_ref()
    }

    pub fn set_subject(&mut self, value: Option<User>) {
        self.subject = value;
    }

    pub fn task_processing_results(&self) -> Option<&[TaskProcessingResult]> {
        self.task_processing_results.as_deref()
    }

    pub fn set_task_processing_results(
        &mut self,
        value: Option<Vec<TaskProcessingResult>>,
    ) {
        self.task_processing_results = value;
    }

    pub fn total_tasks_count(&self) -> Option<i32> {
        self.total_tasks_count
    }

    pub fn set_total_tasks_count(&mut self, value: Option<i32>) {
        self.total_tasks_count = value;
    }

    pub fn total_unprocessed_tasks_count(&self) -> Option<i32> {
        self.total_unprocessed_tasks_count
    }

    pub fn set_total_unprocessed_tasks_count(&mut self, value: Option<i32>) {
        self.total_unprocessed_tasks_count = value;
    }

    pub fn workflow_execution_type(&self) -> Option<WorkflowExecutionType> {
        self.workflow_execution_type
    }

    pub fn set_workflow_execution_type(&mut self, value: Option<WorkflowExecutionType>) {
        self.workflow_execution_type = value;
    }

    pub fn workflow_version(&self) -> Option<i32> {
        self.workflow_version
    }

    pub fn set_workflow_version(&mut self, value: Option<i32>) {
        self.workflow_version = value;
    }
}

impl Parsable for UserProcessingResult {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "completedDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.completed_date_time = Some(value);
                }
            }
            "failedTasksCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.failed_tasks_count = Some(value);
                }
            }
            "processingStatus" => {
                if let Some(value) = node.get_enum_value()? {
                    self.processing_status = Some(value);
                }
            }
            "scheduledDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.scheduled_date_time = Some(value);
                }
            }
            "startedDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.started_date_time = Some(value);
                }
            }
            "subject" => {
                if let Some(value) = node.get_object_value(User::from_discriminator)? {
                    self.subject = Some(value);
                }
            }
            "taskProcessingResults" => {
                if let Some(value) = node
                    .get_collection_of_object_values(TaskProcessingResult::from_discriminator)?
                {
                    self.task_processing_results = Some(value);
                }
            }
            "totalTasksCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.total_tasks_count = Some(value);
                }
            }
            "totalUnprocessedTasksCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.total_unprocessed_tasks_count = Some(value);
                }
            }
            "workflowExecutionType" => {
                if let Some(value) = node.get_enum_value()? {
                    self.workflow_execution_type = Some(value);
                }
            }
            "workflowVersion" => {
                if let Some(value) = node.get_i32_value()? {
                    self.workflow_version = Some(value);
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
        writer.write_date_time_value("completedDateTime", self.completed_date_time)?;
        writer.write_i32_value("failedTasksCount", self.failed_tasks_count)?;
        writer.write_enum_value("processingStatus", self.processing_status)?;
        writer.write_date_time_value("scheduledDateTime", self.scheduled_date_time)?;
        writer.write_date_time_value("startedDateTime", self.started_date_time)?;
        writer.write_object_value("subject", self.subject.as_ref())?;
        writer.write_collection_of_object_values(
            "taskProcessingResults",
            self.task_processing_results.as_deref(),
        )?;
        writer.write_i32_value("totalTasksCount", self.total_tasks_count)?;
        writer.write_i32_value(
            "totalUnprocessedTasksCount",
            self.total_unprocessed_tasks_count,
        )?;
        writer.write_enum_value("workflowExecutionType", self.workflow_execution_type)?;
        writer.write_i32_value("workflowVersion", self.workflow_version)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphbeta_serialization::json::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn workflow_outcome_roundtrip() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.identityGovernance.userProcessingResult",
            "id": "run-9",
            "processingStatus": "completedWithErrors",
            "workflowExecutionType": "onDemand",
            "failedTasksCount": 1,
            "totalTasksCount": 4,
            "subject": {"displayName": "Blake Okafor", "userPrincipalName": "blake@contoso.example"},
            "taskProcessingResults": [
                {"processingStatus": "failed", "failureReason": "mailbox not found"},
            ],
        });
        let result: UserProcessingResult =
            from_json_value(&payload, UserProcessingResult::from_discriminator).unwrap();
        assert_eq!(
            result.processing_status(),
            Some(LifecycleWorkflowProcessingStatus::CompletedWithErrors)
        );
        assert_eq!(
            result.workflow_execution_type(),
            Some(WorkflowExecutionType::OnDemand)
        );
        assert_eq!(result.subject().unwrap().display_name(), Some("Blake Okafor"));
        let tasks = result.task_processing_results().unwrap();
        assert_eq!(tasks[0].failure_reason(), Some("mailbox not found"));

        let back = to_json_value(&result).unwrap();
        assert_eq!(back["processingStatus"], json!("completedWithErrors"));
        assert_eq!(
            back["taskProcessingResults"][0]["failureReason"],
            json!("mailbox not found")
        );
        assert!(back.get("completedDateTime").is_none());
    }
}
