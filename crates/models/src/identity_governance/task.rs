//! `microsoft.graph.identityGovernance.task` and its per-user execution record.

use graphbeta_serialization::{
    Parsable, ParseNode, SerializationError, SerializationWriter,
};
use time::OffsetDateTime;

use crate::common::KeyValuePair;
use crate::entity::Entity;
use crate::identity_governance::enums::LifecycleWorkflowProcessingStatus;
use crate::user::User;

/// One step of a lifecycle workflow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskObject {
    entity: Entity,
    arguments: Option<Vec<KeyValuePair>>,
    category: Option<String>,
    continue_on_error: Option<bool>,
    description: Option<String>,
    display_name: Option<String>,
    execution_sequence: Option<i32>,
    is_enabled: Option<bool>,
    task_definition_id: Option<String>,
}

impl TaskObject {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.identityGovernance.task";

    pub fn new() -> Self {
        let mut task = Self::default();
        task.entity.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        task
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

    pub fn arguments(&self) -> Option<&[KeyValuePair]> {
        self.arguments.as_deref()
    }

    pub fn set_arguments(&mut self, value: Option<Vec<KeyValuePair>>) {
        self.arguments = value;
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn set_category(&mut self, value: Option<String>) {
        self.category = value;
    }

    pub fn continue_on_error(&self) -> Option<bool> {
        self.continue_on_error
    }

    pub fn set_continue_on_error(&mut self, value: Option<bool>) {
        self.continue_on_error = value;
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

    pub fn execution_sequence(&self) -> Option<i32> {
        self.execution_sequence
    }

    pub fn set_execution_sequence(&mut self, value: Option<i32>) {
        self.execution_sequence = value;
    }

    pub fn is_enabled(&self) -> Option<bool> {
        self.is_enabled
    }

    pub fn set_is_enabled(&mut self, value: Option<bool>) {
        self.is_enabled = value;
    }

    pub fn task_definition_id(&self) -> Option<&str> {
        self.task_definition_id.as_deref()
    }

    pub fn set_task_definition_id(&mut self, value: Option<String>) {
        self.task_definition_id = value;
    }
}

impl Parsable for TaskObject {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "arguments" => {
                if let Some(value) =
                    node.get_collection_of_object_values(KeyValuePair::from_discriminator)?
                {
                    self.arguments = Some(value);
                }
            }
            "category" => {
                if let Some(value) = node.get_string_value()? {
                    self.category = Some(value);
                }
            }
            "continueOnError" => {
                if let Some(value) = node.get_bool_value()? {
                    self.continue_on_error = Some(value);
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
            "executionSequence" => {
                if let Some(value) = node.get_i32_value()? {
                    self.execution_sequence = Some(value);
                }
            }
            "isEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_enabled = Some(value);
                }
            }
            "taskDefinitionId" => {
                if let Some(value) = node.get_string_value()? {
                    self.task_definition_id = Some(value);
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
        writer.write_collection_of_object_values("arguments", self.arguments.as_deref())?;
        writer.write_string_value("category", self.category.as_deref())?;
        writer.write_bool_value("continueOnError", self.continue_on_error)?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_i32_value("executionSequence", self.execution_sequence)?;
        writer.write_bool_value("isEnabled", self.is_enabled)?;
        writer.write_string_value("taskDefinitionId", self.task_definition_id.as_deref())?;
        Ok(())
    }
}

/// The outcome of one task execution for one user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskProcessingResult {
    entity: Entity,
    completed_date_time: Option<OffsetDateTime>,
    created_date_time: Option<OffsetDateTime>,
    failure_reason: Option<String>,
    processing_status: Option<LifecycleWorkflowProcessingStatus>,
    started_date_time: Option<OffsetDateTime>,
    subject: Option<User>,
    task: Option<TaskObject>,
}

impl TaskProcessingResult {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.identityGovernance.taskProcessingResult";

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

    pub fn created_date_time(&self) -> Option<OffsetDateTime> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.created_date_time = value;
    }

    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn set_failure_reason(&mut self, value: Option<String>) {
        self.failure_reason = value;
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

    pub fn task(&self) -> Option<&TaskObject> {
        self.task.as_ref()
    }

    pub fn set_task(&mut self, value: Option<TaskObject>) {
        self.task = value;
    }
}

impl Parsable for TaskProcessingResult {
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
            "createdDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.created_date_time = Some(value);
                }
            }
            "failureReason" => {
                if let Some(value) = node.get_string_value()? {
                    self.failure_reason = Some(value);
                }
            }
            "processingStatus" => {
                if let Some(value) = node.get_enum_value()? {
                    self.processing_status = Some(value);
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
            "task" => {
                if let Some(value) = node.get_object_value(TaskObject::from_discriminator)? {
                    self.task = Some(value);
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
        writer.write_date_time_value("createdDateTime", self.created_date_time)?;
        writer.write_string_value("failureReason", self.failure_reason.as_deref())?;
        writer.write_enum_value("processingStatus", self.processing_status)?;
        writer.write_date_time_value("startedDateTime", self.started_date_time)?;
        writer.write_object_value("subject", self.subject.as_ref())?;
        writer.write_object_value("task", self.task.as_ref())?;
        Ok(())
    }
}
