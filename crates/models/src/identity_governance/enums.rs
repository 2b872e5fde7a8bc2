//! Wire enums of the `microsoft.graph.identityGovernance` namespace.

use graphbeta_serialization::{SerializationError, WireEnum};

/// Processing state of a workflow or task execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LifecycleWorkflowProcessingStatus {
    #[default]
    Queued,
    InProgress,
    Completed,
    CompletedWithErrors,
    Canceled,
    Failed,
    UnknownFutureValue,
}

impl WireEnum for LifecycleWorkflowProcessingStatus {
    const FAMILY: &'static str = "lifecycleWorkflowProcessingStatus";
    const VALUES: &'static [Self] = &[
        Self::Queued,
        Self::InProgress,
        Self::Completed,
        Self::CompletedWithErrors,
        Self::Canceled,
        Self::Failed,
        Self::UnknownFutureValue,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::InProgress => "inProgress",
            Self::Completed => "completed",
            Self::CompletedWithErrors => "completedWithErrors",
            Self::Canceled => "canceled",
            Self::Failed => "failed",
            Self::UnknownFutureValue => "unknownFutureValue",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "queued" => Self::Queued,
            "inProgress" => Self::InProgress,
            "completed" => Self::Completed,
            "completedWithErrors" => Self::CompletedWithErrors,
            "canceled" => Self::Canceled,
            "failed" => Self::Failed,
            "unknownFutureValue" => Self::UnknownFutureValue,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

/// How a workflow execution was triggered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkflowExecutionType {
    #[default]
    Scheduled,
    OnDemand,
    UnknownFutureValue,
}

impl WireEnum for WorkflowExecutionType {
    const FAMILY: &'static str = "workflowExecutionType";
    const VALUES: &'static [Self] =
        &[Self::Scheduled, Self::OnDemand, Self::UnknownFutureValue];

    fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::OnDemand => "onDemand",
            Self::UnknownFutureValue => "unknownFutureValue",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "scheduled" => Self::Scheduled,
            "onDemand" => Self::OnDemand,
            "unknownFutureValue" => Self::UnknownFutureValue,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}
