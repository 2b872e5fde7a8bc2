//! `microsoft.graph.identityGovernance` namespace: lifecycle workflow results.

mod enums;
mod task;
mod user_processing_result;

pub use enums::{LifecycleWorkflowProcessingStatus, WorkflowExecutionType};
pub use task::{TaskObject, TaskProcessingResult};
pub use user_processing_result::UserProcessingResult;
