//! Wire enums of the `microsoft.graph.ediscovery` namespace.

use graphbeta_serialization::{SerializationError, WireEnum};

/// Kind of work a case operation performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseAction {
    #[default]
    ContentExport,
    ApplyTags,
    ConvertToPdf,
    Index,
    EstimateStatistics,
    AddToReviewSet,
    HoldUpdate,
    UnknownFutureValue,
}

impl WireEnum for CaseAction {
    const FAMILY: &'static str = "caseAction";
    const VALUES: &'static [Self] = &[
        Self::ContentExport,
        Self::ApplyTags,
        Self::ConvertToPdf,
        Self::Index,
        Self::EstimateStatistics,
        Self::AddToReviewSet,
        Self::HoldUpdate,
        Self::UnknownFutureValue,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::ContentExport => "contentExport",
            Self::ApplyTags => "applyTags",
            Self::ConvertToPdf => "convertToPdf",
            Self::Index => "index",
            Self::EstimateStatistics => "estimateStatistics",
            Self::AddToReviewSet => "addToReviewSet",
            Self::HoldUpdate => "holdUpdate",
            Self::UnknownFutureValue => "unknownFutureValue",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "contentExport" => Self::ContentExport,
            "applyTags" => Self::ApplyTags,
            "convertToPdf" => Self::ConvertToPdf,
            "index" => Self::Index,
            "estimateStatistics" => Self::EstimateStatistics,
            "addToReviewSet" => Self::AddToReviewSet,
            "holdUpdate" => Self::HoldUpdate,
            "unknownFutureValue" => Self::UnknownFutureValue,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

/// Progress state of a case operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseOperationStatus {
    #[default]
    NotStarted,
    SubmissionFailed,
    Running,
    Succeeded,
    PartiallySucceeded,
    Failed,
}

impl WireEnum for CaseOperationStatus {
    const FAMILY: &'static str = "caseOperationStatus";
    const VALUES: &'static [Self] = &[
        Self::NotStarted,
        Self::SubmissionFailed,
        Self::Running,
        Self::Succeeded,
        Self::PartiallySucceeded,
        Self::Failed,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "notStarted",
            Self::SubmissionFailed => "submissionFailed",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::PartiallySucceeded => "partiallySucceeded",
            Self::Failed => "failed",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "notStarted" => Self::NotStarted,
            "submissionFailed" => Self::SubmissionFailed,
            "running" => Self::Running,
            "succeeded" => Self::Succeeded,
            "partiallySucceeded" => Self::PartiallySucceeded,
            "failed" => Self::Failed,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

/// Lifecycle state of a data source container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataSourceContainerStatus {
    #[default]
    Active,
    Released,
    UnknownFutureValue,
}

impl WireEnum for DataSourceContainerStatus {
    const FAMILY: &'static str = "dataSourceContainerStatus";
    const VALUES: &'static [Self] =
        &[Self::Active, Self::Released, Self::UnknownFutureValue];

    fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Released => "released",
            Self::UnknownFutureValue => "unknownFutureValue",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "active" => Self::Active,
            "released" => Self::Released,
            "unknownFutureValue" => Self::UnknownFutureValue,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

/// Hold state of a data source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataSourceHoldStatus {
    #[default]
    NotApplied,
    Applied,
    Applying,
    Removing,
    Partial,
}

impl WireEnum for DataSourceHoldStatus {
    const FAMILY: &'static str = "dataSourceHoldStatus";
    const VALUES: &'static [Self] = &[
        Self::NotApplied,
        Self::Applied,
        Self::Applying,
        Self::Removing,
        Self::Partial,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::NotApplied => "notApplied",
            Self::Applied => "applied",
            Self::Applying => "applying",
            Self::Removing => "removing",
            Self::Partial => "partial",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "notApplied" => Self::NotApplied,
            "applied" => Self::Applied,
            "applying" => Self::Applying,
            "removing" => Self::Removing,
            "partial" => Self::Partial,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

/// Workload-wide scopes a collection can span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataSourceScopes {
    #[default]
    None,
    AllTenantMailboxes,
    AllTenantSites,
    AllCaseCustodians,
    AllCaseNoncustodialDataSources,
}

impl WireEnum for DataSourceScopes {
    const FAMILY: &'static str = "dataSourceScopes";
    const VALUES: &'static [Self] = &[
        Self::None,
        Self::AllTenantMailboxes,
        Self::AllTenantSites,
        Self::AllCaseCustodians,
        Self::AllCaseNoncustodialDataSources,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::AllTenantMailboxes => "allTenantMailboxes",
            Self::AllTenantSites => "allTenantSites",
            Self::AllCaseCustodians => "allCaseCustodians",
            Self::AllCaseNoncustodialDataSources => "allCaseNoncustodialDataSources",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "none" => Self::None,
            "allTenantMailboxes" => Self::AllTenantMailboxes,
            "allTenantSites" => Self::AllTenantSites,
            "allCaseCustodians" => Self::AllCaseCustodians,
            "allCaseNoncustodialDataSources" => Self::AllCaseNoncustodialDataSources,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

/// Workload a user source includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceType {
    #[default]
    Mailbox,
    Site,
}

impl WireEnum for SourceType {
    const FAMILY: &'static str = "sourceType";
    const VALUES: &'static [Self] = &[Self::Mailbox, Self::Site];

    fn as_str(self) -> &'static str {
        match self {
            Self::Mailbox => "mailbox",
            Self::Site => "site",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "mailbox" => Self::Mailbox,
            "site" => Self::Site,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}
