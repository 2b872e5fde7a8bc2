//! `microsoft.graph.ediscovery` namespace: cases, sources, and operations.

mod data_source;
mod enums;
mod operations;
mod source_collection;

pub use data_source::{
    AnyDataSource, DataSource, DataSourceContainer, NoncustodialDataSource, SiteSource,
    UnifiedGroupSource, UserSource,
};
pub use enums::{
    CaseAction, CaseOperationStatus, DataSourceContainerStatus, DataSourceHoldStatus,
    DataSourceScopes, SourceType,
};
pub use operations::{
    AddToReviewSetOperation, AnyCaseOperation, CaseOperation, EstimateStatisticsOperation,
    ReviewSet,
};
pub use source_collection::SourceCollection;
