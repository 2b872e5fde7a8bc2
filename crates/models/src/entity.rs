//! `microsoft.graph.entity` base record and the top-level variant registry.

use graphbeta_serialization::{
    AdditionalData, Parsable, ParseNode, SerializationError, SerializationWriter,
};

use crate::base_item::BaseItem;
use crate::ediscovery::{
    AddToReviewSetOperation, CaseOperation, DataSource, DataSourceContainer,
    EstimateStatisticsOperation, NoncustodialDataSource, ReviewSet, SiteSource,
    SourceCollection, UnifiedGroupSource, UserSource,
};
use crate::group::Group;
use crate::identity_governance::{TaskObject, TaskProcessingResult, UserProcessingResult};
use crate::managed_tenants::{
    CloudPcOverview, CredentialUserRegistrationsSummary, ManagedDeviceCompliance,
    ManagedTenant, ManagementTemplate, ManagementTemplateStep,
    ManagementTemplateStepTenantSummary, ManagementTemplateStepVersion,
};
use crate::search::{Bookmark, Qna, SearchAnswer};
use crate::site::Site;
use crate::site_page::SitePage;
use crate::tenant_admin::Settings;
use crate::user::User;
use crate::web_part::{StandardWebPart, TextWebPart, WebPart};

/// Base record of every addressable resource: the server-assigned id plus
/// the `@odata.type` discriminator. Entity-derived records do not carry an
/// extension bag; unmatched wire fields are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    id: Option<String>,
    odata_type: Option<String>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
}

impl Parsable for Entity {
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
            "id" => {
                if let Some(value) = node.get_string_value()? {
                    self.id = Some(value);
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
        writer.write_string_value("id", self.id.as_deref())?;
        Ok(())
    }
}

/// Every concrete entity type known to this crate, selected by the wire
/// discriminator. Unrecognized or absent tags fall back to the plain
/// [`Entity`] variant rather than erroring.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyEntity {
    Entity(Box<Entity>),
    BaseItem(Box<BaseItem>),
    Site(Box<Site>),
    SitePage(Box<SitePage>),
    User(Box<User>),
    Group(Box<Group>),
    WebPart(Box<WebPart>),
    TextWebPart(Box<TextWebPart>),
    StandardWebPart(Box<StandardWebPart>),
    SearchAnswer(Box<SearchAnswer>),
    Bookmark(Box<Bookmark>),
    Qna(Box<Qna>),
    DataSource(Box<DataSource>),
    UserSource(Box<UserSource>),
    SiteSource(Box<SiteSource>),
    UnifiedGroupSource(Box<UnifiedGroupSource>),
    DataSourceContainer(Box<DataSourceContainer>),
    NoncustodialDataSource(Box<NoncustodialDataSource>),
    CaseOperation(Box<CaseOperation>),
    EstimateStatisticsOperation(Box<EstimateStatisticsOperation>),
    AddToReviewSetOperation(Box<AddToReviewSetOperation>),
    ReviewSet(Box<ReviewSet>),
    SourceCollection(Box<SourceCollection>),
    TaskObject(Box<TaskObject>),
    TaskProcessingResult(Box<TaskProcessingResult>),
    UserProcessingResult(Box<UserProcessingResult>),
    Settings(Box<Settings>),
    CloudPcOverview(Box<CloudPcOverview>),
    CredentialUserRegistrationsSummary(Box<CredentialUserRegistrationsSummary>),
    ManagedDeviceCompliance(Box<ManagedDeviceCompliance>),
    ManagedTenant(Box<ManagedTenant>),
    ManagementTemplate(Box<ManagementTemplate>),
    ManagementTemplateStep(Box<ManagementTemplateStep>),
    ManagementTemplateStepVersion(Box<ManagementTemplateStepVersion>),
    ManagementTemplateStepTenantSummary(Box<ManagementTemplateStepTenantSummary>),
}

impl Default for AnyEntity {
    fn default() -> Self {
        Self::Entity(Box::new(Entity::new()))
    }
}

impl AnyEntity {
    pub fn from_discriminator(tag: Option<&str>) -> Self {
        match tag {
            Some("#microsoft.graph.baseItem") => Self::BaseItem(Box::new(BaseItem::new())),
            Some("#microsoft.graph.site") => Self::Site(Box::new(Site::new())),
            Some("#microsoft.graph.sitePage") => Self::SitePage(Box::new(SitePage::new())),
            Some("#microsoft.graph.user") => Self::User(Box::new(User::new())),
            Some("#microsoft.graph.group") => Self::Group(Box::new(Group::new())),
            Some("#microsoft.graph.webPart") => Self::WebPart(Box::new(WebPart::new())),
            Some("#microsoft.graph.textWebPart") => {
                Self::TextWebPart(Box::new(TextWebPart::new()))
            }
            Some("#microsoft.graph.standardWebPart") => {
                Self::StandardWebPart(Box::new(StandardWebPart::new()))
            }
            Some("#microsoft.graph.search.searchAnswer") => {
                Self::SearchAnswer(Box::new(SearchAnswer::new()))
            }
            Some("#microsoft.graph.search.bookmark") => {
                Self::Bookmark(Box::new(Bookmark::new()))
            }
            Some("#microsoft.graph.search.qna") => Self::Qna(Box::new(Qna::new())),
            Some("#microsoft.graph.ediscovery.dataSource") => {
                Self::DataSource(Box::new(DataSource::new()))
            }
            Some("#microsoft.graph.ediscovery.userSource") => {
                Self::UserSource(Box::new(UserSource::new()))
            }
            Some("#microsoft.graph.ediscovery.siteSource") => {
                Self::SiteSource(Box::new(SiteSource::new()))
            }
            Some("#microsoft.graph.ediscovery.unifiedGroupSource") => {
                Self::UnifiedGroupSource(Box::new(UnifiedGroupSource::new()))
            }
            Some("#microsoft.graph.ediscovery.dataSourceContainer") => {
                Self::DataSourceContainer(Box::new(DataSourceContainer::new()))
            }
            Some("#microsoft.graph.ediscovery.noncustodialDataSource") => {
                Self::NoncustodialDataSource(Box::new(NoncustodialDataSource::new()))
            }
            Some("#microsoft.graph.ediscovery.caseOperation") => {
                Self::CaseOperation(Box::new(CaseOperation::new()))
            }
            Some("#microsoft.graph.ediscovery.estimateStatisticsOperation") => {
                Self::EstimateStatisticsOperation(Box::new(EstimateStatisticsOperation::new()))
            }
            Some("#microsoft.graph.ediscovery.addToReviewSetOperation") => {
                Self::AddToReviewSetOperation(Box::new(AddToReviewSetOperation::new()))
            }
            Some("#microsoft.graph.ediscovery.reviewSet") => {
                Self::ReviewSet(Box::new(ReviewSet::new()))
            }
            Some("#microsoft.graph.ediscovery.sourceCollection") => {
                Self::SourceCollection(Box::new(SourceCollection::new()))
            }
            Some("#microsoft.graph.identityGovernance.task") => {
                Self::TaskObject(Box::new(TaskObject::new()))
            }
            Some("#microsoft.graph.identityGovernance.taskProcessingResult") => {
                Self::TaskProcessingResult(Box::new(TaskProcessingResult::new()))
            }
            Some("#microsoft.graph.identityGovernance.userProcessingResult") => {
                Self::UserProcessingResult(Box::new(UserProcessingResult::new()))
            }
            Some("#microsoft.graph.tenantAdmin.settings") => {
                Self::Settings(Box::new(Settings::new()))
            }
            Some("#microsoft.graph.managedTenants.cloudPcOverview") => {
                Self::CloudPcOverview(Box::new(CloudPcOverview::new()))
            }
            Some("#microsoft.graph.managedTenants.credentialUserRegistrationsSummary") => {
                Self::CredentialUserRegistrationsSummary(Box::new(
                    CredentialUserRegistrationsSummary::new(),
                ))
            }
            Some("#microsoft.graph.managedTenants.managedDeviceCompliance") => {
                Self::ManagedDeviceCompliance(Box::new(ManagedDeviceCompliance::new()))
            }
            Some("#microsoft.graph.managedTenants.managedTenant") => {
                Self::ManagedTenant(Box::new(ManagedTenant::new()))
            }
            Some("#microsoft.graph.managedTenants.managementTemplate") => {
                Self::ManagementTemplate(Box::new(ManagementTemplate::new()))
            }
            Some("#microsoft.graph.managedTenants.managementTemplateStep") => {
                Self::ManagementTemplateStep(Box::new(ManagementTemplateStep::new()))
            }
            Some("#microsoft.graph.managedTenants.managementTemplateStepVersion") => {
                Self::ManagementTemplateStepVersion(Box::new(
                    ManagementTemplateStepVersion::new(),
                ))
            }
            Some("#microsoft.graph.managedTenants.managementTemplateStepTenantSummary") => {
                Self::ManagementTemplateStepTenantSummary(Box::new(
                    ManagementTemplateStepTenantSummary::new(),
                ))
            }
            _ => Self::Entity(Box::new(Entity::new())),
        }
    }
}

impl Parsable for AnyEntity {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match self {
            Self::Entity(record) => record.deserialize_field(field, node),
            Self::BaseItem(record) => record.deserialize_field(field, node),
            Self::Site(record) => record.deserialize_field(field, node),
            Self::SitePage(record) => record.deserialize_field(field, node),
            Self::User(record) => record.deserialize_field(field, node),
            Self::Group(record) => record.deserialize_field(field, node),
            Self::WebPart(record) => record.deserialize_field(field, node),
            Self::TextWebPart(record) => record.deserialize_field(field, node),
            Self::StandardWebPart(record) => record.deserialize_field(field, node),
            Self::SearchAnswer(record) => record.deserialize_field(field, node),
            Self::Bookmark(record) => record.deserialize_field(field, node),
            Self::Qna(record) => record.deserialize_field(field, node),
            Self::DataSource(record) => record.deserialize_field(field, node),
            Self::UserSource(record) => record.deserialize_field(field, node),
            Self::SiteSource(record) => record.deserialize_field(field, node),
            Self::UnifiedGroupSource(record) => record.deserialize_field(field, node),
            Self::DataSourceContainer(record) => record.deserialize_field(field, node),
            Self::NoncustodialDataSource(record) => record.deserialize_field(field, node),
            Self::CaseOperation(record) => record.deserialize_field(field, node),
            Self::EstimateStatisticsOperation(record) => record.deserialize_field(field, node),
            Self::AddToReviewSetOperation(record) => record.deserialize_field(field, node),
            Self::ReviewSet(record) => record.deserialize_field(field, node),
            Self::SourceCollection(record) => record.deserialize_field(field, node),
            Self::TaskObject(record) => record.deserialize_field(field, node),
            Self::TaskProcessingResult(record) => record.deserialize_field(field, node),
            Self::UserProcessingResult(record) => record.deserialize_field(field, node),
            Self::Settings(record) => record.deserialize_field(field, node),
            Self::CloudPcOverview(record) => record.deserialize_field(field, node),
            Self::CredentialUserRegistrationsSummary(record) => {
                record.deserialize_field(field, node)
            }
            Self::ManagedDeviceCompliance(record) => record.deserialize_field(field, node),
            Self::ManagedTenant(record) => record.deserialize_field(field, node),
            Self::ManagementTemplate(record) => record.deserialize_field(field, node),
            Self::ManagementTemplateStep(record) => record.deserialize_field(field, node),
            Self::ManagementTemplateStepVersion(record) => {
                record.deserialize_field(field, node)
            }
            Self::ManagementTemplateStepTenantSummary(record) => {
                record.deserialize_field(field, node)
            }
        }
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        match self {
            Self::Entity(record) => record.serialize(writer),
            Self::BaseItem(record) => record.serialize(writer),
            Self::Site(record) => record.serialize(writer),
            Self::SitePage(record) => record.serialize(writer),
            Self::User(record) => record.serialize(writer),
            Self::Group(record) => record.serialize(writer),
            Self::WebPart(record) => record.serialize(writer),
            Self::TextWebPart(record) => record.serialize(writer),
            Self::StandardWebPart(record) => record.serialize(writer),
            Self::SearchAnswer(record) => record.serialize(writer),
            Self::Bookmark(record) => record.serialize(writer),
            Self::Qna(record) => record.serialize(writer),
            Self::DataSource(record) => record.serialize(writer),
            Self::UserSource(record) => record.serialize(writer),
            Self::SiteSource(record) => record.serialize(writer),
            Self::UnifiedGroupSource(record) => record.serialize(writer),
            Self::DataSourceContainer(record) => record.serialize(writer),
            Self::NoncustodialDataSource(record) => record.serialize(writer),
            Self::CaseOperation(record) => record.serialize(writer),
            Self::EstimateStatisticsOperation(record) => record.serialize(writer),
            Self::AddToReviewSetOperation(record) => record.serialize(writer),
            Self::ReviewSet(record) => record.serialize(writer),
            Self::SourceCollection(record) => record.serialize(writer),
            Self::TaskObject(record) => record.serialize(writer),
            Self::TaskProcessingResult(record) => record.serialize(writer),
            Self::UserProcessingResult(record) => record.serialize(writer),
            Self::Settings(record) => record.serialize(writer),
            Self::CloudPcOverview(record) => record.serialize(writer),
            Self::CredentialUserRegistrationsSummary(record) => record.serialize(writer),
            Self::ManagedDeviceCompliance(record) => record.serialize(writer),
            Self::ManagedTenant(record) => record.serialize(writer),
            Self::ManagementTemplate(record) => record.serialize(writer),
            Self::ManagementTemplateStep(record) => record.serialize(writer),
            Self::ManagementTemplateStepVersion(record) => record.serialize(writer),
            Self::ManagementTemplateStepTenantSummary(record) => record.serialize(writer),
        }
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        None
    }
}
