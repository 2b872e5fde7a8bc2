use graphbeta_models::ediscovery::{
    AddToReviewSetOperation, CaseOperation, DataSource, DataSourceContainer,
    EstimateStatisticsOperation, NoncustodialDataSource, ReviewSet, SiteSource,
    SourceCollection, UnifiedGroupSource, UserSource,
};
use graphbeta_models::identity_governance::{
    TaskObject, TaskProcessingResult, UserProcessingResult,
};
use graphbeta_models::managed_tenants::{
    CloudPcOverview, CredentialUserRegistrationsSummary, ManagedDeviceCompliance,
    ManagedTenant, ManagementTemplate, ManagementTemplateStep,
    ManagementTemplateStepTenantSummary, ManagementTemplateStepVersion,
};
use graphbeta_models::search::{AnswerKeyword, AnswerVariant, Bookmark, Qna, SearchAnswer};
use graphbeta_models::tenant_admin::{IdleSessionSignOut, Settings};
use graphbeta_models::{
    ActionUrl, BaseItem, ContentTypeInfo, Deleted, Entity, Group, Identity, IdentitySet,
    KeyValuePair, PublicationFacet, ReactionsFacet, ResultInfo, Root, SharepointIds, Site,
    SiteCollection, SitePage, SiteSettings, StandardWebPart, TextWebPart, TitleArea, User,
    WebPart,
};
use graphbeta_serialization::json::{from_json_value, to_json_value};
use graphbeta_serialization::Parsable;
use serde_json::{json, Value};

fn assert_fresh_record_serializes<T: Parsable>(record: &T, expected_tag: Option<&str>) {
    let value = to_json_value(record).expect("fresh record must serialize");
    let object = value.as_object().expect("object output");
    match expected_tag {
        Some(tag) => {
            assert_eq!(object.get("@odata.type"), Some(&Value::String(tag.into())));
            assert_eq!(object.len(), 1, "only the discriminator should be emitted");
        }
        None => assert!(object.is_empty(), "no fields expected, got {object:?}"),
    }
}

#[test]
fn zero_value_construction_then_serialization_never_errors() {
    assert_fresh_record_serializes(&Entity::new(), None);
    assert_fresh_record_serializes(&BaseItem::new(), Some("#microsoft.graph.baseItem"));
    assert_fresh_record_serializes(&Site::new(), Some("#microsoft.graph.site"));
    assert_fresh_record_serializes(&SitePage::new(), Some("#microsoft.graph.sitePage"));
    assert_fresh_record_serializes(&User::new(), Some("#microsoft.graph.user"));
    assert_fresh_record_serializes(&Group::new(), Some("#microsoft.graph.group"));
    assert_fresh_record_serializes(&WebPart::new(), Some("#microsoft.graph.webPart"));
    assert_fresh_record_serializes(&TextWebPart::new(), Some("#microsoft.graph.textWebPart"));
    assert_fresh_record_serializes(
        &StandardWebPart::new(),
        Some("#microsoft.graph.standardWebPart"),
    );
    assert_fresh_record_serializes(&Identity::new(), Some("#microsoft.graph.identity"));
    assert_fresh_record_serializes(&IdentitySet::new(), Some("#microsoft.graph.identitySet"));
    assert_fresh_record_serializes(&ActionUrl::new(), Some("#microsoft.graph.actionUrl"));
    assert_fresh_record_serializes(&KeyValuePair::new(), Some("#microsoft.graph.keyValuePair"));
    assert_fresh_record_serializes(&ResultInfo::new(), Some("#microsoft.graph.resultInfo"));
    assert_fresh_record_serializes(&Deleted::new(), Some("#microsoft.graph.deleted"));
    assert_fresh_record_serializes(&Root::new(), Some("#microsoft.graph.root"));
    assert_fresh_record_serializes(
        &SharepointIds::new(),
        Some("#microsoft.graph.sharepointIds"),
    );
    assert_fresh_record_serializes(
        &SiteCollection::new(),
        Some("#microsoft.graph.siteCollection"),
    );
    assert_fresh_record_serializes(&SiteSettings::new(), Some("#microsoft.graph.siteSettings"));
    assert_fresh_record_serializes(
        &ContentTypeInfo::new(),
        Some("#microsoft.graph.contentTypeInfo"),
    );
    assert_fresh_record_serializes(
        &PublicationFacet::new(),
        Some("#microsoft.graph.publicationFacet"),
    );
    assert_fresh_record_serializes(
        &ReactionsFacet::new(),
        Some("#microsoft.graph.reactionsFacet"),
    );
    assert_fresh_record_serializes(&TitleArea::new(), Some("#microsoft.graph.titleArea"));
    assert_fresh_record_serializes(
        &SearchAnswer::new(),
        Some("#microsoft.graph.search.searchAnswer"),
    );
    assert_fresh_record_serializes(
        &AnswerKeyword::new(),
        Some("#microsoft.graph.search.answerKeyword"),
    );
    assert_fresh_record_serializes(
        &AnswerVariant::new(),
        Some("#microsoft.graph.search.answerVariant"),
    );
    assert_fresh_record_serializes(&Qna::new(), Some("#microsoft.graph.search.qna"));
    assert_fresh_record_serializes(&Bookmark::new(), Some("#microsoft.graph.search.bookmark"));
    assert_fresh_record_serializes(
        &DataSource::new(),
        Some("#microsoft.graph.ediscovery.dataSource"),
    );
    assert_fresh_record_serializes(
        &UserSource::new(),
        Some("#microsoft.graph.ediscovery.userSource"),
    );
    assert_fresh_record_serializes(
        &SiteSource::new(),
        Some("#microsoft.graph.ediscovery.siteSource"),
    );
    assert_fresh_record_serializes(
        &UnifiedGroupSource::new(),
        Some("#microsoft.graph.ediscovery.unifiedGroupSource"),
    );
    assert_fresh_record_serializes(
        &DataSourceContainer::new(),
        Some("#microsoft.graph.ediscovery.dataSourceContainer"),
    );
    assert_fresh_record_serializes(
        &NoncustodialDataSource::new(),
        Some("#microsoft.graph.ediscovery.noncustodialDataSource"),
    );
    assert_fresh_record_serializes(
        &CaseOperation::new(),
        Some("#microsoft.graph.ediscovery.caseOperation"),
    );
    assert_fresh_record_serializes(
        &EstimateStatisticsOperation::new(),
        Some("#microsoft.graph.ediscovery.estimateStatisticsOperation"),
    );
    assert_fresh_record_serializes(
        &AddToReviewSetOperation::new(),
        Some("#microsoft.graph.ediscovery.addToReviewSetOperation"),
    );
    assert_fresh_record_serializes(
        &ReviewSet::new(),
        Some("#microsoft.graph.ediscovery.reviewSet"),
    );
    assert_fresh_record_serializes(
        &SourceCollection::new(),
        Some("#microsoft.graph.ediscovery.sourceCollection"),
    );
    assert_fresh_record_serializes(
        &TaskObject::new(),
        Some("#microsoft.graph.identityGovernance.task"),
    );
    assert_fresh_record_serializes(
        &TaskProcessingResult::new(),
        Some("#microsoft.graph.identityGovernance.taskProcessingResult"),
    );
    assert_fresh_record_serializes(
        &UserProcessingResult::new(),
        Some("#microsoft.graph.identityGovernance.userProcessingResult"),
    );
    assert_fresh_record_serializes(
        &Settings::new(),
        Some("#microsoft.graph.tenantAdmin.settings"),
    );
    assert_fresh_record_serializes(
        &IdleSessionSignOut::new(),
        Some("#microsoft.graph.tenantAdmin.idleSessionSignOut"),
    );
    assert_fresh_record_serializes(
        &CloudPcOverview::new(),
        Some("#microsoft.graph.managedTenants.cloudPcOverview"),
    );
    assert_fresh_record_serializes(
        &CredentialUserRegistrationsSummary::new(),
        Some("#microsoft.graph.managedTenants.credentialUserRegistrationsSummary"),
    );
    assert_fresh_record_serializes(
        &ManagedDeviceCompliance::new(),
        Some("#microsoft.graph.managedTenants.managedDeviceCompliance"),
    );
    assert_fresh_record_serializes(
        &ManagedTenant::new(),
        Some("#microsoft.graph.managedTenants.managedTenant"),
    );
    assert_fresh_record_serializes(
        &ManagementTemplate::new(),
        Some("#microsoft.graph.managedTenants.managementTemplate"),
    );
    assert_fresh_record_serializes(
        &ManagementTemplateStep::new(),
        Some("#microsoft.graph.managedTenants.managementTemplateStep"),
    );
    assert_fresh_record_serializes(
        &ManagementTemplateStepVersion::new(),
        Some("#microsoft.graph.managedTenants.managementTemplateStepVersion"),
    );
    assert_fresh_record_serializes(
        &ManagementTemplateStepTenantSummary::new(),
        Some("#microsoft.graph.managedTenants.managementTemplateStepTenantSummary"),
    );
}

#[test]
fn subset_payload_reproduces_exactly_that_subset() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.site",
        "displayName": "Acme",
    });
    let site: Site = from_json_value(&payload, Site::from_discriminator).unwrap();
    let back = to_json_value(&site).unwrap();
    assert_eq!(back, payload, "no spurious fields, no silent loss");
}

#[test]
fn deep_payload_roundtrips_value_for_value() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.ediscovery.sourceCollection",
        "id": "col-3",
        "contentQuery": "subject:'Q3' AND Date>=06/01/2026",
        "createdBy": {
            "@odata.type": "#microsoft.graph.identitySet",
            "user": {
                "@odata.type": "#microsoft.graph.identity",
                "displayName": "Rowan Diaz",
                "id": "u-77",
            },
        },
        "createdDateTime": "2026-06-02T08:15:30Z",
        "custodianSources": [
            {
                "@odata.type": "#microsoft.graph.ediscovery.userSource",
                "email": "rowan@contoso.example",
                "includedSources": "mailbox",
            },
        ],
        "dataSourceScopes": "none",
        "displayName": "Q3 sweep",
    });
    let collection: SourceCollection =
        from_json_value(&payload, SourceCollection::from_discriminator).unwrap();
    let back = to_json_value(&collection).unwrap();
    assert_eq!(back, payload);
}

#[test]
fn unknown_fields_survive_on_bag_carrying_complex_types() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.identitySet",
        "user": {"displayName": "Sam"},
        "takenFromANewerSchema": {"nested": [1, 2]},
    });
    let set: IdentitySet = from_json_value(&payload, IdentitySet::from_discriminator).unwrap();
    assert_eq!(set.additional_data().len(), 1);

    let back = to_json_value(&set).unwrap();
    assert_eq!(back["takenFromANewerSchema"], json!({"nested": [1, 2]}));
}

#[test]
fn entity_records_drop_unknown_fields() {
    // entity-derived records carry no extension bag
    let payload = json!({
        "@odata.type": "#microsoft.graph.user",
        "displayName": "Sam",
        "someUnmodeledField": true,
    });
    let user: User = from_json_value(&payload, User::from_discriminator).unwrap();
    let back = to_json_value(&user).unwrap();
    assert!(back.get("someUnmodeledField").is_none());
    assert_eq!(back["displayName"], json!("Sam"));
}

#[test]
fn null_valued_fields_stay_absent_after_roundtrip() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.sitePage",
        "title": null,
        "showComments": null,
        "reactions": null,
    });
    let page: SitePage = from_json_value(&payload, SitePage::from_discriminator).unwrap();
    assert!(page.title().is_none());
    assert!(page.show_comments().is_none());
    assert!(page.reactions().is_none());

    let back = to_json_value(&page).unwrap();
    assert!(back.get("title").is_none());
    assert!(back.get("showComments").is_none());
    assert!(back.get("reactions").is_none());
}

#[test]
fn setters_overwrite_unconditionally() {
    let mut user = User::new();
    user.set_display_name(Some("First".to_owned()));
    user.set_display_name(Some("Second".to_owned()));
    assert_eq!(user.display_name(), Some("Second"));
    user.set_display_name(None);
    assert!(user.display_name().is_none());
}
