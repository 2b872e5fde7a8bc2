use graphbeta_models::search::AnySearchAnswer;
use graphbeta_models::{AnyBaseItem, AnyEntity, AnyWebPart};
use graphbeta_serialization::json::{from_json_value, to_json_value};
use serde_json::json;

#[test]
fn entity_registry_dispatches_known_tags() {
    let cases = [
        ("#microsoft.graph.site", "Site"),
        ("#microsoft.graph.sitePage", "SitePage"),
        ("#microsoft.graph.user", "User"),
        ("#microsoft.graph.group", "Group"),
        ("#microsoft.graph.search.bookmark", "Bookmark"),
        ("#microsoft.graph.search.qna", "Qna"),
        ("#microsoft.graph.ediscovery.userSource", "UserSource"),
        ("#microsoft.graph.ediscovery.sourceCollection", "SourceCollection"),
        (
            "#microsoft.graph.identityGovernance.userProcessingResult",
            "UserProcessingResult",
        ),
        ("#microsoft.graph.tenantAdmin.settings", "Settings"),
        ("#microsoft.graph.managedTenants.managedTenant", "ManagedTenant"),
        (
            "#microsoft.graph.managedTenants.managementTemplateStep",
            "ManagementTemplateStep",
        ),
    ];
    for (tag, expected) in cases {
        let entity = AnyEntity::from_discriminator(Some(tag));
        let actual = match entity {
            AnyEntity::Site(_) => "Site",
            AnyEntity::SitePage(_) => "SitePage",
            AnyEntity::User(_) => "User",
            AnyEntity::Group(_) => "Group",
            AnyEntity::Bookmark(_) => "Bookmark",
            AnyEntity::Qna(_) => "Qna",
            AnyEntity::UserSource(_) => "UserSource",
            AnyEntity::SourceCollection(_) => "SourceCollection",
            AnyEntity::UserProcessingResult(_) => "UserProcessingResult",
            AnyEntity::Settings(_) => "Settings",
            AnyEntity::ManagedTenant(_) => "ManagedTenant",
            AnyEntity::ManagementTemplateStep(_) => "ManagementTemplateStep",
            _ => "other",
        };
        assert_eq!(actual, expected, "tag {tag}");
    }
}

#[test]
fn unknown_or_absent_tags_fall_back_to_the_base_variant() {
    assert!(matches!(
        AnyEntity::from_discriminator(Some("#microsoft.graph.somethingFromTheFuture")),
        AnyEntity::Entity(_)
    ));
    assert!(matches!(
        AnyEntity::from_discriminator(None),
        AnyEntity::Entity(_)
    ));
    assert!(matches!(
        AnyBaseItem::from_discriminator(Some("#microsoft.graph.user")),
        AnyBaseItem::BaseItem(_)
    ));
    assert!(matches!(
        AnyWebPart::from_discriminator(Some("nonsense")),
        AnyWebPart::WebPart(_)
    ));
    assert!(matches!(
        AnySearchAnswer::from_discriminator(None),
        AnySearchAnswer::SearchAnswer(_)
    ));
}

#[test]
fn payload_discriminator_drives_deserialization() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.search.qna",
        "id": "qna-7",
        "displayName": "Expense policy",
    });
    let entity: AnyEntity = from_json_value(&payload, AnyEntity::from_discriminator).unwrap();
    match &entity {
        AnyEntity::Qna(qna) => {
            assert_eq!(qna.id(), Some("qna-7"));
            assert_eq!(qna.search_answer().display_name(), Some("Expense policy"));
        }
        other => panic!("expected Qna variant, got {other:?}"),
    }
}

#[test]
fn fallback_record_preserves_the_unknown_tag() {
    // the unknown tag is a declared field, so it survives the roundtrip
    // even though dispatch fell back to the base variant
    let payload = json!({
        "@odata.type": "#microsoft.graph.notShippedYet",
        "id": "x-1",
    });
    let entity: AnyEntity = from_json_value(&payload, AnyEntity::from_discriminator).unwrap();
    let back = to_json_value(&entity).unwrap();
    assert_eq!(back["@odata.type"], json!("#microsoft.graph.notShippedYet"));
    assert_eq!(back["id"], json!("x-1"));
}

#[test]
fn concrete_factories_emit_their_fixed_tag() {
    let site = graphbeta_models::Site::new();
    let back = to_json_value(&site).unwrap();
    assert_eq!(back["@odata.type"], json!("#microsoft.graph.site"));

    let settings = graphbeta_models::tenant_admin::Settings::new();
    let back = to_json_value(&settings).unwrap();
    assert_eq!(
        back["@odata.type"],
        json!("#microsoft.graph.tenantAdmin.settings")
    );

    let qna = graphbeta_models::search::Qna::new();
    let back = to_json_value(&qna).unwrap();
    assert_eq!(back["@odata.type"], json!("#microsoft.graph.search.qna"));
}
