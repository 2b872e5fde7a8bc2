use graphbeta_models::ediscovery::{
    CaseAction, CaseOperationStatus, DataSourceContainerStatus, DataSourceHoldStatus,
    DataSourceScopes, SourceType,
};
use graphbeta_models::identity_governance::{
    LifecycleWorkflowProcessingStatus, WorkflowExecutionType,
};
use graphbeta_models::managed_tenants::ManagementCategory;
use graphbeta_models::search::AnswerState;
use graphbeta_models::tenant_admin::{
    ImageTaggingChoice, SharingCapabilities, SharingDomainRestrictionMode,
};
use graphbeta_models::{
    DevicePlatformType, PageLayoutType, PagePromotionType, TitleAreaLayoutType,
    TitleAreaTextAlignmentType,
};
use graphbeta_serialization::{SerializationError, WireEnum};

fn assert_enum_contract<E>()
where
    E: WireEnum + Default + PartialEq + std::fmt::Debug,
{
    // every declared constant survives stringify -> parse
    for value in E::VALUES {
        let parsed = E::parse(value.as_str())
            .unwrap_or_else(|err| panic!("{}: {err}", E::FAMILY));
        assert_eq!(parsed, *value, "{} roundtrip of {}", E::FAMILY, value.as_str());
    }

    // the zero value is the first declared constant
    assert_eq!(E::default(), E::VALUES[0], "{} zero value", E::FAMILY);

    // unrecognized literals are rejected with the family name attached
    match E::parse("__not_a_real_value__") {
        Err(SerializationError::UnknownEnumValue { value, family }) => {
            assert_eq!(value, "__not_a_real_value__");
            assert_eq!(family, E::FAMILY);
        }
        other => panic!("{}: expected UnknownEnumValue, got {other:?}", E::FAMILY),
    }

    // serialize_list preserves input order
    let listed = E::serialize_list(E::VALUES);
    let expected: Vec<&str> = E::VALUES.iter().map(|value| value.as_str()).collect();
    assert_eq!(listed, expected, "{} list order", E::FAMILY);
}

#[test]
fn every_enum_family_upholds_the_wire_contract() {
    assert_enum_contract::<DevicePlatformType>();
    assert_enum_contract::<PageLayoutType>();
    assert_enum_contract::<PagePromotionType>();
    assert_enum_contract::<TitleAreaLayoutType>();
    assert_enum_contract::<TitleAreaTextAlignmentType>();
    assert_enum_contract::<AnswerState>();
    assert_enum_contract::<CaseAction>();
    assert_enum_contract::<CaseOperationStatus>();
    assert_enum_contract::<DataSourceContainerStatus>();
    assert_enum_contract::<DataSourceHoldStatus>();
    assert_enum_contract::<DataSourceScopes>();
    assert_enum_contract::<SourceType>();
    assert_enum_contract::<LifecycleWorkflowProcessingStatus>();
    assert_enum_contract::<WorkflowExecutionType>();
    assert_enum_contract::<ImageTaggingChoice>();
    assert_enum_contract::<SharingCapabilities>();
    assert_enum_contract::<SharingDomainRestrictionMode>();
    assert_enum_contract::<ManagementCategory>();
}

#[test]
fn enum_constant_rosters_are_distinct() {
    fn assert_distinct<E: WireEnum>() {
        let mut names: Vec<&str> = E::VALUES.iter().map(|value| value.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), E::VALUES.len(), "{} duplicates", E::FAMILY);
    }
    assert_distinct::<DevicePlatformType>();
    assert_distinct::<CaseAction>();
    assert_distinct::<LifecycleWorkflowProcessingStatus>();
    assert_distinct::<SharingCapabilities>();
}
