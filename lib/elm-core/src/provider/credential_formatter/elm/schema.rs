use crate::config::core_config::ElmSchemaVersion;

pub(super) const CREDENTIAL_ID_PREFIX: &str = "urn:credential:";
pub(super) const ISSUER_ID_PREFIX: &str = "urn:epass:org:";

pub(super) const AWARDING_BODY_ID: &str = "urn:epass:org:1";
pub(super) const ADDRESS_ID: &str = "urn:epass:address:1";
pub(super) const LOCATION_ID: &str = "urn:epass:location:1";
pub(super) const PERSON_ID: &str = "urn:epass:person:1";
pub(super) const LEARNING_ACHIEVEMENT_ID: &str = "urn:epass:learningAchievement:1";
pub(super) const AWARDING_PROCESS_ID: &str = "urn:epass:awardingProcess:1";
pub(super) const LEARNING_ASSESSMENT_ID: &str = "urn:epass:learningAssessment:1";
pub(super) const NOTE_ID: &str = "urn:epass:note:1";
pub(super) const ACHIEVEMENT_SPEC_ID: &str = "urn:epass:learningAchievementSpec:1";
pub(super) const DISPLAY_PARAMETER_ID: &str = "urn:epass:displayParameter:1";

pub(super) const LANGUAGE_AUTHORITY: &str = "http://publications.europa.eu/resource/authority/language";
pub(super) const COUNTRY_AUTHORITY: &str = "http://publications.europa.eu/resource/authority/country";

pub(super) const LEARNING_ASSESSMENT_SCHEME: &str =
    "http://data.europa.eu/snb/learning-assessment/25831c2";
pub(super) const MODE_ONLINE: &str = "http://data.europa.eu/snb/learning-assessment/920fbb3cbe";

pub(super) const SUPERVISION_VERIFICATION_SCHEME: &str =
    "http://data.europa.eu/snb/supervision-verification/25831c2";
pub(super) const ID_VERIFICATION_UNSUPERVISED: &str =
    "http://data.europa.eu/snb/supervision-verification/df2880c5cb";

/// Fixed shape of a credential document for one version of the data model
#[derive(Debug, PartialEq, Eq)]
pub struct ElmSchema {
    pub version: ElmSchemaVersion,
    pub credential_schema_id: &'static str,
    pub credential_schema_type: &'static str,
    pub context: &'static [&'static str],
    pub types: &'static [&'static str],
    /// Claim carries the learning assessment (`provenBy`) with the grade
    pub includes_assessment: bool,
    /// Claim carries the learning achievement specification (`specifiedBy`)
    pub includes_specification: bool,
}

const CONTEXT: &[&str] = &[
    "https://www.w3.org/2018/credentials/v1",
    "https://data.europa.eu/snb/model/context/edc-ap",
];

const TYPES: &[&str] = &["VerifiableCredential", "EuropeanDigitalCredential"];

const SHACL_VALIDATOR: &str = "ShaclValidator2017";

pub const EDC_GENERIC_NO_CV: ElmSchema = ElmSchema {
    version: ElmSchemaVersion::EdcGenericNoCv,
    credential_schema_id: "http://data.europa.eu/snb/model/ap/edc-generic-no-cv",
    credential_schema_type: SHACL_VALIDATOR,
    context: CONTEXT,
    types: TYPES,
    includes_assessment: false,
    includes_specification: false,
};

pub const EDC_GENERIC_FULL: ElmSchema = ElmSchema {
    version: ElmSchemaVersion::EdcGenericFull,
    credential_schema_id: "http://data.europa.eu/snb/model/ap/edc-generic-full",
    credential_schema_type: SHACL_VALIDATOR,
    context: CONTEXT,
    types: TYPES,
    includes_assessment: true,
    includes_specification: true,
};

pub fn schema_for(version: ElmSchemaVersion) -> &'static ElmSchema {
    match version {
        ElmSchemaVersion::EdcGenericNoCv => &EDC_GENERIC_NO_CV,
        ElmSchemaVersion::EdcGenericFull => &EDC_GENERIC_FULL,
    }
}
