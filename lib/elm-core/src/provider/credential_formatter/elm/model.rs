use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::schema::{
    COUNTRY_AUTHORITY, ID_VERIFICATION_UNSUPERVISED, LANGUAGE_AUTHORITY,
    LEARNING_ASSESSMENT_SCHEME, MODE_ONLINE, SUPERVISION_VERIFICATION_SCHEME,
};

/// Language tag to text, only `en` is populated
pub type MultilingualText = IndexMap<String, String>;

pub(super) fn en(text: impl Into<String>) -> MultilingualText {
    IndexMap::from([("en".to_owned(), text.into())])
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElmCredentialDocument {
    pub credential: ElmCredential,
    pub delivery_details: DeliveryDetails,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElmCredential {
    pub id: String,
    pub r#type: Vec<String>,
    #[serde(rename = "@context")]
    pub context: Vec<String>,
    pub credential_schema: TypedReference,
    pub valid_until: Option<String>,
    pub expiration_date: Option<String>,
    pub valid_from: String,
    pub issuance_date: String,
    pub issued: String,
    pub issuer: Issuer,
    pub credential_subject: CredentialSubject,
    pub display_parameter: DisplayParameter,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedReference {
    pub id: String,
    pub r#type: String,
}

/// Entry of a controlled vocabulary
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub id: String,
    pub r#type: String,
    pub in_scheme: TypedReference,
    pub notation: Option<String>,
    pub pref_label: Option<MultilingualText>,
}

impl Concept {
    fn new(id: String, scheme: &str) -> Self {
        Self {
            id,
            r#type: "Concept".to_owned(),
            in_scheme: TypedReference {
                id: scheme.to_owned(),
                r#type: "ConceptScheme".to_owned(),
            },
            notation: None,
            pref_label: None,
        }
    }

    pub fn language(code: &str) -> Self {
        Self {
            notation: Some("language".to_owned()),
            ..Self::new(format!("{LANGUAGE_AUTHORITY}/{code}"), LANGUAGE_AUTHORITY)
        }
    }

    pub fn country(code: &str) -> Self {
        Self {
            notation: Some("country".to_owned()),
            ..Self::new(format!("{COUNTRY_AUTHORITY}/{code}"), COUNTRY_AUTHORITY)
        }
    }

    pub fn online_mode() -> Self {
        Self {
            pref_label: Some(en("Online")),
            ..Self::new(MODE_ONLINE.to_owned(), LEARNING_ASSESSMENT_SCHEME)
        }
    }

    pub fn unsupervised_id_verification() -> Self {
        Self {
            pref_label: Some(en("Unsupervised with ID verification")),
            ..Self::new(
                ID_VERIFICATION_UNSUPERVISED.to_owned(),
                SUPERVISION_VERIFICATION_SCHEME,
            )
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issuer {
    pub id: String,
    pub r#type: String,
    pub alt_label: MultilingualText,
    pub legal_name: MultilingualText,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSubject {
    pub id: String,
    pub r#type: String,
    pub given_name: MultilingualText,
    pub family_name: MultilingualText,
    pub full_name: MultilingualText,
    pub has_claim: LearningAchievement,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningAchievement {
    pub id: String,
    pub r#type: String,
    pub title: MultilingualText,
    pub proven_by: Option<LearningAssessment>,
    pub awarded_by: AwardingProcess,
    pub specified_by: Option<LearningAchievementSpecification>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningAssessment {
    pub id: String,
    pub r#type: String,
    pub awarded_by: AwardingProcess,
    pub title: MultilingualText,
    pub grade: Option<Note>,
    pub id_verification: Concept,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub r#type: String,
    pub note_literal: MultilingualText,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningAchievementSpecification {
    pub id: String,
    pub r#type: String,
    pub title: MultilingualText,
    pub language: Concept,
    pub mode: Concept,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardingProcess {
    pub id: String,
    pub r#type: String,
    pub awarding_body: AwardingBody,
    pub awarding_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardingBody {
    pub id: String,
    pub r#type: String,
    pub alt_label: MultilingualText,
    pub legal_name: MultilingualText,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub r#type: String,
    pub address: Address,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub r#type: String,
    pub country_code: Concept,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayParameter {
    pub id: String,
    pub r#type: String,
    pub primary_language: Concept,
    pub title: MultilingualText,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetails {
    pub delivery_address: String,
}
