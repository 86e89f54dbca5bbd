//! European Learning Model (ELMv3) credential documents

use uuid::Uuid;

use self::mapper::{claim_title, grade_to_percentage, split_full_name, to_iso_format};
use self::model::{
    Address, AwardingBody, AwardingProcess, Concept, CredentialSubject, DeliveryDetails,
    DisplayParameter, ElmCredential, ElmCredentialDocument, Issuer, LearningAchievement,
    LearningAchievementSpecification, LearningAssessment, Location, Note, TypedReference, en,
};
use self::resolver::{CourseElmSettings, FieldResolver, ResolvedConfiguration};
use self::schema::*;
use super::CredentialFormatter;
use super::error::FormatterError;
use super::model::CredentialParams;
use crate::config::core_config::{CoreConfig, ElmCredentialsDefaults};
use crate::model::certificate::Certificate;
use crate::model::course::Course;
use crate::model::user::User;

pub(crate) mod mapper;
pub mod model;
pub mod resolver;
pub mod schema;
pub mod serialize;


pub struct ElmFormatter {
    defaults: ElmCredentialsDefaults,
    platform_language_code: String,
}

impl ElmFormatter {
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            defaults: config.elm_credentials_defaults.clone(),
            platform_language_code: config.platform.language_code.clone(),
        }
    }

    pub fn resolve(&self, course: &Course, params: &CredentialParams) -> ResolvedConfiguration {
        let course_settings = CourseElmSettings::from_course_settings(&course.other_course_settings);

        FieldResolver {
            overrides: &params.overrides,
            course: &course_settings,
            defaults: &self.defaults,
            platform_language_code: &self.platform_language_code,
        }
        .resolve()
    }

    /// Builds the document graph
    pub fn assemble(
        &self,
        course: &Course,
        learner: &User,
        certificate: &Certificate,
        params: &CredentialParams,
    ) -> Result<ElmCredentialDocument, FormatterError> {
        let schema = schema_for(
            params
                .schema_version
                .or(self.defaults.schema_version)
                .unwrap_or_default(),
        );
        let resolved = self.resolve(course, params);

        let (given_name, family_name) = split_full_name(&learner.full_name);
        let issued = to_iso_format(params.issued_at)?;
        let expires_at = params.expires_at.map(to_iso_format).transpose()?;

        let awarded_by = AwardingProcess {
            id: AWARDING_PROCESS_ID.to_owned(),
            r#type: "AwardingProcess".to_owned(),
            awarding_body: AwardingBody {
                id: AWARDING_BODY_ID.to_owned(),
                r#type: "Organisation".to_owned(),
                alt_label: en(&course.org),
                legal_name: en(&course.org),
                location: Location {
                    id: LOCATION_ID.to_owned(),
                    r#type: "Location".to_owned(),
                    address: Address {
                        id: ADDRESS_ID.to_owned(),
                        r#type: "Address".to_owned(),
                        country_code: Concept::country(&resolved.org_country_code),
                    },
                },
            },
            awarding_date: to_iso_format(certificate.created_date)?,
        };

        let proven_by = schema.includes_assessment.then(|| LearningAssessment {
            id: LEARNING_ASSESSMENT_ID.to_owned(),
            r#type: "LearningAssessment".to_owned(),
            awarded_by: awarded_by.clone(),
            title: en(&course.display_name),
            grade: certificate
                .grade
                .filter(|grade| grade.is_finite())
                .map(|grade| Note {
                    id: NOTE_ID.to_owned(),
                    r#type: "Note".to_owned(),
                    note_literal: en(grade_to_percentage(grade)),
                }),
            id_verification: Concept::unsupervised_id_verification(),
        });

        let specified_by =
            schema
                .includes_specification
                .then(|| LearningAchievementSpecification {
                    id: ACHIEVEMENT_SPEC_ID.to_owned(),
                    r#type: "LearningAchievementSpecification".to_owned(),
                    title: en(&course.display_name),
                    language: Concept::language(&resolved.primary_language),
                    mode: Concept::online_mode(),
                });

        let credential_subject = CredentialSubject {
            id: PERSON_ID.to_owned(),
            r#type: "Person".to_owned(),
            given_name: en(given_name),
            family_name: en(family_name),
            full_name: en(&learner.full_name),
            has_claim: LearningAchievement {
                id: LEARNING_ACHIEVEMENT_ID.to_owned(),
                r#type: "LearningAchievement".to_owned(),
                title: en(claim_title(&course.display_name)),
                proven_by,
                awarded_by,
                specified_by,
            },
        };

        Ok(ElmCredentialDocument {
            credential: ElmCredential {
                id: format!("{CREDENTIAL_ID_PREFIX}{}", Uuid::new_v4()),
                r#type: schema.types.iter().map(|t| (*t).to_owned()).collect(),
                context: schema.context.iter().map(|c| (*c).to_owned()).collect(),
                credential_schema: TypedReference {
                    id: schema.credential_schema_id.to_owned(),
                    r#type: schema.credential_schema_type.to_owned(),
                },
                valid_until: expires_at.clone(),
                expiration_date: expires_at,
                valid_from: issued.clone(),
                issuance_date: issued.clone(),
                issued,
                issuer: Issuer {
                    id: format!("{ISSUER_ID_PREFIX}{}", resolved.issuer_id),
                    r#type: "Organisation".to_owned(),
                    alt_label: en(&course.org),
                    legal_name: en(&course.org),
                },
                credential_subject,
                display_parameter: DisplayParameter {
                    id: DISPLAY_PARAMETER_ID.to_owned(),
                    r#type: "DisplayParameter".to_owned(),
                    primary_language: Concept::language(&resolved.primary_language),
                    title: en(&course.display_name),
                },
            },
            delivery_details: DeliveryDetails {
                delivery_address: learner.email.clone(),
            },
        })
    }
}

impl CredentialFormatter for ElmFormatter {
    fn format_credential(
        &self,
        course: &Course,
        learner: &User,
        certificate: &Certificate,
        params: &CredentialParams,
    ) -> Result<String, FormatterError> {
        let document = self.assemble(course, learner, certificate, params)?;
        serialize::serialize(&document)
    }
}
