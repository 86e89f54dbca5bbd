use std::collections::{BTreeMap, HashMap};
use std::io::Cursor;

use time::OffsetDateTime;

use super::CredentialBuilderService;
use super::archive::create_zip;
use super::dto::{CredentialContentType, CredentialExportDTO, CredentialRequestDTO};
use super::mapper::{archive_filename, credential_filename};
use super::validator::validate_request;
use crate::model::course::{Course, CourseKey};
use crate::model::user::User;
use crate::provider::credential_formatter::model::CredentialParams;
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

impl CredentialBuilderService {
    /// Generates the credential of one learner, or of every enrolled learner when the query
    /// names nobody
    ///
    /// # Arguments
    ///
    /// * `requester` - Authenticated caller, must be global staff or course staff/instructor
    /// * `course_id` - Course key as received in the request path
    /// * `query` - Raw query parameters: `username`, `expires_at`, `to_file`
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub async fn generate_credentials(
        &self,
        requester: &User,
        course_id: &str,
        query: &HashMap<String, String>,
    ) -> Result<CredentialExportDTO, ServiceError> {
        let (course_key, request) = validate_request(course_id, query)?;

        let course = self
            .course_repository
            .get_course(&course_key)
            .await?
            .ok_or_else(|| EntityNotFoundError::Course(course_key.clone()))?;

        self.check_access(requester, &course_key).await?;

        let params = CredentialParams {
            expires_at: request.expires_at,
            ..CredentialParams::new(OffsetDateTime::now_utc())
        };

        match &request.username {
            Some(username) => {
                self.generate_single(&course, username, &request, &params)
                    .await
            }
            None => self.generate_bulk(&course, &params).await,
        }
    }

    async fn check_access(
        &self,
        requester: &User,
        course_key: &CourseKey,
    ) -> Result<(), ServiceError> {
        if requester.is_staff
            || self
                .user_repository
                .has_staff_or_instructor_role(requester, course_key)
                .await?
        {
            return Ok(());
        }

        tracing::warn!(
            username = %requester.username,
            course_id = %course_key,
            "Credential generation denied"
        );
        Err(ValidationError::Forbidden.into())
    }

    async fn generate_single(
        &self,
        course: &Course,
        username: &str,
        request: &CredentialRequestDTO,
        params: &CredentialParams,
    ) -> Result<CredentialExportDTO, ServiceError> {
        let learner = self
            .user_repository
            .get_user_by_username_or_email(username)
            .await?
            .ok_or_else(|| EntityNotFoundError::User(username.to_owned()))?;

        let certificate = self
            .certificate_repository
            .certificate_for_student(&learner, &course.key)
            .await?
            .ok_or_else(|| EntityNotFoundError::Certificate {
                username: learner.username.clone(),
                course_key: course.key.clone(),
            })?;

        let content = self
            .formatter
            .format_credential(course, &learner, &certificate, params)?;

        tracing::info!(
            username = %learner.username,
            course_id = %course.key,
            "Generated credential"
        );

        Ok(CredentialExportDTO {
            filename: credential_filename(&learner, &course.key),
            content_type: CredentialContentType::Json,
            attachment: request.to_file,
            content: content.into_bytes(),
        })
    }

    async fn generate_bulk(
        &self,
        course: &Course,
        params: &CredentialParams,
    ) -> Result<CredentialExportDTO, ServiceError> {
        let learners = self
            .enrollment_repository
            .get_learner_enrollments(&course.key)
            .await?;

        let mut credentials = BTreeMap::new();

        for learner in learners {
            let certificate = match self
                .certificate_repository
                .certificate_for_student(&learner, &course.key)
                .await
            {
                Ok(Some(certificate)) => certificate,
                Ok(None) => {
                    tracing::debug!(username = %learner.username, "No certificate, skipping");
                    continue;
                }
                Err(err) => {
                    tracing::warn!(username = %learner.username, "Certificate lookup failed: {err}");
                    continue;
                }
            };

            match self
                .formatter
                .format_credential(course, &learner, &certificate, params)
            {
                Ok(content) => {
                    credentials.insert(credential_filename(&learner, &course.key), content);
                }
                Err(err) => {
                    tracing::warn!(username = %learner.username, "Could not build credential: {err}");
                }
            }
        }

        if credentials.is_empty() {
            return Err(EntityNotFoundError::Credentials(course.key.clone()).into());
        }

        let content = create_zip(&credentials, Cursor::new(vec![]))?.into_inner();

        tracing::info!(
            course_id = %course.key,
            count = credentials.len(),
            "Generated credentials archive"
        );

        Ok(CredentialExportDTO {
            filename: archive_filename(&course.key),
            content_type: CredentialContentType::Zip,
            attachment: true,
            content,
        })
    }
}
