use elm_core::model::certificate::Certificate;
use elm_core::model::course::CourseKey;
use elm_core::model::user::User;
use elm_core::repository::certificate_repository::CertificateRepository;
use elm_core::repository::error::DataLayerError;

use super::CertificateProvider;

#[async_trait::async_trait]
impl CertificateRepository for CertificateProvider {
    async fn certificate_for_student(
        &self,
        user: &User,
        course_key: &CourseKey,
    ) -> Result<Option<Certificate>, DataLayerError> {
        Ok(self
            .data
            .certificates
            .get(&(user.username.clone(), course_key.clone()))
            .cloned())
    }
}
