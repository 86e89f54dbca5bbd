use super::error::DataLayerError;
use crate::model::certificate::Certificate;
use crate::model::course::CourseKey;
use crate::model::user::User;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait CertificateRepository: Send + Sync {
    async fn certificate_for_student(
        &self,
        user: &User,
        course_key: &CourseKey,
    ) -> Result<Option<Certificate>, DataLayerError>;
}
