use super::error::DataLayerError;
use crate::model::course::CourseKey;
use crate::model::user::User;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Enrolled learners of the course, staff and superusers excluded
    async fn get_learner_enrollments(
        &self,
        course_key: &CourseKey,
    ) -> Result<Vec<User>, DataLayerError>;
}
