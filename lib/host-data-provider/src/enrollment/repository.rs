use elm_core::model::course::CourseKey;
use elm_core::model::user::User;
use elm_core::repository::enrollment_repository::EnrollmentRepository;
use elm_core::repository::error::DataLayerError;

use super::EnrollmentProvider;

#[async_trait::async_trait]
impl EnrollmentRepository for EnrollmentProvider {
    async fn get_learner_enrollments(
        &self,
        course_key: &CourseKey,
    ) -> Result<Vec<User>, DataLayerError> {
        let Some(usernames) = self.data.enrollments.get(course_key) else {
            return Ok(vec![]);
        };

        let learners = usernames
            .iter()
            .filter_map(|username| {
                let user = self.data.user_by_username(username);
                if user.is_none() {
                    tracing::warn!("Enrollment of unknown user {username} in {course_key}");
                }
                user
            })
            .filter(|user| !user.is_staff && !user.is_superuser)
            .cloned()
            .collect();

        Ok(learners)
    }
}
