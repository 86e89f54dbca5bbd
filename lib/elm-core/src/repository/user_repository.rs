use super::error::DataLayerError;
use crate::model::course::CourseKey;
use crate::model::user::User;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user_by_username_or_email(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, DataLayerError>;

    async fn get_user_by_session_token(&self, token: &str)
    -> Result<Option<User>, DataLayerError>;

    /// Course-scoped staff or instructor role, global staff is not considered here
    async fn has_staff_or_instructor_role(
        &self,
        user: &User,
        course_key: &CourseKey,
    ) -> Result<bool, DataLayerError>;
}
