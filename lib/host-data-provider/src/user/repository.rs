use elm_core::model::course::CourseKey;
use elm_core::model::user::User;
use elm_core::repository::error::DataLayerError;
use elm_core::repository::user_repository::UserRepository;

use super::UserProvider;

#[async_trait::async_trait]
impl UserRepository for UserProvider {
    /// Username matches exactly, email ignores case
    async fn get_user_by_username_or_email(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, DataLayerError> {
        let user = self.data.user_by_username(identifier).or_else(|| {
            self.data
                .users
                .iter()
                .find(|user| user.email.eq_ignore_ascii_case(identifier))
        });

        Ok(user.cloned())
    }

    async fn get_user_by_session_token(
        &self,
        token: &str,
    ) -> Result<Option<User>, DataLayerError> {
        let Some(username) = self.data.sessions.get(token) else {
            return Ok(None);
        };

        let user = self.data.user_by_username(username).ok_or_else(|| {
            tracing::error!("Session token bound to unknown user {username}");
            DataLayerError::MappingError
        })?;

        Ok(Some(user.clone()))
    }

    async fn has_staff_or_instructor_role(
        &self,
        user: &User,
        course_key: &CourseKey,
    ) -> Result<bool, DataLayerError> {
        Ok(self
            .data
            .course_team
            .get(course_key)
            .is_some_and(|team| team.contains(&user.username)))
    }
}
