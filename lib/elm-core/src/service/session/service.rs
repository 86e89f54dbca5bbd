use super::SessionService;
use crate::model::user::User;
use crate::service::error::{ServiceError, ValidationError};

impl SessionService {
    /// Resolves the user owning a bearer token
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub async fn authenticate(&self, token: &str) -> Result<User, ServiceError> {
        if token.is_empty() {
            return Err(ValidationError::Unauthorized.into());
        }

        self.user_repository
            .get_user_by_session_token(token)
            .await?
            .ok_or_else(|| ValidationError::Unauthorized.into())
    }
}
