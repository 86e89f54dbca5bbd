pub mod elm;
pub mod error;
pub mod model;

use self::error::FormatterError;
use self::model::CredentialParams;
use crate::model::certificate::Certificate;
use crate::model::course::Course;
use crate::model::user::User;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait CredentialFormatter: Send + Sync {
    /// Builds the credential document of `learner` and renders it as JSON text
    fn format_credential(
        &self,
        course: &Course,
        learner: &User,
        certificate: &Certificate,
        params: &CredentialParams,
    ) -> Result<String, FormatterError>;
}
