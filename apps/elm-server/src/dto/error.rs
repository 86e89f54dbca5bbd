use std::collections::BTreeMap;

use elm_core::service::error::{ErrorCode, ServiceError, ValidationError};
use serde::Serialize;
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponseRestDTO {
    pub code: ErrorCode,
    pub message: String,
    /// Request field to problem description
    pub field_errors: Option<BTreeMap<String, String>>,
    pub cause: Option<Cause>,
}

impl ErrorResponseRestDTO {
    pub fn hide_cause(mut self, hide: bool) -> ErrorResponseRestDTO {
        if hide {
            self.cause = None;
        }

        self
    }
}

#[derive(Debug, Serialize)]
pub struct Cause {
    pub message: String,
}

impl Cause {
    pub fn with_message_from_error(error: &impl std::error::Error) -> Cause {
        Cause {
            message: error.to_string(),
        }
    }
}

impl From<&ServiceError> for ErrorResponseRestDTO {
    fn from(error: &ServiceError) -> Self {
        let code = error.error_code();

        match error {
            ServiceError::EntityNotFound(not_found) => Self {
                code,
                message: not_found.to_string(),
                field_errors: not_found
                    .field()
                    .map(|field| BTreeMap::from([(field.to_owned(), not_found.to_string())])),
                cause: None,
            },
            ServiceError::Validation(ValidationError::InvalidFields(errors)) => Self {
                code,
                message: code.msg().to_owned(),
                field_errors: Some(errors.to_owned()),
                cause: None,
            },
            ServiceError::Validation(validation) => Self {
                code,
                message: validation.to_string(),
                field_errors: None,
                cause: None,
            },
            ServiceError::FormatterError(_)
            | ServiceError::Repository(_)
            | ServiceError::Other(_) => Self {
                code,
                message: code.msg().to_owned(),
                field_errors: None,
                cause: Some(Cause::with_message_from_error(error)),
            },
        }
    }
}
