use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::model::course::CourseKey;
use crate::provider::credential_formatter::error::FormatterError;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Formatter error `{0}`")]
    FormatterError(#[from] FormatterError),

    #[error(transparent)]
    Repository(#[from] DataLayerError),

    #[error("Other error: `{0}`")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("The course with course_id='{0}' is not found.")]
    Course(CourseKey),

    #[error("The username='{0}' does not exist.")]
    User(String),

    #[error("The user {username} does not have certificate for course_id='{course_key}'.")]
    Certificate {
        username: String,
        course_key: CourseKey,
    },

    #[error("No credentials found for course_id='{0}'.")]
    Credentials(CourseKey),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid request parameters: {}", format_field_errors(.0))]
    InvalidFields(BTreeMap<String, String>),

    #[error("The user does not have access to generate credentials.")]
    Forbidden,

    #[error("Authentication credentials were not provided or are invalid.")]
    Unauthorized,
}

fn format_field_errors(errors: &BTreeMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0010,
    BR_0047,
    BR_0054,
    BR_0084,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0000 => "Unmapped error code",
            ErrorCode::BR_0001 => "Course not found",
            ErrorCode::BR_0002 => "User not found",
            ErrorCode::BR_0003 => "Certificate not found",
            ErrorCode::BR_0004 => "No credentials found",
            ErrorCode::BR_0005 => "Forbidden",
            ErrorCode::BR_0010 => "Unauthorized",
            ErrorCode::BR_0047 => "Credential formatting error",
            ErrorCode::BR_0054 => "Host data error",
            ErrorCode::BR_0084 => "General input validation error",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::FormatterError(_) => ErrorCode::BR_0047,
            ServiceError::Repository(error) => error.error_code(),
            ServiceError::Other(_) => ErrorCode::BR_0000,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::Course(_) => ErrorCode::BR_0001,
            EntityNotFoundError::User(_) => ErrorCode::BR_0002,
            EntityNotFoundError::Certificate { .. } => ErrorCode::BR_0003,
            EntityNotFoundError::Credentials(_) => ErrorCode::BR_0004,
        }
    }

    /// Request field the missing entity was addressed by
    pub fn field(&self) -> Option<&'static str> {
        match self {
            EntityNotFoundError::Course(_) => Some("course_id"),
            EntityNotFoundError::User(_) => Some("username"),
            EntityNotFoundError::Certificate { .. } | EntityNotFoundError::Credentials(_) => None,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::InvalidFields(_) => ErrorCode::BR_0084,
            ValidationError::Forbidden => ErrorCode::BR_0005,
            ValidationError::Unauthorized => ErrorCode::BR_0010,
        }
    }
}
