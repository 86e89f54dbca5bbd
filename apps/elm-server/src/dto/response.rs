use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use elm_core::service::credential_builder::dto::CredentialExportDTO;
use elm_core::service::error::{ErrorCode, ServiceError, ValidationError};

use super::error::{Cause, ErrorResponseRestDTO};
use crate::router::AppState;

#[derive(Debug)]
pub(crate) enum ErrorResponse {
    Unauthorized(ErrorResponseRestDTO),
    BadRequest(ErrorResponseRestDTO),
    Forbidden(ErrorResponseRestDTO),
    NotFound(ErrorResponseRestDTO),
    ServerError(ErrorResponseRestDTO),
}

impl ErrorResponse {
    pub fn for_panic(panic_msg: String) -> Self {
        Self::ServerError(ErrorResponseRestDTO {
            code: ErrorCode::BR_0000,
            message: panic_msg,
            field_errors: None,
            cause: Some(Cause {
                message: "Panic".to_string(),
            }),
        })
    }

    pub fn from_service_error(error: ServiceError, hide_cause: bool) -> Self {
        let response = ErrorResponseRestDTO::from(&error).hide_cause(hide_cause);
        match error {
            ServiceError::EntityNotFound(_) => Self::NotFound(response),
            ServiceError::Validation(ValidationError::InvalidFields(_)) => {
                Self::BadRequest(response)
            }
            ServiceError::Validation(ValidationError::Forbidden) => Self::Forbidden(response),
            ServiceError::Validation(ValidationError::Unauthorized) => {
                Self::Unauthorized(response)
            }
            ServiceError::FormatterError(_)
            | ServiceError::Repository(_)
            | ServiceError::Other(_) => Self::ServerError(response),
        }
    }

    #[track_caller]
    fn from_service_error_with_trace(
        error: ServiceError,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        let location = std::panic::Location::caller();
        tracing::error!(%error, %location, "Error while {action_description}");
        Self::from_service_error(error, state.config.hide_error_response_cause)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            Self::Unauthorized(error) => (StatusCode::UNAUTHORIZED, error),
            Self::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            Self::Forbidden(error) => (StatusCode::FORBIDDEN, error),
            Self::NotFound(error) => (StatusCode::NOT_FOUND, error),
            Self::ServerError(error) => (StatusCode::INTERNAL_SERVER_ERROR, error),
        };

        (status, Json(error)).into_response()
    }
}

/// Generated file, as download or inline content
pub(crate) enum FileOrErrorResponse {
    Ok(CredentialExportDTO),
    Error(ErrorResponse),
}

impl FileOrErrorResponse {
    #[track_caller]
    pub(crate) fn from_result(
        result: Result<CredentialExportDTO, ServiceError>,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Error(ErrorResponse::from_service_error_with_trace(
                error,
                state,
                action_description,
            )),
        }
    }
}

impl IntoResponse for FileOrErrorResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Ok(file) => {
                let disposition = if file.attachment {
                    "attachment"
                } else {
                    "inline"
                };

                (
                    StatusCode::OK,
                    [
                        (header::CONTENT_TYPE, file.content_type.mime_type().to_owned()),
                        (
                            header::CONTENT_DISPOSITION,
                            format!("{disposition}; filename=\"{}\"", file.filename),
                        ),
                    ],
                    file.content,
                )
                    .into_response()
            }
            Self::Error(error) => error.into_response(),
        }
    }
}
