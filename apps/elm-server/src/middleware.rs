use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::IntoResponse;
use elm_core::model::user::User;
use elm_core::service::error::{ServiceError, ValidationError};

use crate::dto::response::ErrorResponse;
use crate::router::AppState;

/// Caller resolved from the bearer token
#[derive(Debug, Clone)]
pub struct Authorized {
    pub user: User,
}

pub struct HttpRequestContext<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub request_id: Option<&'a str>,
}

pub async fn bearer_check(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> axum::response::Response {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok());

    let Some(auth_header) = auth_header else {
        tracing::warn!("Authorization header not found.");
        return unauthorized(&state);
    };

    let mut split = auth_header.split(' ');
    let auth_type = split.next().unwrap_or_default();
    let token = split.next().unwrap_or_default().to_owned();

    if auth_type != "Bearer" || token.is_empty() {
        tracing::warn!("Could not authorize request. Incorrect authorization method.");
        return unauthorized(&state);
    }

    match state.core.session_service.authenticate(&token).await {
        Ok(user) => {
            request.extensions_mut().insert(Authorized { user });
            next.run(request).await
        }
        Err(error) => {
            tracing::warn!(%error, "Could not authorize request.");
            ErrorResponse::from_service_error(error, state.config.hide_error_response_cause)
                .into_response()
        }
    }
}

fn unauthorized(state: &AppState) -> axum::response::Response {
    ErrorResponse::from_service_error(
        ServiceError::Validation(ValidationError::Unauthorized),
        state.config.hide_error_response_cause,
    )
    .into_response()
}

pub fn get_http_request_context<T>(request: &Request<T>) -> HttpRequestContext<'_> {
    let headers = request.headers();
    let request_id = headers
        .get("x-request-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    HttpRequestContext {
        path: request.uri().path(),
        method: request.method().as_str(),
        request_id,
    }
}
