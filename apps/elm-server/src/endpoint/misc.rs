use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Returns `204` while the server is up
pub(crate) async fn health_check() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
