use std::collections::HashMap;

use axum::Extension;
use axum::extract::{Path, Query, State};

use crate::dto::response::FileOrErrorResponse;
use crate::middleware::Authorized;
use crate::router::AppState;

/// Credential of one learner (`username`) or a ZIP archive with the credentials of all
/// enrolled learners of the course
pub(crate) async fn get_credentials(
    state: State<AppState>,
    Extension(Authorized { user }): Extension<Authorized>,
    Path(course_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> FileOrErrorResponse {
    let result = state
        .core
        .credential_builder_service
        .generate_credentials(&user, &course_id, &query)
        .await;
    FileOrErrorResponse::from_result(result, state, "generating credentials")
}
