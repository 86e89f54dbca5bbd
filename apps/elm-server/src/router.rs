use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use elm_core::ElmCore;
use elm_core::config::core_config::AppConfig;
use elm_core::repository::DataRepository;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};

use crate::ServerConfig;
use crate::dto::response::ErrorResponse;
use crate::endpoint::{credential_builder, misc};
use crate::middleware::get_http_request_context;

pub(crate) struct InternalAppState {
    pub core: ElmCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(
    listener: TcpListener,
    config: AppConfig<ServerConfig>,
    data_layer: Arc<dyn DataRepository>,
) {
    listener
        .set_nonblocking(true)
        .expect("Failed to set listener to non-blocking");

    let core = ElmCore::new(data_layer, &config.core);

    let state: AppState = Arc::new(InternalAppState {
        core,
        config: Arc::new(config.app),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/api/elm-credentials/v1/{course_id}/credential-builder",
            get(credential_builder::controller::get_credentials),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::bearer_check,
        ));

    let technical_endpoints = Router::new().route("/health", get(misc::health_check));

    Router::new()
        .merge(protected)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "elm-server",
                        RequestId = context.request_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
