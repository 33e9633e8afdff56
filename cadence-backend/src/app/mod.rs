pub mod state;

use std::any::Any;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use cadence_api::{constant, health};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::http::extract::Endpoint;
use crate::http::response::Success;
use crate::{Error, route};

async fn health_handler(endpoint: Endpoint) -> Success<health::Response> {
    endpoint.ok(health::Response {
        name: constant::SERVER_NAME.to_owned(),
        version: constant::SERVER_VERSION.to_owned(),
    })
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_owned());
    Error::Internal(color_eyre::eyre::eyre!(message)).into_response()
}

pub fn router(state: state::App) -> Router {
    Router::new()
        .nest(
            constant::API_PREFIX,
            Router::new()
                .route("/health", get(health_handler))
                .merge(route::song::router())
                .merge(route::user::router())
                .merge(route::history::router())
                .merge(route::playlist::router()),
        )
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request", method = %request.method(), uri = %request.uri()
            )
        }))
}

pub fn build(config: &Config) -> Router {
    let router = router(state::App::new(&config.database, config.feed));
    if config.server.cors { router.layer(CorsLayer::permissive()) } else { router }
}
