pub mod guess;
pub mod system;

use crate::auth::require_bearer;
use crate::state::AppState;
use axum::{http::StatusCode, middleware, Router};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", axum::routing::get(system::root))
        .route("/health", axum::routing::get(system::health))
}

pub fn guess_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/guess", axum::routing::post(guess::guess))
        .route_layer(middleware::from_fn_with_state(state, require_bearer))
}

/// The full service: every route plus the HTTP limits from `state`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let limits = state.limits;

    system_routes()
        .merge(guess_routes(state.clone()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            limits.request_timeout,
        ))
        .layer(RequestBodyLimitLayer::new(limits.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
