//! Application builder that wraps table routes with the logging stack.

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;

use crate::middleware::logging::request_logging;

/// Wraps `router` with request logging and HTTP tracing.
pub fn build_app(router: Router) -> Router {
    router
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
}
