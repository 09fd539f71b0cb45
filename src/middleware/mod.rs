//! # Middleware
//!
//! Layers applied around the whole router.

use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Wraps the router in a request tracing layer that opens one span per request
/// and logs the response status and latency.
pub fn apply_middleware_stack(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}
