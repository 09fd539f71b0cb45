//! # Instance Ping - Health Check Service
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the ping endpoint and unmatched routes
//! - [`middleware`] - Request tracing applied around the router
//! - [`models`] - Instance metadata, response bodies and shared state
//! - [`utils`] - Configuration, constants and JSON helpers

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::handlers::{get_ping, post_ping, route_not_found};
use crate::middleware::apply_middleware_stack;
use crate::models::{AppState, InstanceMetadata};
use crate::utils::constant::PING_PATH;

/// Creates an Axum router with instance metadata read from the environment.
///
/// This is a convenience function that calls [`app_with_instance`] with
/// [`InstanceMetadata::from_env`].
#[inline]
pub fn app() -> Router {
    app_with_instance(InstanceMetadata::from_env())
}

/// Creates an Axum router serving the ping endpoint for the given instance.
///
/// # Routes
///
/// - `GET /api/v1/ping` - Health check with instance metadata
/// - `POST /api/v1/ping` - Input check on a JSON body
/// - anything else, including other methods on the ping path - `404` with
///   `{ "message": "Route not found" }`
pub fn app_with_instance(instance: InstanceMetadata) -> Router {
    let state = Arc::new(AppState::new(instance));

    let router = Router::new()
        .route(PING_PATH, get(get_ping).post(post_ping))
        .method_not_allowed_fallback(route_not_found)
        .fallback(route_not_found)
        .with_state(state);

    apply_middleware_stack(router)
}
