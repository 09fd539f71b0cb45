//! # Ping Handlers
//!
//! Health check endpoint for load balancers and monitoring. `GET` reports the
//! instance metadata, `POST` performs a trivial input check on the body.

use std::sync::Arc;

use axum::{
    extract::{Json, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::models::{AppState, MessageResponse, PingResponse};
use crate::utils::constant::*;
use crate::utils::json::has_truthy_field;

/// Reports that the service is up, along with the instance metadata.
///
/// # Returns
///
/// Always `200 OK` with `{ "ping": "pong!", "instance": { ... } }`.
#[instrument(skip(state), fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn get_ping(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    debug!("Ping endpoint accessed");
    Json(PingResponse::new(&state.instance)).into_response()
}

/// Accepts a JSON body and checks that it carries a truthy `data` field.
///
/// A missing body, a body that is not JSON, or a wrong content type is
/// treated the same as a body without `data`.
///
/// # Returns
///
/// - `200 OK` - `{ "message": "Success" }`
/// - `400 Bad Request` - `{ "message": "Invalid input" }`
#[instrument(skip(payload), fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn post_ping(
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(body) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected unreadable ping body");
        AppError::BadRequest(INVALID_INPUT_MESSAGE)
    })?;

    if !has_truthy_field(&body, "data") {
        warn!("Ping body has no usable `data` field");
        return Err(AppError::BadRequest(INVALID_INPUT_MESSAGE));
    }

    debug!("Ping body accepted");
    Ok(Json(MessageResponse::new(SUCCESS_MESSAGE)))
}
