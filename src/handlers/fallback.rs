use axum::http::{Method, Uri};
use tracing::{debug, instrument};

use crate::error::AppError;
use crate::utils::constant::ROUTE_NOT_FOUND_MESSAGE;

/// Answers every request that matched no route.
#[instrument]
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    debug!("No route matched");
    AppError::NotFound(ROUTE_NOT_FOUND_MESSAGE)
}
