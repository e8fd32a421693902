//! The response for requests that do not match any route.

use axum::{http::StatusCode, response::Response};

use crate::json_response::error_response;

/// The fallback route handler.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// A 404 Not Found response with a JSON error body.
pub fn get_404_not_found_response() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}
