//! JSON bodies shared by the API endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The body of a response for a request that failed, e.g. `{"error": "Missing required fields"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// A short, client safe description of what went wrong.
    pub error: String,
}

/// The body of a response for a request that succeeded, e.g. `{"status": "deleted"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBody {
    /// A short description of the outcome.
    pub status: String,
}

/// Render an [ErrorBody] with `message` as a JSON response.
pub fn error_response(status_code: StatusCode, message: &str) -> Response {
    (
        status_code,
        Json(ErrorBody {
            error: message.to_owned(),
        }),
    )
        .into_response()
}

/// Render a [StatusBody] with `status` as a JSON response.
pub fn status_response(status_code: StatusCode, status: &str) -> Response {
    (
        status_code,
        Json(StatusBody {
            status: status.to_owned(),
        }),
    )
        .into_response()
}
