//! Defines the app level error type and its conversion to JSON error responses.
use axum::{http::StatusCode, response::Response};

use crate::json_response::error_response;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body was empty or could not be parsed as a JSON object.
    #[error("No JSON received")]
    NoJson,

    /// The request body was missing one or more of the required fields.
    #[error("Missing required fields")]
    MissingFields,

    /// The amount could not be coerced to a number.
    ///
    /// Callers should pass in the offending value rendered as a string.
    #[error("could not convert the amount {0} to a number")]
    InvalidAmount(String),

    /// The body is a JSON object, but holds a number too large to represent, e.g. `1e400`.
    #[error("the request body holds a number that is out of range")]
    NumberOutOfRange,

    /// A text field held a value that cannot be stored as text, e.g. `null` or an object.
    #[error("the field \"{0}\" must be a string or a number")]
    InvalidField(&'static str),

    /// Tried to delete a transaction that does not exist.
    #[error("Transaction not found")]
    DeleteMissingTransaction,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        Error::SqlError(value)
    }
}

impl Error {
    /// Convert the error into a JSON response.
    ///
    /// Client errors are reported with their own message. Any other error is
    /// logged and replaced with `failure_message` so that internal details are
    /// not leaked to the client.
    pub fn into_json_response(self, failure_message: &str) -> Response {
        match self {
            Error::NoJson | Error::MissingFields => {
                error_response(StatusCode::BAD_REQUEST, &self.to_string())
            }
            Error::DeleteMissingTransaction => {
                error_response(StatusCode::NOT_FOUND, &self.to_string())
            }
            error => {
                tracing::error!("{failure_message}: {error}");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, failure_message)
            }
        }
    }
}
