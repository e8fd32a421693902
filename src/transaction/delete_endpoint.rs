//! Implements the route handler for deleting a transaction by its ID.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    AppState, Error, database_id::TransactionId, json_response::status_response,
    not_found::get_404_not_found_response, transaction::delete_transaction,
};

/// A route handler for deleting a transaction.
///
/// Responds with 200 OK and `{"status": "deleted"}` if the transaction was
/// deleted, or 404 Not Found if no transaction has the ID. An ID that is not a
/// non-negative integer gets the same response as an unknown route.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(transaction_id) = parse_transaction_id(&raw_id) else {
        return get_404_not_found_response();
    };

    let result = state
        .open_connection()
        .and_then(|connection| delete_transaction(transaction_id, &connection));

    match result {
        Ok(0) => Error::DeleteMissingTransaction.into_json_response(FAILURE_MESSAGE),
        Ok(_) => status_response(StatusCode::OK, "deleted"),
        Err(error) => error.into_json_response(FAILURE_MESSAGE),
    }
}

const FAILURE_MESSAGE: &str = "Failed to delete transaction";

/// Parse a path segment made up only of ASCII digits.
fn parse_transaction_id(raw_id: &str) -> Option<TransactionId> {
    if raw_id.is_empty() || !raw_id.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    raw_id.parse().ok()
}
