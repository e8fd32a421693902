//! Implements the route handler for listing every transaction as JSON.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{AppState, transaction::get_all_transactions};

/// A route handler that responds with every transaction as a JSON array,
/// latest date first.
pub async fn list_transactions_endpoint(State(state): State<AppState>) -> Response {
    let result = state
        .open_connection()
        .and_then(|connection| get_all_transactions(&connection));

    match result {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => error.into_json_response("Failed to fetch transactions"),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{
        AppState, build_router, endpoints,
        json_response::ErrorBody,
        test_utils::get_test_server,
        transaction::{Transaction, create_transaction},
    };

    #[tokio::test]
    async fn empty_store_lists_empty_array() {
        let (server, _state, _dir) = get_test_server();

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn lists_all_fields() {
        let (server, state, _dir) = get_test_server();
        let connection = state.open_connection().unwrap();
        let transaction = create_transaction(
            Transaction::build("income", 2500.0, "Salary", "2024-01-31").note("January"),
            &connection,
        )
        .unwrap();

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        response.assert_json(&json!([{
            "id": transaction.id,
            "type": "income",
            "amount": 2500.0,
            "category": "Salary",
            "date": "2024-01-31",
            "note": "January"
        }]));
    }

    #[tokio::test]
    async fn lists_latest_date_first() {
        let (server, state, _dir) = get_test_server();
        let connection = state.open_connection().unwrap();
        for date in ["2024-01-01", "2024-03-01", "2024-02-01"] {
            create_transaction(Transaction::build("expense", 1.0, "Food", date), &connection)
                .unwrap();
        }

        let transactions = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Transaction>>();

        let dates: Vec<_> = transactions
            .iter()
            .map(|transaction| transaction.date.as_str())
            .collect();
        assert_eq!(dates, ["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[tokio::test]
    async fn storage_failure_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a database.
        let server = TestServer::new(build_router(AppState::new(dir.path())));

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<ErrorBody>().error,
            "Failed to fetch transactions"
        );
    }
}
